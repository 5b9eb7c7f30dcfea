//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use ui_widgets::use_toasts;

use crate::api;
use crate::context::use_app;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            toasts.error("email and password are required");
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(auth) => {
                    ctx.login(auth);
                    navigate("/", Default::default());
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Log in"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit">"Log in"</button>
            </form>
            <p class="auth-switch">
                "No account yet? " <A href="/register">"Register"</A>
            </p>
        </div>
    }
}
