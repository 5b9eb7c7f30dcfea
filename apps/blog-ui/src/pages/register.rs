//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use ui_widgets::use_toasts;

use crate::api;
use crate::context::use_app;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let email = email.get();
        let password = password.get();
        if username.is_empty() || email.is_empty() || password.is_empty() {
            toasts.error("all fields are required");
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&username, &email, &password).await {
                Ok(auth) => {
                    ctx.login(auth);
                    toasts.success("welcome!");
                    navigate("/", Default::default());
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Register"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
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
                <button type="submit">"Create account"</button>
            </form>
            <p class="auth-switch">
                "Already registered? " <A href="/login">"Log in"</A>
            </p>
        </div>
    }
}
