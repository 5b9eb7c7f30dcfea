//! Navbar Component
//!
//! Top navigation with session-aware links.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::use_app;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();

    let on_logout = move |_| {
        ctx.logout();
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="brand">"Inkwell"</A>
            <div class="nav-links">
                <A href="/">"Home"</A>
                <Show when=move || ctx.logged_in()>
                    <A href="/posts/new">"New Post"</A>
                    <A href="/profile">"Profile"</A>
                </Show>
            </div>
            <div class="nav-session">
                {move || match ctx.user.get() {
                    Some(user) => view! {
                        <span class="nav-username">{user.username.clone()}</span>
                        <button class="logout-btn" on:click=on_logout.clone()>"Log out"</button>
                    }.into_any(),
                    None => view! {
                        <A href="/login">"Log in"</A>
                        <A href="/register">"Register"</A>
                    }.into_any(),
                }}
            </div>
        </nav>
    }
}
