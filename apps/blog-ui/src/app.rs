//! Blog Frontend App
//!
//! Route tree and app-wide context.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use ui_widgets::{provide_toasts, Toasts};

use crate::components::Navbar;
use crate::context::AppContext;
use crate::pages::{HomePage, LoginPage, PostDetailPage, PostEditorPage, ProfilePage, RegisterPage};

#[component]
pub fn App() -> impl IntoView {
    provide_toasts();
    provide_context(AppContext::new());

    view! {
        <Router>
            <Navbar/>
            <Toasts/>
            <main class="page-content">
                <Routes fallback=|| view! { <p class="not-found">"Not found."</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/profile") view=ProfilePage/>
                    <Route path=path!("/posts/new") view=PostEditorPage/>
                    <Route path=path!("/posts/:id") view=PostDetailPage/>
                    <Route path=path!("/posts/:id/edit") view=PostEditorPage/>
                </Routes>
            </main>
        </Router>
    }
}
