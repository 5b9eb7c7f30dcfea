//! Meal Planner App
//!
//! Route tree and app-wide context.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;
use ui_widgets::{provide_toasts, Toasts};

use crate::components::Navbar;
use crate::context::AppContext;
use crate::pages::{
    CollectionDetailPage, CollectionsPage, LoginPage, PlannerPage, RecipeDetailPage,
    RecipeEditorPage, RecipeListPage, ShoppingListPage,
};
use crate::store::PlanState;

#[component]
pub fn App() -> impl IntoView {
    provide_toasts();
    provide_context(AppContext::new());
    provide_context(Store::new(PlanState::default()));

    view! {
        <Router>
            <Navbar/>
            <Toasts/>
            <main class="page-content">
                <Routes fallback=|| view! { <p class="not-found">"Not found."</p> }>
                    <Route path=path!("/") view=RecipeListPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/recipes/new") view=RecipeEditorPage/>
                    <Route path=path!("/recipes/:id") view=RecipeDetailPage/>
                    <Route path=path!("/recipes/:id/edit") view=RecipeEditorPage/>
                    <Route path=path!("/planner") view=PlannerPage/>
                    <Route path=path!("/shopping-list") view=ShoppingListPage/>
                    <Route path=path!("/collections") view=CollectionsPage/>
                    <Route path=path!("/collections/:id") view=CollectionDetailPage/>
                </Routes>
            </main>
        </Router>
    }
}
