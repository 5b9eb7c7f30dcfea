//! Recipe List Page
//!
//! Searchable, paginated recipe grid.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use ui_widgets::{use_toasts, Pagination};

use crate::api::{self, RecipeQuery};
use crate::components::RecipeCard;
use crate::context::use_app;
use crate::models::Recipe;

const PER_PAGE: u32 = 12;

#[component]
pub fn RecipeListPage() -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();

    let (page, set_page) = signal(1u32);
    let (search, set_search) = signal(String::new());
    let (recipes, set_recipes) = signal(Vec::<Recipe>::new());
    let (total, set_total) = signal(0u64);

    // Reload when the page or search term changes
    Effect::new(move |_| {
        let query = RecipeQuery::page(page.get()).with_search(Some(search.get()));
        web_sys::console::log_1(&format!("[RECIPES] Loading {}", query.to_query_string()).into());
        spawn_local(async move {
            match api::list_recipes(&query).await {
                Ok(resp) => {
                    set_recipes.set(resp.recipes);
                    set_total.set(resp.total);
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    view! {
        <div class="recipe-list-page">
            <div class="recipe-list-toolbar">
                <input
                    type="search"
                    placeholder="Search recipes..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        set_page.set(1);
                    }
                />
                <Show when=move || ctx.logged_in()>
                    <A href="/recipes/new" attr:class="new-recipe-btn">"New recipe"</A>
                </Show>
            </div>

            <div class="recipe-grid">
                <For
                    each=move || recipes.get()
                    key=|recipe| recipe.id.clone()
                    children=move |recipe| view! { <RecipeCard recipe=recipe/> }
                />
            </div>

            <Show when=move || recipes.get().is_empty()>
                <p class="empty-hint">"No recipes found."</p>
            </Show>

            <Pagination page=page set_page=set_page total=total per_page=PER_PAGE/>
        </div>
    }
}
