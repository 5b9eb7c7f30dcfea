//! Recipe Picker Component
//!
//! Inline search box used to assign a recipe to a meal slot or snack
//! list. Searching only changes the request parameters.

use leptos::prelude::*;
use leptos::task::spawn_local;
use ui_widgets::use_toasts;

use crate::api::{self, RecipeQuery};
use crate::models::{Recipe, RecipeRef};

const PICKER_RESULTS: u32 = 5;

#[component]
pub fn RecipePicker(#[prop(into)] on_pick: Callback<RecipeRef>) -> impl IntoView {
    let toasts = use_toasts();
    let (term, set_term) = signal(String::new());
    let (results, set_results) = signal(Vec::<Recipe>::new());

    // Search as the user types
    Effect::new(move |_| {
        let term = term.get();
        if term.trim().is_empty() {
            set_results.set(Vec::new());
            return;
        }
        spawn_local(async move {
            let query = RecipeQuery {
                page: 1,
                per_page: PICKER_RESULTS,
                search: Some(term),
            };
            match api::list_recipes(&query).await {
                Ok(resp) => set_results.set(resp.recipes),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    view! {
        <div class="recipe-picker">
            <input
                type="text"
                placeholder="Search recipes..."
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
            />
            <div class="picker-results">
                <For
                    each=move || results.get()
                    key=|recipe| recipe.id.clone()
                    children=move |recipe| {
                        let picked = RecipeRef {
                            id: recipe.id.clone(),
                            title: recipe.title.clone(),
                            photo: recipe.photo.clone(),
                        };
                        view! {
                            <button
                                type="button"
                                class="picker-result"
                                on:click=move |_| {
                                    on_pick.run(picked.clone());
                                    set_term.set(String::new());
                                    set_results.set(Vec::new());
                                }
                            >
                                {recipe.title.clone()}
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}
