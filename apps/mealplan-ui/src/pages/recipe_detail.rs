//! Recipe Detail Page
//!
//! Full recipe view with ingredients, instructions, planner/collection
//! actions, and the review section.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use ui_widgets::{use_toasts, ConfirmButton};

use crate::api::{self, SlotKind};
use crate::components::{ReviewSection, StarDisplay};
use crate::context::use_app;
use crate::markdown::render_markdown;
use crate::models::Recipe;
use crate::planner::today;

#[component]
fn PlanControls(recipe_id: String) -> impl IntoView {
    let toasts = use_toasts();
    let recipe_id = StoredValue::new(recipe_id);

    let (date_text, set_date_text) = signal(today().format("%Y-%m-%d").to_string());
    let (slot, set_slot) = signal(SlotKind::Dinner);

    let on_add = move |_| {
        let Ok(date) = NaiveDate::parse_from_str(&date_text.get(), "%Y-%m-%d") else {
            toasts.error("pick a valid date");
            return;
        };
        let slot = slot.get();
        spawn_local(async move {
            match api::set_slot(date, slot, Some(&recipe_id.get_value())).await {
                Ok(_) => toasts.success(format!("added to {} on {}", slot.label(), date)),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    view! {
        <div class="plan-controls">
            <input
                type="date"
                prop:value=move || date_text.get()
                on:input=move |ev| set_date_text.set(event_target_value(&ev))
            />
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                if let Some(&kind) = SlotKind::ALL.iter().find(|k| k.as_str() == value) {
                    set_slot.set(kind);
                }
            }>
                {SlotKind::ALL.iter().map(|&kind| view! {
                    <option value=kind.as_str() selected=move || slot.get() == kind>
                        {kind.label()}
                    </option>
                }).collect_view()}
            </select>
            <button class="plan-add-btn" on:click=on_add>"Add to plan"</button>
        </div>
    }
}

#[component]
fn CollectionControls(recipe_id: String) -> impl IntoView {
    let toasts = use_toasts();
    let recipe_id = StoredValue::new(recipe_id);

    let (collections, set_collections) = signal(Vec::new());
    let (selected, set_selected) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_collections().await {
                Ok(loaded) => set_collections.set(loaded),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let on_add = move |_| {
        let Some(collection_id) = selected.get() else {
            toasts.error("pick a collection first");
            return;
        };
        spawn_local(async move {
            match api::add_recipe_to_collection(&collection_id, &recipe_id.get_value()).await {
                Ok(collection) => toasts.success(format!("added to {}", collection.name)),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    view! {
        <div class="collection-controls">
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                set_selected.set(if value.is_empty() { None } else { Some(value) });
            }>
                <option value="">"Add to collection..."</option>
                <For
                    each=move || collections.get()
                    key=|c| c.id.clone()
                    children=move |c| view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                />
            </select>
            <button on:click=on_add>"Add"</button>
        </div>
    }
}

#[component]
pub fn RecipeDetailPage() -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let params = use_params_map();

    let (recipe, set_recipe) = signal::<Option<Recipe>>(None);

    Effect::new(move |_| {
        let Some(id) = params.read().get("id") else { return };
        spawn_local(async move {
            match api::get_recipe(&id).await {
                Ok(loaded) => set_recipe.set(Some(loaded)),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    view! {
        <div class="recipe-detail-page">
            {move || recipe.get().map(|recipe| {
                let own_recipe = ctx.user.with(|u| u.as_ref().map(|u| u.id.as_str()) == Some(recipe.author.id.as_str()));
                let recipe_id = StoredValue::new(recipe.id.clone());
                let edit_href = format!("/recipes/{}/edit", recipe.id);

                let navigate = use_navigate();
                let on_delete = Callback::new(move |_| {
                    let navigate = navigate.clone();
                    spawn_local(async move {
                        match api::delete_recipe(&recipe_id.get_value()).await {
                            Ok(()) => {
                                toasts.success("recipe deleted");
                                navigate("/", Default::default());
                            }
                            Err(err) => toasts.error(err.to_string()),
                        }
                    });
                });

                view! {
                    <article class="recipe-detail">
                        {recipe.photo.clone().map(|url| view! {
                            <img class="recipe-photo" src=url alt=""/>
                        })}
                        <h1>{recipe.title.clone()}</h1>
                        <div class="recipe-meta">
                            <StarDisplay rating=recipe.average_rating count=recipe.review_count/>
                            <span>{format!("prep {} min", recipe.prep_minutes)}</span>
                            <span>{format!("cook {} min", recipe.cook_minutes)}</span>
                            <span>{format!("serves {}", recipe.servings)}</span>
                            <span class="recipe-author">{format!("by {}", recipe.author.username)}</span>
                        </div>
                        <div
                            class="recipe-description"
                            inner_html=render_markdown(&recipe.description)
                        ></div>

                        <Show when=move || own_recipe>
                            <div class="recipe-actions">
                                <A href=edit_href.clone()>"Edit"</A>
                                <ConfirmButton button_class="recipe-delete-btn" on_confirm=on_delete/>
                            </div>
                        </Show>

                        <Show when=move || ctx.logged_in()>
                            <PlanControls recipe_id=recipe_id.get_value()/>
                            <CollectionControls recipe_id=recipe_id.get_value()/>
                        </Show>

                        <h2>"Ingredients"</h2>
                        <ul class="ingredient-list">
                            {recipe.ingredients.iter().map(|ingredient| view! {
                                <li>
                                    {format!("{} {} {}", ingredient.quantity, ingredient.unit, ingredient.name)}
                                </li>
                            }).collect_view()}
                        </ul>

                        <h2>"Instructions"</h2>
                        <ol class="instruction-list">
                            {recipe.instructions.iter().map(|instruction| view! {
                                <li>{instruction.text.clone()}</li>
                            }).collect_view()}
                        </ol>
                    </article>
                    <ReviewSection recipe_id=recipe.id.clone()/>
                }
            })}
        </div>
    }
}
