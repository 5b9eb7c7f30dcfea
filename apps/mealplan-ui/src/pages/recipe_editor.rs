//! Recipe Editor Page
//!
//! Create/edit form with dynamic ingredient and instruction rows, shared
//! by /recipes/new and /recipes/:id/edit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use ui_widgets::use_toasts;

use crate::api;
use crate::components::PhotoUploader;
use crate::context::use_app;
use crate::models::{IngredientPayload, RecipePayload};

#[component]
fn EditorForm() -> impl IntoView {
    let toasts = use_toasts();
    let params = use_params_map();
    let navigate = use_navigate();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (photo, set_photo) = signal::<Option<String>>(None);
    let (servings, set_servings) = signal(2u32);
    let (prep_minutes, set_prep_minutes) = signal(10u32);
    let (cook_minutes, set_cook_minutes) = signal(20u32);
    let ingredients = RwSignal::new(vec![IngredientPayload::default()]);
    let instructions = RwSignal::new(vec![String::new()]);
    let (saving, set_saving) = signal(false);

    // Editing an existing recipe: prefill the form
    Effect::new(move |_| {
        let Some(id) = params.read().get("id") else { return };
        spawn_local(async move {
            match api::get_recipe(&id).await {
                Ok(recipe) => {
                    set_title.set(recipe.title);
                    set_description.set(recipe.description);
                    set_photo.set(recipe.photo);
                    set_servings.set(recipe.servings);
                    set_prep_minutes.set(recipe.prep_minutes);
                    set_cook_minutes.set(recipe.cook_minutes);
                    ingredients.set(
                        recipe
                            .ingredients
                            .into_iter()
                            .map(|i| IngredientPayload {
                                name: i.name,
                                quantity: i.quantity,
                                unit: i.unit,
                            })
                            .collect(),
                    );
                    instructions.set(recipe.instructions.into_iter().map(|i| i.text).collect());
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        if title.trim().is_empty() {
            toasts.error("title is required");
            return;
        }
        let kept_ingredients: Vec<IngredientPayload> = ingredients
            .get()
            .into_iter()
            .filter(|i| !i.name.trim().is_empty())
            .collect();
        let kept_instructions: Vec<String> = instructions
            .get()
            .into_iter()
            .filter(|text| !text.trim().is_empty())
            .collect();
        if kept_ingredients.is_empty() {
            toasts.error("add at least one ingredient");
            return;
        }

        let payload = RecipePayload {
            title,
            description: description.get(),
            photo: photo.get(),
            servings: servings.get(),
            prep_minutes: prep_minutes.get(),
            cook_minutes: cook_minutes.get(),
            ingredients: kept_ingredients,
            instructions: kept_instructions,
        };
        let editing_id = params.read_untracked().get("id");
        let navigate = navigate.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = match &editing_id {
                Some(id) => api::update_recipe(id, &payload).await,
                None => api::create_recipe(&payload).await,
            };
            set_saving.set(false);
            match result {
                Ok(recipe) => {
                    toasts.success("recipe saved");
                    navigate(&format!("/recipes/{}", recipe.id), Default::default());
                }
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    let on_photo_uploaded = Callback::new(move |url: String| set_photo.set(Some(url)));

    let parse_u32 = |ev: &web_sys::Event| event_target_value(ev).parse::<u32>().unwrap_or(0);

    view! {
        <form class="recipe-editor-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />

            <PhotoUploader on_uploaded=on_photo_uploaded/>
            {move || photo.get().map(|url| view! {
                <img class="photo-preview" src=url alt=""/>
            })}

            <div class="recipe-numbers">
                <label>
                    "Servings"
                    <input
                        type="number"
                        prop:value=move || servings.get().to_string()
                        on:input=move |ev| set_servings.set(parse_u32(&ev))
                    />
                </label>
                <label>
                    "Prep (min)"
                    <input
                        type="number"
                        prop:value=move || prep_minutes.get().to_string()
                        on:input=move |ev| set_prep_minutes.set(parse_u32(&ev))
                    />
                </label>
                <label>
                    "Cook (min)"
                    <input
                        type="number"
                        prop:value=move || cook_minutes.get().to_string()
                        on:input=move |ev| set_cook_minutes.set(parse_u32(&ev))
                    />
                </label>
            </div>

            <h3>"Ingredients"</h3>
            {move || ingredients.get().into_iter().enumerate().map(|(at, ingredient)| view! {
                <div class="ingredient-row">
                    <input
                        type="number"
                        step="any"
                        placeholder="Qty"
                        prop:value=ingredient.quantity.to_string()
                        on:input=move |ev| {
                            let quantity = event_target_value(&ev).parse().unwrap_or(0.0);
                            ingredients.update(|rows| {
                                if let Some(row) = rows.get_mut(at) {
                                    row.quantity = quantity;
                                }
                            });
                        }
                    />
                    <input
                        type="text"
                        placeholder="Unit"
                        prop:value=ingredient.unit.clone()
                        on:input=move |ev| {
                            let unit = event_target_value(&ev);
                            ingredients.update(|rows| {
                                if let Some(row) = rows.get_mut(at) {
                                    row.unit = unit.clone();
                                }
                            });
                        }
                    />
                    <input
                        type="text"
                        placeholder="Ingredient"
                        prop:value=ingredient.name.clone()
                        on:input=move |ev| {
                            let name = event_target_value(&ev);
                            ingredients.update(|rows| {
                                if let Some(row) = rows.get_mut(at) {
                                    row.name = name.clone();
                                }
                            });
                        }
                    />
                    <button
                        type="button"
                        class="row-remove-btn"
                        on:click=move |_| ingredients.update(|rows| {
                            if rows.len() > 1 {
                                rows.remove(at);
                            }
                        })
                    >
                        "×"
                    </button>
                </div>
            }).collect_view()}
            <button
                type="button"
                class="row-add-btn"
                on:click=move |_| ingredients.update(|rows| rows.push(IngredientPayload::default()))
            >
                "+ Ingredient"
            </button>

            <h3>"Instructions"</h3>
            {move || instructions.get().into_iter().enumerate().map(|(at, text)| view! {
                <div class="instruction-row">
                    <span class="step-number">{format!("{}.", at + 1)}</span>
                    <textarea
                        placeholder="Step"
                        prop:value=text
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            instructions.update(|rows| {
                                if let Some(row) = rows.get_mut(at) {
                                    *row = text.clone();
                                }
                            });
                        }
                    />
                    <button
                        type="button"
                        class="row-remove-btn"
                        on:click=move |_| instructions.update(|rows| {
                            if rows.len() > 1 {
                                rows.remove(at);
                            }
                        })
                    >
                        "×"
                    </button>
                </div>
            }).collect_view()}
            <button
                type="button"
                class="row-add-btn"
                on:click=move |_| instructions.update(|rows| rows.push(String::new()))
            >
                "+ Step"
            </button>

            <button type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}

#[component]
pub fn RecipeEditorPage() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="recipe-editor-page">
            <Show
                when=move || ctx.logged_in()
                fallback=|| view! {
                    <p class="login-hint">"Please " <A href="/login">"log in"</A> " to add a recipe."</p>
                }
            >
                <EditorForm/>
            </Show>
        </div>
    }
}
