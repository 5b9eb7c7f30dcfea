//! Meal Slot Component
//!
//! One of the three fixed slots in a day cell: shows the assigned recipe
//! or a picker to assign one.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use ui_widgets::use_toasts;

use crate::api::{self, SlotKind};
use crate::components::RecipePicker;
use crate::models::RecipeRef;
use crate::store::{store_upsert_plan, use_plan_store};

#[component]
pub fn MealSlot(date: NaiveDate, kind: SlotKind, assigned: Option<RecipeRef>) -> impl IntoView {
    let store = use_plan_store();
    let toasts = use_toasts();
    let (picking, set_picking) = signal(false);

    let on_pick = Callback::new(move |recipe: RecipeRef| {
        set_picking.set(false);
        spawn_local(async move {
            match api::set_slot(date, kind, Some(&recipe.id)).await {
                Ok(plan) => store_upsert_plan(&store, plan),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let on_clear = move |_| {
        spawn_local(async move {
            match api::set_slot(date, kind, None).await {
                Ok(plan) => store_upsert_plan(&store, plan),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    view! {
        <div class="meal-slot">
            <span class="slot-label">{kind.label()}</span>
            {match assigned {
                Some(recipe) => {
                    let href = format!("/recipes/{}", recipe.id);
                    view! {
                        <span class="slot-recipe">
                            <A href=href>{recipe.title.clone()}</A>
                            <button class="slot-clear-btn" on:click=on_clear>"×"</button>
                        </span>
                    }.into_any()
                }
                None => view! {
                    <button
                        class="slot-add-btn"
                        on:click=move |_| set_picking.update(|v| *v = !*v)
                    >
                        {move || if picking.get() { "Cancel" } else { "+ Add" }}
                    </button>
                    <Show when=move || picking.get()>
                        <RecipePicker on_pick=on_pick/>
                    </Show>
                }.into_any(),
            }}
        </div>
    }
}
