//! Day View Component
//!
//! One column of the weekly grid: three meal slots plus the snack list.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ui_widgets::use_toasts;

use crate::api::{self, SlotKind};
use crate::components::{MealSlot, RecipePicker};
use crate::context::use_app;
use crate::models::{MealPlan, RecipeRef};
use crate::store::{store_upsert_plan, use_plan_store, PlanStateStoreFields};

#[component]
pub fn DayView(date: NaiveDate) -> impl IntoView {
    let ctx = use_app();
    let store = use_plan_store();
    let toasts = use_toasts();
    let (adding_snack, set_adding_snack) = signal(false);

    let plan = Memo::new(move |_| {
        store
            .week_plans()
            .get()
            .into_iter()
            .find(|p| p.date == date)
    });

    let on_add_snack = Callback::new(move |recipe: RecipeRef| {
        set_adding_snack.set(false);
        spawn_local(async move {
            match api::add_snack(date, &recipe.id).await {
                Ok(plan) => store_upsert_plan(&store, plan),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let slot_recipe = move |plan: &Option<MealPlan>, kind: SlotKind| -> Option<RecipeRef> {
        let plan = plan.as_ref()?;
        match kind {
            SlotKind::Breakfast => plan.breakfast.clone(),
            SlotKind::Lunch => plan.lunch.clone(),
            SlotKind::Dinner => plan.dinner.clone(),
        }
    };

    view! {
        <div class="day-view">
            <header class="day-header">{date.format("%a %e %b").to_string()}</header>

            {move || {
                let current = plan.get();
                SlotKind::ALL
                    .iter()
                    .map(|&kind| {
                        let assigned = slot_recipe(&current, kind);
                        view! { <MealSlot date=date kind=kind assigned=assigned/> }
                    })
                    .collect_view()
            }}

            <div class="snack-list">
                <span class="slot-label">"Snacks"</span>
                <For
                    each=move || plan.get().map(|p| p.snacks).unwrap_or_default()
                    key=|snack| snack.id.clone()
                    children=move |snack| {
                        let snack_id = snack.id.clone();
                        view! {
                            <span class="snack-entry">
                                {snack.title.clone()}
                                <button
                                    class="slot-clear-btn"
                                    on:click=move |_| {
                                        let snack_id = snack_id.clone();
                                        spawn_local(async move {
                                            match api::remove_snack(date, &snack_id).await {
                                                Ok(()) => ctx.reload_plans(),
                                                Err(err) => toasts.error(err.to_string()),
                                            }
                                        });
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
                <button
                    class="slot-add-btn"
                    on:click=move |_| set_adding_snack.update(|v| *v = !*v)
                >
                    {move || if adding_snack.get() { "Cancel" } else { "+ Snack" }}
                </button>
                <Show when=move || adding_snack.get()>
                    <RecipePicker on_pick=on_add_snack/>
                </Show>
            </div>
        </div>
    }
}
