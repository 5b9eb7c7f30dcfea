//! Planner Page
//!
//! Weekly meal grid with navigation and shopping-list generation.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use ui_widgets::use_toasts;

use crate::api;
use crate::components::MealCalendar;
use crate::context::use_app;
use crate::models::Recipe;
use crate::planner::{collect_shopping_ingredients, planned_recipe_ids, shift_week, today, week_window};
use crate::store::{use_plan_store, PlanStateStoreFields};

#[component]
fn PlannerGrid() -> impl IntoView {
    let ctx = use_app();
    let store = use_plan_store();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (pivot, set_pivot) = signal(today());
    let (generating, set_generating) = signal(false);

    // Fetch the displayed week whenever the pivot or the trigger changes
    Effect::new(move |_| {
        let _ = ctx.plans_trigger.get();
        let window = week_window(pivot.get());
        web_sys::console::log_1(&format!("[PLANNER] Loading week of {}", window[0]).into());
        spawn_local(async move {
            match api::plans_for_range(window[0], window[6]).await {
                Ok(plans) => store.week_plans().set(plans),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    });

    let navigate_on_generate = navigate.clone();
    let on_generate = move |_| {
        let plans = store.week_plans().get_untracked();
        let recipe_ids: Vec<String> = {
            let mut ids: Vec<String> = plans.iter().flat_map(planned_recipe_ids).collect();
            ids.sort();
            ids.dedup();
            ids
        };
        if recipe_ids.is_empty() {
            toasts.error("plan some meals first");
            return;
        }

        let navigate = navigate_on_generate.clone();
        set_generating.set(true);
        spawn_local(async move {
            // Resolve each planned recipe so we have its ingredients
            let mut recipes: HashMap<String, Recipe> = HashMap::new();
            for id in &recipe_ids {
                match api::get_recipe(id).await {
                    Ok(recipe) => {
                        recipes.insert(recipe.id.clone(), recipe);
                    }
                    Err(err) => {
                        set_generating.set(false);
                        toasts.error(err.to_string());
                        return;
                    }
                }
            }

            let needs = collect_shopping_ingredients(&plans, &recipes);
            match api::generate(&needs).await {
                Ok(list) => {
                    store.shopping_list().set(Some(list));
                    toasts.success("shopping list ready");
                    navigate("/shopping-list", Default::default());
                }
                Err(err) => toasts.error(err.to_string()),
            }
            set_generating.set(false);
        });
    };

    view! {
        <div class="planner-toolbar">
            <button on:click=move |_| set_pivot.update(|p| *p = shift_week(*p, -1))>
                "‹ Previous week"
            </button>
            <button on:click=move |_| set_pivot.set(today())>"Today"</button>
            <button on:click=move |_| set_pivot.update(|p| *p = shift_week(*p, 1))>
                "Next week ›"
            </button>
            <span class="week-label">
                {move || {
                    let window = week_window(pivot.get());
                    format!("{} – {}", window[0].format("%e %b"), window[6].format("%e %b %Y"))
                }}
            </span>
            <button class="generate-btn" disabled=move || generating.get() on:click=on_generate>
                {move || if generating.get() { "Generating..." } else { "Generate shopping list" }}
            </button>
        </div>
        <MealCalendar pivot=pivot/>
    }
}

#[component]
pub fn PlannerPage() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="planner-page">
            <Show
                when=move || ctx.logged_in()
                fallback=|| view! {
                    <p class="login-hint">"Please " <A href="/login">"log in"</A> " to plan meals."</p>
                }
            >
                <PlannerGrid/>
            </Show>
        </div>
    }
}
