//! Planner State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! current week's plans and the active shopping list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{MealPlan, ShoppingList};

/// Server state mirrored client-side
#[derive(Clone, Debug, Default, Store)]
pub struct PlanState {
    /// Plans for the currently displayed week
    pub week_plans: Vec<MealPlan>,
    /// Active shopping list, if one exists
    pub shopping_list: Option<ShoppingList>,
}

pub type PlanStore = Store<PlanState>;

/// Get the planner store from context
pub fn use_plan_store() -> PlanStore {
    expect_context::<PlanStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Insert or replace the plan for its date
pub fn store_upsert_plan(store: &PlanStore, updated: MealPlan) {
    let week_plans = store.week_plans();
    let mut plans = week_plans.write();
    match plans.iter_mut().find(|p| p.date == updated.date) {
        Some(plan) => *plan = updated,
        None => plans.push(updated),
    }
}

/// Flip an item's checked state locally (optimistic), returning the new
/// state so the caller can persist or revert it
pub fn store_toggle_item(store: &PlanStore, item_id: &str) -> Option<bool> {
    let shopping_list = store.shopping_list();
    let mut list = shopping_list.write();
    let item = list
        .as_mut()?
        .items
        .iter_mut()
        .find(|item| item.id == item_id)?;
    item.checked = !item.checked;
    Some(item.checked)
}

/// Force an item's checked state (used to revert a failed toggle)
pub fn store_set_item_checked(store: &PlanStore, item_id: &str, checked: bool) {
    let shopping_list = store.shopping_list();
    let mut list = shopping_list.write();
    if let Some(item) = list
        .as_mut()
        .and_then(|l| l.items.iter_mut().find(|item| item.id == item_id))
    {
        item.checked = checked;
    }
}
