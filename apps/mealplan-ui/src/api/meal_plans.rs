//! Meal Plan Endpoints

use api_client::ApiError;
use chrono::NaiveDate;
use serde::Serialize;

use super::{client, get_retrying};
use crate::models::MealPlan;

/// The three fixed meal slots; snacks are a separate list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotKind {
    Breakfast,
    Lunch,
    Dinner,
}

impl SlotKind {
    pub const ALL: [SlotKind; 3] = [SlotKind::Breakfast, SlotKind::Lunch, SlotKind::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::Breakfast => "breakfast",
            SlotKind::Lunch => "lunch",
            SlotKind::Dinner => "dinner",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::Breakfast => "Breakfast",
            SlotKind::Lunch => "Lunch",
            SlotKind::Dinner => "Dinner",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlotPayload<'a> {
    date: NaiveDate,
    slot: &'static str,
    /// None clears the slot
    recipe_id: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnackPayload<'a> {
    recipe_id: &'a str,
}

/// Plans for an inclusive date range (the displayed week)
pub async fn plans_for_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<MealPlan>, ApiError> {
    get_retrying(format!("/meal-plans?start={}&end={}", start, end)).await
}

/// Assign or clear one of the three meal slots
pub async fn set_slot(
    date: NaiveDate,
    slot: SlotKind,
    recipe_id: Option<&str>,
) -> Result<MealPlan, ApiError> {
    client()
        .put_json(
            "/meal-plans/slot",
            &SlotPayload {
                date,
                slot: slot.as_str(),
                recipe_id,
            },
        )
        .await
}

pub async fn add_snack(date: NaiveDate, recipe_id: &str) -> Result<MealPlan, ApiError> {
    client()
        .post_json(
            &format!("/meal-plans/{}/snacks", date),
            &SnackPayload { recipe_id },
        )
        .await
}

pub async fn remove_snack(date: NaiveDate, recipe_id: &str) -> Result<(), ApiError> {
    client()
        .delete(&format!("/meal-plans/{}/snacks/{}", date, recipe_id))
        .await
}
