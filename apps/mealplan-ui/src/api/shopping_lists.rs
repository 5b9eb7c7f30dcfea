//! Shopping List Endpoints

use api_client::ApiError;
use serde::Serialize;

use super::{client, get_retrying};
use crate::models::{ShoppingList, ShoppingListItem};
use crate::planner::IngredientNeed;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewItemPayload<'a> {
    ingredient_id: &'a str,
    name: &'a str,
    quantity: f64,
    unit: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratePayload<'a> {
    items: Vec<NewItemPayload<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckedPayload {
    checked: bool,
}

/// Create a shopping list from the aggregated week
pub async fn generate(needs: &[IngredientNeed]) -> Result<ShoppingList, ApiError> {
    let payload = GeneratePayload {
        items: needs
            .iter()
            .map(|need| NewItemPayload {
                ingredient_id: &need.ingredient_id,
                name: &need.name,
                quantity: need.quantity,
                unit: &need.unit,
            })
            .collect(),
    };
    client().post_json("/shopping-lists", &payload).await
}

/// The active list, or None when there is none yet
pub async fn get_active() -> Result<Option<ShoppingList>, ApiError> {
    match get_retrying::<ShoppingList>("/shopping-lists/active".to_string()).await {
        Ok(list) => Ok(Some(list)),
        Err(ApiError::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Persist a checked-state change
pub async fn set_item_checked(
    list_id: &str,
    item_id: &str,
    checked: bool,
) -> Result<ShoppingListItem, ApiError> {
    client()
        .put_json(
            &format!("/shopping-lists/{}/items/{}", list_id, item_id),
            &CheckedPayload { checked },
        )
        .await
}

pub async fn delete_list(id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/shopping-lists/{}", id)).await
}
