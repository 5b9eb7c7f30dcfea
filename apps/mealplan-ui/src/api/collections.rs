//! Collection Endpoints

use api_client::ApiError;
use serde::Serialize;

use super::{client, get_retrying};
use crate::models::Collection;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionPayload<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecipeIdPayload<'a> {
    recipe_id: &'a str,
}

pub async fn list_collections() -> Result<Vec<Collection>, ApiError> {
    get_retrying("/collections".to_string()).await
}

pub async fn get_collection(id: &str) -> Result<Collection, ApiError> {
    get_retrying(format!("/collections/{}", id)).await
}

pub async fn create_collection(name: &str, description: Option<&str>) -> Result<Collection, ApiError> {
    client()
        .post_json("/collections", &CollectionPayload { name, description })
        .await
}

pub async fn delete_collection(id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/collections/{}", id)).await
}

pub async fn add_recipe_to_collection(
    collection_id: &str,
    recipe_id: &str,
) -> Result<Collection, ApiError> {
    client()
        .post_json(
            &format!("/collections/{}/recipes", collection_id),
            &RecipeIdPayload { recipe_id },
        )
        .await
}

pub async fn remove_recipe_from_collection(
    collection_id: &str,
    recipe_id: &str,
) -> Result<(), ApiError> {
    client()
        .delete(&format!("/collections/{}/recipes/{}", collection_id, recipe_id))
        .await
}
