//! Recipe Endpoints

use api_client::ApiError;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{client, get_retrying};
use crate::models::{Recipe, RecipeListResponse, RecipePayload};

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
}

impl RecipeQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            per_page: 12,
            search: None,
        }
    }

    pub fn with_search(mut self, term: Option<String>) -> Self {
        self.search = term.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut query = format!("?page={}&perPage={}", self.page, self.per_page);
        if let Some(term) = &self.search {
            query.push_str("&search=");
            query.push_str(&utf8_percent_encode(term, NON_ALPHANUMERIC).to_string());
        }
        query
    }
}

pub async fn list_recipes(query: &RecipeQuery) -> Result<RecipeListResponse, ApiError> {
    get_retrying(format!("/recipes{}", query.to_query_string())).await
}

pub async fn get_recipe(id: &str) -> Result<Recipe, ApiError> {
    get_retrying(format!("/recipes/{}", id)).await
}

pub async fn create_recipe(payload: &RecipePayload) -> Result<Recipe, ApiError> {
    client().post_json("/recipes", payload).await
}

pub async fn update_recipe(id: &str, payload: &RecipePayload) -> Result<Recipe, ApiError> {
    client().put_json(&format!("/recipes/{}", id), payload).await
}

pub async fn delete_recipe(id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/recipes/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_search_is_dropped() {
        let query = RecipeQuery::page(1).with_search(Some("   ".to_string()));
        assert_eq!(query.to_query_string(), "?page=1&perPage=12");
    }

    #[test]
    fn test_search_is_encoded() {
        let query = RecipeQuery::page(3).with_search(Some("tom yum".to_string()));
        assert_eq!(query.to_query_string(), "?page=3&perPage=12&search=tom%20yum");
    }
}
