//! REST Service Wrappers
//!
//! Typed bindings to the meal-planner backend, organized by resource.

mod auth;
mod collections;
mod meal_plans;
mod recipes;
mod reviews;
mod shopping_lists;
mod upload;

use api_client::{retrying, ApiClient, ApiError, QueryConfig, Session};
use serde::de::DeserializeOwned;

/// Persisted session for the meal-planner app
pub const SESSION: Session = Session::new("mealplan");

const API_BASE: &str = "/api";

pub(crate) fn client() -> ApiClient {
    ApiClient::new(API_BASE, SESSION)
}

/// GET with the default retry policy (network failures only)
pub(crate) async fn get_retrying<T: DeserializeOwned>(path: String) -> Result<T, ApiError> {
    retrying(&QueryConfig::default(), || {
        let path = path.clone();
        async move { client().get_json(&path).await }
    })
    .await
}

// Re-export all public items
pub use auth::*;
pub use collections::*;
pub use meal_plans::*;
pub use recipes::*;
pub use reviews::*;
pub use shopping_lists::*;
pub use upload::*;
