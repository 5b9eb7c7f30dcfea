//! REST Service Wrappers
//!
//! Typed bindings to the blog backend, organized by resource.

mod auth;
mod categories;
mod comments;
mod posts;
mod upload;

use api_client::{retrying, ApiClient, ApiError, QueryConfig, Session};
use serde::de::DeserializeOwned;

/// Persisted session for the blog app
pub const SESSION: Session = Session::new("blog");

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
pub use categories::*;
pub use comments::*;
pub use posts::*;
pub use upload::*;
