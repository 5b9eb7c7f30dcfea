//! Shared REST Plumbing
//!
//! HTTP client with bearer-token injection, the persisted auth session,
//! and query staleness/retry configuration used by both apps.

pub mod error;
pub mod http;
pub mod query;
pub mod session;

pub use error::ApiError;
pub use http::ApiClient;
pub use query::{now_ms, retrying, Freshness, QueryConfig};
pub use session::Session;
