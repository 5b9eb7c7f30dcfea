//! Auth Endpoints

use api_client::ApiError;

use super::{client, get_retrying};
use crate::models::{AuthResponse, LoginPayload, RegisterPayload, User};

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let payload = LoginPayload {
        email: email.to_string(),
        password: password.to_string(),
    };
    client().post_json("/auth/login", &payload).await
}

pub async fn register(username: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let payload = RegisterPayload {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    client().post_json("/auth/register", &payload).await
}

/// Current user as the backend sees it
pub async fn me() -> Result<User, ApiError> {
    get_retrying("/auth/me".to_string()).await
}
