//! Auth Endpoints

use api_client::ApiError;

use super::client;
use crate::models::{AuthResponse, LoginPayload};

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let payload = LoginPayload {
        email: email.to_string(),
        password: password.to_string(),
    };
    client().post_json("/auth/login", &payload).await
}
