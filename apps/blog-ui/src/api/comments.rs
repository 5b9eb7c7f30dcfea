//! Comment Endpoints

use api_client::ApiError;

use super::{client, get_retrying};
use crate::models::{Comment, CommentPayload};

pub async fn list_comments(post_id: &str) -> Result<Vec<Comment>, ApiError> {
    get_retrying(format!("/posts/{}/comments", post_id)).await
}

pub async fn create_comment(
    post_id: &str,
    content: &str,
    parent_comment: Option<String>,
) -> Result<Comment, ApiError> {
    let payload = CommentPayload {
        content: content.to_string(),
        parent_comment,
    };
    client()
        .post_json(&format!("/posts/{}/comments", post_id), &payload)
        .await
}

pub async fn delete_comment(id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/comments/{}", id)).await
}
