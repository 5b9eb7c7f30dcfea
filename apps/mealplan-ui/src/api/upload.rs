//! Upload Endpoint

use api_client::ApiError;

use super::client;
use crate::models::UploadResponse;

/// Upload a recipe photo, returning its hosted URL.
/// A 413 response surfaces as "file too large".
pub async fn upload_photo(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<String, ApiError> {
    let resp: UploadResponse = client()
        .post_multipart("/upload/recipe-photos", "photo", filename, mime, bytes)
        .await?;
    Ok(resp.url)
}
