//! Upload Endpoint

use api_client::ApiError;

use super::client;
use crate::models::UploadResponse;

/// Upload an image, returning its hosted URL.
/// A 413 response surfaces as "file too large".
pub async fn upload_image(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<String, ApiError> {
    let resp: UploadResponse = client()
        .post_multipart("/upload/images", "image", filename, mime, bytes)
        .await?;
    Ok(resp.url)
}
