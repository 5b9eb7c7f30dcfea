//! Category Endpoints

use api_client::ApiError;

use super::get_retrying;
use crate::models::Category;

pub async fn list_categories() -> Result<Vec<Category>, ApiError> {
    get_retrying("/categories".to_string()).await
}
