//! Review Endpoints
//!
//! Sorting only changes the query parameters; ordering and the rating
//! aggregate are computed server-side.

use api_client::ApiError;

use super::{client, get_retrying};
use crate::models::{Review, ReviewListResponse, ReviewPayload};

pub const REVIEWS_PER_PAGE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ReviewSort {
    #[default]
    Newest,
    Highest,
    Lowest,
}

impl ReviewSort {
    pub const ALL: [ReviewSort; 3] = [ReviewSort::Newest, ReviewSort::Highest, ReviewSort::Lowest];

    pub fn as_query_param(&self) -> &'static str {
        match self {
            ReviewSort::Newest => "newest",
            ReviewSort::Highest => "highest",
            ReviewSort::Lowest => "lowest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewSort::Newest => "Newest",
            ReviewSort::Highest => "Highest rated",
            ReviewSort::Lowest => "Lowest rated",
        }
    }
}

pub async fn list_reviews(
    recipe_id: &str,
    page: u32,
    sort: ReviewSort,
) -> Result<ReviewListResponse, ApiError> {
    get_retrying(format!(
        "/recipes/{}/reviews?page={}&perPage={}&sort={}",
        recipe_id,
        page,
        REVIEWS_PER_PAGE,
        sort.as_query_param()
    ))
    .await
}

pub async fn create_review(
    recipe_id: &str,
    rating: u8,
    comment: Option<String>,
) -> Result<Review, ApiError> {
    let payload = ReviewPayload {
        rating,
        comment: comment.filter(|c| !c.trim().is_empty()),
    };
    client()
        .post_json(&format!("/recipes/{}/reviews", recipe_id), &payload)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_query_params() {
        assert_eq!(ReviewSort::Newest.as_query_param(), "newest");
        assert_eq!(ReviewSort::Highest.as_query_param(), "highest");
        assert_eq!(ReviewSort::Lowest.as_query_param(), "lowest");
    }
}
