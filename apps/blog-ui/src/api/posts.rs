//! Post Endpoints

use api_client::ApiError;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{client, get_retrying};
use crate::models::{Post, PostListResponse, PostPayload};

/// List filter and pagination parameters, sent as query string
#[derive(Debug, Clone, PartialEq)]
pub struct PostQuery {
    pub page: u32,
    pub per_page: u32,
    pub category: Option<String>,
    pub author: Option<String>,
}

impl PostQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            per_page: 10,
            category: None,
            author: None,
        }
    }

    pub fn with_category(mut self, slug: Option<String>) -> Self {
        self.category = slug;
        self
    }

    pub fn with_author(mut self, author_id: String) -> Self {
        self.author = Some(author_id);
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut query = format!("?page={}&perPage={}", self.page, self.per_page);
        if let Some(category) = &self.category {
            query.push_str("&category=");
            query.push_str(&utf8_percent_encode(category, NON_ALPHANUMERIC).to_string());
        }
        if let Some(author) = &self.author {
            query.push_str("&author=");
            query.push_str(&utf8_percent_encode(author, NON_ALPHANUMERIC).to_string());
        }
        query
    }
}

pub async fn list_posts(query: &PostQuery) -> Result<PostListResponse, ApiError> {
    get_retrying(format!("/posts{}", query.to_query_string())).await
}

pub async fn get_post(id: &str) -> Result<Post, ApiError> {
    get_retrying(format!("/posts/{}", id)).await
}

pub async fn create_post(payload: &PostPayload) -> Result<Post, ApiError> {
    client().post_json("/posts", payload).await
}

pub async fn update_post(id: &str, payload: &PostPayload) -> Result<Post, ApiError> {
    client().put_json(&format!("/posts/{}", id), payload).await
}

pub async fn delete_post(id: &str) -> Result<(), ApiError> {
    client().delete(&format!("/posts/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_defaults() {
        let query = PostQuery::page(2);
        assert_eq!(query.to_query_string(), "?page=2&perPage=10");
    }

    #[test]
    fn test_query_string_encodes_filters() {
        let query = PostQuery::page(1)
            .with_category(Some("rust & wasm".to_string()))
            .with_author("u 7".to_string());
        assert_eq!(
            query.to_query_string(),
            "?page=1&perPage=10&category=rust%20%26%20wasm&author=u%207"
        );
    }
}
