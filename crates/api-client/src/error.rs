//! API Error Type
//!
//! Maps HTTP failures to the messages shown in toasts.

use thiserror::Error;

/// Failure of a backend request, as surfaced to the user
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("please log in")]
    Unauthorized,
    #[error("not authorized")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("file too large")]
    PayloadTooLarge,
    #[error("request failed ({0}): {1}")]
    Status(u16, String),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-2xx status to the matching variant.
    /// `detail` is the response body, kept only for the generic case.
    pub fn from_status(code: u16, detail: String) -> Self {
        match code {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            413 => ApiError::PayloadTooLarge,
            _ => ApiError::Status(code, detail),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(401, String::new()), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, String::new()), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404, String::new()), ApiError::NotFound);
        assert_eq!(ApiError::from_status(413, String::new()), ApiError::PayloadTooLarge);
        assert_eq!(
            ApiError::from_status(500, "boom".to_string()),
            ApiError::Status(500, "boom".to_string())
        );
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(ApiError::Unauthorized.to_string(), "please log in");
        assert_eq!(ApiError::Forbidden.to_string(), "not authorized");
        assert_eq!(ApiError::NotFound.to_string(), "not found");
        assert_eq!(ApiError::PayloadTooLarge.to_string(), "file too large");
    }
}
