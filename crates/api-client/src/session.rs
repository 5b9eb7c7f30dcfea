//! Persisted Auth Session
//!
//! Token plus user record kept in localStorage under an app-scoped key.
//! No refresh, no rotation, no expiry handling: the session lives until
//! an explicit logout clears it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// What actually goes into storage, as one JSON blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    /// User record as sent by the backend; each app decodes its own shape
    pub user: serde_json::Value,
}

impl StoredSession {
    pub fn encode(&self) -> String {
        // Serializing a String + Value cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Handle to the persisted session for one app
#[derive(Clone, Copy)]
pub struct Session {
    scope: &'static str,
}

impl Session {
    pub const fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    fn storage_key(&self) -> String {
        format!("{}.session", self.scope)
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn load(&self) -> Option<StoredSession> {
        let raw = Self::storage()?.get_item(&self.storage_key()).ok()??;
        StoredSession::decode(&raw)
    }

    /// Bearer token, if logged in
    pub fn token(&self) -> Option<String> {
        self.load().map(|s| s.token)
    }

    /// Stored user record decoded into the app's own User type
    pub fn user<U: DeserializeOwned>(&self) -> Option<U> {
        serde_json::from_value(self.load()?.user).ok()
    }

    pub fn save<U: Serialize>(&self, token: &str, user: &U) {
        let stored = StoredSession {
            token: token.to_string(),
            user: serde_json::to_value(user).unwrap_or(serde_json::Value::Null),
        };
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(&self.storage_key(), &stored.encode());
        }
    }

    /// Explicit logout
    pub fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.storage_key());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stored_session_codec() {
        let stored = StoredSession {
            token: "abc.def.ghi".to_string(),
            user: json!({"id": "u1", "username": "ada"}),
        };
        let decoded = StoredSession::decode(&stored.encode()).unwrap();
        assert_eq!(decoded, stored);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(StoredSession::decode("not json").is_none());
        assert!(StoredSession::decode(r#"{"token": 5}"#).is_none());
    }

    #[test]
    fn test_storage_key_is_scoped() {
        assert_eq!(Session::new("blog").storage_key(), "blog.session");
        assert_eq!(Session::new("mealplan").storage_key(), "mealplan.session");
    }
}
