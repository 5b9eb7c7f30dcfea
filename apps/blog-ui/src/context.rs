//! Application Context
//!
//! Session user and cached categories, provided via Leptos context.

use api_client::{now_ms, Freshness, QueryConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{AuthResponse, Category, User};

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Logged-in user, None when logged out
    pub user: RwSignal<Option<User>>,
    /// Categories for the filter bar, cached with a staleness window
    pub categories: RwSignal<Vec<Category>>,
    categories_freshness: RwSignal<Freshness>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            // Restore the persisted session on startup
            user: RwSignal::new(api::SESSION.user::<User>()),
            categories: RwSignal::new(Vec::new()),
            categories_freshness: RwSignal::new(Freshness::default()),
        }
    }

    pub fn logged_in(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    /// Store the session and expose the user to the UI
    pub fn login(&self, auth: AuthResponse) {
        api::SESSION.save(&auth.token, &auth.user);
        self.user.set(Some(auth.user));
    }

    /// Explicit logout: clear storage and local state
    pub fn logout(&self) {
        api::SESSION.clear();
        self.user.set(None);
    }

    /// Fetch categories unless the cached copy is still fresh
    pub fn ensure_categories(&self) {
        let config = QueryConfig::default();
        if !self
            .categories_freshness
            .get_untracked()
            .is_stale(now_ms(), &config)
        {
            return;
        }
        let categories = self.categories;
        let freshness = self.categories_freshness;
        spawn_local(async move {
            match api::list_categories().await {
                Ok(loaded) => {
                    categories.set(loaded);
                    freshness.update(|f| f.mark(now_ms()));
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("categories load failed: {}", err).into());
                }
            }
        });
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
