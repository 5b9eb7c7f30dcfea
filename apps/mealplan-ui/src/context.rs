//! Application Context
//!
//! Session user and the plan reload trigger, provided via Leptos context.

use leptos::prelude::*;

use crate::api;
use crate::models::{AuthResponse, User};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Logged-in user, None when logged out
    pub user: RwSignal<Option<User>>,
    /// Bumped after plan mutations that need a week re-fetch
    pub plans_trigger: RwSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            // Restore the persisted session on startup
            user: RwSignal::new(api::SESSION.user::<User>()),
            plans_trigger: RwSignal::new(0),
        }
    }

    pub fn logged_in(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    pub fn login(&self, auth: AuthResponse) {
        api::SESSION.save(&auth.token, &auth.user);
        self.user.set(Some(auth.user));
    }

    pub fn logout(&self) {
        api::SESSION.clear();
        self.user.set(None);
    }

    /// Trigger a reload of the displayed week
    pub fn reload_plans(&self) {
        self.plans_trigger.update(|v| *v += 1);
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
