//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::User;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in user, filled in by the route gate - read
    pub user: ReadSignal<Option<User>>,
    /// Signed-in user - write
    set_user: WriteSignal<Option<User>>,
    /// Trigger to refetch remote data - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch remote data - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        user: (ReadSignal<Option<User>>, WriteSignal<Option<User>>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            user: user.0,
            set_user: user.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn set_user(&self, user: Option<User>) {
        self.set_user.set(user);
    }

    /// Trigger a refetch of remote data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
