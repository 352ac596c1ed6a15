//! Client-Side State Stores
//!
//! Context-provided containers built on `reactive_stores` for field-level
//! reactivity.

mod goals;
mod settings;

pub use goals::{filter_goals, use_goals_store, GoalFilter, GoalsStore};
pub use settings::{use_settings_store, NotificationChannel, SettingsStore};
