//! UI Components
//!
//! Reusable Leptos components.

mod error_fallback;
mod goal_card;
mod goal_filter_bar;
mod nav_bar;
mod new_goal_form;
mod theme_picker;

pub use error_fallback::{reload_page, AppErrorBoundary};
pub use goal_card::GoalCard;
pub use goal_filter_bar::GoalFilterBar;
pub use nav_bar::NavBar;
pub use new_goal_form::NewGoalForm;
pub use theme_picker::ThemePicker;
