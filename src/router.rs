//! In-App Navigation
//!
//! A closed set of pages, mirrored into the browser history so links and the
//! back button behave.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Goals,
    Insights,
    Settings,
    Onboarding,
    Subscribe,
}

impl Route {
    /// Pages shown in the navigation bar
    pub const NAV: [Route; 4] = [Route::Dashboard, Route::Goals, Route::Insights, Route::Settings];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Goals => "/goals",
            Route::Insights => "/insights",
            Route::Settings => "/settings",
            Route::Onboarding => "/onboarding",
            Route::Subscribe => "/subscribe",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Goals => "Goals",
            Route::Insights => "Insights",
            Route::Settings => "Settings",
            Route::Onboarding => "Welcome",
            Route::Subscribe => "Subscription",
        }
    }

    /// Unknown paths land on the dashboard
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("/");
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/goals" => Route::Goals,
            "/insights" => Route::Insights,
            "/settings" => Route::Settings,
            "/onboarding" => Route::Onboarding,
            "/subscribe" => Route::Subscribe,
            _ => Route::Dashboard,
        }
    }

    /// Whether the page needs onboarding to be finished first
    pub fn requires_onboarding(&self) -> bool {
        !matches!(self, Route::Onboarding | Route::Subscribe)
    }

    /// Whether the page is for paying users only
    pub fn requires_subscription(&self) -> bool {
        matches!(self, Route::Insights)
    }
}

/// Current route, provided via context
#[derive(Clone, Copy)]
pub struct Navigator {
    current: RwSignal<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            current: RwSignal::new(initial),
        }
    }

    /// Start at whatever the address bar says
    pub fn from_location() -> Self {
        Self::new(history::current_path().map(|path| Route::from_path(&path)).unwrap_or_default())
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    pub fn navigate(&self, route: Route) {
        if self.current.get_untracked() == route {
            return;
        }
        log::debug!("[ROUTER] -> {}", route.path());
        history::push(route.path());
        self.current.set(route);
    }

    /// Follow browser back/forward
    pub fn listen_history(&self) {
        let current = self.current;
        history::on_pop(move |path| current.set(Route::from_path(&path)));
    }
}

pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}

#[cfg(target_arch = "wasm32")]
mod history {
    use leptos::prelude::window_event_listener;
    use wasm_bindgen::JsValue;

    pub fn current_path() -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    pub fn push(path: &str) {
        if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }

    pub fn on_pop(handler: impl Fn(String) + 'static) {
        let handle = window_event_listener(leptos::ev::popstate, move |_| {
            if let Some(path) = current_path() {
                handler(path);
            }
        });
        // Lives as long as the app
        std::mem::forget(handle);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod history {
    pub fn current_path() -> Option<String> {
        None
    }

    pub fn push(_path: &str) {}

    pub fn on_pop(_handler: impl Fn(String) + 'static) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Dashboard,
            Route::Goals,
            Route::Insights,
            Route::Settings,
            Route::Onboarding,
            Route::Subscribe,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        assert_eq!(Route::from_path("/goals/"), Route::Goals);
        assert_eq!(Route::from_path("/settings?tab=sounds"), Route::Settings);
        assert_eq!(Route::from_path("/nowhere"), Route::Dashboard);
    }

    #[test]
    fn gating_requirements() {
        assert!(Route::Goals.requires_onboarding());
        assert!(!Route::Onboarding.requires_onboarding());
        assert!(Route::Insights.requires_subscription());
        assert!(!Route::Dashboard.requires_subscription());
    }

    #[test]
    fn navigate_updates_current_route() {
        let nav = Navigator::new(Route::Dashboard);
        nav.navigate(Route::Goals);
        assert_eq!(nav.current(), Route::Goals);
    }
}
