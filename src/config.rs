//! Application Configuration
//!
//! Compile-time settings (`EVYMA_*` environment variables at build time) plus
//! the fixed storage keys and UI timings.

use log::LevelFilter;

/// Local storage key for the persisted settings blob
pub const SETTINGS_STORAGE_KEY: &str = "evyma-settings";
/// Local storage key for the accent theme name
pub const THEME_STORAGE_KEY: &str = "evyma-theme";
/// Local storage key for the dark mode flag
pub const DARK_MODE_STORAGE_KEY: &str = "evyma-dark-mode";

/// Runtime configuration, provided via context
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub log_level: LevelFilter,
    /// Base44 application the SDK client is created for
    pub base44_app_id: Option<&'static str>,
    /// Path the login flow returns to; `None` means the current URL
    pub login_redirect: Option<&'static str>,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    /// Delay before a freshly mounted page fades in
    pub page_transition_ms: u32,
    /// Loading indicators only appear after this long
    pub spinner_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            base44_app_id: None,
            login_redirect: None,
            toast_duration_ms: 5000,
            page_transition_ms: 10,
            spinner_delay_ms: 200,
        }
    }
}

impl AppConfig {
    /// Build from `EVYMA_LOG_LEVEL`, `EVYMA_BASE44_APP_ID` and
    /// `EVYMA_LOGIN_REDIRECT` captured at compile time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("EVYMA_LOG_LEVEL"),
            option_env!("EVYMA_BASE44_APP_ID"),
            option_env!("EVYMA_LOGIN_REDIRECT"),
        )
    }

    fn from_values(
        log_level: Option<&str>,
        base44_app_id: Option<&'static str>,
        login_redirect: Option<&'static str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
            base44_app_id: base44_app_id.map(str::trim).filter(|id| !id.is_empty()),
            login_redirect: login_redirect.filter(|path| !path.is_empty()),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_fall_back_to_defaults() {
        assert_eq!(AppConfig::from_values(None, None, None), AppConfig::default());
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        let config = AppConfig::from_values(Some("DEBUG"), None, None);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn garbage_log_level_is_ignored() {
        let config = AppConfig::from_values(Some("loud"), Some(" "), Some(""));
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.base44_app_id, None);
        assert_eq!(config.login_redirect, None);
    }

    #[test]
    fn login_redirect_is_kept() {
        let config = AppConfig::from_values(None, None, Some("/dashboard"));
        assert_eq!(config.login_redirect, Some("/dashboard"));
    }

    #[test]
    fn app_id_is_captured() {
        let config = AppConfig::from_values(None, Some("64f0c0ffee"), None);
        assert_eq!(config.base44_app_id, Some("64f0c0ffee"));
    }
}
