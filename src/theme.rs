//! Theme Context
//!
//! Accent color and light/dark mode shared across the component tree.
//! Both values live under their own storage keys. Every change is copied
//! into the settings blob and onto the document root (`dark` class,
//! `--accent` / `--accent-soft` CSS variables).

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{DARK_MODE_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::storage::ClientStorage;
use crate::stores::SettingsStore;

/// Named accent colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentTheme {
    #[default]
    Indigo,
    Violet,
    Emerald,
    Rose,
    Amber,
    Sky,
}

impl AccentTheme {
    pub const ALL: [AccentTheme; 6] = [
        AccentTheme::Indigo,
        AccentTheme::Violet,
        AccentTheme::Emerald,
        AccentTheme::Rose,
        AccentTheme::Amber,
        AccentTheme::Sky,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccentTheme::Indigo => "indigo",
            AccentTheme::Violet => "violet",
            AccentTheme::Emerald => "emerald",
            AccentTheme::Rose => "rose",
            AccentTheme::Amber => "amber",
            AccentTheme::Sky => "sky",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccentTheme::Indigo => "Indigo",
            AccentTheme::Violet => "Violet",
            AccentTheme::Emerald => "Emerald",
            AccentTheme::Rose => "Rose",
            AccentTheme::Amber => "Amber",
            AccentTheme::Sky => "Sky",
        }
    }

    /// Primary accent color
    pub fn hex(&self) -> &'static str {
        match self {
            AccentTheme::Indigo => "#6366f1",
            AccentTheme::Violet => "#8b5cf6",
            AccentTheme::Emerald => "#10b981",
            AccentTheme::Rose => "#f43f5e",
            AccentTheme::Amber => "#f59e0b",
            AccentTheme::Sky => "#0ea5e9",
        }
    }

    /// Tinted background variant
    pub fn soft_hex(&self) -> &'static str {
        match self {
            AccentTheme::Indigo => "#e0e7ff",
            AccentTheme::Violet => "#ede9fe",
            AccentTheme::Emerald => "#d1fae5",
            AccentTheme::Rose => "#ffe4e6",
            AccentTheme::Amber => "#fef3c7",
            AccentTheme::Sky => "#e0f2fe",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == name)
    }
}

/// Theme state, provided via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    active_theme: RwSignal<AccentTheme>,
    is_dark_mode: RwSignal<bool>,
    storage: ClientStorage,
    settings: SettingsStore,
}

impl ThemeContext {
    /// Restore from storage (unknown values fall back to defaults) and apply.
    ///
    /// The theme keys win over whatever the settings blob holds.
    pub fn new(storage: ClientStorage, settings: SettingsStore) -> Self {
        let active_theme = storage
            .get(THEME_STORAGE_KEY)
            .and_then(|name| AccentTheme::from_name(&name))
            .unwrap_or_default();
        let is_dark_mode = storage
            .get(DARK_MODE_STORAGE_KEY)
            .map(|flag| flag == "true")
            .unwrap_or(false);

        let ctx = Self {
            active_theme: RwSignal::new(active_theme),
            is_dark_mode: RwSignal::new(is_dark_mode),
            storage,
            settings,
        };
        ctx.sync();
        ctx
    }

    pub fn active_theme(&self) -> AccentTheme {
        self.active_theme.get()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode.get()
    }

    pub fn set_theme(&self, theme: AccentTheme) {
        self.active_theme.set(theme);
        self.sync();
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        self.is_dark_mode.set(enabled);
        self.sync();
    }

    pub fn toggle_dark_mode(&self) {
        self.is_dark_mode.update(|dark| *dark = !*dark);
        self.sync();
    }

    /// Set both values with a single write
    pub fn apply(&self, theme: AccentTheme, dark: bool) {
        self.active_theme.set(theme);
        self.is_dark_mode.set(dark);
        self.sync();
    }

    /// Write both keys, the settings blob and the document flags
    fn sync(&self) {
        let theme = self.active_theme.get_untracked();
        let dark = self.is_dark_mode.get_untracked();
        self.storage.set(THEME_STORAGE_KEY, theme.as_str());
        self.storage.set(DARK_MODE_STORAGE_KEY, if dark { "true" } else { "false" });
        self.settings.mirror_appearance(theme, dark);
        document_flags::apply(theme, dark);
    }
}

#[cfg(target_arch = "wasm32")]
mod document_flags {
    use super::AccentTheme;
    use wasm_bindgen::JsCast;

    pub fn apply(theme: AccentTheme, dark: bool) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let _ = root.class_list().toggle_with_force("dark", dark);
        if let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() {
            let style = root.style();
            let _ = style.set_property("--accent", theme.hex());
            let _ = style.set_property("--accent-soft", theme.soft_hex());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod document_flags {
    use super::AccentTheme;

    pub fn apply(_theme: AccentTheme, _dark: bool) {}
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SETTINGS_STORAGE_KEY;

    fn theme_over(storage: ClientStorage) -> (ThemeContext, SettingsStore) {
        let settings = SettingsStore::new(storage);
        (ThemeContext::new(storage, settings), settings)
    }

    #[test]
    fn defaults_when_storage_is_empty_or_garbage() {
        let storage = ClientStorage::memory();
        storage.set(THEME_STORAGE_KEY, "plaid");
        let (theme, _) = theme_over(storage);
        assert_eq!(theme.active_theme(), AccentTheme::Indigo);
        assert!(!theme.is_dark_mode());
        assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("indigo"));
    }

    #[test]
    fn restores_saved_preferences() {
        let storage = ClientStorage::memory();
        storage.set(THEME_STORAGE_KEY, "emerald");
        storage.set(DARK_MODE_STORAGE_KEY, "true");
        let (theme, settings) = theme_over(storage);
        assert_eq!(theme.active_theme(), AccentTheme::Emerald);
        assert!(theme.is_dark_mode());
        assert_eq!(settings.settings().theme, AccentTheme::Emerald);
        assert!(settings.settings().is_dark_mode);
    }

    #[test]
    fn double_toggle_is_identity() {
        let storage = ClientStorage::memory();
        let (theme, _) = theme_over(storage);
        theme.set_theme(AccentTheme::Amber);
        let before_value = theme.is_dark_mode();
        let before_storage = storage.snapshot();

        theme.toggle_dark_mode();
        assert_ne!(theme.is_dark_mode(), before_value);
        assert_eq!(storage.get(DARK_MODE_STORAGE_KEY).as_deref(), Some("true"));
        theme.toggle_dark_mode();

        assert_eq!(theme.is_dark_mode(), before_value);
        assert_eq!(storage.snapshot(), before_storage);
    }

    #[test]
    fn toggles_keep_settings_blob_in_step() {
        let storage = ClientStorage::memory();
        let (theme, settings) = theme_over(storage);
        theme.set_theme(AccentTheme::Rose);
        let blob = storage.get(SETTINGS_STORAGE_KEY);
        assert!(blob.is_some());

        theme.toggle_dark_mode();
        assert!(settings.settings().is_dark_mode);
        assert_ne!(storage.get(SETTINGS_STORAGE_KEY), blob);

        theme.toggle_dark_mode();
        assert!(!settings.settings().is_dark_mode);
        assert_eq!(settings.settings().theme, AccentTheme::Rose);
        assert_eq!(storage.get(SETTINGS_STORAGE_KEY), blob);
    }

    #[test]
    fn apply_sets_both_values() {
        let storage = ClientStorage::memory();
        let (theme, settings) = theme_over(storage);
        theme.apply(AccentTheme::Violet, true);
        assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("violet"));
        assert_eq!(storage.get(DARK_MODE_STORAGE_KEY).as_deref(), Some("true"));
        assert_eq!(settings.settings().theme, AccentTheme::Violet);
        assert!(settings.settings().is_dark_mode);
    }

    #[test]
    fn theme_names_round_trip() {
        for theme in AccentTheme::ALL {
            assert_eq!(AccentTheme::from_name(theme.as_str()), Some(theme));
        }
    }
}
