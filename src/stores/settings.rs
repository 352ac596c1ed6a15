//! Settings Store
//!
//! User preferences kept entirely on the client. Every change re-serializes the
//! whole blob to local storage under [`SETTINGS_STORAGE_KEY`].

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::config::SETTINGS_STORAGE_KEY;
use crate::storage::ClientStorage;
use crate::theme::AccentTheme;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPrefs {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            push: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationChannel {
    Email,
    Sms,
    Push,
}

impl NotificationChannel {
    pub const ALL: [NotificationChannel; 3] = [
        NotificationChannel::Email,
        NotificationChannel::Sms,
        NotificationChannel::Push,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "Email",
            NotificationChannel::Sms => "SMS",
            NotificationChannel::Push => "Push",
        }
    }

    pub fn get(&self, prefs: &NotificationPrefs) -> bool {
        match self {
            NotificationChannel::Email => prefs.email,
            NotificationChannel::Sms => prefs.sms,
            NotificationChannel::Push => prefs.push,
        }
    }

    fn set(&self, prefs: &mut NotificationPrefs, enabled: bool) {
        match self {
            NotificationChannel::Email => prefs.email = enabled,
            NotificationChannel::Sms => prefs.sms = enabled,
            NotificationChannel::Push => prefs.push = enabled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundPrefs {
    pub enabled: bool,
    /// 0.0..=1.0
    pub volume: f32,
}

impl Default for SoundPrefs {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.5,
        }
    }
}

/// Persisted preference blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Store)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub theme: AccentTheme,
    pub is_dark_mode: bool,
    pub grid_columns: i32,
    pub show_apps: bool,
    pub notifications: NotificationPrefs,
    pub sounds: SoundPrefs,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: AccentTheme::default(),
            is_dark_mode: false,
            grid_columns: 3,
            show_apps: true,
            notifications: NotificationPrefs::default(),
            sounds: SoundPrefs::default(),
        }
    }
}

/// On-disk envelope: `{ "state": {...}, "version": 0 }`
#[derive(Debug, Serialize, Deserialize)]
struct Persisted {
    state: Settings,
    #[serde(default)]
    version: u32,
}

const SETTINGS_VERSION: u32 = 0;

fn load(storage: &ClientStorage) -> Settings {
    let Some(raw) = storage.get(SETTINGS_STORAGE_KEY) else {
        return Settings::default();
    };
    match serde_json::from_str::<Persisted>(&raw) {
        Ok(persisted) => persisted.state,
        Err(err) => {
            log::warn!("[SETTINGS] discarding unreadable settings: {}", err);
            Settings::default()
        }
    }
}

/// Settings store, provided via context
#[derive(Clone, Copy)]
pub struct SettingsStore {
    state: Store<Settings>,
    storage: ClientStorage,
}

impl SettingsStore {
    /// Restore from storage, falling back to defaults
    pub fn new(storage: ClientStorage) -> Self {
        Self {
            state: Store::new(load(&storage)),
            storage,
        }
    }

    pub fn settings(&self) -> Settings {
        self.state.get()
    }

    pub fn grid_columns(&self) -> i32 {
        self.state.grid_columns().get()
    }

    pub fn show_apps(&self) -> bool {
        self.state.show_apps().get()
    }

    pub fn notifications(&self) -> NotificationPrefs {
        self.state.notifications().get()
    }

    pub fn sounds(&self) -> SoundPrefs {
        self.state.sounds().get()
    }

    fn persist(&self) {
        let persisted = Persisted {
            state: self.state.get_untracked(),
            version: SETTINGS_VERSION,
        };
        match serde_json::to_string(&persisted) {
            Ok(json) => self.storage.set(SETTINGS_STORAGE_KEY, &json),
            Err(err) => log::error!("[SETTINGS] failed to serialize settings: {}", err),
        }
    }

    /// Copy of the theme context's accent and dark mode.
    ///
    /// Only `ThemeContext` calls this, so the blob never disagrees with the
    /// theme keys.
    pub(crate) fn mirror_appearance(&self, theme: AccentTheme, dark: bool) {
        self.state.theme().set(theme);
        self.state.is_dark_mode().set(dark);
        self.persist();
    }

    /// Any value is accepted; layout code clamps when rendering
    pub fn set_grid_columns(&self, columns: i32) {
        self.state.grid_columns().set(columns);
        self.persist();
    }

    pub fn set_show_apps(&self, show: bool) {
        self.state.show_apps().set(show);
        self.persist();
    }

    pub fn set_notification(&self, channel: NotificationChannel, enabled: bool) {
        self.state
            .notifications()
            .update(|prefs| channel.set(prefs, enabled));
        self.persist();
    }

    pub fn set_sounds_enabled(&self, enabled: bool) {
        self.state.sounds().update(|sounds| sounds.enabled = enabled);
        self.persist();
    }

    pub fn set_volume(&self, volume: f32) {
        let volume = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
        self.state.sounds().update(|sounds| sounds.volume = volume);
        self.persist();
    }

    /// Back to defaults, persisted
    pub fn reset(&self) {
        self.state.set(Settings::default());
        self.persist();
    }
}

pub fn use_settings_store() -> SettingsStore {
    expect_context::<SettingsStore>()
}
