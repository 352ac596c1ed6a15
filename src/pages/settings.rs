//! Settings Page
//!
//! Appearance, layout, notification and sound preferences.

use leptos::prelude::*;

use crate::components::ThemePicker;
use crate::stores::{use_settings_store, NotificationChannel};
use crate::theme::use_theme;
use crate::toast::use_toaster;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = use_settings_store();
    let theme = use_theme();
    let toaster = use_toaster();

    let reset = move |_| {
        settings.reset();
        let defaults = settings.settings();
        theme.apply(defaults.theme, defaults.is_dark_mode);
        toaster.info("Settings restored to defaults");
    };

    view! {
        <section class="settings-page">
            <h1>"Settings"</h1>

            <div class="settings-group">
                <h2>"Appearance"</h2>
                <ThemePicker theme=theme />
                <label class="setting-row">
                    <span>"Dark mode"</span>
                    <input type="checkbox" prop:checked=move || theme.is_dark_mode() on:change=move |ev| theme.set_dark_mode(event_target_checked(&ev)) />
                </label>
            </div>

            <div class="settings-group">
                <h2>"Layout"</h2>
                <label class="setting-row">
                    <span>"Dashboard columns"</span>
                    <input
                        type="number"
                        prop:value=move || settings.grid_columns().to_string()
                        on:change=move |ev| {
                            if let Ok(columns) = event_target_value(&ev).parse::<i32>() {
                                settings.set_grid_columns(columns);
                            }
                        }
                    />
                </label>
                <label class="setting-row">
                    <span>"Show apps on dashboard"</span>
                    <input
                        type="checkbox"
                        prop:checked=move || settings.show_apps()
                        on:change=move |ev| settings.set_show_apps(event_target_checked(&ev))
                    />
                </label>
            </div>

            <div class="settings-group">
                <h2>"Notifications"</h2>
                {NotificationChannel::ALL.into_iter().map(|channel| view! {
                    <label class="setting-row">
                        <span>{channel.label()}</span>
                        <input
                            type="checkbox"
                            prop:checked=move || channel.get(&settings.notifications())
                            on:change=move |ev| settings.set_notification(channel, event_target_checked(&ev))
                        />
                    </label>
                }).collect_view()}
            </div>

            <div class="settings-group">
                <h2>"Sounds"</h2>
                <label class="setting-row">
                    <span>"Enable sounds"</span>
                    <input
                        type="checkbox"
                        prop:checked=move || settings.sounds().enabled
                        on:change=move |ev| settings.set_sounds_enabled(event_target_checked(&ev))
                    />
                </label>
                <label class="setting-row">
                    <span>"Volume"</span>
                    <input
                        type="range"
                        min="0"
                        max="1"
                        step="0.05"
                        disabled=move || !settings.sounds().enabled
                        prop:value=move || settings.sounds().volume.to_string()
                        on:input=move |ev| {
                            if let Ok(volume) = event_target_value(&ev).parse::<f32>() {
                                settings.set_volume(volume);
                            }
                        }
                    />
                </label>
            </div>

            <button class="btn btn-danger" on:click=reset>"Reset to defaults"</button>
        </section>
    }
}
