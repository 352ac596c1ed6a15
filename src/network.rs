//! Offline Detection
//!
//! Tracks `navigator.onLine` through the window `online` / `offline` events.

use leptos::prelude::*;

/// Connectivity flag, provided via context
#[derive(Clone, Copy)]
pub struct NetworkStatus {
    online: RwSignal<bool>,
}

impl NetworkStatus {
    pub fn new(initially_online: bool) -> Self {
        Self {
            online: RwSignal::new(initially_online),
        }
    }

    /// Read the browser's current state and subscribe to changes
    pub fn detect() -> Self {
        let status = Self::new(events::currently_online());
        events::subscribe(status);
        status
    }

    pub fn is_online(&self) -> bool {
        self.online.get()
    }

    pub fn set_online(&self, online: bool) {
        if self.online.get_untracked() != online {
            if online {
                log::info!("[NETWORK] back online");
            } else {
                log::warn!("[NETWORK] connection lost");
            }
            self.online.set(online);
        }
    }
}

pub fn use_network_status() -> NetworkStatus {
    expect_context::<NetworkStatus>()
}

#[cfg(target_arch = "wasm32")]
mod events {
    use leptos::ev;
    use leptos::prelude::window_event_listener;

    use super::NetworkStatus;

    pub fn currently_online() -> bool {
        web_sys::window()
            .map(|window| window.navigator().on_line())
            .unwrap_or(true)
    }

    pub fn subscribe(status: NetworkStatus) {
        let online = window_event_listener(ev::online, move |_| status.set_online(true));
        let offline = window_event_listener(ev::offline, move |_| status.set_online(false));
        // App-lifetime listeners
        std::mem::forget(online);
        std::mem::forget(offline);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod events {
    use super::NetworkStatus;

    pub fn currently_online() -> bool {
        true
    }

    pub fn subscribe(_status: NetworkStatus) {}
}

/// Banner shown while the browser reports no connection
#[component]
pub fn OfflineBanner() -> impl IntoView {
    let network = use_network_status();

    view! {
        <Show when=move || !network.is_online()>
            <div class="offline-banner" role="alert">
                <span class="offline-dot"></span>
                "You're offline. Changes won't be saved until your connection returns."
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_update_flag() {
        let status = NetworkStatus::new(true);
        status.set_online(false);
        assert!(!status.is_online());
        status.set_online(false);
        assert!(!status.is_online());
        status.set_online(true);
        assert!(status.is_online());
    }

    #[test]
    fn detect_assumes_online_off_browser() {
        assert!(NetworkStatus::detect().is_online());
    }
}
