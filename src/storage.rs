//! Client-Side Storage
//!
//! String key/value persistence: browser `localStorage`, or an in-memory map
//! when running outside a browser.

use std::collections::HashMap;

use leptos::prelude::*;

/// Copyable handle to a key/value store
#[derive(Clone, Copy)]
pub enum ClientStorage {
    /// `window.localStorage`
    Browser,
    /// Process-local map
    Memory(StoredValue<HashMap<String, String>>),
}

impl ClientStorage {
    pub fn memory() -> Self {
        ClientStorage::Memory(StoredValue::new(HashMap::new()))
    }

    /// Browser storage when available, memory otherwise
    pub fn detect() -> Self {
        if browser::local_storage().is_some() {
            ClientStorage::Browser
        } else {
            log::warn!("[STORAGE] localStorage unavailable, preferences will not persist");
            ClientStorage::memory()
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match self {
            ClientStorage::Browser => browser::local_storage()?.get_item(key).ok().flatten(),
            ClientStorage::Memory(map) => map.with_value(|map| map.get(key).cloned()),
        }
    }

    pub fn set(&self, key: &str, value: &str) {
        match self {
            ClientStorage::Browser => {
                let stored = browser::local_storage().map(|storage| storage.set_item(key, value));
                if !matches!(stored, Some(Ok(()))) {
                    log::warn!("[STORAGE] failed to write {}", key);
                }
            }
            ClientStorage::Memory(map) => {
                map.update_value(|map| {
                    map.insert(key.to_string(), value.to_string());
                });
            }
        }
    }
}

#[cfg(test)]
impl ClientStorage {
    pub(crate) fn remove(&self, key: &str) {
        if let ClientStorage::Memory(map) = self {
            map.update_value(|map| {
                map.remove(key);
            });
        }
    }

    /// Every entry of a memory store
    pub(crate) fn snapshot(&self) -> HashMap<String, String> {
        match self {
            ClientStorage::Memory(map) => map.get_value(),
            ClientStorage::Browser => panic!("snapshot of browser storage"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    pub fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    pub fn local_storage() -> Option<web_sys::Storage> {
        None
    }
}
