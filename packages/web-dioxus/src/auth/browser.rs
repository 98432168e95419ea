//! Browser storage backend and cross-tab storage events
//!
//! Outside a wasm browser build the session lives in memory and no
//! cross-tab events are delivered.

use hopehands_core::{AuthService, SessionStore};

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use self::web::{BrowserStorage, StorageEventBridge};

/// Open the session store on `localStorage`, falling back to memory
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn open_session_store() -> SessionStore {
    use std::rc::Rc;

    match BrowserStorage::local() {
        Ok(storage) => SessionStore::open(Some(Rc::new(storage))),
        Err(e) => {
            tracing::warn!(error = %e, "localStorage unavailable");
            SessionStore::open(None)
        }
    }
}

/// Server renders have no browser storage; they always render signed out.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn open_session_store() -> SessionStore {
    SessionStore::in_memory()
}

/// Forward `storage` events from other tabs to the service's listeners
/// until the returned bridge is dropped.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn watch_other_tabs(service: &AuthService) -> Option<StorageEventBridge> {
    match StorageEventBridge::attach(service.clone()) {
        Ok(bridge) => Some(bridge),
        Err(e) => {
            tracing::warn!(error = ?e, "Could not listen for storage events");
            None
        }
    }
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn watch_other_tabs(_service: &AuthService) -> Option<StorageEventBridge> {
    None
}

/// Placeholder so callers can hold the bridge on every target
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub struct StorageEventBridge;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web {
    use hopehands_core::{AuthService, KeyValueStorage, StorageError};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    fn unavailable(e: JsValue) -> StorageError {
        StorageError::Unavailable(format!("{e:?}"))
    }

    /// `window.localStorage`
    pub struct BrowserStorage {
        storage: web_sys::Storage,
    }

    impl BrowserStorage {
        pub fn local() -> Result<Self, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
            let storage = window
                .local_storage()
                .map_err(unavailable)?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStorage for BrowserStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage.get_item(key).map_err(unavailable)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            // setItem only throws on quota exhaustion or disabled storage
            self.storage
                .set_item(key, value)
                .map_err(|_| StorageError::QuotaExceeded(key.to_string()))
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.storage.remove_item(key).map_err(unavailable)
        }
    }

    /// Registered `storage` event listener on `window`
    pub struct StorageEventBridge {
        window: web_sys::Window,
        callback: Closure<dyn FnMut(web_sys::StorageEvent)>,
    }

    impl StorageEventBridge {
        pub fn attach(service: AuthService) -> Result<Self, JsValue> {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

            let callback = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
                move |event: web_sys::StorageEvent| {
                    service.relay_storage_event(event.key().as_deref());
                },
            );
            window.add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref())?;

            Ok(Self { window, callback })
        }
    }

    impl Drop for StorageEventBridge {
        fn drop(&mut self) {
            let _ = self
                .window
                .remove_event_listener_with_callback("storage", self.callback.as_ref().unchecked_ref());
        }
    }
}
