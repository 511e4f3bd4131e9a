//! First-launch flag bindings backed by `window.localStorage`.
//!
//! Values are stored as the strings `"true"` and `"false"` under the same
//! `firstTime` key the core uses.
//!
//! # Example
//!
//! ```typescript
//! if (is_first_time()) {
//!   showOnboarding(() => complete_onboarding());
//! }
//! ```

use treasure_core::settings::{FirstLaunchFlag, KeyValueStore, StoreError};
use wasm_bindgen::prelude::*;
use web_sys::{console, Storage};

/// [`KeyValueStore`] over the browser's `localStorage`.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Attach to `window.localStorage`.
    ///
    /// Fails outside a window context (e.g. in a worker) or when the
    /// browser has storage disabled.
    pub fn open() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, StoreError> {
        let raw = self
            .storage
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?;

        match raw.as_deref().map(parse_bool) {
            None => Ok(None),
            Some(Some(value)) => Ok(Some(value)),
            Some(None) => {
                console::warn_1(&format!("ignoring non-boolean value for {key}").into());
                Ok(None)
            }
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        self.storage
            .set_item(key, format_bool(value))
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn open_flag() -> Result<FirstLaunchFlag<LocalStorageStore>, JsValue> {
    LocalStorageStore::open()
        .map(FirstLaunchFlag::new)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Whether onboarding should be shown. Unreachable storage counts as a
/// first launch.
#[wasm_bindgen]
pub fn is_first_time() -> bool {
    match open_flag() {
        Ok(flag) => flag.is_first_time(),
        Err(error) => {
            console::warn_2(&"first-launch flag unavailable:".into(), &error);
            true
        }
    }
}

/// Overwrite the first-launch flag.
#[wasm_bindgen]
pub fn set_first_time(value: bool) -> Result<(), JsValue> {
    open_flag()?
        .set_first_time(value)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Record that onboarding was dismissed.
#[wasm_bindgen]
pub fn complete_onboarding() -> Result<(), JsValue> {
    set_first_time(false)
}
