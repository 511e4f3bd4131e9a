//! Persisted app settings.
//!
//! The only setting today is the first-launch flag, which decides whether
//! the onboarding screens are shown. Storage is abstracted behind
//! [`KeyValueStore`] and handed to [`FirstLaunchFlag`] at construction, so
//! each host picks its backend:
//! - [`MemoryStore`] for tests and ephemeral sessions
//! - [`FileStore`] for a JSON file on disk
//! - the browser's `localStorage` in the WASM bindings
//!
//! # Examples
//!
//! ```ignore
//! use treasure_core::settings::{FileStore, FirstLaunchFlag};
//!
//! let mut flag = FirstLaunchFlag::new(FileStore::open("settings.json")?);
//! if flag.is_first_time() {
//!     // show onboarding, then:
//!     flag.complete_onboarding()?;
//! }
//! ```

mod file;
mod flag;
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use flag::{FirstLaunchFlag, FIRST_TIME_KEY};
pub use memory::MemoryStore;

/// Errors from a settings backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but is not a JSON object of booleans.
    #[error("Settings file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The backend cannot be reached (e.g. storage disabled in a browser).
    #[error("Settings storage unavailable: {0}")]
    Unavailable(String),
}

/// A string-keyed store of boolean settings.
///
/// Writes overwrite; the last write for a key wins.
pub trait KeyValueStore {
    /// Read a value, `Ok(None)` when the key was never written.
    fn get_bool(&self, key: &str) -> Result<Option<bool>, StoreError>;

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, StoreError> {
        (**self).get_bool(key)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        (**self).set_bool(key, value)
    }
}
