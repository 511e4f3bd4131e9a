//! First-launch flag.

use tracing::{debug, warn};

use super::{KeyValueStore, StoreError};

/// Key the first-launch flag is stored under.
pub const FIRST_TIME_KEY: &str = "firstTime";

/// Whether onboarding still has to be shown.
///
/// A store that has never seen the key reads as a first launch. The flag is
/// read once at startup and written when onboarding is dismissed.
#[derive(Debug)]
pub struct FirstLaunchFlag<S> {
    store: S,
}

impl<S: KeyValueStore> FirstLaunchFlag<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True until `set_first_time(false)` has been persisted.
    ///
    /// An unreadable store is treated as a first launch, so onboarding is
    /// shown again rather than skipped.
    pub fn is_first_time(&self) -> bool {
        match self.store.get_bool(FIRST_TIME_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => true,
            Err(error) => {
                warn!(%error, key = FIRST_TIME_KEY, "could not read first-launch flag");
                true
            }
        }
    }

    /// Overwrite the flag.
    pub fn set_first_time(&mut self, value: bool) -> Result<(), StoreError> {
        self.store.set_bool(FIRST_TIME_KEY, value)?;
        debug!(value, key = FIRST_TIME_KEY, "first-launch flag written");
        Ok(())
    }

    /// Record that onboarding was dismissed.
    pub fn complete_onboarding(&mut self) -> Result<(), StoreError> {
        self.set_first_time(false)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
