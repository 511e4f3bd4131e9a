//! In-memory settings backend.

use std::collections::HashMap;

use super::{KeyValueStore, StoreError};

/// In-process store. Never fails, forgets everything on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, StoreError> {
        Ok(self.values.get(key).copied())
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key() {
        let store = MemoryStore::new();
        assert!(store.get_bool("firstTime").unwrap().is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = MemoryStore::new();
        store.set_bool("firstTime", false).unwrap();
        store.set_bool("firstTime", true).unwrap();
        assert_eq!(store.get_bool("firstTime").unwrap(), Some(true));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut store = MemoryStore::new();
        store.set_bool("a", true).unwrap();
        assert_eq!(store.get_bool("b").unwrap(), None);
    }
}
