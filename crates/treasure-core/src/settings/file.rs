//! JSON-file settings backend.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

/// Settings persisted as a JSON object, e.g. `{"firstTime": false}`.
///
/// Every write replaces the file through a sibling temp file and a rename,
/// so readers see either the old or the new contents, never a torn file.
/// A value is on disk once [`KeyValueStore::set_bool`] returns `Ok`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, bool>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; the file
    /// is only created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(contents) if contents.iter().all(u8::is_ascii_whitespace) => BTreeMap::new(),
            Ok(contents) => serde_json::from_slice(&contents)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), keys = values.len(), "opened settings file");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, bool>) -> Result<(), StoreError> {
        let contents = serde_json::to_vec_pretty(values)?;
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        if let Err(e) = replace_with(&tmp, &self.path, &contents) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        // Make the rename itself durable. Directories can't be opened as
        // files on every platform.
        if let Ok(dir) = fs::File::open(parent) {
            dir.sync_all()?;
        }
        Ok(())
    }
}

/// Write `contents` to `tmp`, flush it to disk, then move it over `path`.
fn replace_with(tmp: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    {
        let mut file = fs::File::create(tmp)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }
    fs::rename(tmp, path)
}

impl KeyValueStore for FileStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, StoreError> {
        Ok(self.values.get(key).copied())
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        let mut next = self.values.clone();
        next.insert(key.to_string(), value);
        // In-memory state only moves once the file is written
        self.persist(&next)?;
        self.values = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.get_bool("firstTime").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_value_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set_bool("firstTime", false).unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_bool("firstTime").unwrap(), Some(false));
    }

    #[test]
    fn test_file_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set_bool("firstTime", false).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "firstTime": false }));
        assert!(!dir.path().join("settings.json.tmp").exists());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/app/settings.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set_bool("firstTime", true).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_blank_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "  \n").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get_bool("firstTime").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"firstTime": "maybe"}"#).unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = tempdir().unwrap();
        // A directory where the file should be makes the rename fail
        let path = dir.path().join("settings.json");
        let mut store = FileStore::open(&path).unwrap();
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();

        assert!(store.set_bool("firstTime", false).is_err());
        assert_eq!(store.get_bool("firstTime").unwrap(), None);
    }

    #[test]
    fn test_failed_write_removes_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut store = FileStore::open(&path).unwrap();
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();

        assert!(matches!(
            store.set_bool("firstTime", false),
            Err(StoreError::Io(_))
        ));
        assert!(!dir.path().join("settings.json.tmp").exists());
    }
}
