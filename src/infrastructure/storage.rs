//! Key-value persistence for whole values
//!
//! Values are stored as JSON text under a string key. A missing key loads as
//! the type's default, so a fresh store starts out empty.

use crate::error::{Result, WordypondError};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract key-value store holding serialized values
pub trait KeyValueStorage {
    /// Read the raw value for `key`, or `None` if nothing was stored
    fn load_raw(&self, key: &str) -> Result<Option<String>>;

    /// Replace the raw value for `key`
    fn store_raw(&mut self, key: &str, value: &str) -> Result<()>;

    /// Load and decode the value for `key`, falling back to `T::default()`
    fn load<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
        Self: Sized,
    {
        match self.load_raw(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(T::default()),
        }
    }

    /// Encode and store the full value for `key`
    fn store<T>(&mut self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.store_raw(key, &raw)
    }
}

/// In-process storage, mostly useful for tests and embedding
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn load_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn store_raw(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed storage: one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        FileStorage { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.starts_with('.') || key.contains(['/', '\\']) {
            return Err(WordypondError::Storage(format!(
                "Invalid storage key: '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn replace_with(tmp_path: &Path, path: &Path, value: &str) -> std::io::Result<()> {
        fs::write(tmp_path, value)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(tmp_path, path)
    }
}

impl KeyValueStorage for FileStorage {
    fn load_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!("loaded {} bytes from {}", contents.len(), path.display());
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no stored value at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(WordypondError::Io(e)),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn store_raw(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let tmp_path = self
            .dir
            .join(format!("{}.json.tmp-{}", key, std::process::id()));
        if let Err(e) = Self::replace_with(&tmp_path, &path, value) {
            let _ = fs::remove_file(&tmp_path);
            return Err(WordypondError::Io(e));
        }
        debug!("stored {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_missing_key_loads_default() {
        let storage = MemoryStorage::new();
        let value: Vec<String> = storage.load("absent").unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_memory_store_then_load() {
        let mut storage = MemoryStorage::new();
        storage
            .store("letters", &vec!["a".to_string(), "b".to_string()])
            .unwrap();
        assert_eq!(storage.get("letters"), Some(r#"["a","b"]"#));

        let value: Vec<String> = storage.load("letters").unwrap();
        assert_eq!(value, vec!["a", "b"]);
    }

    #[test]
    fn test_memory_malformed_value_is_an_error() {
        let storage = MemoryStorage::new().with_entry("letters", "{not json");
        let result: Result<Vec<String>> = storage.load("letters");
        assert!(matches!(result, Err(WordypondError::Json(_))));
    }

    #[test]
    fn test_file_missing_key_loads_none() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("data"));
        assert_eq!(storage.load_raw("weeks").unwrap(), None);
    }

    #[test]
    fn test_file_store_creates_dir_and_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("data");
        let mut storage = FileStorage::new(dir.clone());

        storage.store_raw("weeks", "[]").unwrap();

        assert!(dir.join("weeks.json").exists());
        assert_eq!(fs::read_to_string(dir.join("weeks.json")).unwrap(), "[]");
    }

    #[test]
    fn test_file_store_overwrites_and_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().to_path_buf());

        storage.store_raw("weeks", "[1]").unwrap();
        storage.store_raw("weeks", "[1,2]").unwrap();

        assert_eq!(storage.load_raw("weeks").unwrap().as_deref(), Some("[1,2]"));
        let files: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_file_failed_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp.path().to_path_buf());
        // A directory where the value file should go makes the rename fail
        fs::create_dir(temp.path().join("weeks.json")).unwrap();
        fs::write(temp.path().join("weeks.json").join("inner"), "x").unwrap();

        let result = storage.store_raw("weeks", "[]");

        assert!(matches!(result, Err(WordypondError::Io(_))));
        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["weeks.json".to_string()]);
    }

    #[test]
    fn test_file_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().to_path_buf());
        assert!(storage.path_for("../escape").is_err());
        assert!(storage.path_for("").is_err());
        assert!(storage.path_for(".hidden").is_err());
        assert!(storage.path_for("wordypond-weeks").is_ok());
    }
}
