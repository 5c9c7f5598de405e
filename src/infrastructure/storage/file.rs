//! File-backed key-value store
//!
//! Each key is one `<dir>/<key>.json` file. Writes go to a temporary file in
//! the same directory and are persisted over the target, so a reader never
//! sees a partial value. A failed write leaves no temporary file behind.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::storage::KeyValueStore;
use crate::domain::DomainError;

const FILE_EXTENSION: &str = "json";

/// Key-value store persisting each entry to its own file
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, FILE_EXTENSION)))
    }
}

fn validate_key(key: &str) -> Result<(), DomainError> {
    if key.is_empty() {
        return Err(DomainError::storage("Storage key cannot be empty"));
    }

    if let Some(c) = key
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        return Err(DomainError::storage(format!(
            "Storage key '{}' contains invalid character '{}'",
            key, c
        )));
    }

    Ok(())
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.dir).map_err(|e| {
            DomainError::storage(format!(
                "Failed to create storage directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| {
            DomainError::storage(format!(
                "Failed to create temporary file in {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        tmp.write_all(value.as_bytes()).map_err(|e| {
            DomainError::storage(format!("Failed to write {}: {}", path.display(), e))
        })?;

        // Dropping the handle returned in the error removes the temporary file
        tmp.persist(&path).map_err(|e| {
            DomainError::storage(format!("Failed to replace {}: {}", path.display(), e.error))
        })?;

        debug!(path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, DomainError> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "Removed value");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(dir: &std::path::Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_set_creates_directory_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(tmp.path().join("nested"));

        store.set("formData", r#"{"firstName":"Asha"}"#).unwrap();

        let on_disk = fs::read_to_string(tmp.path().join("nested/formData.json")).unwrap();
        assert_eq!(on_disk, r#"{"firstName":"Asha"}"#);
        assert_eq!(entries(&tmp.path().join("nested")), vec!["formData.json"]);
    }

    #[test]
    fn test_failed_replace_leaves_no_temporary_file() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("formData.json")).unwrap();
        let store = FileKeyValueStore::new(tmp.path());

        let result = store.set("formData", "{}");

        assert!(matches!(result, Err(DomainError::Storage { .. })));
        assert_eq!(entries(tmp.path()), vec!["formData.json"]);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(tmp.path());

        assert_eq!(store.get("formData").unwrap(), None);
        assert!(!store.contains("formData").unwrap());
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(tmp.path());

        store.set("formData", "first").unwrap();
        store.set("formData", "second").unwrap();

        assert_eq!(store.get("formData").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_remove() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(tmp.path());
        store.set("formData", "{}").unwrap();

        assert!(store.remove("formData").unwrap());
        assert!(!store.remove("formData").unwrap());
        assert_eq!(store.get("formData").unwrap(), None);
    }

    #[test]
    fn test_values_survive_a_new_store_instance() {
        let tmp = tempfile::tempdir().unwrap();
        FileKeyValueStore::new(tmp.path())
            .set("formData", "kept")
            .unwrap();

        let reopened = FileKeyValueStore::new(tmp.path());
        assert_eq!(reopened.get("formData").unwrap(), Some("kept".to_string()));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(tmp.path());

        let result = store.set("../escape", "x");
        assert!(matches!(result, Err(DomainError::Storage { .. })));

        let result = store.get("");
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
