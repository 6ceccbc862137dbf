//! File-based storage implementation for native platforms.

use super::{KeyValueStorage, StorageError, StorageResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Extension used for value files.
const VALUE_EXTENSION: &str = "value";

/// File-based storage for native platforms.
///
/// Stores each key as its own file in a base directory, holding the raw
/// string value.
pub struct FileStorage {
    /// Base directory for value files.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the default location.
    ///
    /// On Unix: `~/.local/share/granule/storage/`
    /// On Windows: `%LOCALAPPDATA%\granule\storage\`
    pub fn default_location() -> StorageResult<Self> {
        Self::new(Self::default_path()?)
    }

    /// The directory [`default_location`](Self::default_location) uses.
    pub fn default_path() -> StorageResult<PathBuf> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;
        Ok(base.join("granule").join("storage"))
    }

    /// Get the file path for a key.
    fn value_path(&self, key: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.{}", encode_key(key), VALUE_EXTENSION))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.value_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.value_path(key);
        fs::write(&path, value).map_err(|e| {
            StorageError::Io(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.value_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(format!(
                "Failed to delete {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        if !self.base_path.exists() {
            return Ok(vec![]);
        }

        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| StorageError::Io(format!("Failed to read directory: {}", e)))?;

        let mut keys = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == VALUE_EXTENSION) {
                if let Some(key) = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .and_then(decode_key)
                {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }
}

/// Make a key safe for a file name.
///
/// ASCII letters, digits, `-` and `_` pass through; every other byte becomes
/// `%XX`, so distinct keys always map to distinct files.
fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

/// Inverse of [`encode_key`]. `None` for names it could not have produced.
fn decode_key(name: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(name.len());
    let mut rest = name.as_bytes();
    while let Some((&byte, tail)) = rest.split_first() {
        if byte == b'%' {
            let hex = tail.get(..2)?;
            let hex = std::str::from_utf8(hex).ok()?;
            bytes.push(u8::from_str_radix(hex, 16).ok()?);
            rest = &tail[2..];
        } else {
            bytes.push(byte);
            rest = tail;
        }
    }
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_set_get() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        storage.set("appsNav", "[\"Slack\"]").unwrap();
        assert_eq!(
            storage.get("appsNav").unwrap().as_deref(),
            Some("[\"Slack\"]")
        );
    }

    #[test]
    fn test_file_storage_missing() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(storage.get("nonexistent").unwrap(), None);
    }

    #[test]
    fn test_file_storage_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::new(nested.clone()).unwrap();

        storage.set("k", "v").unwrap();
        assert!(nested.join("k.value").exists());
    }

    #[test]
    fn test_file_storage_remove() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        storage.set("activeAppName", "Trello").unwrap();
        storage.remove("activeAppName").unwrap();
        assert_eq!(storage.get("activeAppName").unwrap(), None);

        // Missing keys remove cleanly
        storage.remove("activeAppName").unwrap();
    }

    #[test]
    fn test_file_storage_keys() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        storage.set("appsNav", "[]").unwrap();
        storage.set("auth_user", "{}").unwrap();
        fs::write(dir.path().join("stray.txt"), "ignored").unwrap();

        let mut keys = storage.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["appsNav".to_string(), "auth_user".to_string()]);
    }

    #[test]
    fn test_file_storage_sanitizes_key() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        // Key with special characters should be encoded
        storage.set("../escape:attempt", "x").unwrap();

        // Should still be readable with the same key
        assert_eq!(storage.get("../escape:attempt").unwrap().as_deref(), Some("x"));
        assert!(dir.path().join("%2E%2E%2Fescape%3Aattempt.value").exists());
        assert_eq!(storage.keys().unwrap(), vec!["../escape:attempt".to_string()]);
    }

    #[test]
    fn test_file_storage_keeps_similar_keys_apart() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        storage.set("a:b", "colon").unwrap();
        storage.set("a_b", "underscore").unwrap();

        assert_eq!(storage.get("a:b").unwrap().as_deref(), Some("colon"));
        assert_eq!(storage.get("a_b").unwrap().as_deref(), Some("underscore"));
        let mut keys = storage.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a:b".to_string(), "a_b".to_string()]);
    }

    #[test]
    fn test_undecodable_file_names_are_skipped() {
        assert_eq!(decode_key("bad%G1"), None);
        assert_eq!(decode_key("short%4"), None);
        assert_eq!(decode_key("caf%C3%A9").as_deref(), Some("café"));
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempdir().unwrap();
        FileStorage::new(dir.path().to_path_buf())
            .unwrap()
            .set("appsNav", "[\"X (Twitter)\"]")
            .unwrap();

        let reopened = FileStorage::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(
            reopened.get("appsNav").unwrap().as_deref(),
            Some("[\"X (Twitter)\"]")
        );
    }
}
