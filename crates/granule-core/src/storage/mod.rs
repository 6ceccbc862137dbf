//! Key/value storage abstraction for client-side persistence.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(target_arch = "wasm32")]
mod local;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Key holding the JSON array of pinned app names.
pub const PINNED_APPS_KEY: &str = "appsNav";

/// Key holding the name of the embedded app; absent when none.
pub const ACTIVE_APP_KEY: &str = "activeAppName";

/// Key holding the signed-in user.
pub const AUTH_USER_KEY: &str = "auth_user";

/// Key holding the signed-in user's profile.
pub const AUTH_PROFILE_KEY: &str = "auth_profile";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for string key/value storage backends.
///
/// Modeled on browser `localStorage`: every call completes synchronously.
/// Implementations can keep values in memory, on disk, or in the browser.
///
/// Note: On native platforms, implementations must be Send + Sync.
/// On WASM, these bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait KeyValueStorage: Send + Sync {
    /// Read a value. Missing keys are `Ok(None)`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a value. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// List all stored keys.
    fn keys(&self) -> StorageResult<Vec<String>>;
}

/// Trait for string key/value storage backends (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait KeyValueStorage {
    /// Read a value. Missing keys are `Ok(None)`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a value. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// List all stored keys.
    fn keys(&self) -> StorageResult<Vec<String>>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for std::sync::Arc<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        (**self).keys()
    }
}

/// Read and decode a JSON value.
///
/// Absent, unreadable and malformed entries all come back as `None`; the
/// last two are logged, since persisted state is never worth failing over.
pub fn read_json<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Failed to read {key}: {e}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed value under {key}: {e}");
            None
        }
    }
}

/// Encode a value as JSON and store it.
pub fn write_json<T: serde::Serialize + ?Sized>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let json =
        serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;
    storage.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_json_absent() {
        let storage = MemoryStorage::new();
        assert_eq!(read_json::<Vec<String>>(&storage, PINNED_APPS_KEY), None);
    }

    #[test]
    fn test_read_json_malformed_is_none() {
        let storage = MemoryStorage::new();
        storage.set(PINNED_APPS_KEY, "[\"Slack\",").unwrap();
        assert_eq!(read_json::<Vec<String>>(&storage, PINNED_APPS_KEY), None);

        storage.set(PINNED_APPS_KEY, "{\"not\":\"a list\"}").unwrap();
        assert_eq!(read_json::<Vec<String>>(&storage, PINNED_APPS_KEY), None);
    }

    #[test]
    fn test_write_then_read_json() {
        let storage = MemoryStorage::new();
        let names = vec!["Slack".to_string(), "Trello".to_string()];
        write_json(&storage, PINNED_APPS_KEY, &names).unwrap();

        assert_eq!(
            storage.get(PINNED_APPS_KEY).unwrap().as_deref(),
            Some("[\"Slack\",\"Trello\"]")
        );
        assert_eq!(read_json::<Vec<String>>(&storage, PINNED_APPS_KEY), Some(names));
    }

    #[test]
    fn test_arc_storage_shares_state() {
        let storage = std::sync::Arc::new(MemoryStorage::new());
        let handle = storage.clone();
        handle.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
