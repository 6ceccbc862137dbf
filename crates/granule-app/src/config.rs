//! Application configuration.

use std::path::PathBuf;

/// Host settings. Everything has a usable default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    /// Where persisted state lives. `None` uses the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Start with the demo CRM records instead of empty books.
    pub seed_records: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Granule CRM".to_string(),
            data_dir: None,
            seed_records: true,
        }
    }
}

impl AppConfig {
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Open file storage at the configured or default location.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open_storage(&self) -> granule_core::StorageResult<granule_core::storage::FileStorage> {
        use granule_core::storage::FileStorage;

        match &self.data_dir {
            Some(dir) => FileStorage::new(dir.clone()),
            None => FileStorage::default_location(),
        }
    }
}
