//! Sidebar app shortcuts.
//!
//! [`AppShortcutStore`] owns the [`PinnedSelection`] and writes it through to
//! a [`KeyValueStorage`] on every change. Names the catalog doesn't know are
//! ignored everywhere: they can only come from stale persisted state, so none
//! of the operations treat them as errors.

use crate::catalog::{AppDescriptor, Catalog};
use crate::opener::ExternalOpener;
use crate::selection::PinnedSelection;
use crate::storage::{
    ACTIVE_APP_KEY, KeyValueStorage, PINNED_APPS_KEY, StorageResult, read_json, write_json,
};
use std::sync::Arc;

/// What [`AppShortcutStore::launch`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The app is now the embedded view.
    Embedded,
    /// The app is embeddable but not pinned, so nothing changed.
    NotPinned,
    /// The app was handed to the external opener.
    OpenedExternally,
    /// The catalog has no app by that name.
    Unknown,
    /// The external opener refused; the message is for logs or a toast.
    Failed(String),
}

/// Manages which catalog apps are pinned and which one is embedded.
pub struct AppShortcutStore<S: KeyValueStorage> {
    /// Storage backend.
    storage: Arc<S>,
    /// Apps that can be pinned.
    catalog: Catalog,
    /// Current state, always normalized.
    selection: PinnedSelection,
}

impl<S: KeyValueStorage> AppShortcutStore<S> {
    /// Create a store with an empty selection, without reading storage.
    pub fn new(storage: Arc<S>, catalog: Catalog) -> Self {
        Self {
            storage,
            catalog,
            selection: PinnedSelection::new(),
        }
    }

    /// Restore the selection persisted in `storage`.
    ///
    /// A malformed pinned list loads as empty. Orphaned and duplicate names
    /// are dropped, and if anything was dropped the repaired selection is
    /// written back.
    pub fn load(storage: Arc<S>, catalog: Catalog) -> Self {
        let pinned: Vec<String> = read_json(&*storage, PINNED_APPS_KEY).unwrap_or_default();
        let active = match storage.get(ACTIVE_APP_KEY) {
            Ok(active) => active.filter(|name| !name.is_empty()),
            Err(e) => {
                log::warn!("Failed to read {ACTIVE_APP_KEY}: {e}");
                None
            }
        };

        let mut selection = PinnedSelection::from_parts(pinned, active);
        let dropped = selection.normalize(&catalog);

        let store = Self {
            storage,
            catalog,
            selection,
        };
        if dropped > 0 {
            log::info!("Dropped {dropped} stale app shortcut entries");
            store.persist();
        }
        log::debug!(
            "Loaded {} pinned apps, active: {:?}",
            store.selection.pinned_names.len(),
            store.selection.active_name
        );
        store
    }

    /// Pin `name` to the end of the sidebar.
    ///
    /// Returns false if it was already pinned or isn't in the catalog.
    pub fn pin(&mut self, name: &str) -> bool {
        if !self.catalog.contains(name) || self.selection.is_pinned(name) {
            return false;
        }
        self.selection.pinned_names.push(name.to_string());
        self.persist();
        true
    }

    /// Remove `name` from the sidebar, closing it if it was embedded.
    pub fn unpin(&mut self, name: &str) -> bool {
        let Some(index) = self.selection.pinned_names.iter().position(|n| n == name) else {
            return false;
        };
        self.selection.pinned_names.remove(index);
        if self.selection.active_name.as_deref() == Some(name) {
            self.selection.active_name = None;
        }
        self.persist();
        true
    }

    /// Make `name` the embedded view.
    ///
    /// Only pinned, embeddable apps can be activated. Anything else leaves
    /// the active view alone and returns false.
    pub fn activate(&mut self, name: &str) -> bool {
        let Some(app) = self.catalog.find(name) else {
            return false;
        };
        if !app.embeddable || !self.selection.is_pinned(name) {
            return false;
        }
        if self.selection.active_name.as_deref() == Some(name) {
            return false;
        }
        self.selection.active_name = Some(name.to_string());
        self.persist();
        true
    }

    /// Close the embedded view and fall back to the page content.
    pub fn deactivate(&mut self) -> bool {
        if self.selection.active_name.take().is_none() {
            return false;
        }
        self.persist();
        true
    }

    /// Open `name` the way the sidebar does on click.
    ///
    /// Embeddable apps are activated; the rest go to `opener` and the active
    /// view stays as it was.
    pub fn launch(&mut self, name: &str, opener: &dyn ExternalOpener) -> LaunchOutcome {
        let Some(app) = self.catalog.find(name) else {
            return LaunchOutcome::Unknown;
        };

        if app.embeddable {
            if !self.selection.is_pinned(name) {
                return LaunchOutcome::NotPinned;
            }
            self.activate(name);
            return LaunchOutcome::Embedded;
        }

        match opener.open(app.launch_url) {
            Ok(()) => {
                log::info!("Opened {} externally", app.name);
                LaunchOutcome::OpenedExternally
            }
            Err(e) => {
                log::warn!("{e}");
                LaunchOutcome::Failed(e.to_string())
            }
        }
    }

    /// The embedded app, if any. `None` means render the default page.
    pub fn current_view(&self) -> Option<&'static AppDescriptor> {
        self.selection
            .active_name()
            .and_then(|name| self.catalog.find(name))
    }

    /// Pinned apps in sidebar order.
    pub fn pinned(&self) -> Vec<&'static AppDescriptor> {
        self.selection
            .pinned_names()
            .iter()
            .filter_map(|name| self.catalog.find(name))
            .collect()
    }

    pub fn selection(&self) -> &PinnedSelection {
        &self.selection
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the storage backend.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    /// Write the selection through, logging instead of failing.
    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            log::warn!("Failed to persist app shortcuts: {e}");
        }
    }

    fn try_persist(&self) -> StorageResult<()> {
        write_json(
            &*self.storage,
            PINNED_APPS_KEY,
            &self.selection.pinned_names,
        )?;
        match &self.selection.active_name {
            Some(name) => self.storage.set(ACTIVE_APP_KEY, name),
            None => self.storage.remove(ACTIVE_APP_KEY),
        }
    }
}
