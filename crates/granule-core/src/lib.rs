//! Granule Core Library
//!
//! Platform-agnostic state for the Granule CRM dashboard: the sidebar app
//! shortcuts and their persistence, the demo session, and CRM records.

pub mod catalog;
pub mod crm;
pub mod opener;
pub mod selection;
pub mod session;
pub mod shortcuts;
pub mod storage;

pub use catalog::{AppDescriptor, CATALOG, Catalog};
pub use crm::{CrmBook, CrmError, DashboardSummary, RecordBook};
pub use opener::{ExternalOpener, OpenError, RecordingOpener};
pub use selection::PinnedSelection;
pub use session::{AuthError, Profile, Role, Session};
pub use shortcuts::{AppShortcutStore, LaunchOutcome};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError, StorageResult};
