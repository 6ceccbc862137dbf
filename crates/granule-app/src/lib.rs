//! Granule Application
//!
//! The application shell: configuration, the platform opener, and the
//! workspace that decides what the dashboard renders.

mod config;
mod workspace;

#[cfg(any(feature = "native", target_arch = "wasm32"))]
mod opener;

pub use config::AppConfig;
pub use workspace::{MainPane, Page, SidebarItem, Workspace};

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
pub use opener::SystemOpener;

#[cfg(target_arch = "wasm32")]
pub use opener::BrowserOpener;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
