//! Persisted sidebar selection: pinned apps and the embedded one.

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};

/// Which apps are pinned to the sidebar and which one, if any, is shown inline.
///
/// Invariants (kept by [`AppShortcutStore`](crate::AppShortcutStore)):
/// `pinned_names` has no duplicates, and `active_name` is either `None` or a
/// pinned, embeddable app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedSelection {
    pub(crate) pinned_names: Vec<String>,
    pub(crate) active_name: Option<String>,
}

impl PinnedSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from raw persisted parts, unchecked.
    ///
    /// Call [`normalize`](Self::normalize) before trusting the result.
    pub fn from_parts(pinned_names: Vec<String>, active_name: Option<String>) -> Self {
        Self {
            pinned_names,
            active_name,
        }
    }

    /// Pinned names in insertion order.
    pub fn pinned_names(&self) -> &[String] {
        &self.pinned_names
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active_name.as_deref()
    }

    pub fn is_pinned(&self, name: &str) -> bool {
        self.pinned_names.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.pinned_names.is_empty() && self.active_name.is_none()
    }

    /// Repair state read from storage against `catalog`.
    ///
    /// Drops names the catalog no longer knows and repeated names (first
    /// occurrence wins), then clears the active name unless it is pinned and
    /// embeddable. Returns how many entries were dropped or cleared.
    pub fn normalize(&mut self, catalog: &Catalog) -> usize {
        let before = self.pinned_names.len();
        let mut kept: Vec<String> = Vec::with_capacity(before);
        for name in self.pinned_names.drain(..) {
            if catalog.contains(&name) && !kept.contains(&name) {
                kept.push(name);
            }
        }
        let mut dropped = before - kept.len();
        self.pinned_names = kept;

        let active_ok = self.active_name.as_deref().is_none_or(|name| {
            self.pinned_names.iter().any(|n| n == name)
                && catalog.find(name).is_some_and(|app| app.embeddable)
        });
        if !active_ok {
            self.active_name = None;
            dropped += 1;
        }

        dropped
    }
}
