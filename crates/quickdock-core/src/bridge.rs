//! Translation between the persisted target list and display-ready items.
//!
//! The engine never resolves application metadata itself; the host
//! supplies it through [`AppCatalog`]. Identifiers that no longer
//! resolve (the application was uninstalled) are carried through with
//! absent metadata — the persisted list is never pruned behind the
//! user's back.

use crate::target::TargetId;
use serde::{Deserialize, Serialize};

/// Application metadata supplied by the host's catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppEntry {
    pub id: TargetId,
    /// Human-readable application label.
    pub label: String,
    /// Icon name or path, in whatever scheme the host uses.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Source of application metadata and launchable candidates.
///
/// Implemented by the host. The engine performs a single lookup per
/// identifier per render and caches nothing.
pub trait AppCatalog {
    /// Metadata for one identifier, if it still resolves to an installed
    /// application.
    fn lookup(&self, id: &TargetId) -> Option<AppEntry>;

    /// The candidate set the user may pick from in the add flow.
    fn launchable(&self) -> Vec<AppEntry>;
}

/// Display-ready view of one list entry.
///
/// `label` and `icon` are absent when the catalog no longer resolves the
/// identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayItem {
    pub id: TargetId,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Capability of a rendered element to name the shortcut it removes on a
/// long-press.
///
/// Host widgets participating in the remove gesture implement this, so
/// the target behind an element is reachable without any runtime type
/// inspection.
pub trait RemovableShortcut {
    fn shortcut_id(&self) -> &TargetId;
}

impl RemovableShortcut for DisplayItem {
    fn shortcut_id(&self) -> &TargetId {
        &self.id
    }
}

/// Resolve a target list into display items, preserving list order.
pub fn display_items(targets: &[TargetId], catalog: &dyn AppCatalog) -> Vec<DisplayItem> {
    targets
        .iter()
        .map(|id| match catalog.lookup(id) {
            Some(entry) => DisplayItem {
                id: id.clone(),
                label: Some(entry.label),
                icon: entry.icon,
            },
            None => DisplayItem {
                id: id.clone(),
                label: None,
                icon: None,
            },
        })
        .collect()
}

/// Launchable candidates not already present in the list.
pub fn addable_entries(targets: &[TargetId], catalog: &dyn AppCatalog) -> Vec<AppEntry> {
    catalog
        .launchable()
        .into_iter()
        .filter(|entry| !targets.contains(&entry.id))
        .collect()
}
