//! Quickdock Core - Headless engine for persisted launcher shortcut targets.
//!
//! This crate manages a small, ordered, bounded list of shortcut targets
//! (opaque identifiers for installed applications) persisted as a single
//! delimited value in a key-value settings store. It owns the
//! persistence contract and the list invariants; rendering, picker
//! dialogs, gesture wiring, and application discovery belong to the
//! embedding host, which talks to the engine through [`Dock`] and the
//! [`AppCatalog`] seam.
//!
//! # Example
//!
//! ```rust,ignore
//! use quickdock_core::{Dock, FileStore, TargetId};
//!
//! fn main() -> quickdock_core::Result<()> {
//!     let store = FileStore::at_default_location()?;
//!     let mut dock = Dock::new(store);
//!
//!     dock.load()?;
//!     if dock.can_add() {
//!         dock.add(TargetId::new("com.vendor.mail")?)?;
//!     }
//!     for id in dock.targets()? {
//!         println!("{id}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod codec;
pub mod config;
pub mod dock;
pub mod error;
pub mod platform;
pub mod store;
pub mod target;

// Re-export commonly used types
pub use bridge::{
    addable_entries, display_items, AppCatalog, AppEntry, DisplayItem, RemovableShortcut,
};
pub use config::{DockConfig, PathsConfig};
pub use dock::Dock;
pub use error::{DockError, Result};
pub use store::{FileStore, MemoryStore, TargetStore};
pub use target::TargetId;
