//! The persisted-list manager.
//!
//! A [`Dock`] owns the canonical in-memory target list for one settings
//! key and keeps the backing store in lockstep: every mutation encodes
//! the successor list and writes it before the in-memory state is
//! committed, so a failed write leaves both sides exactly as they were.

use crate::codec;
use crate::config::DockConfig;
use crate::error::{DockError, Result};
use crate::store::TargetStore;
use crate::target::TargetId;
use tracing::debug;

/// Ordered, bounded collection of shortcut targets backed by a settings
/// store.
///
/// A dock starts uninitialized; call [`Dock::load`] before mutating —
/// mutations on an unloaded dock fail with [`DockError::NotLoaded`]
/// rather than operating on an implicit empty list. Callers serialize
/// access themselves (mutations take `&mut self`); the dock performs no
/// internal locking and no background work. `load` is also the only
/// resynchronization mechanism if the stored value changes out-of-band.
pub struct Dock<S> {
    store: S,
    /// `None` until the first successful load.
    targets: Option<Vec<TargetId>>,
    limit: usize,
}

impl<S: TargetStore> Dock<S> {
    /// Dock bound to `store` with the standard capacity
    /// ([`DockConfig::TARGET_LIMIT`]).
    pub fn new(store: S) -> Self {
        Self::with_limit(store, DockConfig::TARGET_LIMIT)
    }

    /// Dock with a custom capacity bound.
    pub fn with_limit(store: S, limit: usize) -> Self {
        Self {
            store,
            targets: None,
            limit,
        }
    }

    /// Read and decode the stored value, replacing the in-memory list.
    ///
    /// Valid in any state. The replacement is a single assignment, so no
    /// partial list is ever observable.
    pub fn load(&mut self) -> Result<&[TargetId]> {
        let raw = self.store.read()?;
        let decoded = codec::decode(raw.as_deref());
        debug!(count = decoded.len(), "Loaded shortcut targets");
        Ok(self.targets.insert(decoded))
    }

    /// True once `load` has succeeded at least once.
    pub fn is_loaded(&self) -> bool {
        self.targets.is_some()
    }

    /// True iff the list is loaded and below its capacity bound.
    pub fn can_add(&self) -> bool {
        match &self.targets {
            Some(list) => list.len() < self.limit,
            None => false,
        }
    }

    /// The current list, in persisted order.
    pub fn targets(&self) -> Result<&[TargetId]> {
        self.targets.as_deref().ok_or(DockError::NotLoaded)
    }

    pub fn contains(&self, id: &TargetId) -> bool {
        self.targets
            .as_ref()
            .is_some_and(|list| list.contains(id))
    }

    pub fn len(&self) -> usize {
        self.targets.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slots still available before the bound is hit.
    pub fn remaining_capacity(&self) -> usize {
        self.limit.saturating_sub(self.len())
    }

    /// Capacity bound of this dock.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Append a target and persist the new list.
    ///
    /// Fails with [`DockError::LimitReached`] or
    /// [`DockError::AlreadyPresent`] before any store I/O. If the write
    /// fails, the in-memory list is left exactly as before the call.
    pub fn add(&mut self, id: TargetId) -> Result<()> {
        let current = self.targets.as_mut().ok_or(DockError::NotLoaded)?;
        if current.len() >= self.limit {
            return Err(DockError::LimitReached { limit: self.limit });
        }
        if current.contains(&id) {
            return Err(DockError::AlreadyPresent(id.into_string()));
        }

        let mut next = current.clone();
        next.push(id.clone());
        self.store.write(&codec::encode(&next))?;

        debug!(target = %id, count = next.len(), "Added shortcut target");
        *current = next;
        Ok(())
    }

    /// Remove the first occurrence of a target and persist the new list.
    ///
    /// Fails with [`DockError::NotFound`] before any store I/O; a failed
    /// write leaves the in-memory list untouched.
    pub fn remove(&mut self, id: &TargetId) -> Result<()> {
        let current = self.targets.as_mut().ok_or(DockError::NotLoaded)?;
        let position = current
            .iter()
            .position(|t| t == id)
            .ok_or_else(|| DockError::NotFound(id.to_string()))?;

        let mut next = current.clone();
        next.remove(position);
        self.store.write(&codec::encode(&next))?;

        debug!(target = %id, count = next.len(), "Removed shortcut target");
        *current = next;
        Ok(())
    }

    /// Clear the list and persist the empty value.
    ///
    /// Atomic like `add`/`remove`: the empty value is written first and
    /// the in-memory list keeps its previous contents if the write
    /// fails.
    pub fn reset(&mut self) -> Result<()> {
        let current = self.targets.as_mut().ok_or(DockError::NotLoaded)?;
        self.store.write("")?;

        debug!(cleared = current.len(), "Reset shortcut targets");
        current.clear();
        Ok(())
    }

    /// The underlying store adapter.
    pub fn store(&self) -> &S {
        &self.store
    }
}
