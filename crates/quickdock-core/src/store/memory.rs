//! In-process settings store.

use crate::error::{DockError, Result};
use crate::store::TargetStore;
use std::sync::Mutex;

/// Store adapter holding the value in memory.
///
/// For hosts that keep settings elsewhere and for tests. The value is
/// mutex-guarded so one store can be shared across host plumbing.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }

    /// Current stored value, if any.
    pub fn value(&self) -> Option<String> {
        self.value.lock().ok().and_then(|guard| guard.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>> {
        self.value.lock().map_err(|_| DockError::Io {
            message: "settings store lock poisoned".to_string(),
            path: None,
            source: None,
        })
    }
}

impl TargetStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.lock()?.clone())
    }

    fn write(&self, value: &str) -> Result<()> {
        *self.lock()? = Some(value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_absent() {
        let store = MemoryStore::new();
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_seeded_value() {
        let store = MemoryStore::with_value("com.a|com.b");
        assert_eq!(store.read().unwrap(), Some("com.a|com.b".to_string()));
    }

    #[test]
    fn test_write_replaces_value() {
        let store = MemoryStore::new();
        store.write("com.a").unwrap();
        store.write("").unwrap();

        // Written empty string is present, not absent
        assert_eq!(store.read().unwrap(), Some(String::new()));
        assert_eq!(store.value(), Some(String::new()));
    }
}
