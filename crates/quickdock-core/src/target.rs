//! Validated shortcut target identifiers.

use crate::config::DockConfig;
use crate::error::{DockError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque token naming a shortcut target, typically an application
/// package name such as `com.vendor.mail`.
///
/// Construction enforces the two properties the persisted format relies
/// on: the token is non-empty and contains no delimiter character.
/// Equality is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    /// Validate and wrap a raw identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DockError::InvalidTarget {
                reason: "identifier is empty".to_string(),
            });
        }
        if raw.contains(DockConfig::DELIMITER) {
            return Err(DockError::InvalidTarget {
                reason: format!("identifier contains '{}': {}", DockConfig::DELIMITER, raw),
            });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TargetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for TargetId {
    type Err = DockError;

    fn from_str(s: &str) -> Result<Self> {
        TargetId::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifier() {
        let id = TargetId::new("com.vendor.mail").unwrap();
        assert_eq!(id.as_str(), "com.vendor.mail");
        assert_eq!(id.to_string(), "com.vendor.mail");
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let err = TargetId::new("").unwrap_err();
        assert!(matches!(err, DockError::InvalidTarget { .. }));
    }

    #[test]
    fn test_delimiter_rejected() {
        let err = TargetId::new("com.a|com.b").unwrap_err();
        assert!(matches!(err, DockError::InvalidTarget { .. }));
    }

    #[test]
    fn test_from_str_roundtrip() {
        let id: TargetId = "com.vendor.files".parse().unwrap();
        let again: TargetId = id.as_str().parse().unwrap();
        assert_eq!(id, again);
    }
}
