//! Warning channel for valid-but-discouraged keys
//!
//! Deprecated and private keys validate normally; using one surfaces a
//! warning instead of an error, independent of pass/fail outcome. Warnings
//! are collected into an ordered list rather than written to a stream, so
//! the engine stays free of side effects.

use std::fmt;

/// Why a key draws a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Key is documented but deprecated
    Deprecated,
    /// Key is undocumented and private
    Private,
}

/// A non-fatal diagnostic for one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    key_path: String,
    kind: WarningKind,
}

impl Warning {
    /// Warning for a deprecated key.
    pub fn deprecated(key_path: impl Into<String>) -> Self {
        Self {
            key_path: key_path.into(),
            kind: WarningKind::Deprecated,
        }
    }

    /// Warning for an undocumented, private key.
    pub fn private_key(key_path: impl Into<String>) -> Self {
        Self {
            key_path: key_path.into(),
            kind: WarningKind::Private,
        }
    }

    /// Returns the full dotted path of the key.
    pub fn key_path(&self) -> &str {
        &self.key_path
    }

    /// Returns the warning kind.
    pub fn kind(&self) -> WarningKind {
        self.kind
    }

    /// Returns the human-readable message for this warning.
    pub fn message(&self) -> String {
        match self.kind {
            WarningKind::Deprecated => format!("'{}' has been deprecated", self.key_path),
            WarningKind::Private => {
                format!("'{}' is an undocumented, private key", self.key_path)
            }
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deprecated_message() {
        let warning = Warning::deprecated("OnDemand");
        assert_eq!(warning.kind(), WarningKind::Deprecated);
        assert_eq!(warning.message(), "'OnDemand' has been deprecated");
    }

    #[test]
    fn test_private_message_carries_nested_path() {
        let warning = Warning::private_key("MachServices.com.example.svc.HostSpecialPort");
        assert_eq!(warning.kind(), WarningKind::Private);
        assert!(warning.message().contains("undocumented, private"));
        assert!(warning.key_path().starts_with("MachServices."));
    }
}
