//! Validation error types
//!
//! One error per validation call: the engine fails fast on the first
//! violation and reports the offending key with its full path, the expected
//! constraint, and what was actually found.

use std::fmt;

/// Error kinds raised during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A key declared required is absent
    MissingRequiredKey,
    /// A key is not in the schema's key set
    UnknownKey,
    /// A value has the wrong kind
    TypeMismatch,
    /// An integer lies outside its permitted range
    RangeViolation,
    /// A string is not in its permitted set
    EnumViolation,
    /// A compound rule received a value of the wrong shape
    MalformedCompoundValue,
}

impl ErrorKind {
    /// Returns the stable code string for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::MissingRequiredKey => "MISSING_REQUIRED_KEY",
            ErrorKind::UnknownKey => "UNKNOWN_KEY",
            ErrorKind::TypeMismatch => "TYPE_MISMATCH",
            ErrorKind::RangeViolation => "RANGE_VIOLATION",
            ErrorKind::EnumViolation => "ENUM_VIOLATION",
            ErrorKind::MalformedCompoundValue => "MALFORMED_COMPOUND_VALUE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single validation failure.
///
/// `key_path` is the full dotted path of the offending key, with array
/// elements labeled by index (`StartCalendarInterval[1].Hour`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ErrorKind,
    key_path: String,
    expected: String,
    actual: String,
}

impl ValidationError {
    /// Create a missing required key error.
    pub fn missing_required_key(key_path: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::MissingRequiredKey,
            key_path: key_path.into(),
            expected: "key to be present".into(),
            actual: "missing".into(),
        }
    }

    /// Create an error for a group of keys of which at least one must be present.
    pub fn missing_one_of(keys: &[String]) -> Self {
        Self {
            kind: ErrorKind::MissingRequiredKey,
            key_path: keys.join(" | "),
            expected: format!("at least one of [{}]", keys.join(", ")),
            actual: "all missing".into(),
        }
    }

    /// Create an unknown key error.
    pub fn unknown_key(key_path: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::UnknownKey,
            key_path: key_path.into(),
            expected: "a key declared in the schema".into(),
            actual: "unknown key".into(),
        }
    }

    /// Create an unknown key error for a shape permitting one fixed key.
    pub fn unexpected_key(key_path: impl Into<String>, expected_key: &str) -> Self {
        let key_path = key_path.into();
        let actual = format!("'{}'", key_path);
        Self {
            kind: ErrorKind::UnknownKey,
            key_path,
            expected: format!("the key '{}'", expected_key),
            actual,
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(
        key_path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            kind: ErrorKind::TypeMismatch,
            key_path: key_path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a range violation error.
    pub fn range_violation(
        key_path: impl Into<String>,
        expected: impl Into<String>,
        value: i64,
    ) -> Self {
        Self {
            kind: ErrorKind::RangeViolation,
            key_path: key_path.into(),
            expected: expected.into(),
            actual: value.to_string(),
        }
    }

    /// Create an enum violation error.
    pub fn enum_violation(
        key_path: impl Into<String>,
        expected: impl Into<String>,
        value: &str,
    ) -> Self {
        Self {
            kind: ErrorKind::EnumViolation,
            key_path: key_path.into(),
            expected: expected.into(),
            actual: format!("'{}'", value),
        }
    }

    /// Create a malformed compound value error.
    pub fn malformed_compound(
        key_path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            kind: ErrorKind::MalformedCompoundValue,
            key_path: key_path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Re-attributes this error under an enclosing key.
    ///
    /// Used where a child check only knows its own key name; an empty prefix
    /// leaves the path unchanged.
    pub fn scoped_under(mut self, prefix: &str) -> Self {
        if !prefix.is_empty() {
            self.key_path = format!("{}.{}", prefix, self.key_path);
        }
        self
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the full dotted path of the offending key.
    pub fn key_path(&self) -> &str {
        &self.key_path
    }

    /// Returns the leaf key name: the path tail without any element index.
    pub fn key(&self) -> &str {
        let tail = self.key_path.rsplit('.').next().unwrap_or(&self.key_path);
        tail.split('[').next().unwrap_or(tail)
    }

    /// Returns the expected constraint description.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Returns the actual value or type found.
    pub fn actual(&self) -> &str {
        &self.actual
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] key '{}': expected {}, got {}",
            self.kind.code(),
            self.key_path,
            self.expected,
            self.actual
        )
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorKind::MissingRequiredKey.code(), "MISSING_REQUIRED_KEY");
        assert_eq!(ErrorKind::UnknownKey.code(), "UNKNOWN_KEY");
        assert_eq!(ErrorKind::TypeMismatch.code(), "TYPE_MISMATCH");
        assert_eq!(ErrorKind::RangeViolation.code(), "RANGE_VIOLATION");
        assert_eq!(ErrorKind::EnumViolation.code(), "ENUM_VIOLATION");
        assert_eq!(
            ErrorKind::MalformedCompoundValue.code(),
            "MALFORMED_COMPOUND_VALUE"
        );
    }

    #[test]
    fn test_scoped_under_prepends_prefix() {
        let err = ValidationError::unknown_key("Bogus").scoped_under("KeepAlive");
        assert_eq!(err.key_path(), "KeepAlive.Bogus");
        assert_eq!(err.key(), "Bogus");
    }

    #[test]
    fn test_scoped_under_empty_prefix_is_identity() {
        let err = ValidationError::unknown_key("Bogus").scoped_under("");
        assert_eq!(err.key_path(), "Bogus");
    }

    #[test]
    fn test_leaf_key_strips_element_index() {
        let err = ValidationError::type_mismatch("ProgramArguments[1]", "string", "integer");
        assert_eq!(err.key(), "ProgramArguments");

        let err = ValidationError::type_mismatch(
            "StartCalendarInterval[1].Hour",
            "integer",
            "string",
        );
        assert_eq!(err.key(), "Hour");
    }

    #[test]
    fn test_display_names_key_and_constraint() {
        let err = ValidationError::type_mismatch("Nice", "integer", "string");
        let display = format!("{}", err);
        assert!(display.contains("TYPE_MISMATCH"));
        assert!(display.contains("Nice"));
        assert!(display.contains("integer"));
        assert!(display.contains("string"));
    }

    #[test]
    fn test_missing_one_of_names_all_keys() {
        let keys = vec!["Program".to_string(), "ProgramArguments".to_string()];
        let err = ValidationError::missing_one_of(&keys);
        assert_eq!(err.kind(), ErrorKind::MissingRequiredKey);
        assert!(err.key_path().contains("Program"));
        assert!(err.key_path().contains("ProgramArguments"));
    }
}
