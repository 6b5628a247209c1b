//! Primitive validators
//!
//! Atomic, stateless-per-call checks with a uniform contract:
//! `validate(key, value)` succeeds or fails with an error naming the key,
//! the expected constraint, and what was actually found. Callers in nested
//! contexts pass the full dotted label as `key` so failures stay
//! attributable.

use crate::document::{Value, ValueKind};

use super::errors::{ValidationError, ValidationResult};

/// Checks that a value belongs to a set of accepted kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeValidator {
    accepted: Vec<ValueKind>,
}

impl TypeValidator {
    /// Validator accepting a single kind.
    pub fn new(kind: ValueKind) -> Self {
        Self {
            accepted: vec![kind],
        }
    }

    /// Validator accepting any of the given kinds.
    ///
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn any_of(kinds: impl IntoIterator<Item = ValueKind>) -> Self {
        let accepted: Vec<ValueKind> = kinds.into_iter().collect();
        assert!(
            !accepted.is_empty(),
            "a type validator needs at least one accepted kind"
        );
        Self { accepted }
    }

    /// Returns the expected-kind description for error messages.
    pub fn expected(&self) -> String {
        let names: Vec<&str> = self.accepted.iter().map(|k| k.type_name()).collect();
        names.join(" or ")
    }

    /// Validates that `value` is one of the accepted kinds.
    pub fn validate(&self, key: &str, value: &Value) -> ValidationResult<()> {
        if self.accepted.contains(&value.kind()) {
            Ok(())
        } else {
            Err(ValidationError::type_mismatch(
                key,
                self.expected(),
                value.type_name(),
            ))
        }
    }
}

/// Checks that an integer lies inside an inclusive range.
///
/// Either bound may be unset, meaning unbounded on that side. Boundary
/// values pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeValidator {
    minimum: Option<i64>,
    maximum: Option<i64>,
}

impl RangeValidator {
    /// Validator for the inclusive range `[minimum, maximum]`.
    ///
    /// # Panics
    ///
    /// Panics if both bounds are set and `minimum >= maximum`: a misbuilt
    /// range is a programmer error caught at schema construction, not at
    /// validation time.
    pub fn new(minimum: Option<i64>, maximum: Option<i64>) -> Self {
        if let (Some(lo), Some(hi)) = (minimum, maximum) {
            assert!(
                lo < hi,
                "range minimum {} must be strictly less than maximum {}",
                lo,
                hi
            );
        }
        Self { minimum, maximum }
    }

    fn expected(&self) -> String {
        match (self.minimum, self.maximum) {
            (Some(lo), Some(hi)) => format!("an integer in [{}, {}]", lo, hi),
            (Some(lo), None) => format!("an integer of at least {}", lo),
            (None, Some(hi)) => format!("an integer of at most {}", hi),
            (None, None) => "an integer".to_string(),
        }
    }

    /// Validates that `value` is an integer inside the range.
    pub fn validate(&self, key: &str, value: &Value) -> ValidationResult<()> {
        let n = match value.as_integer() {
            Some(n) => n,
            None => {
                return Err(ValidationError::type_mismatch(
                    key,
                    "integer",
                    value.type_name(),
                ))
            }
        };
        if let Some(lo) = self.minimum {
            if n < lo {
                return Err(ValidationError::range_violation(key, self.expected(), n));
            }
        }
        if let Some(hi) = self.maximum {
            if n > hi {
                return Err(ValidationError::range_violation(key, self.expected(), n));
            }
        }
        Ok(())
    }
}

/// Checks that a string belongs to a closed set of allowed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValidator {
    allowed: Vec<String>,
}

impl EnumValidator {
    /// Validator for the given closed set.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty.
    pub fn new(allowed: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        assert!(
            !allowed.is_empty(),
            "an enum validator needs at least one allowed value"
        );
        Self { allowed }
    }

    fn expected(&self) -> String {
        format!("one of [{}]", self.allowed.join(", "))
    }

    /// Validates that `value` is a string in the allowed set.
    pub fn validate(&self, key: &str, value: &Value) -> ValidationResult<()> {
        let s = match value.as_str() {
            Some(s) => s,
            None => {
                return Err(ValidationError::type_mismatch(
                    key,
                    "string",
                    value.type_name(),
                ))
            }
        };
        if self.allowed.iter().any(|allowed| allowed == s) {
            Ok(())
        } else {
            Err(ValidationError::enum_violation(key, self.expected(), s))
        }
    }
}

/// Checks that the key under validation is one fixed name.
///
/// Only used inside fixed-shape compound rules where a single-key dictionary
/// is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatchValidator {
    expected: String,
}

impl KeyMatchValidator {
    /// Validator matching exactly `expected`.
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Validates that `key` equals the expected name.
    pub fn validate(&self, key: &str, _value: &Value) -> ValidationResult<()> {
        if key == self.expected {
            Ok(())
        } else {
            Err(ValidationError::unexpected_key(key, &self.expected))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::ErrorKind;

    fn string(s: &str) -> Value {
        Value::String(s.to_string())
    }

    #[test]
    fn test_type_validator_accepts_matching_kind() {
        let validator = TypeValidator::new(ValueKind::Boolean);
        assert!(validator.validate("Disabled", &Value::Boolean(true)).is_ok());
    }

    #[test]
    fn test_type_validator_rejects_other_kinds() {
        let validator = TypeValidator::new(ValueKind::String);
        let err = validator.validate("Label", &Value::Integer(42)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.key_path(), "Label");
        assert_eq!(err.actual(), "integer");
    }

    #[test]
    fn test_integer_validator_rejects_boolean() {
        let validator = TypeValidator::new(ValueKind::Integer);
        let err = validator
            .validate("Umask", &Value::Boolean(true))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.actual(), "boolean");
    }

    #[test]
    fn test_type_validator_any_of() {
        let validator = TypeValidator::any_of([ValueKind::String, ValueKind::Boolean]);
        assert!(validator.validate("k", &string("x")).is_ok());
        assert!(validator.validate("k", &Value::Boolean(false)).is_ok());
        let err = validator.validate("k", &Value::Integer(1)).unwrap_err();
        assert!(err.expected().contains("string"));
        assert!(err.expected().contains("boolean"));
    }

    #[test]
    #[should_panic]
    fn test_type_validator_empty_set_panics() {
        let _ = TypeValidator::any_of([]);
    }

    #[test]
    fn test_range_boundaries_pass() {
        let validator = RangeValidator::new(Some(-20), Some(20));
        assert!(validator.validate("Nice", &Value::Integer(-20)).is_ok());
        assert!(validator.validate("Nice", &Value::Integer(0)).is_ok());
        assert!(validator.validate("Nice", &Value::Integer(20)).is_ok());
    }

    #[test]
    fn test_range_violations() {
        let validator = RangeValidator::new(Some(-20), Some(20));
        let err = validator.validate("Nice", &Value::Integer(21)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RangeViolation);
        assert_eq!(err.actual(), "21");

        let err = validator.validate("Nice", &Value::Integer(-21)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RangeViolation);
    }

    #[test]
    fn test_range_unset_bound_is_unbounded() {
        let validator = RangeValidator::new(Some(0), None);
        assert!(validator
            .validate("StartInterval", &Value::Integer(i64::MAX))
            .is_ok());
        assert!(validator
            .validate("StartInterval", &Value::Integer(-1))
            .is_err());

        let validator = RangeValidator::new(None, Some(100));
        assert!(validator
            .validate("TimeOut", &Value::Integer(i64::MIN))
            .is_ok());
    }

    #[test]
    fn test_range_rejects_non_integer() {
        let validator = RangeValidator::new(Some(0), Some(10));
        let err = validator.validate("TimeOut", &string("5")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    #[should_panic]
    fn test_range_inverted_bounds_panic() {
        let _ = RangeValidator::new(Some(20), Some(-20));
    }

    #[test]
    #[should_panic]
    fn test_range_equal_bounds_panic() {
        let _ = RangeValidator::new(Some(5), Some(5));
    }

    #[test]
    fn test_enum_membership() {
        let validator = EnumValidator::new(["Aqua", "StandardIO", "Background", "LoginWindow"]);
        assert!(validator
            .validate("LimitLoadToSessionType", &string("Aqua"))
            .is_ok());

        let err = validator
            .validate("LimitLoadToSessionType", &string("Fullscreen"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EnumViolation);
        assert!(err.expected().contains("Aqua"));
        assert_eq!(err.actual(), "'Fullscreen'");
    }

    #[test]
    fn test_enum_rejects_non_string() {
        let validator = EnumValidator::new(["Interactive"]);
        let err = validator
            .validate("POSIXSpawnType", &Value::Integer(3))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_key_match() {
        let validator = KeyMatchValidator::new("Wait");
        assert!(validator.validate("Wait", &Value::Boolean(true)).is_ok());

        let err = validator
            .validate("Timeout", &Value::Boolean(true))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownKey);
        assert!(err.expected().contains("Wait"));
    }
}
