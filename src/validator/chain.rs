//! Chained validators
//!
//! A chain holds an ordered list of primitive checks and runs them in
//! sequence. Each link adds exactly one constraint; the first failure
//! propagates verbatim and later links never run.

use crate::document::Value;

use super::errors::ValidationResult;
use super::primitives::{EnumValidator, KeyMatchValidator, RangeValidator, TypeValidator};

/// A single link in a validator chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// Kind membership
    Type(TypeValidator),
    /// Inclusive integer range
    Range(RangeValidator),
    /// Closed string set
    Enum(EnumValidator),
    /// Fixed key name
    Key(KeyMatchValidator),
}

impl Check {
    fn validate(&self, key: &str, value: &Value) -> ValidationResult<()> {
        match self {
            Check::Type(validator) => validator.validate(key, value),
            Check::Range(validator) => validator.validate(key, value),
            Check::Enum(validator) => validator.validate(key, value),
            Check::Key(validator) => validator.validate(key, value),
        }
    }
}

impl From<TypeValidator> for Check {
    fn from(validator: TypeValidator) -> Self {
        Check::Type(validator)
    }
}

impl From<RangeValidator> for Check {
    fn from(validator: RangeValidator) -> Self {
        Check::Range(validator)
    }
}

impl From<EnumValidator> for Check {
    fn from(validator: EnumValidator) -> Self {
        Check::Enum(validator)
    }
}

impl From<KeyMatchValidator> for Check {
    fn from(validator: KeyMatchValidator) -> Self {
        Check::Key(validator)
    }
}

/// Ordered sequence of primitive checks with first-failure short-circuit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidatorChain {
    checks: Vec<Check>,
}

impl ValidatorChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a check to the end of the chain.
    pub fn then(mut self, check: impl Into<Check>) -> Self {
        self.checks.push(check.into());
        self
    }

    /// Runs every check in order, stopping at the first failure.
    pub fn validate(&self, key: &str, value: &Value) -> ValidationResult<()> {
        for check in &self.checks {
            check.validate(key, value)?;
        }
        Ok(())
    }
}
