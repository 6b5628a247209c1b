//! Validation engine for job property lists
//!
//! Composable validators: primitives enforce one constraint each, chains
//! run primitives in a fixed order, and the mapping validator applies a
//! schema table to a whole document, recursing into nested dictionaries.
//!
//! # Design Principles
//!
//! - One error per call: fail fast on the first violation
//! - Every failure names the offending key and its full path
//! - Deprecated/private keys warn, never fail
//! - Pure and synchronous: no I/O, no mutation of inputs
//! - Tables are built once and shared read-only across calls

mod chain;
mod errors;
mod mapping;
mod primitives;
mod rules;
mod warnings;

pub use chain::{Check, ValidatorChain};
pub use errors::{ErrorKind, ValidationError, ValidationResult};
pub use mapping::MappingValidator;
pub use primitives::{EnumValidator, KeyMatchValidator, RangeValidator, TypeValidator};
pub use rules::{KeySpec, Rule, SchemaTable};
pub use warnings::{Warning, WarningKind};
