//! launchlint - a strict, deterministic validator for launchd job property lists
//!
//! A decoded job document is validated against a hand-curated schema table:
//! known keys with required kinds, numeric ranges, enumerated values, nested
//! sub-schemas, and keys that validate but draw deprecation or private-API
//! warnings.

pub mod document;
pub mod launchd;
pub mod validator;
