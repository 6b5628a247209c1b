//! Document model for job property lists
//!
//! A document is a nested mapping of string keys to a closed set of value
//! kinds. Decoding bytes to a document and encoding a document back to
//! bytes are serializer concerns (serde / serde_json); validation operates
//! only on decoded values.

mod errors;
mod job;
mod value;

pub use errors::{DocumentError, DocumentResult};
pub use job::Job;
pub use value::{Dict, Value, ValueKind};
