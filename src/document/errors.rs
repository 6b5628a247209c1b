//! # Document Errors
//!
//! Error types for decoding, wrapping, and encoding job documents.

use thiserror::Error;

use crate::validator::ValidationError;

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors from the document layer
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Document text is not decodable (malformed JSON, or a null or float,
    /// which the job data model cannot represent)
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),

    /// Top level of the document is not a dictionary
    #[error("top level of a job document must be a dictionary, got {0}")]
    NotADictionary(&'static str),

    /// Document decoded cleanly but violates the job schema
    #[error("{0}")]
    Invalid(#[from] ValidationError),
}
