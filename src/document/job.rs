//! Job document wrapper
//!
//! Owns a decoded job dictionary and gates encoding on validation: a job
//! that fails validation is never written back out. Decoding bytes into a
//! nested mapping is the serializer's concern; the validation engine only
//! ever sees decoded values.

use std::io::{Read, Write};

use crate::launchd;
use crate::validator::{ValidationResult, Warning};

use super::errors::{DocumentError, DocumentResult};
use super::value::{Dict, Value};

/// A decoded launchd job property list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    data: Dict,
}

impl Job {
    /// Wraps an already-decoded dictionary without validating it.
    pub fn new(data: Dict) -> Self {
        Self { data }
    }

    /// Wraps a decoded value, which must be a dictionary.
    ///
    /// # Errors
    ///
    /// Fails if the value is anything other than a dictionary.
    pub fn from_value(value: Value) -> DocumentResult<Self> {
        match value {
            Value::Dict(data) => Ok(Self { data }),
            other => Err(DocumentError::NotADictionary(other.type_name())),
        }
    }

    /// Decodes a job from JSON text and validates it.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, a non-dictionary top level, or a document
    /// that violates the launchd schema.
    pub fn from_json(text: &str) -> DocumentResult<(Self, Vec<Warning>)> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_decoded(value)
    }

    /// Decodes a job from a reader and validates it.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Job::from_json`].
    pub fn from_reader(reader: impl Read) -> DocumentResult<(Self, Vec<Warning>)> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_decoded(value)
    }

    fn from_decoded(value: Value) -> DocumentResult<(Self, Vec<Warning>)> {
        let job = Self::from_value(value)?;
        let warnings = job.validate()?;
        Ok((job, warnings))
    }

    /// Validates against the launchd job schema.
    ///
    /// # Errors
    ///
    /// Fails with the first schema violation.
    pub fn validate(&self) -> ValidationResult<Vec<Warning>> {
        launchd::validate_job(&self.data)
    }

    /// Encodes to JSON text, validating first.
    ///
    /// # Errors
    ///
    /// Fails if the job no longer validates; an invalid job is never
    /// encoded.
    pub fn to_json(&self) -> DocumentResult<String> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(&self.data)?)
    }

    /// Writes the job to a writer as JSON, validating first.
    ///
    /// # Errors
    ///
    /// Fails if the job no longer validates or the writer fails.
    pub fn write_to(&self, mut writer: impl Write) -> DocumentResult<()> {
        self.validate()?;
        serde_json::to_writer_pretty(&mut writer, &self.data)?;
        Ok(())
    }

    /// Read-only view of the underlying dictionary.
    pub fn data(&self) -> &Dict {
        &self.data
    }

    /// Looks up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Sets a top-level key. The change is checked at the next validation.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }

    /// Removes a top-level key.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }
}
