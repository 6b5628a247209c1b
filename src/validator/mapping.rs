//! Schema-driven mapping validator
//!
//! Walks a decoded document against a schema table: required keys first,
//! then every present key in deterministic order, dispatching on the rule
//! kind and recursing into nested dictionaries. Fails fast on the first
//! violation; collects warnings for deprecated and private keys.
//!
//! Validation is a pure function over immutable inputs: no I/O, no mutation
//! of the document or the table, so one table is safe to share across
//! threads and callers.

use crate::document::{Dict, Value};

use super::errors::{ValidationError, ValidationResult};
use super::primitives::{KeyMatchValidator, TypeValidator};
use super::rules::{Rule, SchemaTable};
use super::warnings::Warning;

/// Validator applying one schema table to whole documents.
pub struct MappingValidator<'a> {
    table: &'a SchemaTable,
    ignore_unknown: bool,
}

impl<'a> MappingValidator<'a> {
    /// Creates a validator over the given table.
    pub fn new(table: &'a SchemaTable) -> Self {
        Self {
            table,
            ignore_unknown: false,
        }
    }

    /// Accepts top-level keys outside the schema's key set instead of
    /// failing. Fixed-shape compound rules stay strict.
    pub fn ignore_unknown(mut self) -> Self {
        self.ignore_unknown = true;
        self
    }

    /// Validates a document, returning the collected warnings on success.
    ///
    /// # Errors
    ///
    /// Fails with the first violation encountered: missing required keys
    /// are reported before any per-key rule, then each present key is
    /// checked in deterministic document order.
    pub fn validate(&self, document: &Dict) -> ValidationResult<Vec<Warning>> {
        let mut warnings = Vec::new();
        self.validate_table(self.table, document, "", &mut warnings)?;
        Ok(warnings)
    }

    fn validate_table(
        &self,
        table: &SchemaTable,
        dict: &Dict,
        prefix: &str,
        warnings: &mut Vec<Warning>,
    ) -> ValidationResult<()> {
        // Required keys win over every other violation in the same mapping.
        for (key, spec) in table.iter() {
            if spec.is_required() && !dict.contains_key(key) {
                return Err(ValidationError::missing_required_key(make_path(prefix, key)));
            }
        }
        for group in table.one_of_groups() {
            if !group.iter().any(|key| dict.contains_key(key.as_str())) {
                return Err(ValidationError::missing_one_of(group).scoped_under(prefix));
            }
        }

        for (key, value) in dict {
            let label = make_path(prefix, key);
            let spec = match table.get(key) {
                Some(spec) => spec,
                None if self.ignore_unknown => continue,
                None => return Err(ValidationError::unknown_key(label)),
            };
            self.validate_rule(spec.rule(), &label, value, warnings)?;
            if spec.is_private() {
                warnings.push(Warning::private_key(&label));
            }
            if spec.is_deprecated() {
                warnings.push(Warning::deprecated(&label));
            }
        }
        Ok(())
    }

    fn validate_rule(
        &self,
        rule: &Rule,
        label: &str,
        value: &Value,
        warnings: &mut Vec<Warning>,
    ) -> ValidationResult<()> {
        match rule {
            Rule::Type(validator) => validator.validate(label, value),
            Rule::Range(validator) => validator.validate(label, value),
            Rule::Enum(validator) => validator.validate(label, value),
            Rule::Chain(chain) => chain.validate(label, value),
            Rule::ArrayOf(kind) => {
                let items = value.as_array().ok_or_else(|| {
                    ValidationError::type_mismatch(label, "array", value.type_name())
                })?;
                let element = TypeValidator::new(*kind);
                for (index, item) in items.iter().enumerate() {
                    element.validate(&element_path(label, index), item)?;
                }
                Ok(())
            }
            Rule::Dict(table) => {
                let dict = value.as_dict().ok_or_else(|| {
                    ValidationError::type_mismatch(label, "dictionary", value.type_name())
                })?;
                self.validate_table(table, dict, label, warnings)
            }
            Rule::DictOf(value_rule) => {
                let dict = value.as_dict().ok_or_else(|| {
                    ValidationError::type_mismatch(label, "dictionary", value.type_name())
                })?;
                for (key, item) in dict {
                    self.validate_rule(value_rule, &make_path(label, key), item, warnings)?;
                }
                Ok(())
            }
            Rule::ExactKey { key, value: value_rule } => {
                let dict = value.as_dict().ok_or_else(|| {
                    ValidationError::malformed_compound(
                        label,
                        format!("a dictionary containing exactly '{}'", key),
                        value.type_name(),
                    )
                })?;
                let matcher = KeyMatchValidator::new(key.as_str());
                for (sub_key, sub_value) in dict {
                    matcher
                        .validate(sub_key, sub_value)
                        .map_err(|err| err.scoped_under(label))?;
                    self.validate_rule(value_rule, &make_path(label, sub_key), sub_value, warnings)?;
                }
                if !dict.contains_key(key) {
                    return Err(ValidationError::missing_required_key(make_path(label, key)));
                }
                Ok(())
            }
            Rule::BoolOrDict(table) => match value {
                Value::Boolean(_) => Ok(()),
                Value::Dict(dict) => self.validate_table(table, dict, label, warnings),
                other => Err(ValidationError::malformed_compound(
                    label,
                    "a boolean or a dictionary",
                    other.type_name(),
                )),
            },
            Rule::DictOrArray(table) => match value {
                Value::Dict(dict) => self.validate_table(table, dict, label, warnings),
                Value::Array(items) => {
                    for (index, item) in items.iter().enumerate() {
                        let elem_label = element_path(label, index);
                        let dict = item.as_dict().ok_or_else(|| {
                            ValidationError::type_mismatch(
                                &elem_label,
                                "dictionary",
                                item.type_name(),
                            )
                        })?;
                        self.validate_table(table, dict, &elem_label, warnings)?;
                    }
                    Ok(())
                }
                other => Err(ValidationError::malformed_compound(
                    label,
                    "a dictionary or an array of dictionaries",
                    other.type_name(),
                )),
            },
            Rule::StringOrEnumArray(allowed) => match value {
                // The scalar form is any string; only array elements are
                // checked against the closed set.
                Value::String(_) => Ok(()),
                Value::Array(items) => {
                    for (index, item) in items.iter().enumerate() {
                        allowed.validate(&element_path(label, index), item)?;
                    }
                    Ok(())
                }
                other => Err(ValidationError::malformed_compound(
                    label,
                    "a string or an array of strings",
                    other.type_name(),
                )),
            },
            Rule::AnyDict => {
                if value.as_dict().is_some() {
                    Ok(())
                } else {
                    Err(ValidationError::type_mismatch(
                        label,
                        "dictionary",
                        value.type_name(),
                    ))
                }
            }
        }
    }
}

/// Joins a path prefix and a key into a dotted label.
fn make_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Labels one element of an array-valued key.
fn element_path(label: &str, index: usize) -> String {
    format!("{}[{}]", label, index)
}
