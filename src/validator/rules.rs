//! Schema rules and tables
//!
//! A schema table maps key names to rules: plain kinds, ranges, enums,
//! chains, and the compound shapes that depend on the value's kind. Tables
//! are built once by the dialect owner and shared read-only across
//! validation calls; their key set never changes during validation.

use std::collections::BTreeMap;

use crate::document::ValueKind;

use super::chain::ValidatorChain;
use super::primitives::{EnumValidator, RangeValidator, TypeValidator};

/// Validation rule for one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value kind membership
    Type(TypeValidator),
    /// Integer confined to an inclusive range
    Range(RangeValidator),
    /// String drawn from a closed set
    Enum(EnumValidator),
    /// Ordered primitive checks, first failure wins
    Chain(ValidatorChain),
    /// Array whose elements are all of one kind
    ArrayOf(ValueKind),
    /// Nested dictionary validated against its own table
    Dict(SchemaTable),
    /// Dictionary with arbitrary keys whose values all satisfy one rule
    DictOf(Box<Rule>),
    /// Dictionary permitted to contain exactly one fixed key
    ExactKey {
        /// The single permitted key
        key: String,
        /// Rule for that key's value
        value: Box<Rule>,
    },
    /// Plain boolean, or a dictionary validated against the table
    BoolOrDict(SchemaTable),
    /// Single dictionary, or an array of dictionaries, each against the table
    DictOrArray(SchemaTable),
    /// Scalar string accepted as-is, or an array of enum-checked strings
    StringOrEnumArray(EnumValidator),
    /// Dictionary accepted without inspecting its contents
    AnyDict,
}

impl Rule {
    /// Plain boolean value.
    pub fn boolean() -> Self {
        Rule::Type(TypeValidator::new(ValueKind::Boolean))
    }

    /// Plain integer value.
    pub fn integer() -> Self {
        Rule::Type(TypeValidator::new(ValueKind::Integer))
    }

    /// Plain string value.
    pub fn string() -> Self {
        Rule::Type(TypeValidator::new(ValueKind::String))
    }

    /// Array whose elements are all strings.
    pub fn string_array() -> Self {
        Rule::ArrayOf(ValueKind::String)
    }

    /// Integer confined to the inclusive range `[minimum, maximum]`.
    pub fn integer_in(minimum: i64, maximum: i64) -> Self {
        Rule::Chain(
            ValidatorChain::new()
                .then(TypeValidator::new(ValueKind::Integer))
                .then(RangeValidator::new(Some(minimum), Some(maximum))),
        )
    }

    /// String drawn from a closed set.
    pub fn one_of(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Rule::Enum(EnumValidator::new(values))
    }
}

/// Per-key schema entry: the rule, requiredness, and advisory markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    rule: Rule,
    required: bool,
    deprecated: bool,
    private: bool,
}

impl KeySpec {
    /// Optional key with the given rule.
    pub fn of(rule: Rule) -> Self {
        Self {
            rule,
            required: false,
            deprecated: false,
            private: false,
        }
    }

    /// Required key with the given rule.
    pub fn required(rule: Rule) -> Self {
        Self {
            rule,
            required: true,
            deprecated: false,
            private: false,
        }
    }

    /// Marks the key deprecated: valid, but surfaced as a warning.
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Marks the key undocumented/private: valid, but surfaced as a warning.
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    /// Returns the rule for this key.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Returns whether the key must be present.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns whether the key is deprecated.
    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Returns whether the key is private.
    pub fn is_private(&self) -> bool {
        self.private
    }
}

/// Immutable mapping from key name to rule for one configuration dialect.
///
/// Required keys are a flag on their spec, so the required set is a subset
/// of the key set by construction. One-of groups express "at least one of
/// these keys must be present".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaTable {
    keys: BTreeMap<String, KeySpec>,
    one_of_groups: Vec<Vec<String>>,
}

impl SchemaTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a key. Replaces any previous declaration of the same name.
    pub fn insert(&mut self, key: impl Into<String>, spec: KeySpec) {
        self.keys.insert(key.into(), spec);
    }

    /// Requires at least one of the named keys to be present.
    ///
    /// # Panics
    ///
    /// Panics if the group is empty or names a key not declared in the
    /// table: a misbuilt group is a programmer error caught at schema
    /// construction.
    pub fn require_one_of(&mut self, keys: impl IntoIterator<Item = impl Into<String>>) {
        let group: Vec<String> = keys.into_iter().map(Into::into).collect();
        assert!(!group.is_empty(), "a one-of group needs at least one key");
        for key in &group {
            assert!(
                self.keys.contains_key(key),
                "one-of group names undeclared key '{}'",
                key
            );
        }
        self.one_of_groups.push(group);
    }

    /// Looks up the spec for a key.
    pub fn get(&self, key: &str) -> Option<&KeySpec> {
        self.keys.get(key)
    }

    /// Returns whether the key is declared.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Iterates declared keys in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeySpec)> {
        self.keys.iter().map(|(key, spec)| (key.as_str(), spec))
    }

    /// Returns the one-of groups.
    pub fn one_of_groups(&self) -> &[Vec<String>] {
        &self.one_of_groups
    }

    /// Returns the number of declared keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns whether the table declares no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_constructors() {
        assert!(matches!(Rule::boolean(), Rule::Type(_)));
        assert!(matches!(Rule::string_array(), Rule::ArrayOf(ValueKind::String)));
        assert!(matches!(Rule::integer_in(-20, 20), Rule::Chain(_)));
        assert!(matches!(Rule::one_of(["a", "b"]), Rule::Enum(_)));
    }

    #[test]
    fn test_key_spec_markers() {
        let spec = KeySpec::of(Rule::boolean()).deprecated().private();
        assert!(!spec.is_required());
        assert!(spec.is_deprecated());
        assert!(spec.is_private());

        let spec = KeySpec::required(Rule::string());
        assert!(spec.is_required());
        assert!(!spec.is_deprecated());
    }

    #[test]
    fn test_table_lookup() {
        let mut table = SchemaTable::new();
        table.insert("Label", KeySpec::required(Rule::string()));
        table.insert("Nice", KeySpec::of(Rule::integer_in(-20, 20)));

        assert!(table.contains("Label"));
        assert!(!table.contains("Bogus"));
        assert!(table.get("Label").unwrap().is_required());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_table_iteration_is_deterministic() {
        let mut table = SchemaTable::new();
        table.insert("Zebra", KeySpec::of(Rule::boolean()));
        table.insert("Apple", KeySpec::of(Rule::boolean()));
        table.insert("Mango", KeySpec::of(Rule::boolean()));

        let keys: Vec<&str> = table.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["Apple", "Mango", "Zebra"]);
    }

    #[test]
    fn test_require_one_of_records_group() {
        let mut table = SchemaTable::new();
        table.insert("Program", KeySpec::of(Rule::string()));
        table.insert("ProgramArguments", KeySpec::of(Rule::string_array()));
        table.require_one_of(["Program", "ProgramArguments"]);

        assert_eq!(table.one_of_groups().len(), 1);
        assert_eq!(table.one_of_groups()[0].len(), 2);
    }

    #[test]
    #[should_panic]
    fn test_require_one_of_undeclared_key_panics() {
        let mut table = SchemaTable::new();
        table.insert("Program", KeySpec::of(Rule::string()));
        table.require_one_of(["Program", "Bogus"]);
    }
}
