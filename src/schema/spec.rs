//! Per-field validation specifications.
//!
//! A specification is declared in YAML as a mapping with a `type` key and
//! optional constraints:
//!
//! ```yaml
//! layout:   { type: string, enum: [essay] }
//! excerpt:  { type: string, min_length: 50, max_length: 300 }
//! author:   { type: string, pattern: "^@" }
//! word_count: { type: integer, min: 500 }
//! tags:     { type: list, min_items: 2, max_items: 8, item_type: string }
//! related_repos: { type: list, item_type: string, item_pattern: "^organvm-" }
//! ```
//!
//! Only constraints that are present get checked. Patterns are anchored at
//! the start of the value but need not consume all of it.

use super::error::SchemaError;
use crate::{document::FieldValue, log};
use regex::Regex;
use serde::Deserialize;
use serde_yaml::Value as YamlValue;

// ============================================================================
// Pattern
// ============================================================================

/// A compiled constraint pattern that must match a prefix of the value.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(field: &str, source: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(&format!("^(?:{source})")).map_err(|err| {
            SchemaError::InvalidPattern {
                field: field.to_owned(),
                pattern: source.to_owned(),
                source: err,
            }
        })?;
        Ok(Self {
            source: source.to_owned(),
            regex,
        })
    }

    /// Pattern text as written in the schema.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches_prefix(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

// ============================================================================
// Field Specifications
// ============================================================================

/// Expected shape of one metadata field, selected by its `type`.
#[derive(Debug, Clone)]
pub enum FieldSpec {
    String(StringRules),
    Integer(IntegerRules),
    List(ListRules),
    /// Unknown or missing `type`: accepted without checks.
    Unchecked,
}

#[derive(Debug, Clone, Default)]
pub struct StringRules {
    /// Allowed values (`enum`).
    pub allowed: Option<Vec<FieldValue>>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
}

#[derive(Debug, Clone, Default)]
pub struct IntegerRules {
    pub min: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct ListRules {
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    /// `item_type: string` was declared.
    pub string_items: bool,
    pub item_pattern: Option<Pattern>,
}

/// Specification exactly as written, before type dispatch.
#[derive(Debug, Default, Deserialize)]
struct RawFieldSpec {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(rename = "enum")]
    allowed: Option<Vec<YamlValue>>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<String>,
    min: Option<i64>,
    min_items: Option<usize>,
    max_items: Option<usize>,
    item_type: Option<String>,
    item_pattern: Option<String>,
}

impl FieldSpec {
    /// Build a specification from its YAML form.
    ///
    /// Constraints that do not belong to the declared type are ignored.
    pub fn from_yaml(field: &str, value: YamlValue) -> Result<Self, SchemaError> {
        if !value.is_mapping() {
            return Err(SchemaError::InvalidField {
                field: field.to_owned(),
                reason: "specification must be a mapping".into(),
            });
        }

        let raw: RawFieldSpec =
            serde_yaml::from_value(value).map_err(|err| SchemaError::InvalidField {
                field: field.to_owned(),
                reason: err.to_string(),
            })?;

        let spec = match raw.kind.as_deref() {
            Some("string") => Self::String(StringRules {
                allowed: raw
                    .allowed
                    .map(|values| values.into_iter().map(FieldValue::from).collect()),
                min_length: raw.min_length,
                max_length: raw.max_length,
                pattern: compile(field, raw.pattern)?,
            }),
            Some("integer") => Self::Integer(IntegerRules { min: raw.min }),
            Some("list") => Self::List(ListRules {
                min_items: raw.min_items,
                max_items: raw.max_items,
                string_items: raw.item_type.as_deref() == Some("string"),
                item_pattern: compile(field, raw.item_pattern)?,
            }),
            other => {
                log!("schema"; "field '{}' has type '{}', left unchecked", field, other.unwrap_or(""));
                Self::Unchecked
            }
        };

        Ok(spec)
    }
}

/// Compile an optional pattern; an empty pattern counts as absent.
fn compile(field: &str, pattern: Option<String>) -> Result<Option<Pattern>, SchemaError> {
    pattern
        .filter(|p| !p.is_empty())
        .map(|p| Pattern::new(field, &p))
        .transpose()
}
