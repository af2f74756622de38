//! Frontmatter schema.
//!
//! The schema file is YAML with a `required_fields` mapping from field name
//! to [`FieldSpec`]. Other top-level keys are ignored:
//!
//! ```yaml
//! version: "1.0"
//! required_fields:
//!   title:
//!     type: string
//!     min_length: 1
//!   tags:
//!     type: list
//!     min_items: 2
//! ```
//!
//! Field order is kept, so validation messages follow the order the schema
//! declares.

mod error;
mod spec;

pub use error::SchemaError;
pub use spec::{FieldSpec, IntegerRules, ListRules, StringRules};

use crate::document::value::yaml_key;
use serde_yaml::Value as YamlValue;
use std::{fs, path::Path};

/// Top-level key holding the field specifications.
pub const REQUIRED_FIELDS_KEY: &str = "required_fields";

/// Immutable set of required fields, shared by every validation in a run.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, FieldSpec)>,
}

impl Schema {
    /// Load a schema from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        if !path.exists() {
            return Err(SchemaError::NotFound(path.to_path_buf()));
        }
        let content =
            fs::read_to_string(path).map_err(|err| SchemaError::Io(path.to_path_buf(), err))?;
        Self::parse(&content, path)
    }

    /// Parse schema text. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, SchemaError> {
        let root: YamlValue = serde_yaml::from_str(content)
            .map_err(|err| SchemaError::Parse(origin.to_path_buf(), err))?;

        let required = match root {
            YamlValue::Mapping(mut map) => map.remove(REQUIRED_FIELDS_KEY),
            _ => None,
        }
        .ok_or_else(|| SchemaError::MissingKey(origin.to_path_buf()))?;

        let YamlValue::Mapping(required) = required else {
            return Err(SchemaError::InvalidField {
                field: REQUIRED_FIELDS_KEY.into(),
                reason: "must map field names to specifications".into(),
            });
        };

        let fields = required
            .into_iter()
            .map(|(name, spec)| {
                let name = yaml_key(name);
                let spec = FieldSpec::from_yaml(&name, spec)?;
                Ok((name, spec))
            })
            .collect::<Result<Vec<_>, SchemaError>>()?;

        Ok(Self { fields })
    }

    /// Required fields in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Number of required fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
