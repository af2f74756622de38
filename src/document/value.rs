//! Loosely-typed frontmatter values.
//!
//! The YAML parser hands back a generic tree; `FieldValue` pins it down to an
//! explicit set of variants so validation can dispatch with a plain `match`.
//!
//! | YAML                 | Variant              | `type_name()` |
//! |----------------------|----------------------|---------------|
//! | `~`, `null`, empty   | `Null`               | `null`        |
//! | `true`, `false`      | `Bool`               | `boolean`     |
//! | `42`                 | `Integer`            | `integer`     |
//! | `1.5`                | `Float`              | `float`       |
//! | `hello`, `"2024-01"` | `String`             | `string`      |
//! | `[a, b]`, `- a`      | `List`               | `list`        |
//! | `{k: v}`, `k: v`     | `Mapping`            | `mapping`     |
//!
//! Booleans are never integers, whatever the source syntax looked like.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yaml::Value as YamlValue;
use std::fmt;

/// A single frontmatter value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<FieldValue>),
    /// Nested mapping, keys kept in source order.
    Mapping(Vec<(String, FieldValue)>),
}

impl FieldValue {
    /// Type label used in "expected X, got Y" messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Mapping(_) => "mapping",
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Render as a frequency or calendar key.
    ///
    /// Strings are used verbatim so `"2024-01-15"` stays `2024-01-15`.
    pub fn as_key(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<YamlValue> for FieldValue {
    fn from(value: YamlValue) -> Self {
        match value {
            YamlValue::Null => Self::Null,
            YamlValue::Bool(b) => Self::Bool(b),
            YamlValue::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                // u64 beyond i64::MAX and real floats both land here
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            YamlValue::String(s) => Self::String(s),
            YamlValue::Sequence(items) => Self::List(items.into_iter().map(Self::from).collect()),
            YamlValue::Mapping(map) => Self::Mapping(
                map.into_iter()
                    .map(|(k, v)| (yaml_key(k), Self::from(v)))
                    .collect(),
            ),
            YamlValue::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

/// Render a YAML mapping key as text.
pub(crate) fn yaml_key(key: YamlValue) -> String {
    match FieldValue::from(key) {
        FieldValue::String(s) => s,
        other => other.to_string(),
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::String(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
            Self::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> FieldValue {
        FieldValue::from(serde_yaml::from_str::<YamlValue>(text).unwrap())
    }

    #[test]
    fn test_scalar_variants() {
        assert_eq!(yaml("~"), FieldValue::Null);
        assert_eq!(yaml("true"), FieldValue::Bool(true));
        assert_eq!(yaml("42"), FieldValue::Integer(42));
        assert_eq!(yaml("1.5"), FieldValue::Float(1.5));
        assert_eq!(yaml("hello"), FieldValue::String("hello".into()));
    }

    #[test]
    fn test_bool_is_not_integer() {
        let value = yaml("false");
        assert_eq!(value.type_name(), "boolean");
        assert!(!matches!(value, FieldValue::Integer(_)));
    }

    #[test]
    fn test_unquoted_date_stays_string() {
        assert_eq!(yaml("2024-01-15"), FieldValue::String("2024-01-15".into()));
    }

    #[test]
    fn test_flow_and_block_lists() {
        let flow = yaml("[a, b]");
        let block = yaml("- a\n- b\n");
        assert_eq!(flow, block);
        assert_eq!(flow.as_list().map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_mapping_keeps_order() {
        let value = yaml("z: 1\na: 2\n");
        let FieldValue::Mapping(entries) = value else {
            panic!("expected mapping");
        };
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn test_tagged_value_unwraps() {
        assert_eq!(yaml("!custom 7"), FieldValue::Integer(7));
    }

    #[test]
    fn test_as_key() {
        assert_eq!(FieldValue::String("meta".into()).as_key(), "meta");
        assert_eq!(FieldValue::Integer(2024).as_key(), "2024");
        assert_eq!(FieldValue::Bool(true).as_key(), "true");
    }

    #[test]
    fn test_serialize_json() {
        let value = yaml("title: Ünïcode\ntags: [a, 1, true]\n");
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"title":"Ünïcode","tags":["a",1,true]}"#);
    }

    #[test]
    fn test_display_list() {
        let value = yaml("[essay, note]");
        assert_eq!(value.to_string(), "[essay, note]");
    }
}
