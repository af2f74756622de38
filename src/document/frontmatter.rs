//! Frontmatter extraction.
//!
//! A document carries metadata when it opens with `---` and a second `---`
//! closes the block:
//!
//! ```text
//! ---
//! title: "Hello"
//! tags: [a, b]
//! ---
//! Body text...
//! ```
//!
//! The text is split on the literal `---` token at most twice, so whatever
//! follows the closing token (including further `---` rules) is body.

use super::value::{FieldValue, yaml_key};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_yaml::Value as YamlValue;
use std::fmt;

/// Delimiter token opening and closing the metadata block.
pub const DELIMITER: &str = "---";

/// Parsed metadata record, keys kept in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    fields: Vec<(String, FieldValue)>,
}

impl Metadata {
    /// Look up a field. Duplicate keys resolve to the last occurrence.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Look up a field, treating an explicit `null` like an absent key.
    pub fn get_present(&self, name: &str) -> Option<&FieldValue> {
        self.get(name).filter(|value| !value.is_null())
    }
}

/// Entries are collected as written, so a repeated key keeps every
/// occurrence and [`Metadata::get`] sees the last one.
impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MetadataVisitor;

        impl<'de> Visitor<'de> for MetadataVisitor {
            type Value = Metadata;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of metadata fields")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Metadata, A::Error> {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<YamlValue, YamlValue>()? {
                    fields.push((yaml_key(key), FieldValue::from(value)));
                }
                Ok(Metadata { fields })
            }
        }

        deserializer.deserialize_map(MetadataVisitor)
    }
}

/// A document split into its metadata and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Frontmatter<'a> {
    pub metadata: Metadata,
    /// Body after the closing delimiter, trimmed.
    pub body: &'a str,
}

/// Split `text` into metadata and body.
///
/// Returns `None` when the opening or closing delimiter is missing, the block
/// is not valid YAML, or the block does not describe a mapping.
pub fn extract(text: &str) -> Option<Frontmatter<'_>> {
    if !text.starts_with(DELIMITER) {
        return None;
    }

    let mut parts = text.splitn(3, DELIMITER);
    let _leading = parts.next()?;
    let block = parts.next()?;
    let body = parts.next()?;

    let metadata = parse_block(block)?;
    Some(Frontmatter {
        metadata,
        body: body.trim(),
    })
}

/// Parse the metadata block. Anything but a mapping is rejected.
fn parse_block(block: &str) -> Option<Metadata> {
    let metadata = serde_yaml::from_str::<Metadata>(block).ok()?;

    // An empty or comment-only block also reads as an empty map; only `{}` counts
    if metadata.fields.is_empty() && !serde_yaml::from_str::<YamlValue>(block).ok()?.is_mapping() {
        return None;
    }
    Some(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic() {
        let doc = "---\ntitle: \"T\"\ncategory: meta-system\ntags: [governance, ai]\n---\n\nHello world.\n";
        let fm = extract(doc).unwrap();

        assert_eq!(fm.metadata.fields.len(), 3);
        assert_eq!(fm.metadata.get("title"), Some(&FieldValue::String("T".into())));
        assert_eq!(
            fm.metadata.get("tags").and_then(FieldValue::as_list).map(<[_]>::len),
            Some(2)
        );
        assert_eq!(fm.body, "Hello world.");
    }

    #[test]
    fn test_no_opening_delimiter() {
        assert!(extract("# Just a heading\n\nNo frontmatter here.").is_none());
        assert!(extract("\n---\ntitle: x\n---\nbody").is_none());
    }

    #[test]
    fn test_no_closing_delimiter() {
        assert!(extract("---\ntitle: x\nbody without closing").is_none());
    }

    #[test]
    fn test_invalid_yaml_is_none() {
        assert!(extract("---\ntitle: [unclosed\n---\nbody").is_none());
    }

    #[test]
    fn test_non_mapping_block_is_none() {
        assert!(extract("---\n---\nbody").is_none());
        assert!(extract("---\njust a scalar\n---\nbody").is_none());
        assert!(extract("---\n- a\n- b\n---\nbody").is_none());
    }

    #[test]
    fn test_later_rules_stay_in_body() {
        let doc = "---\ntitle: x\n---\nintro\n\n---\n\noutro";
        let fm = extract(doc).unwrap();
        assert_eq!(fm.body, "intro\n\n---\n\noutro");
    }

    #[test]
    fn test_get_present_skips_null() {
        let fm = extract("---\ncategory: ~\ntitle: x\n---\n").unwrap();
        assert_eq!(fm.metadata.get("category"), Some(&FieldValue::Null));
        assert!(fm.metadata.get_present("category").is_none());
        assert!(fm.metadata.get_present("title").is_some());
    }

    #[test]
    fn test_empty_body() {
        let fm = extract("---\ntitle: x\n---").unwrap();
        assert_eq!(fm.body, "");
    }

    #[test]
    fn test_key_order_preserved() {
        let fm = extract("---\nb: 1\na: 2\nc: 3\n---\n").unwrap();
        let keys: Vec<_> = fm.metadata.fields.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let doc = "---\ntitle: first\ntitle: second\ntags: [a, b]\n---\nBody words here.\n";
        let fm = extract(doc).unwrap();

        assert_eq!(fm.metadata.fields.len(), 3);
        assert_eq!(fm.metadata.get("title"), Some(&FieldValue::String("second".into())));
        assert_eq!(fm.body, "Body words here.");
    }

    #[test]
    fn test_empty_mapping_is_valid() {
        let fm = extract("---\n{}\n---\nbody").unwrap();
        assert!(fm.metadata.fields.is_empty());
        assert!(extract("---\n# only a comment\n---\nbody").is_none());
    }

    #[test]
    fn test_yaml_1_2_scalars_stay_strings() {
        let fm = extract("---\ndraft: yes\ndate: 2024-01-15\n---\n").unwrap();
        assert_eq!(fm.metadata.get("draft"), Some(&FieldValue::String("yes".into())));
        assert_eq!(fm.metadata.get("date"), Some(&FieldValue::String("2024-01-15".into())));
    }
}
