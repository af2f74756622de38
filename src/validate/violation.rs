//! Validation findings.
//!
//! Every finding carries the document, the field (if any), the rule that
//! fired and a reason. `Display` renders the operator-facing line:
//!
//! ```text
//! post.md: no valid frontmatter found
//! post.md: missing required field 'excerpt'
//! post.md: field 'tags' — too few items (1, min 2)
//! No .md files found in _posts
//! ```

use std::fmt;

/// Rule behind a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    NoFiles,
    NoFrontmatter,
    MissingField,
    TypeMismatch,
    NotInEnum,
    TooShort,
    TooLong,
    PatternMismatch,
    BelowMinimum,
    TooFewItems,
    TooManyItems,
    ItemTypeMismatch,
    ItemPatternMismatch,
}

/// A single field-level violation, before document context is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub rule: Rule,
    pub message: String,
}

impl FieldViolation {
    pub fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

/// A finding with full context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Offending document; `None` for corpus-level findings.
    pub document: Option<String>,
    pub field: Option<String>,
    pub rule: Rule,
    pub message: String,
}

impl Violation {
    pub fn no_files(root: &str, extension: &str) -> Self {
        Self {
            document: None,
            field: None,
            rule: Rule::NoFiles,
            message: format!("No .{extension} files found in {root}"),
        }
    }

    pub fn no_frontmatter(document: &str) -> Self {
        Self {
            document: Some(document.to_owned()),
            field: None,
            rule: Rule::NoFrontmatter,
            message: "no valid frontmatter found".into(),
        }
    }

    pub fn missing_field(document: &str, field: &str) -> Self {
        Self {
            document: Some(document.to_owned()),
            field: Some(field.to_owned()),
            rule: Rule::MissingField,
            message: format!("missing required field '{field}'"),
        }
    }

    pub fn in_field(document: &str, field: &str, violation: FieldViolation) -> Self {
        Self {
            document: Some(document.to_owned()),
            field: Some(field.to_owned()),
            rule: violation.rule,
            message: violation.message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.document, &self.field, self.rule) {
            (None, _, _) => f.write_str(&self.message),
            (Some(doc), Some(field), rule) if rule != Rule::MissingField => {
                write!(f, "{doc}: field '{field}' — {}", self.message)
            }
            (Some(doc), _, _) => write!(f, "{doc}: {}", self.message),
        }
    }
}
