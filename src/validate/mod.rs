//! Frontmatter validation against a schema.
//!
//! # Flow
//!
//! ```text
//! validate_corpus()
//!     │
//!     ├── empty corpus ──► [NoFiles]
//!     │
//!     └── for each document (sorted by filename)
//!             │
//!             └── validate_document()
//!                     │
//!                     ├── no frontmatter ──► [NoFrontmatter]
//!                     │
//!                     └── for each required field (schema order)
//!                             ├── absent  ──► [MissingField]
//!                             └── present ──► validate_field()
//! ```
//!
//! Findings accumulate; nothing stops at the first failure.

mod field;
mod violation;

pub use field::validate_field;
pub use violation::Violation;

use crate::{
    document::{Corpus, DocumentSource, frontmatter},
    schema::Schema,
};
use rayon::prelude::*;

/// Validate one document against `schema`.
pub fn validate_document(source: &DocumentSource, schema: &Schema) -> Vec<Violation> {
    let Some(fm) = frontmatter::extract(&source.text) else {
        return vec![Violation::no_frontmatter(&source.filename)];
    };

    let mut errors = Vec::new();
    for (name, spec) in schema.required_fields() {
        let Some(value) = fm.metadata.get(name) else {
            errors.push(Violation::missing_field(&source.filename, name));
            continue;
        };
        errors.extend(
            validate_field(value, spec)
                .into_iter()
                .map(|v| Violation::in_field(&source.filename, name, v)),
        );
    }
    errors
}

/// Validate every document in `corpus`, in corpus order.
///
/// An empty corpus is itself a finding, so "nothing found" never reads as
/// "everything valid".
pub fn validate_corpus(corpus: &Corpus, schema: &Schema) -> Vec<Violation> {
    if corpus.is_empty() {
        return vec![Violation::no_files(
            &corpus.root.display().to_string(),
            &corpus.extension,
        )];
    }

    let per_document: Vec<Vec<Violation>> = corpus
        .sources
        .par_iter()
        .map(|source| validate_document(source, schema))
        .collect();

    per_document.into_iter().flatten().collect()
}

/// Operator report for a failed run: a banner, a blank line, then one
/// indented line per finding.
pub fn failure_report(errors: &[Violation]) -> String {
    let mut report = format!("FAILED — {} error(s):\n", errors.len());
    for error in errors {
        report.push_str(&format!("\n  {error}"));
    }
    report
}
