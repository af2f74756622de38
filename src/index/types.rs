//! Index file types.
//!
//! These types are serialized to JSON and consumed by the publishing site.
//! Metadata fields are passed through as written in the frontmatter, so a
//! title that happens to be a number stays a number.

use super::frequency::FrequencyTable;
use crate::document::FieldValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// `essays-index.json`
#[derive(Debug, Clone, Serialize)]
pub struct EssaysIndex {
    pub version: String,
    /// Run date, ISO 8601 (e.g., "2024-01-15")
    pub updated: String,
    pub generated_by: String,
    pub total_essays: usize,
    pub total_words: usize,
    /// Essays per category, most used first
    pub categories: FrequencyTable,
    /// Tag occurrences across all essays, most used first
    pub tag_frequency: FrequencyTable,
    /// One entry per essay, in filename order
    pub essays: Vec<EssayEntry>,
}

/// A single essay within `essays-index.json`.
#[derive(Debug, Clone, Serialize)]
pub struct EssayEntry {
    pub filename: String,
    /// Defaults to ""
    pub title: FieldValue,
    /// Defaults to ""
    pub date: FieldValue,
    /// Defaults to "uncategorized"
    pub category: FieldValue,
    /// Defaults to []
    pub tags: FieldValue,
    /// Computed from the body, never read from frontmatter
    pub word_count: usize,
    /// Defaults to ""
    pub reading_time: FieldValue,
    /// Defaults to ""
    pub portfolio_relevance: FieldValue,
}

/// `cross-references.json`
#[derive(Debug, Clone, Serialize)]
pub struct CrossReferences {
    pub version: String,
    pub updated: String,
    pub total: usize,
    /// Keyed by filename
    pub entries: BTreeMap<String, CrossReference>,
}

/// A single essay within `cross-references.json`.
#[derive(Debug, Clone, Serialize)]
pub struct CrossReference {
    pub title: FieldValue,
    pub related_repos: FieldValue,
    pub tags: FieldValue,
    /// Defaults to "" here, unlike the essays index
    pub category: FieldValue,
}

/// `publication-calendar.json`
#[derive(Debug, Clone, Serialize)]
pub struct PublicationCalendar {
    pub version: String,
    pub updated: String,
    pub total_essays: usize,
    /// Essays per publication date, ascending; undated essays count as "unknown"
    pub dates: BTreeMap<String, usize>,
}
