//! Derived index files for the publishing site.
//!
//! # Output Files
//!
//! | File                        | Contents                                   |
//! |-----------------------------|--------------------------------------------|
//! | `essays-index.json`         | Totals, category/tag counts, essay entries |
//! | `cross-references.json`     | Title, repos, tags, category by filename   |
//! | `publication-calendar.json` | Essay count per publication date           |
//!
//! Each builder is a pure function of the essays and a [`Stamp`]; none reads
//! another's output. Files are rewritten in full on every run.

mod frequency;
mod types;

pub use frequency::FrequencyTable;
pub use types::{CrossReference, CrossReferences, EssayEntry, EssaysIndex, PublicationCalendar};

use crate::{
    document::{Corpus, Essay, FieldValue},
    log,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::{collections::BTreeMap, fs, path::Path};

pub const ESSAYS_INDEX_FILE: &str = "essays-index.json";
pub const CROSS_REFERENCES_FILE: &str = "cross-references.json";
pub const PUBLICATION_CALENDAR_FILE: &str = "publication-calendar.json";

/// Category label for essays without one.
pub const UNCATEGORIZED: &str = "uncategorized";
/// Calendar key for essays without a date.
pub const UNKNOWN_DATE: &str = "unknown";

/// Values shared by every generated file in one run.
#[derive(Debug, Clone)]
pub struct Stamp {
    pub version: String,
    /// Injected run date; the builders never read the clock.
    pub updated: NaiveDate,
    pub generated_by: String,
}

impl Stamp {
    fn updated(&self) -> String {
        self.updated.format("%Y-%m-%d").to_string()
    }
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSummary {
    pub essays: usize,
    pub categories: usize,
    pub total_words: usize,
}

// ============================================================================
// Builders
// ============================================================================

/// Field value with a fallback for absent or `null` fields.
fn field_or(essay: &Essay, name: &str, default: impl FnOnce() -> FieldValue) -> FieldValue {
    essay
        .metadata
        .get_present(name)
        .cloned()
        .unwrap_or_else(default)
}

fn empty_string() -> FieldValue {
    FieldValue::String(String::new())
}

fn empty_list() -> FieldValue {
    FieldValue::List(Vec::new())
}

fn category_of(essay: &Essay) -> FieldValue {
    field_or(essay, "category", || FieldValue::String(UNCATEGORIZED.into()))
}

/// Tags of one essay as keys. A non-list `tags` field contributes nothing.
fn tags_of(essay: &Essay) -> impl Iterator<Item = String> + '_ {
    essay
        .metadata
        .get_present("tags")
        .and_then(FieldValue::as_list)
        .unwrap_or_default()
        .iter()
        .map(FieldValue::as_key)
}

/// Build `essays-index.json`.
pub fn build_essays_index(essays: &[Essay], stamp: &Stamp) -> EssaysIndex {
    let categories = FrequencyTable::count(essays.iter().map(|e| category_of(e).as_key()));
    let tag_frequency = FrequencyTable::count(essays.iter().flat_map(tags_of));
    let total_words = essays.iter().map(|e| e.word_count).sum();

    let entries = essays
        .iter()
        .map(|essay| EssayEntry {
            filename: essay.filename.clone(),
            title: field_or(essay, "title", empty_string),
            date: field_or(essay, "date", empty_string),
            category: category_of(essay),
            tags: field_or(essay, "tags", empty_list),
            word_count: essay.word_count,
            reading_time: field_or(essay, "reading_time", empty_string),
            portfolio_relevance: field_or(essay, "portfolio_relevance", empty_string),
        })
        .collect();

    EssaysIndex {
        version: stamp.version.clone(),
        updated: stamp.updated(),
        generated_by: stamp.generated_by.clone(),
        total_essays: essays.len(),
        total_words,
        categories,
        tag_frequency,
        essays: entries,
    }
}

/// Build `cross-references.json`.
pub fn build_cross_references(essays: &[Essay], stamp: &Stamp) -> CrossReferences {
    let entries: BTreeMap<_, _> = essays
        .iter()
        .map(|essay| {
            let entry = CrossReference {
                title: field_or(essay, "title", empty_string),
                related_repos: field_or(essay, "related_repos", empty_list),
                tags: field_or(essay, "tags", empty_list),
                category: field_or(essay, "category", empty_string),
            };
            (essay.filename.clone(), entry)
        })
        .collect();

    CrossReferences {
        version: stamp.version.clone(),
        updated: stamp.updated(),
        total: entries.len(),
        entries,
    }
}

/// Build `publication-calendar.json`.
pub fn build_publication_calendar(essays: &[Essay], stamp: &Stamp) -> PublicationCalendar {
    let mut dates: BTreeMap<String, usize> = BTreeMap::new();
    for essay in essays {
        let date = essay
            .metadata
            .get_present("date")
            .map_or_else(|| UNKNOWN_DATE.to_owned(), FieldValue::as_key);
        *dates.entry(date).or_default() += 1;
    }

    PublicationCalendar {
        version: stamp.version.clone(),
        updated: stamp.updated(),
        total_essays: essays.len(),
        dates,
    }
}

// ============================================================================
// Output
// ============================================================================

/// Index every essay in `corpus` and write the three data files.
///
/// Documents without frontmatter are skipped silently; an empty corpus
/// still produces files describing zero essays.
pub fn index_all(corpus: &Corpus, output_dir: &Path, stamp: &Stamp) -> Result<IndexSummary> {
    let essays = corpus.essays();
    let skipped = corpus.len() - essays.len();
    if skipped > 0 {
        log!("index"; "skipped {} document(s) without frontmatter", skipped);
    }

    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let index = build_essays_index(&essays, stamp);
    let xrefs = build_cross_references(&essays, stamp);
    let calendar = build_publication_calendar(&essays, stamp);

    write_json(&output_dir.join(ESSAYS_INDEX_FILE), &index)?;
    write_json(&output_dir.join(CROSS_REFERENCES_FILE), &xrefs)?;
    write_json(&output_dir.join(PUBLICATION_CALENDAR_FILE), &calendar)?;

    Ok(IndexSummary {
        essays: index.total_essays,
        categories: index.categories.len(),
        total_words: index.total_words,
    })
}

/// Write pretty-printed JSON with a trailing newline, replacing any old file.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    log!("index"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}
