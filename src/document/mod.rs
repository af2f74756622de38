//! Essay documents and corpus discovery.
//!
//! # Pipeline
//!
//! ```text
//! Corpus::discover() ──► Vec<DocumentSource>   (filename + raw text, sorted)
//!         │
//!         ├──► validate::validate_corpus()     (every source, even broken ones)
//!         │
//!         └──► Corpus::essays() ──► Vec<Essay> (frontmatter + word count)
//!                                      │
//!                                      └──► index::*
//! ```
//!
//! Documents without valid frontmatter never become an `Essay`; validation
//! reports them instead.

pub mod frontmatter;
pub mod value;
pub mod words;

use crate::log;
use frontmatter::Metadata;
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

pub use value::FieldValue;

// ============================================================================
// Sources
// ============================================================================

/// Raw document as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    /// File name without directory, unique within a corpus.
    pub filename: String,
    pub text: String,
}

impl DocumentSource {
    #[cfg(test)]
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }

    /// Read a document, degrading to empty text when the file is unreadable.
    ///
    /// Empty text has no frontmatter, so the document still shows up in
    /// validation output instead of aborting the run.
    fn read(path: &Path) -> Self {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let text = match fs::read(path) {
            Ok(bytes) => String::from_utf8(bytes)
                .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()),
            Err(err) => {
                log!("warn"; "cannot read {}: {}", path.display(), err);
                String::new()
            }
        };

        Self { filename, text }
    }
}

/// A parsed essay, ready for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Essay {
    pub filename: String,
    pub metadata: Metadata,
    /// Word count of the stripped body.
    pub word_count: usize,
}

impl Essay {
    /// Extract frontmatter and count body words.
    ///
    /// Returns `None` when the document has no valid frontmatter.
    pub fn from_source(source: &DocumentSource) -> Option<Self> {
        let fm = frontmatter::extract(&source.text)?;
        Some(Self {
            filename: source.filename.clone(),
            word_count: words::count_words(fm.body),
            metadata: fm.metadata,
        })
    }
}

// ============================================================================
// Corpus
// ============================================================================

/// All documents found for one run, sorted by filename.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Directory the documents were discovered in (for messages).
    pub root: PathBuf,
    pub extension: String,
    pub sources: Vec<DocumentSource>,
}

impl Corpus {
    /// Build a corpus from in-memory sources.
    pub fn from_sources(
        root: impl Into<PathBuf>,
        extension: impl Into<String>,
        mut sources: Vec<DocumentSource>,
    ) -> Self {
        sources.sort_by(|a, b| a.filename.cmp(&b.filename));
        Self {
            root: root.into(),
            extension: extension.into(),
            sources,
        }
    }

    /// Collect every `*.{extension}` file directly inside `dir`.
    ///
    /// Subdirectories are not entered. A missing directory yields an empty
    /// corpus.
    pub fn discover(dir: &Path, extension: &str) -> Self {
        let paths = collect_documents(dir, extension);
        let sources = paths.par_iter().map(|path| DocumentSource::read(path)).collect();
        Self::from_sources(dir, extension, sources)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Parse every document, keeping corpus order and dropping documents
    /// without frontmatter.
    pub fn essays(&self) -> Vec<Essay> {
        self.sources
            .par_iter()
            .filter_map(Essay::from_source)
            .collect()
    }
}

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// List matching regular files directly under `dir`.
fn collect_documents(dir: &Path, extension: &str) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .filter(|e| e.path().extension().is_some_and(|ext| ext == extension))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ESSAY: &str = "---\ntitle: \"T\"\ncategory: meta-system\n---\n\nFour words right here.\n";

    #[test]
    fn test_discover_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.md"), ESSAY).unwrap();
        fs::write(dir.path().join("a.md"), ESSAY).unwrap();
        fs::write(dir.path().join("notes.txt"), ESSAY).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.md"), ESSAY).unwrap();

        let corpus = Corpus::discover(dir.path(), "md");
        let names: Vec<_> = corpus.sources.iter().map(|s| s.filename.as_str()).collect();
        assert_eq!(names, ["a.md", "b.md"]);
    }

    #[test]
    fn test_discover_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let corpus = Corpus::discover(&dir.path().join("nope"), "md");
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let dir = TempDir::new().unwrap();
        let mut bytes = ESSAY.as_bytes().to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        fs::write(dir.path().join("bad.md"), bytes).unwrap();

        let corpus = Corpus::discover(dir.path(), "md");
        assert_eq!(corpus.len(), 1);
        assert!(corpus.sources[0].text.starts_with("---"));
        assert_eq!(corpus.essays().len(), 1);
    }

    #[test]
    fn test_essays_skip_missing_frontmatter() {
        let corpus = Corpus::from_sources(
            "posts",
            "md",
            vec![
                DocumentSource::new("z.md", ESSAY),
                DocumentSource::new("bare.md", "Just plain markdown with no frontmatter."),
                DocumentSource::new("a.md", ESSAY),
            ],
        );

        let essays = corpus.essays();
        let names: Vec<_> = essays.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, ["a.md", "z.md"]);
        assert_eq!(essays[0].word_count, 4);
    }
}
