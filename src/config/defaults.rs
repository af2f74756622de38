//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [paths] Section Defaults
// ============================================================================

pub mod paths {
    use std::path::PathBuf;

    pub fn posts() -> PathBuf {
        "_posts".into()
    }

    pub fn output() -> PathBuf {
        "data".into()
    }

    pub fn schema() -> Option<PathBuf> {
        None
    }

    pub fn extension() -> String {
        "md".into()
    }
}

// ============================================================================
// [index] Section Defaults
// ============================================================================

pub mod index {
    pub fn version() -> String {
        "1.1".into()
    }

    pub fn generated_by() -> String {
        concat!(env!("CARGO_PKG_NAME"), " indexer v", env!("CARGO_PKG_VERSION")).into()
    }
}
