//! `[index]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[index]` section in essay-pipeline.toml - header values stamped into
/// every generated file.
///
/// # Example
/// ```toml
/// [index]
/// version = "1.1"
/// generated_by = "essay-pipeline indexer v0.1.0"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Output format version.
    #[serde(default = "defaults::index::version")]
    #[educe(Default = defaults::index::version())]
    pub version: String,

    /// Producer label written to `essays-index.json`.
    #[serde(default = "defaults::index::generated_by")]
    #[educe(Default = defaults::index::generated_by())]
    pub generated_by: String,
}
