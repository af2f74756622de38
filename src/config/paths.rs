//! `[paths]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[paths]` section in essay-pipeline.toml - where documents live and
/// where generated files go.
///
/// # Example
/// ```toml
/// [paths]
/// posts = "_posts"
/// output = "data"
/// schema = "frontmatter-schema.yaml"
/// extension = "md"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding the essays (not searched recursively).
    #[serde(default = "defaults::paths::posts")]
    #[educe(Default = defaults::paths::posts())]
    pub posts: PathBuf,

    /// Directory the index files are written to.
    #[serde(default = "defaults::paths::output")]
    #[educe(Default = defaults::paths::output())]
    pub output: PathBuf,

    /// Frontmatter schema. Required by `validate`.
    #[serde(default = "defaults::paths::schema")]
    #[educe(Default = defaults::paths::schema())]
    pub schema: Option<PathBuf>,

    /// Document file extension, without the dot.
    #[serde(default = "defaults::paths::extension")]
    #[educe(Default = defaults::paths::extension())]
    pub extension: String,
}
