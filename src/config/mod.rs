//! Pipeline configuration from `essay-pipeline.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                       |
//! |-----------|-----------------------------------------------|
//! | `[paths]` | Posts, output, schema locations and extension |
//! | `[index]` | Version and producer stamped into index files |
//!
//! The file is optional: without it every value takes its default, and
//! command-line flags override whatever the file says.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! posts = "_posts"
//! output = "data"
//! schema = "frontmatter-schema.yaml"
//!
//! [index]
//! version = "1.1"
//! ```

pub mod defaults;
mod error;
mod index;
mod paths;

pub use error::ConfigError;
pub use index::IndexConfig;
pub use paths::PathsConfig;

use crate::{
    cli::{Cli, Commands},
    index::Stamp,
};
use anyhow::{Result, bail};
use chrono::NaiveDate;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing essay-pipeline.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Path the config was loaded from (set after loading, may not exist)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Input and output locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Index file header values
    #[serde(default)]
    pub index: IndexConfig,
}

impl PipelineConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: PipelineConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load the config named on the command line, apply CLI overrides and
    /// validate the result for the chosen command.
    ///
    /// A missing config file is not an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = if cli.config.exists() {
            Self::from_path(&cli.config)?
        } else {
            Self {
                config_path: cli.config.clone(),
                ..Self::default()
            }
        };
        config.update_with_cli(cli);
        config.validate(cli)?;
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Index {
                posts_dir,
                output_dir,
            } => {
                Self::update_option(&mut self.paths.posts, posts_dir.as_ref());
                Self::update_option(&mut self.paths.output, output_dir.as_ref());
            }
            Commands::Validate { posts_dir, schema } => {
                Self::update_option(&mut self.paths.posts, posts_dir.as_ref());
                if schema.is_some() {
                    self.paths.schema.clone_from(schema);
                }
            }
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate configuration for the current command
    pub fn validate(&self, cli: &Cli) -> Result<()> {
        let extension = &self.paths.extension;
        if extension.is_empty() {
            bail!(ConfigError::Validation(
                "[paths.extension] must not be empty".into()
            ));
        }
        if extension.starts_with('.') {
            bail!(ConfigError::Validation(format!(
                "[paths.extension] must not start with a dot, use \"{}\"",
                extension.trim_start_matches('.')
            )));
        }

        if let Commands::Validate { .. } = cli.command
            && self.paths.schema.is_none()
        {
            bail!(ConfigError::Validation(
                "a schema is required: pass --schema or set [paths.schema]".into()
            ));
        }

        Ok(())
    }

    /// Header values for one indexing run on `updated`.
    pub fn stamp(&self, updated: NaiveDate) -> Stamp {
        Stamp {
            version: self.index.version.clone(),
            updated,
            generated_by: self.index.generated_by.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("essay-pipeline").chain(args.iter().copied()))
    }

    #[test]
    fn test_from_str() {
        let config = PipelineConfig::from_str(
            r#"
            [paths]
            posts = "essays"
            schema = "schema.yaml"
        "#,
        )
        .unwrap();

        assert_eq!(config.paths.posts, PathBuf::from("essays"));
        assert_eq!(config.paths.schema, Some(PathBuf::from("schema.yaml")));
        assert_eq!(config.paths.output, PathBuf::from("data"));
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = PipelineConfig::from_str("[paths\nposts = \"x\"");
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result = PipelineConfig::from_str("[serve]\nport = 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_default() {
        let config = PipelineConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.paths.posts, PathBuf::from("_posts"));
        assert_eq!(config.paths.extension, "md");
        assert_eq!(config.index.version, "1.1");
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = PipelineConfig::from_str(
            r#"
            [paths]
            posts = "from-file"
            output = "from-file-out"
        "#,
        )
        .unwrap();
        config.update_with_cli(&cli(&["index", "--posts-dir", "from-cli"]));

        assert_eq!(config.paths.posts, PathBuf::from("from-cli"));
        assert_eq!(config.paths.output, PathBuf::from("from-file-out"));
    }

    #[test]
    fn test_cli_schema_override() {
        let mut config = PipelineConfig::from_str("[paths]\nschema = \"a.yaml\"").unwrap();
        config.update_with_cli(&cli(&["validate", "--schema", "b.yaml"]));
        assert_eq!(config.paths.schema, Some(PathBuf::from("b.yaml")));

        let mut config = PipelineConfig::from_str("[paths]\nschema = \"a.yaml\"").unwrap();
        config.update_with_cli(&cli(&["validate"]));
        assert_eq!(config.paths.schema, Some(PathBuf::from("a.yaml")));
    }

    #[test]
    fn test_validate_requires_schema() {
        let config = PipelineConfig::default();
        assert!(config.validate(&cli(&["validate"])).is_err());
        assert!(config.validate(&cli(&["index"])).is_ok());
    }

    #[test]
    fn test_validate_extension() {
        let mut config = PipelineConfig::default();
        config.paths.extension = String::new();
        assert!(config.validate(&cli(&["index"])).is_err());

        config.paths.extension = ".md".into();
        let err = config.validate(&cli(&["index"])).unwrap_err();
        assert!(err.to_string().contains("\"md\""));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("essay-pipeline.toml");
        let config = PipelineConfig::load(&cli(&["-C", path.to_str().unwrap(), "index"])).unwrap();

        assert_eq!(config.config_path, path);
        assert_eq!(config.paths.posts, PathBuf::from("_posts"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pipeline.toml");
        fs::write(&path, "[paths]\nschema = \"s.yaml\"\n[index]\nversion = \"9\"\n").unwrap();

        let config =
            PipelineConfig::load(&cli(&["-C", path.to_str().unwrap(), "validate"])).unwrap();
        assert_eq!(config.paths.schema, Some(PathBuf::from("s.yaml")));
        assert_eq!(config.index.version, "9");
    }

    #[test]
    fn test_stamp() {
        let mut config = PipelineConfig::default();
        config.index.generated_by = "test".into();
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let stamp = config.stamp(date);
        assert_eq!(stamp.version, "1.1");
        assert_eq!(stamp.updated, date);
        assert_eq!(stamp.generated_by, "test");
    }
}
