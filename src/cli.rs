//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Validate essay frontmatter and build the site's data files
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file path (optional; defaults apply when it does not exist)
    #[arg(short = 'C', long, default_value = "essay-pipeline.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Index essays and write essays-index, cross-references and publication-calendar JSON
    Index {
        /// Directory containing the essays
        #[arg(long)]
        posts_dir: Option<PathBuf>,

        /// Directory the JSON files are written to (created if missing)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Check every essay's frontmatter against a schema
    Validate {
        /// Directory containing the essays
        #[arg(long)]
        posts_dir: Option<PathBuf>,

        /// Frontmatter schema (YAML with a `required_fields` mapping)
        #[arg(long)]
        schema: Option<PathBuf>,
    },
}
