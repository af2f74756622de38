//! essay-pipeline - frontmatter validation and index generation for a
//! markdown essay collection.

mod cli;
mod config;
mod document;
mod index;
mod logger;
mod schema;
mod validate;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::PipelineConfig;
use document::Corpus;
use schema::Schema;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = PipelineConfig::load(&cli)
        .with_context(|| format!("Failed to load config `{}`", cli.config.display()))?;

    match &cli.command {
        Commands::Index { .. } => run_index(&config),
        Commands::Validate { .. } => run_validate(&config),
    }
}

/// Index the posts directory and write the data files.
fn run_index(config: &PipelineConfig) -> Result<ExitCode> {
    let paths = &config.paths;
    let corpus = Corpus::discover(&paths.posts, &paths.extension);
    let stamp = config.stamp(chrono::Local::now().date_naive());

    let summary = index::index_all(&corpus, &paths.output, &stamp)?;
    log!(
        "index";
        "Indexed {} essays across {} categories ({} words)",
        summary.essays, summary.categories, summary.total_words
    );
    Ok(ExitCode::SUCCESS)
}

/// Validate the posts directory; exit code 1 when any finding is reported.
fn run_validate(config: &PipelineConfig) -> Result<ExitCode> {
    let paths = &config.paths;
    let schema_path = paths
        .schema
        .as_deref()
        .context("a schema is required: pass --schema or set [paths.schema]")?;

    // Schema problems are fatal and reported before any document is read
    let schema = Schema::from_path(schema_path)?;
    log!("schema"; "{} required fields from {}", schema.len(), schema_path.display());

    let corpus = Corpus::discover(&paths.posts, &paths.extension);
    let errors = validate::validate_corpus(&corpus, &schema);

    if errors.is_empty() {
        log!("validate"; "PASSED — {} essays validated, 0 errors", corpus.len());
        return Ok(ExitCode::SUCCESS);
    }

    log!("fail"; "{}", validate::failure_report(&errors));
    Ok(ExitCode::FAILURE)
}
