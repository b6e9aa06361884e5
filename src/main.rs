mod cli;
mod config;
mod error;
mod export;
mod graph;
mod parser;
mod syntax;
mod walker;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{CONFIG_FILE, StructGraphConfig};
use error::GraphError;
use export::export_graph;
use export::model::ExportParams;
use graph::{build_document, process_file};
use walker::expand_inputs;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the graph on stdout stays clean for piping.
    let default_filter = match cli.verbose {
        0 => "struct_graph=warn",
        1 => "struct_graph=debug",
        _ => "struct_graph=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.paths.is_empty() {
        return Err(GraphError::Usage.into());
    }

    let (config_path, explicit) = match &cli.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(CONFIG_FILE), false),
    };
    let config = StructGraphConfig::load(&config_path, explicit);

    let params = ExportParams {
        format: cli.format.or(config.format).unwrap_or_default(),
        public_only: cli.public || config.public_only,
    };

    let units = expand_inputs(&cli.paths, &config, cli.tests);
    let doc = build_document(&units, process_file)?;
    if doc.is_empty() {
        tracing::debug!(units = units.len(), "no struct fields found");
    } else {
        tracing::debug!(units = units.len(), edges = doc.len(), "graph built");
    }

    let content = export_graph(&doc, &params)?;
    match &cli.output {
        Some(path) => std::fs::write(path, &content)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{content}"),
    }

    Ok(())
}
