use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::export::model::ExportFormat;

/// Graph the dependencies between Go struct types.
///
/// Every field of every struct declaration becomes one edge from the struct to
/// the field's type, labelled with how the field refers to it (value, ptr,
/// array, map, chan, selector, struct, interface or unknown).
#[derive(Parser, Debug)]
#[command(name = "struct-graph", version, about, long_about = None)]
pub struct Cli {
    /// Go source files or directories, processed in the order given.
    pub paths: Vec<PathBuf>,

    /// Only consider public identifiers.
    #[arg(long)]
    pub public: bool,

    /// Output format (defaults to the config file's `format`, then dot).
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write the graph to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include `_test.go` files when expanding directories.
    #[arg(long)]
    pub tests: bool,

    /// Configuration file (defaults to `struct-graph.toml` in the working directory).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
