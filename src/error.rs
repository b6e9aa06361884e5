use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a struct-graph run.
///
/// Resolution of unfamiliar type expressions is never an error: those become
/// `unknown` edges. Everything here is fatal for the whole run.
#[derive(Debug, Error)]
pub enum GraphError {
    /// No source files were supplied on the command line.
    #[error("need at least one file name")]
    Usage,

    /// A source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file is not valid Go.
    #[error("{}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line of the first offending node.
        line: usize,
        /// 1-based column of the first offending node.
        column: usize,
        message: String,
    },

    /// The Go grammar could not be loaded into the parser.
    #[error("failed to load the Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

pub type Result<T> = std::result::Result<T, GraphError>;
