//! Error types for the generator front end.

use std::path::PathBuf;

use chinook_ddl::error::DdlError;

/// Errors that can occur while generating script files.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// Rendering failed.
    #[error(transparent)]
    Ddl(#[from] DdlError),

    /// Reading an input file or writing an output file failed.
    #[error("IO error on '{path}': {source}")]
    Io {
        /// File that could not be read or written.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A JSON input file could not be parsed.
    #[error("Failed to parse '{path}': {source}")]
    Parse {
        /// Path to the input file.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },

    /// Neither `--all` nor any dialect was given.
    #[error("No dialect selected (use --dialect <name> or --all)")]
    NoDialect,

    /// Some dialects failed; the others were written.
    #[error("{failed} of {total} dialect(s) failed")]
    Incomplete {
        /// Number of dialects that failed.
        failed: usize,
        /// Number of dialects attempted.
        total: usize,
    },
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GenError>;
