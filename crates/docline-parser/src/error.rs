//! Parser error types for docline-parser.

use std::path::PathBuf;

use docline_core::CoreError;

/// Errors that can occur while reading sources for extraction.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Trivia lexing failed: {0}")]
    Trivia(#[from] CoreError),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
