//! Error types for trivia lexing.

use thiserror::Error;

/// Errors raised when text cannot be read as pure trivia.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A `/*` opener has no matching `*/`.
    #[error("Unterminated block comment starting at byte {offset}")]
    UnterminatedBlockComment { offset: usize },

    /// Text that is neither whitespace nor a comment.
    #[error("Expected trivia at byte {offset}, found {found:?}")]
    NotTrivia { offset: usize, found: char },
}
