//! Doc comment extraction from a declaration's leading trivia.
//!
//! Three stages run in order, each consuming the previous one's output:
//!
//! 1. [`locator`] scans backward for the start of the doc comment run that is
//!    attached to the declaration (no blank line and no other comment in
//!    between)
//! 2. [`lines`] walks that run forward and turns every doc comment piece into
//!    lines with the comment markers and `*` decoration removed
//! 3. [`normalize`] removes the indentation of the first non-empty line from
//!    every line and joins them, one `\n` after each
//!
//! A run that produces no text is reported as `None`, exactly like trivia
//! with no doc comment at all. A returned [`DocComment`] never has empty text.

mod lines;
mod locator;
mod measure;
mod normalize;

use docline_core::{Trivia, TriviaPiece, TriviaPosition};
use serde::{Deserialize, Serialize};

use crate::error::ParserError;

/// The doc comment attached to one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocComment {
    /// Normalized comment body. Ends with `\n`, never empty.
    pub text: String,

    /// First trivia piece of the run the text was taken from.
    pub start: TriviaPosition,
}

impl DocComment {
    /// Extract the doc comment attached to the declaration `trivia` precedes.
    #[must_use]
    pub fn extract(trivia: &Trivia) -> Option<Self> {
        extract(trivia)
    }
}

/// Extract the doc comment from the leading trivia of one declaration.
///
/// `trivia` only needs to be iterable forward; the pieces are collected once
/// for the backward scan.
///
/// # Examples
///
/// ```
/// use docline_core::Trivia;
/// use docline_parser::doc_comment::extract;
///
/// let trivia = Trivia::lex("// license\n\n/// Adds two numbers.\n///\n///   a + b\n")
///     .expect("trivia");
/// let doc = extract(&trivia).expect("documented");
/// assert_eq!(doc.text, "Adds two numbers.\n\n  a + b\n");
/// assert_eq!(doc.start.index, 2);
/// ```
pub fn extract<'a, I>(trivia: I) -> Option<DocComment>
where
    I: IntoIterator<Item = &'a TriviaPiece>,
{
    let pieces: Vec<&TriviaPiece> = trivia.into_iter().collect();
    let start = locator::run_start(&pieces);
    let lines = lines::extract_lines(&pieces, start);
    tracing::trace!(
        start,
        pieces = pieces.len(),
        lines = lines.len(),
        "located doc comment run"
    );

    let Some(text) = normalize::normalize(&lines) else {
        if !lines.is_empty() {
            tracing::debug!(start, "doc comment run has no text");
        }
        return None;
    };

    Some(DocComment {
        text,
        start: TriviaPosition::of(pieces.iter().copied(), start),
    })
}

/// Lex `text` as trivia and extract its doc comment.
///
/// # Errors
/// Returns [`ParserError::Trivia`] if `text` is not pure trivia.
pub fn extract_from_text(text: &str) -> Result<Option<DocComment>, ParserError> {
    let trivia = Trivia::lex(text)?;
    Ok(extract(&trivia))
}

#[cfg(test)]
mod tests;
