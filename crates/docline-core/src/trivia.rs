//! Trivia pieces and the sequences they form.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One run of trivia.
///
/// Whitespace kinds carry how many consecutive characters (or `\r\n` pairs)
/// they cover. Comment kinds carry their full source text, delimiters
/// included; line comments never include their line break.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TriviaPiece {
    Spaces(usize),
    Tabs(usize),
    VerticalTabs(usize),
    Formfeeds(usize),
    Newlines(usize),
    CarriageReturns(usize),
    CarriageReturnLineFeeds(usize),
    /// A `//` comment that is not a doc comment.
    LineComment(String),
    /// A `/* */` comment that is not a doc comment.
    BlockComment(String),
    /// A `///` comment.
    DocLineComment(String),
    /// A `/** */` comment.
    DocBlockComment(String),
    /// Text the lexer could not classify, such as an unterminated comment.
    Unexpected(String),
}

impl TriviaPiece {
    /// Length of this piece's source text in UTF-8 bytes.
    #[must_use]
    pub fn source_len(&self) -> usize {
        match self {
            Self::Spaces(count)
            | Self::Tabs(count)
            | Self::VerticalTabs(count)
            | Self::Formfeeds(count)
            | Self::Newlines(count)
            | Self::CarriageReturns(count) => *count,
            Self::CarriageReturnLineFeeds(count) => count * 2,
            Self::LineComment(text)
            | Self::BlockComment(text)
            | Self::DocLineComment(text)
            | Self::DocBlockComment(text)
            | Self::Unexpected(text) => text.len(),
        }
    }

    /// Horizontal or vertical whitespace of any kind.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(
            self,
            Self::Spaces(_)
                | Self::Tabs(_)
                | Self::VerticalTabs(_)
                | Self::Formfeeds(_)
                | Self::Newlines(_)
                | Self::CarriageReturns(_)
                | Self::CarriageReturnLineFeeds(_)
        )
    }

    #[must_use]
    pub const fn is_newline(&self) -> bool {
        matches!(
            self,
            Self::Newlines(_) | Self::CarriageReturns(_) | Self::CarriageReturnLineFeeds(_)
        )
    }

    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(
            self,
            Self::LineComment(_)
                | Self::BlockComment(_)
                | Self::DocLineComment(_)
                | Self::DocBlockComment(_)
        )
    }

    #[must_use]
    pub const fn is_doc_comment(&self) -> bool {
        matches!(self, Self::DocLineComment(_) | Self::DocBlockComment(_))
    }
}

impl fmt::Display for TriviaPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(count) => write_repeated(f, ' ', *count),
            Self::Tabs(count) => write_repeated(f, '\t', *count),
            Self::VerticalTabs(count) => write_repeated(f, '\u{0B}', *count),
            Self::Formfeeds(count) => write_repeated(f, '\u{0C}', *count),
            Self::Newlines(count) => write_repeated(f, '\n', *count),
            Self::CarriageReturns(count) => write_repeated(f, '\r', *count),
            Self::CarriageReturnLineFeeds(count) => {
                for _ in 0..*count {
                    f.write_str("\r\n")?;
                }
                Ok(())
            }
            Self::LineComment(text)
            | Self::BlockComment(text)
            | Self::DocLineComment(text)
            | Self::DocBlockComment(text)
            | Self::Unexpected(text) => f.write_str(text),
        }
    }
}

fn write_repeated(f: &mut fmt::Formatter<'_>, ch: char, count: usize) -> fmt::Result {
    for _ in 0..count {
        f.write_char(ch)?;
    }
    Ok(())
}

/// The ordered trivia attached to one token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trivia {
    pieces: Vec<TriviaPiece>,
}

impl Trivia {
    #[must_use]
    pub const fn new() -> Self {
        Self { pieces: Vec::new() }
    }

    /// Lex `text`, which must consist of trivia only.
    ///
    /// # Errors
    /// Returns `CoreError` on an unterminated block comment or on any
    /// character that cannot start trivia.
    pub fn lex(text: &str) -> Result<Self, CoreError> {
        crate::lexer::lex_trivia(text)
    }

    #[must_use]
    pub fn pieces(&self) -> &[TriviaPiece] {
        &self.pieces
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TriviaPiece> {
        self.pieces.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn push(&mut self, piece: TriviaPiece) {
        self.pieces.push(piece);
    }

    /// Length of the whole sequence's source text in UTF-8 bytes.
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.pieces.iter().map(TriviaPiece::source_len).sum()
    }

    /// Address of the piece at `index`. `index == self.len()` addresses the
    /// end of the sequence.
    #[must_use]
    pub fn position(&self, index: usize) -> TriviaPosition {
        TriviaPosition::of(&self.pieces, index)
    }
}

impl From<Vec<TriviaPiece>> for Trivia {
    fn from(pieces: Vec<TriviaPiece>) -> Self {
        Self { pieces }
    }
}

impl FromIterator<TriviaPiece> for Trivia {
    fn from_iter<I: IntoIterator<Item = TriviaPiece>>(iter: I) -> Self {
        Self {
            pieces: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Trivia {
    type Item = &'a TriviaPiece;
    type IntoIter = std::slice::Iter<'a, TriviaPiece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}

impl IntoIterator for Trivia {
    type Item = TriviaPiece;
    type IntoIter = std::vec::IntoIter<TriviaPiece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.into_iter()
    }
}

impl fmt::Display for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pieces {
            write!(f, "{piece}")?;
        }
        Ok(())
    }
}

/// Where a piece sits in a trivia sequence.
///
/// `index` is the piece's ordinal; `utf8_offset` is the byte offset of its
/// first character from the start of the sequence's source text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TriviaPosition {
    pub index: usize,
    pub utf8_offset: usize,
}

impl TriviaPosition {
    /// Address of the piece at `index` in `pieces`.
    ///
    /// Pieces past `index` are never visited. An `index` beyond the end is
    /// clamped to the number of pieces.
    pub fn of<'a, I>(pieces: I, index: usize) -> Self
    where
        I: IntoIterator<Item = &'a TriviaPiece>,
    {
        let mut position = Self::default();
        for piece in pieces.into_iter().take(index) {
            position.index += 1;
            position.utf8_offset += piece.source_len();
        }
        position
    }

    /// The same position with its byte offset shifted by `base`.
    #[must_use]
    pub const fn offset_by(self, base: usize) -> Self {
        Self {
            index: self.index,
            utf8_offset: self.utf8_offset + base,
        }
    }
}
