//! Line-oriented declaration scanner.
//!
//! Splits a source file into the code lines that follow each stretch of
//! trivia. The trivia in front of a code line is treated as the leading
//! trivia of a declaration starting on that line, and its doc comment is
//! extracted with [`crate::doc_comment::extract`].
//!
//! A code line runs from its first non-trivia character to the end of the
//! line, so trailing comments on code lines are part of the code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::doc_comment::{self, DocComment};
use crate::error::ParserError;

/// One code line and the doc comment attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// 1-based line number of the code line.
    pub line: usize,

    /// Code line text with surrounding whitespace removed.
    pub signature: String,

    /// Attached doc comment. `start.utf8_offset` is a byte offset into the
    /// scanned source, not into the declaration's trivia.
    pub doc: Option<DocComment>,
}

impl Declaration {
    #[must_use]
    pub const fn is_documented(&self) -> bool {
        self.doc.is_some()
    }
}

/// Scan `source` into declarations, in source order.
///
/// Trivia after the last code line belongs to no declaration and is
/// dropped.
///
/// # Examples
///
/// ```
/// use docline_parser::scan_declarations;
///
/// let source = "/// Entry point.\nfn main() {}\n";
/// let decls = scan_declarations(source);
/// assert_eq!(decls.len(), 1);
/// assert_eq!(decls[0].signature, "fn main() {}");
/// assert_eq!(decls[0].doc.as_ref().map(|d| d.text.as_str()), Some("Entry point.\n"));
/// ```
#[must_use]
pub fn scan_declarations(source: &str) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    let mut offset = 0;
    let mut line = 1;

    while offset < source.len() {
        let (trivia, trivia_len) = docline_core::lex_leading_trivia(&source[offset..]);
        let code_start = offset + trivia_len;
        line += count_line_breaks(&source[offset..code_start]);
        if code_start >= source.len() {
            break;
        }

        let code = &source[code_start..];
        let code_len = code.find(['\n', '\r']).unwrap_or(code.len());
        let doc = doc_comment::extract(&trivia).map(|doc| DocComment {
            start: doc.start.offset_by(offset),
            ..doc
        });

        declarations.push(Declaration {
            line,
            signature: code[..code_len].trim().to_string(),
            doc,
        });
        offset = code_start + code_len;
    }

    declarations
}

/// Read `path` and scan it.
///
/// # Errors
/// Returns [`ParserError::Io`] if the file cannot be read as UTF-8 text.
pub fn scan_file(path: &Path) -> Result<Vec<Declaration>, ParserError> {
    let source = std::fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let declarations = scan_declarations(&source);
    tracing::debug!(
        path = %path.display(),
        declarations = declarations.len(),
        documented = declarations.iter().filter(|d| d.is_documented()).count(),
        "scanned source file"
    );
    Ok(declarations)
}

/// Line breaks in `text`, counting `\r\n` once.
fn count_line_breaks(text: &str) -> usize {
    let bytes = text.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|&(i, &byte)| {
            byte == b'\n' || (byte == b'\r' && bytes.get(i + 1) != Some(&b'\n'))
        })
        .count()
}
