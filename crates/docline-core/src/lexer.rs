//! Trivia lexer.
//!
//! Recognizes the comment and whitespace forms that may appear between
//! tokens:
//!
//! - `///` starts a doc line comment, `////` and other `//` a plain one
//! - `/**` starts a doc block comment unless followed by `*` or `/`
//!   (`/***` banners and the empty `/**/` are plain block comments)
//! - block comments nest, `/* /* */ */` is one comment
//! - identical whitespace characters coalesce into one counted piece, and
//!   `\r\n` pairs are counted separately from bare `\r`
//!
//! Line comments end before their line break; the break is its own piece.

use crate::errors::CoreError;
use crate::trivia::{Trivia, TriviaPiece};

/// Lex `text`, which must consist of trivia only.
///
/// # Errors
/// Returns [`CoreError::UnterminatedBlockComment`] when a block comment runs
/// off the end of `text`, and [`CoreError::NotTrivia`] at the first character
/// that cannot start trivia.
pub fn lex_trivia(text: &str) -> Result<Trivia, CoreError> {
    let scan = scan(text);
    if let Some(offset) = scan.unterminated {
        return Err(CoreError::UnterminatedBlockComment { offset });
    }
    if let Some(found) = text[scan.end..].chars().next() {
        return Err(CoreError::NotTrivia {
            offset: scan.end,
            found,
        });
    }
    Ok(scan.pieces.into())
}

/// Lex the longest trivia prefix of `text`.
///
/// Returns the trivia and the byte offset where non-trivia text begins
/// (`text.len()` when everything is trivia). An unterminated block comment
/// becomes an [`TriviaPiece::Unexpected`] piece covering the rest of `text`.
#[must_use]
pub fn lex_leading_trivia(text: &str) -> (Trivia, usize) {
    let mut scan = scan(text);
    if let Some(offset) = scan.unterminated {
        scan.pieces.push(TriviaPiece::Unexpected(text[offset..].to_string()));
        scan.end = text.len();
    }
    (scan.pieces.into(), scan.end)
}

struct Scan {
    pieces: Vec<TriviaPiece>,
    end: usize,
    unterminated: Option<usize>,
}

fn scan(text: &str) -> Scan {
    let mut pieces = Vec::new();
    let mut pos = 0;
    let mut unterminated = None;

    while pos < text.len() {
        let rest = &text[pos..];
        let piece = if rest.starts_with("\r\n") {
            TriviaPiece::CarriageReturnLineFeeds(count_prefix(rest, "\r\n"))
        } else if rest.starts_with('\r') {
            TriviaPiece::CarriageReturns(count_bare_carriage_returns(rest))
        } else if rest.starts_with('\n') {
            TriviaPiece::Newlines(count_prefix(rest, "\n"))
        } else if rest.starts_with(' ') {
            TriviaPiece::Spaces(count_prefix(rest, " "))
        } else if rest.starts_with('\t') {
            TriviaPiece::Tabs(count_prefix(rest, "\t"))
        } else if rest.starts_with('\u{0B}') {
            TriviaPiece::VerticalTabs(count_prefix(rest, "\u{0B}"))
        } else if rest.starts_with('\u{0C}') {
            TriviaPiece::Formfeeds(count_prefix(rest, "\u{0C}"))
        } else if rest.starts_with("//") {
            line_comment(rest)
        } else if rest.starts_with("/*") {
            if let Some(piece) = block_comment(rest) {
                piece
            } else {
                unterminated = Some(pos);
                break;
            }
        } else {
            break;
        };
        pos += piece.source_len();
        pieces.push(piece);
    }

    Scan {
        pieces,
        end: pos,
        unterminated,
    }
}

/// How many times `unit` repeats at the start of `text`.
fn count_prefix(text: &str, unit: &str) -> usize {
    let mut count = 0;
    let mut rest = text;
    while let Some(next) = rest.strip_prefix(unit) {
        count += 1;
        rest = next;
    }
    count
}

/// `\r` characters at the start of `text` that do not begin a `\r\n` pair.
fn count_bare_carriage_returns(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    while bytes.get(count) == Some(&b'\r') && bytes.get(count + 1) != Some(&b'\n') {
        count += 1;
    }
    count
}

fn line_comment(text: &str) -> TriviaPiece {
    let end = text.find(['\n', '\r']).unwrap_or(text.len());
    let comment = text[..end].to_string();
    if comment.starts_with("///") && !comment.starts_with("////") {
        TriviaPiece::DocLineComment(comment)
    } else {
        TriviaPiece::LineComment(comment)
    }
}

fn block_comment(text: &str) -> Option<TriviaPiece> {
    let end = block_comment_len(text)?;
    let comment = text[..end].to_string();
    let is_doc = comment.starts_with("/**")
        && !comment.starts_with("/***")
        && !comment.starts_with("/**/");
    Some(if is_doc {
        TriviaPiece::DocBlockComment(comment)
    } else {
        TriviaPiece::BlockComment(comment)
    })
}

/// Byte length of the (possibly nested) block comment opening `text`.
fn block_comment_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'/', b'*') => {
                depth += 1;
                i += 2;
            }
            (b'*', b'/') if depth > 0 => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => i += 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn pieces(text: &str) -> Vec<TriviaPiece> {
        lex_trivia(text)
            .expect("text should lex as trivia")
            .into_iter()
            .collect()
    }

    #[test]
    fn coalesces_whitespace_runs() {
        assert_eq!(
            pieces("  \t\t\n\n\n "),
            vec![
                TriviaPiece::Spaces(2),
                TriviaPiece::Tabs(2),
                TriviaPiece::Newlines(3),
                TriviaPiece::Spaces(1),
            ]
        );
    }

    #[test]
    fn separates_bare_carriage_returns_from_pairs() {
        assert_eq!(
            pieces("\r\r\n\r\n\r"),
            vec![
                TriviaPiece::CarriageReturns(1),
                TriviaPiece::CarriageReturnLineFeeds(2),
                TriviaPiece::CarriageReturns(1),
            ]
        );
    }

    #[test]
    fn line_comment_stops_before_line_break() {
        assert_eq!(
            pieces("/// Doc.\r\n// plain\n"),
            vec![
                TriviaPiece::DocLineComment("/// Doc.".to_string()),
                TriviaPiece::CarriageReturnLineFeeds(1),
                TriviaPiece::LineComment("// plain".to_string()),
                TriviaPiece::Newlines(1),
            ]
        );
    }

    #[rstest]
    #[case("/// doc", true)]
    #[case("///", true)]
    #[case("//// banner", false)]
    #[case("// plain", false)]
    #[case("//", false)]
    fn classifies_line_comments(#[case] text: &str, #[case] is_doc: bool) {
        let lexed = pieces(text);
        assert_eq!(lexed.len(), 1);
        assert_eq!(lexed[0].is_doc_comment(), is_doc, "{text:?}");
    }

    #[rstest]
    #[case("/** doc */", true)]
    #[case("/**\n * doc\n */", true)]
    #[case("/**/", false)]
    #[case("/*** banner ***/", false)]
    #[case("/* plain */", false)]
    #[case("/* outer /* inner */ still outer */", false)]
    #[case("/** outer /* inner */ still outer */", true)]
    fn classifies_block_comments(#[case] text: &str, #[case] is_doc: bool) {
        let lexed = pieces(text);
        assert_eq!(lexed.len(), 1, "{text:?} should be one piece: {lexed:?}");
        assert_eq!(lexed[0].is_doc_comment(), is_doc, "{text:?}");
        assert_eq!(lexed[0].source_len(), text.len());
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        assert_eq!(
            lex_trivia("\n  /* never closed"),
            Err(CoreError::UnterminatedBlockComment { offset: 3 })
        );
        assert_eq!(
            lex_trivia("/* /* */"),
            Err(CoreError::UnterminatedBlockComment { offset: 0 })
        );
    }

    #[test]
    fn code_is_not_trivia() {
        assert_eq!(
            lex_trivia("  fn main() {}"),
            Err(CoreError::NotTrivia {
                offset: 2,
                found: 'f'
            })
        );
    }

    #[test]
    fn leading_trivia_stops_at_code() {
        let source = "\n/// Doc.\nfn main() {}\n";
        let (trivia, end) = lex_leading_trivia(source);
        assert_eq!(end, 10);
        assert_eq!(&source[end..], "fn main() {}\n");
        assert_eq!(trivia.len(), 3);
    }

    #[test]
    fn leading_trivia_keeps_unterminated_comment_as_unexpected() {
        let (trivia, end) = lex_leading_trivia(" /** open");
        assert_eq!(end, 9);
        assert_eq!(
            trivia.pieces(),
            &[
                TriviaPiece::Spaces(1),
                TriviaPiece::Unexpected("/** open".to_string()),
            ]
        );
    }

    #[test]
    fn lexed_trivia_prints_back_to_source() {
        let source = "\t/** a\n *  b */\r\n\r\n  /// c\n//// d\u{0C}\n";
        assert_eq!(Trivia::lex(source).expect("trivia").to_string(), source);
    }

    #[test]
    fn multibyte_comment_text_is_preserved() {
        assert_eq!(
            pieces("/// ünïcödé ✓"),
            vec![TriviaPiece::DocLineComment("/// ünïcödé ✓".to_string())]
        );
    }
}
