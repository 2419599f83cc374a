//! Turns doc comment pieces into text lines.

use docline_core::TriviaPiece;

use super::measure;

/// Width of the `///` and `/**` openers.
const OPENER_LEN: usize = 3;
const BLOCK_CLOSER: &str = "*/";

/// Lines of every doc comment piece from `start` onward, in source order.
///
/// Pieces of other kinds are skipped. The ASCII-art baseline is the
/// whitespace in front of the run start and is shared by every block in the
/// run.
pub(super) fn extract_lines<'a>(pieces: &[&'a TriviaPiece], start: usize) -> Vec<&'a str> {
    let baseline = measure::leading_whitespace(pieces, start);
    let mut lines = Vec::new();
    for &piece in pieces.iter().skip(start) {
        match piece {
            TriviaPiece::DocLineComment(text) => {
                lines.push(measure::drop_chars(text, OPENER_LEN));
            }
            TriviaPiece::DocBlockComment(text) => block_lines(text, baseline, &mut lines),
            _ => {}
        }
    }
    lines
}

/// Split one `/** */` comment into lines.
///
/// When the comment body starts on the line after the opener, its first
/// content line decides whether the block carries a `*` column. If it does,
/// each line loses its own `*` decoration; lines without one are kept whole.
fn block_lines<'a>(text: &'a str, baseline: usize, lines: &mut Vec<&'a str>) {
    let mut body = measure::drop_chars(text, OPENER_LEN);
    body = body.strip_suffix(BLOCK_CLOSER).unwrap_or(body);

    let mut ascii_art = false;
    if let Some(rest) = body
        .strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
    {
        body = rest;
        let (first_line, terminated) = body
            .split_once('\n')
            .map_or((body, false), |(line, _)| (line, true));
        let width =
            measure::decoration_len(first_line.trim_end_matches('\r'), baseline, terminated);
        ascii_art = width > 0;
        tracing::trace!(baseline, width, "measured block comment decoration");
    }

    while !body.is_empty() {
        let (mut line, remainder) = match body.split_once('\n') {
            Some((line, remainder)) => (line.strip_suffix('\r').unwrap_or(line), Some(remainder)),
            None => (body, None),
        };
        if ascii_art {
            let width = measure::decoration_len(line, baseline, remainder.is_some());
            line = measure::drop_chars(line, width);
        }
        match remainder {
            Some(remainder) => {
                lines.push(line);
                body = remainder;
            }
            None => {
                // Whitespace left in front of the closer on its own line.
                if !measure::is_blank(line) {
                    lines.push(line);
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(text: &str, baseline: usize) -> Vec<&str> {
        let mut lines = Vec::new();
        block_lines(text, baseline, &mut lines);
        lines
    }

    #[test]
    fn one_line_block_keeps_interior_spaces() {
        assert_eq!(block("/** Hello. */", 0), vec![" Hello. "]);
    }

    #[test]
    fn ascii_art_column_is_stripped() {
        assert_eq!(
            block("/**\n * Hello\n *\n * World\n */", 0),
            vec!["Hello", "", "World"]
        );
    }

    #[test]
    fn ascii_art_respects_baseline() {
        assert_eq!(
            block("/**\n     * Hello\n     *   indented\n     */", 4),
            vec!["Hello", "  indented"]
        );
    }

    #[test]
    fn misaligned_first_line_disables_decoration() {
        assert_eq!(
            block("/**\n * Hello\n * World\n */", 4),
            vec![" * Hello", " * World"]
        );
    }

    #[test]
    fn plain_block_lines_are_verbatim() {
        assert_eq!(
            block("/**\n   Hello\n     indented\n */", 0),
            vec!["   Hello", "     indented"]
        );
    }

    #[test]
    fn trailing_text_before_closer_is_kept() {
        assert_eq!(block("/**\n * a\n * b */", 0), vec!["a", "b "]);
    }

    #[test]
    fn unterminated_body_is_still_split() {
        assert_eq!(block("/** a\n b", 0), vec![" a", " b"]);
    }

    #[test]
    fn crlf_line_breaks_are_removed() {
        assert_eq!(
            block("/**\r\n * Hello\r\n *\r\n * World\r\n */", 0),
            vec!["Hello", "", "World"]
        );
    }

    #[test]
    fn decoration_never_crosses_a_line_break() {
        assert_eq!(block("/**\n * a\n\n * b\n */", 0), vec!["a", "", "b"]);
    }

    #[test]
    fn undecorated_lines_in_ascii_art_keep_their_text() {
        assert_eq!(
            block("/**\n * Summary.\n *Note: keep\nfoo\n */", 0),
            vec!["Summary.", " *Note: keep", "foo"]
        );
    }

    #[test]
    fn bare_star_before_closer_is_text() {
        assert_eq!(block("/**\n **/", 0), vec![" *"]);
        assert_eq!(block("/**\n * a\n **/", 0), vec!["a", " *"]);
    }

    #[test]
    fn baseline_comes_from_the_run_start() {
        let pieces = [
            TriviaPiece::Spaces(4),
            TriviaPiece::DocBlockComment("/**\n     * a\n     */".to_string()),
            TriviaPiece::Newlines(1),
            TriviaPiece::Spaces(4),
            TriviaPiece::DocBlockComment("/**\n     * b\n     */".to_string()),
        ];
        let refs: Vec<&TriviaPiece> = pieces.iter().collect();
        assert_eq!(extract_lines(&refs, 1), vec!["a", "b"]);
        assert_eq!(extract_lines(&refs, 0), vec!["     * a", "     * b"]);
    }

    #[test]
    fn empty_blocks_produce_no_lines() {
        assert!(block("/***/", 0).is_empty());
        assert!(block("/**  */", 0).is_empty());
        assert_eq!(block("/**\n */", 0), Vec::<&str>::new());
    }

    #[test]
    fn skips_non_doc_pieces_in_the_run() {
        let pieces = [
            TriviaPiece::DocLineComment("/// one".to_string()),
            TriviaPiece::LineComment("// noise".to_string()),
            TriviaPiece::Newlines(1),
            TriviaPiece::DocLineComment("/// two".to_string()),
        ];
        let refs: Vec<&TriviaPiece> = pieces.iter().collect();
        assert_eq!(extract_lines(&refs, 0), vec![" one", " two"]);
        assert_eq!(extract_lines(&refs, 2), vec![" two"]);
        assert!(extract_lines(&refs, 4).is_empty());
    }
}
