//! Indentation and decoration measurement.
//!
//! All widths are counted in characters, not bytes. Slicing helpers clamp to
//! the text they are given, so a width larger than a line never panics.

use docline_core::TriviaPiece;

/// Number of leading whitespace characters in `line`.
pub(super) fn indentation(line: &str) -> usize {
    line.chars().take_while(|ch| ch.is_whitespace()).count()
}

pub(super) fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// `line` without its first `count` characters.
pub(super) fn drop_chars(line: &str, count: usize) -> &str {
    let offset = line
        .char_indices()
        .nth(count)
        .map_or(line.len(), |(offset, _)| offset);
    &line[offset..]
}

/// Width of the spaces and tabs directly before `pieces[index]`.
pub(super) fn leading_whitespace(pieces: &[&TriviaPiece], index: usize) -> usize {
    pieces
        .iter()
        .take(index)
        .rev()
        .map_while(|piece| match piece {
            TriviaPiece::Spaces(count) | TriviaPiece::Tabs(count) => Some(*count),
            _ => None,
        })
        .sum()
}

/// Width of the `*` decoration at the start of one block comment line.
///
/// Decoration is exactly `baseline` whitespace characters followed by either
/// ` * ` or a bare ` *` that ends a newline-terminated line. Any other prefix
/// measures 0, so undecorated lines lose nothing.
pub(super) fn decoration_len(line: &str, baseline: usize, terminated: bool) -> usize {
    let rest = drop_chars(line, baseline);
    let indent = &line[..line.len() - rest.len()];
    if indent.chars().count() != baseline || !is_blank(indent) {
        return 0;
    }
    if rest.starts_with(" * ") {
        baseline + 3
    } else if terminated && rest == " *" {
        baseline + 2
    } else {
        0
    }
}
