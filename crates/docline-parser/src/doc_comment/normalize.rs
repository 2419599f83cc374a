//! Indentation normalization and final joining.

use super::measure;

/// Join `lines` into the final comment text.
///
/// Lines before the first non-blank line are dropped. Every remaining line
/// loses the first non-blank line's indentation, but never more than its own
/// leading whitespace, and is followed by `\n`. Returns `None` when no line
/// has any text.
pub(super) fn normalize(lines: &[&str]) -> Option<String> {
    let first = lines.iter().position(|line| !measure::is_blank(line))?;
    let indentation = measure::indentation(lines[first]);

    let mut text = String::new();
    for line in &lines[first..] {
        let width = indentation.min(measure::indentation(line));
        text.push_str(measure::drop_chars(line, width));
        text.push('\n');
    }

    (!text.is_empty()).then_some(text)
}
