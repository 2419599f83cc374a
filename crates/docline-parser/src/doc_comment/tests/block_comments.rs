use pretty_assertions::assert_eq;

use super::*;

#[test]
fn one_line_block_keeps_space_before_closer() {
    assert_eq!(
        doc_text("/** A simple doc comment. */").as_deref(),
        Some("A simple doc comment. \n")
    );
}

#[test]
fn ascii_art_matches_line_comment_form() {
    let block = "\
/**
 * Returns the sum.
 *
 * Overflow wraps:
 *
 *     add(u8::MAX, 1) == 0
 */
";
    let lines = "\
/// Returns the sum.
///
/// Overflow wraps:
///
///     add(u8::MAX, 1) == 0
";
    let from_block = doc_text(block).expect("block documented");
    assert_eq!(from_block, "Returns the sum.\n\nOverflow wraps:\n\n    add(u8::MAX, 1) == 0\n");
    assert_eq!(Some(from_block), doc_text(lines));
}

#[test]
fn block_without_ascii_art_keeps_relative_indentation() {
    let source = "\
/**
   Hello
     indented
   back
 */
";
    assert_eq!(
        doc_text(source).as_deref(),
        Some("Hello\n  indented\nback\n")
    );
}

#[test]
fn indented_block_measures_baseline_at_run_start() {
    // The run starts at the first line break, which has nothing before it, so
    // the star column sits past the baseline and stays as text.
    let source = "\n    /**\n     * Method docs.\n     *\n     * More.\n     */\n    ";
    let doc = extract(&lex(source)).expect("documented");
    assert_eq!(doc.text, "* Method docs.\n*\n* More.\n");
}

#[test]
fn tab_before_block_is_not_a_baseline() {
    let source = "\t/**\n\t * Tabbed.\n\t */\n";
    assert_eq!(doc_text(source).as_deref(), Some("* Tabbed.\n"));
}

#[test]
fn star_column_at_zero_is_ascii_art_under_indented_opener() {
    let source = "  /**\n * Hello\n */\n";
    assert_eq!(doc_text(source).as_deref(), Some("Hello\n"));
}

#[test]
fn undecorated_lines_inside_ascii_art_are_kept() {
    let source = "/**\n * Summary.\n *Note: keep\nfoo\n */";
    assert_eq!(
        doc_text(source).as_deref(),
        Some("Summary.\n *Note: keep\nfoo\n")
    );
}

#[test]
fn bare_star_without_line_break_is_text() {
    assert_eq!(doc_text("/**\n **/").as_deref(), Some("*\n"));
}

#[test]
fn text_on_opener_line_disables_ascii_art() {
    let source = "/** Summary.\n * Detail.\n */";
    assert_eq!(doc_text(source).as_deref(), Some("Summary.\n* Detail.\n"));
}

#[test]
fn bare_star_first_line_enables_ascii_art() {
    let source = "/**\n *\n * After a blank.\n */";
    assert_eq!(doc_text(source).as_deref(), Some("After a blank.\n"));
}

#[test]
fn closer_after_text_on_last_line() {
    let source = "/**\n * Hello\n * World */";
    assert_eq!(doc_text(source).as_deref(), Some("Hello\nWorld \n"));
}

#[test]
fn consecutive_blocks_and_lines_concatenate() {
    let source = "/** First. */\n/// Second.\n/**\n * Third.\n */\n";
    assert_eq!(
        doc_text(source).as_deref(),
        Some("First. \nSecond.\nThird.\n")
    );
}

#[test]
fn empty_block_is_absent() {
    assert_eq!(doc_text("/**\n */\n"), None);
    assert_eq!(doc_text("/**   */"), None);
    assert_eq!(doc_text("/**\n *\n *\n */"), None);
}
