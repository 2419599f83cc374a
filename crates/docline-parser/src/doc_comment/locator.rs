//! Backward scan for the start of the attached doc comment run.

use docline_core::TriviaPiece;

/// Index of the first piece of the doc comment run attached to the end of
/// `pieces`. Equals `pieces.len()` when the last piece already breaks the
/// attachment.
pub(super) fn run_start(pieces: &[&TriviaPiece]) -> usize {
    pieces
        .iter()
        .rposition(|piece| !keeps_attachment(piece))
        .map_or(0, |index| index + 1)
}

/// Whether `piece` may sit between a doc comment and its declaration.
///
/// Only a single line break qualifies; a count of two or more is a blank
/// line and detaches everything before it.
const fn keeps_attachment(piece: &TriviaPiece) -> bool {
    matches!(
        piece,
        TriviaPiece::DocLineComment(_)
            | TriviaPiece::DocBlockComment(_)
            | TriviaPiece::Newlines(1)
            | TriviaPiece::CarriageReturns(1)
            | TriviaPiece::CarriageReturnLineFeeds(1)
            | TriviaPiece::Spaces(_)
            | TriviaPiece::Tabs(_)
    )
}
