use docline_core::{Trivia, TriviaPiece};

use super::*;

mod block_comments;

fn lex(source: &str) -> Trivia {
    Trivia::lex(source).unwrap_or_else(|e| panic!("{source:?} should lex as trivia: {e}"))
}

fn doc_text(source: &str) -> Option<String> {
    extract(&lex(source)).map(|doc| doc.text)
}
