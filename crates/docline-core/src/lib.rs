//! # docline-core
//!
//! Trivia data model shared by every docline crate.
//!
//! Trivia is everything between two tokens that the grammar ignores:
//! whitespace, line breaks and comments. A declaration's leading trivia is
//! where its doc comment lives, so this crate provides:
//!
//! - [`TriviaPiece`]: one run of trivia, with whitespace multiplicity carried
//!   as a count (`Newlines(2)` is a blank line, not two pieces)
//! - [`Trivia`]: the ordered pieces attached to one token
//! - [`TriviaPosition`]: the caller-facing address of a piece
//! - [`lexer`]: turns raw text into trivia pieces
//!
//! # Usage
//!
//! ```
//! use docline_core::{Trivia, TriviaPiece};
//!
//! let trivia = Trivia::lex("/// Adds two numbers.\n").expect("trivia");
//! assert_eq!(
//!     trivia.pieces(),
//!     &[
//!         TriviaPiece::DocLineComment("/// Adds two numbers.".to_string()),
//!         TriviaPiece::Newlines(1),
//!     ]
//! );
//! ```

mod errors;
pub mod lexer;
pub mod trivia;

pub use errors::CoreError;
pub use lexer::{lex_leading_trivia, lex_trivia};
pub use trivia::{Trivia, TriviaPiece, TriviaPosition};
