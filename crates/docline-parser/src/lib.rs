//! # docline-parser
//!
//! Doc comment extraction for declarations.
//!
//! - [`doc_comment`]: recovers the normalized text of the doc comment
//!   attached to one declaration from its leading trivia
//! - [`scanner`]: line-oriented walk over a source file that splits it into
//!   declaration lines and their leading trivia, feeding [`doc_comment`]
//!
//! The scanner is not a language parser. Any line whose first non-trivia
//! character is code counts as a declaration line.

pub mod doc_comment;
pub mod error;
pub mod scanner;

pub use doc_comment::{extract, extract_from_text, DocComment};
pub use error::ParserError;
pub use scanner::{scan_declarations, scan_file, Declaration};
