use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract doc comments for every declaration in files or directories.
    Extract(ExtractArgs),
    /// Extract the doc comment from a file that holds only leading trivia.
    Trivia(TriviaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// Files or directories to scan (directories are walked recursively).
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Also report declarations without a doc comment.
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TriviaArgs {
    /// File containing whitespace and comments only.
    pub path: PathBuf,
}
