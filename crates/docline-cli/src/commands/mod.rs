use docline_config::DoclineConfig;

use crate::cli::Commands;

pub mod extract;
pub mod trivia;

/// Route a parsed command to its handler.
pub fn dispatch(command: &Commands, config: &DoclineConfig) -> anyhow::Result<()> {
    match command {
        Commands::Extract(args) => extract::handle(args, config),
        Commands::Trivia(args) => trivia::handle(args, config),
    }
}
