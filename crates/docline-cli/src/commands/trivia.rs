use anyhow::Context;
use docline_config::DoclineConfig;

use crate::cli::TriviaArgs;
use crate::output;

/// Handle `docline trivia`.
pub fn handle(args: &TriviaArgs, config: &DoclineConfig) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let doc = docline_parser::extract_from_text(&text)
        .with_context(|| format!("{} does not hold leading trivia only", args.path.display()))?;
    if doc.is_none() {
        tracing::info!(path = %args.path.display(), "no doc comment attached");
    }
    print!("{}", output::render_doc(doc.as_ref(), config.output.format)?);
    Ok(())
}
