use clap::ValueEnum;

/// Output mode selectable on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
    Text,
}

impl From<OutputFormat> for docline_config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Self::Json,
            OutputFormat::Raw => Self::Raw,
            OutputFormat::Text => Self::Text,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub verbose: bool,
}
