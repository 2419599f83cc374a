use anyhow::Context;
use clap::Parser;
use docline_config::DoclineConfig;

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("docline error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;

    let config = load_config(&flags)?;

    commands::dispatch(&cli.command, &config)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DOCLINE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Load layered configuration, then apply command-line overrides.
fn load_config(flags: &cli::GlobalFlags) -> anyhow::Result<DoclineConfig> {
    let mut config = DoclineConfig::load().context("failed to load docline configuration")?;
    if let Some(format) = flags.format {
        config.output.format = format.into();
    }
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
