use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use indicatif::MultiProgress;

mod commands;
mod config;
mod corpus;
mod logging;
mod output;
mod progress;

use commands::Commands;
use config::AnalysisConfig;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Finds verb + noun compounds (pulecalvas, pisacharcos) in Spanish chat corpora"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v shows every match, -vv debug output)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress logging and the progress bar
    #[arg(short, long, global = true)]
    quiet: bool,

    /// JSON configuration file; command line flags take precedence
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let progress = MultiProgress::new();
    logging::init(cli.verbose, cli.quiet, &progress)?;

    let config = AnalysisConfig::load(cli.config.as_deref())?;
    log::debug!("configuration: {:?}", config);

    cli.command.execute(&config, &progress, cli.quiet)
}
