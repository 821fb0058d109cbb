//! Subcommands.

use anyhow::Result;
use clap::Subcommand;
use indicatif::MultiProgress;

use crate::config::AnalysisConfig;

pub mod cloud;
pub mod compile;
pub mod find;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the lexicon cache from word lists
    Compile(compile::CompileArgs),

    /// Find verb + noun compounds in a corpus
    Find(find::FindArgs),

    /// Count content words by stem
    Cloud(cloud::CloudArgs),
}

impl Commands {
    pub fn execute(&self, config: &AnalysisConfig, progress: &MultiProgress, quiet: bool) -> Result<()> {
        match self {
            Commands::Compile(args) => args.execute(config),
            Commands::Find(args) => args.execute(config, progress, quiet),
            Commands::Cloud(args) => args.execute(config, progress, quiet),
        }
    }
}
