use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pulecalvas_lexicon::SpanishLexicon;

use crate::config::{AnalysisConfig, SourceArgs};

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Infinitives, one per line
    #[arg(long, value_name = "FILE")]
    pub verbs: Option<PathBuf>,

    /// Third person singular present forms; derived from the verbs when omitted
    #[arg(long, value_name = "FILE")]
    pub verb_forms: Option<PathBuf>,

    /// Full-form word list or Hunspell .dic file
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Hunspell .aff file; expands the flags of a .dic dictionary
    #[arg(long, value_name = "FILE")]
    pub affix: Option<PathBuf>,

    /// Where to write the cache (default: `lexicon` from the config file)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl CompileArgs {
    pub fn execute(&self, config: &AnalysisConfig) -> Result<()> {
        let sources = SourceArgs {
            verbs: self.verbs.clone(),
            verb_forms: self.verb_forms.clone(),
            dictionary: self.dictionary.clone(),
            affix: self.affix.clone(),
        }
        .resolve(config)
        .context("both --verbs and --dictionary are required")?;

        let output = self
            .output
            .clone()
            .or_else(|| config.lexicon.clone())
            .context("no output path given (--output or \"lexicon\" in the config file)")?;

        let lexicon = SpanishLexicon::from_sources(&sources)
            .context("failed to build the lexicon")?;
        lexicon
            .save(&output)
            .with_context(|| format!("failed to write {}", output.display()))?;

        println!(
            "Compiled {} verbs, {} verb forms and {} words into {}",
            lexicon.verb_count(),
            lexicon.verb_form_count(),
            lexicon.word_count(),
            output.display()
        );
        Ok(())
    }
}
