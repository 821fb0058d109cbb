use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::MultiProgress;
use log::info;
use pulecalvas_lexicon::SpanishLexicon;
use pulecalvas_morph::SpanishSyllabizer;
use pulecalvas_parser::filter::StopwordFilter;
use pulecalvas_parser::{HeuristicTagger, Lexer};
use pulecalvas_solver::{Decomposer, WordCount};

use crate::config::{AnalysisConfig, SourceArgs};
use crate::corpus::Corpus;
use crate::output::{emit, render, FindReport, OutputFormat};
use crate::progress::ProgressReporter;

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Directory of JSON thread files
    #[arg(value_name = "CORPUS_DIR")]
    pub corpus: PathBuf,

    /// Lexicon cache; built from the word lists below when missing
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    pub verbs: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    pub verb_forms: Option<PathBuf>,

    /// Full-form word list or Hunspell .dic file
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Hunspell .aff file; expands the flags of a .dic dictionary
    #[arg(long, value_name = "FILE")]
    pub affix: Option<PathBuf>,

    /// Only words longer than this are decomposed [default: 7]
    #[arg(long, value_name = "CHARS")]
    pub min_length: Option<usize>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Report file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl FindArgs {
    pub fn execute(&self, config: &AnalysisConfig, multi: &MultiProgress, quiet: bool) -> Result<()> {
        let lexicon_path = self
            .lexicon
            .clone()
            .or_else(|| config.lexicon.clone())
            .context("no lexicon given (--lexicon or \"lexicon\" in the config file)")?;
        let sources = SourceArgs {
            verbs: self.verbs.clone(),
            verb_forms: self.verb_forms.clone(),
            dictionary: self.dictionary.clone(),
            affix: self.affix.clone(),
        }
        .resolve(config);

        let lexicon = SpanishLexicon::load_or_build(&lexicon_path, sources.as_ref())
            .with_context(|| format!("failed to load lexicon {}", lexicon_path.display()))?;

        let stopwords = StopwordFilter::spanish().with_extra(&config.extra_stopwords);
        let lexer = Lexer::new(&lexicon, &stopwords)
            .with_min_candidate_len(self.min_length.unwrap_or(config.min_length))
            .skip_punctuation(config.skip_punctuation);
        let syllabizer = SpanishSyllabizer::new();
        let tagger = HeuristicTagger::new(&lexicon);
        let decomposer = Decomposer::new(&lexicon, &syllabizer, &tagger);

        let corpus = Corpus::open(&self.corpus)?;
        info!("searching {} thread files", corpus.files().len());
        let progress = ProgressReporter::files(multi, corpus.files().len() as u64, quiet)?;

        let mut count = WordCount::new();
        let stats = corpus.walk(&progress, |message| {
            let tokens = lexer.tokenize(message);
            count.record_all(&decomposer.analyze_message(&tokens));
        });
        info!(
            "{} compounds, {} matches in {} messages",
            count.len(),
            count.total(),
            stats.messages
        );

        let report = FindReport::new(stats, &count);
        emit(&render(&report, self.format)?, self.output.as_deref())
    }
}
