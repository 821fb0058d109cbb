use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::MultiProgress;
use pulecalvas_lexicon::SpanishStemmer;
use pulecalvas_parser::filter::{is_valid, StopwordFilter};
use pulecalvas_parser::parser::tokenize;
use pulecalvas_solver::WordCloud;

use crate::config::AnalysisConfig;
use crate::corpus::Corpus;
use crate::output::{emit, render, CloudOutput, OutputFormat};
use crate::progress::ProgressReporter;

#[derive(Debug, Args)]
pub struct CloudArgs {
    /// Directory of JSON thread files
    #[arg(value_name = "CORPUS_DIR")]
    pub corpus: PathBuf,

    /// Drop stems seen fewer times than this [default: 10]
    #[arg(long, value_name = "N")]
    pub min_total: Option<u64>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Report file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl CloudArgs {
    pub fn execute(&self, config: &AnalysisConfig, multi: &MultiProgress, quiet: bool) -> Result<()> {
        let stopwords = StopwordFilter::spanish().with_extra(&config.extra_stopwords);
        let stemmer = SpanishStemmer::new();

        let corpus = Corpus::open(&self.corpus)?;
        let progress = ProgressReporter::files(multi, corpus.files().len() as u64, quiet)?;

        let mut cloud = WordCloud::new();
        let stats = corpus.walk(&progress, |message| {
            cloud.add_message();
            for token in tokenize(message) {
                if config.skip_punctuation && !token.chars().any(char::is_alphanumeric) {
                    continue;
                }
                let word = token.to_lowercase();
                if is_valid(&word, &stopwords) {
                    cloud.add(&word, &stemmer.stem(&word));
                }
            }
        });
        log::info!("{} words under {} stems", cloud.words(), cloud.stem_count());

        let report = CloudOutput {
            files: stats.files,
            skipped_files: stats.skipped,
            cloud: cloud.finish(self.min_total.unwrap_or(config.min_total)),
        };
        emit(&render(&report, self.format)?, self.output.as_deref())
    }
}
