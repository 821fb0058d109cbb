//! Report rendering (text table or pretty JSON) and destination.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use pulecalvas_solver::{CloudReport, WordCount};
use serde::Serialize;

use crate::corpus::CorpusStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One entry per line, tab separated
    Text,
    /// Pretty printed JSON document
    Json,
}

pub trait Report: Serialize {
    fn to_text(&self) -> String;
}

pub fn render<R: Report>(report: &R, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report).context("failed to encode report")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Writes to `output`, or stdout when no file is given.
pub fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write report to {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WordEntry<'a> {
    pub word: &'a str,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct FindReport<'a> {
    pub files: usize,
    pub skipped_files: usize,
    pub messages: u64,
    pub matches: u64,
    pub words: Vec<WordEntry<'a>>,
}

impl<'a> FindReport<'a> {
    pub fn new(stats: CorpusStats, count: &'a WordCount) -> Self {
        Self {
            files: stats.files,
            skipped_files: stats.skipped,
            messages: stats.messages,
            matches: count.total(),
            words: count
                .sorted()
                .into_iter()
                .map(|(word, count)| WordEntry { word, count })
                .collect(),
        }
    }
}

impl Report for FindReport<'_> {
    fn to_text(&self) -> String {
        let mut out = format!(
            "# {} files ({} skipped), {} messages, {} matches\n",
            self.files, self.skipped_files, self.messages, self.matches
        );
        for entry in &self.words {
            let _ = writeln!(out, "{}\t{}", entry.word, entry.count);
        }
        out
    }
}

#[derive(Debug, Serialize)]
pub struct CloudOutput {
    pub files: usize,
    pub skipped_files: usize,
    #[serde(flatten)]
    pub cloud: CloudReport,
}

impl Report for CloudOutput {
    fn to_text(&self) -> String {
        let mut out = format!(
            "# {} files ({} skipped), {} messages, {} words, {} stems\n",
            self.files,
            self.skipped_files,
            self.cloud.messages,
            self.cloud.words,
            self.cloud.entries.len()
        );
        for entry in &self.cloud.entries {
            let words: Vec<String> = entry
                .full_words
                .iter()
                .map(|(word, count)| format!("{}:{}", word, count))
                .collect();
            let _ = writeln!(out, "{}\t{}\t{}", entry.stem, entry.total, words.join(" "));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulecalvas_protocol::{Decomposition, PartOfSpeech};
    use pulecalvas_solver::WordCloud;

    fn count() -> WordCount {
        let mut count = WordCount::new();
        for word in ["pulecalvas", "pisacharcos", "pulecalvas"] {
            count.record(&Decomposition {
                word: word.into(),
                verb: String::new(),
                noun: String::new(),
                root: String::new(),
                conj: String::new(),
                noun_pos: PartOfSpeech::Noun,
                word_pos: PartOfSpeech::Noun,
                split: 2,
            });
        }
        count
    }

    fn stats() -> CorpusStats {
        CorpusStats {
            files: 2,
            skipped: 1,
            messages: 5,
        }
    }

    #[test]
    fn test_find_text() {
        let count = count();
        let text = render(&FindReport::new(stats(), &count), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "# 2 files (1 skipped), 5 messages, 3 matches\npulecalvas\t2\npisacharcos\t1\n"
        );
    }

    #[test]
    fn test_find_json() {
        let count = count();
        let json = render(&FindReport::new(stats(), &count), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["matches"], 3);
        assert_eq!(value["words"][0]["word"], "pulecalvas");
        assert_eq!(value["words"][0]["count"], 2);
    }

    #[test]
    fn test_cloud_outputs() {
        let mut cloud = WordCloud::new();
        cloud.add_message();
        cloud.add("calvas", "calv");
        cloud.add("calvo", "calv");
        let report = CloudOutput {
            files: 1,
            skipped_files: 0,
            cloud: cloud.finish(1),
        };

        let text = render(&report, OutputFormat::Text).unwrap();
        assert!(text.ends_with("calv\t2\tcalvas:1 calvo:1\n"));

        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["messages"], 1);
        assert_eq!(value["entries"][0]["full_words"]["calvo"], 1);
    }
}
