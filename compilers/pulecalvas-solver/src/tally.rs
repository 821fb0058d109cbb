//! Corpus-wide aggregates: compound counts and the stem word cloud.

use std::collections::{BTreeMap, HashMap};

use pulecalvas_protocol::Decomposition;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Stems seen fewer times than this are dropped from the cloud.
pub const DEFAULT_MIN_TOTAL: u64 = 10;

/// Occurrences of confirmed compounds, keyed by the original word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCount {
    counts: HashMap<String, u64>,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// One increment per decomposition, so a word with two readings counts twice.
    pub fn record(&mut self, decomposition: &Decomposition) {
        *self.counts.entry(decomposition.word.clone()).or_insert(0) += 1;
    }

    pub fn record_all<'d, I>(&mut self, decompositions: I)
    where
        I: IntoIterator<Item = &'d Decomposition>,
    {
        for d in decompositions {
            self.record(d);
        }
    }

    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Count descending, then word ascending.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CloudEntry {
    pub stem: String,
    pub total: u64,
    /// Surface forms that reduced to `stem`.
    pub full_words: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CloudReport {
    pub messages: u64,
    pub words: u64,
    pub entries: Vec<CloudEntry>,
}

/// Frequency of content words grouped by stem.
#[derive(Debug, Clone, Default)]
pub struct WordCloud {
    stems: HashMap<String, CloudEntry>,
    messages: u64,
    words: u64,
}

impl WordCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message(&mut self) {
        self.messages += 1;
    }

    pub fn add(&mut self, word: &str, stem: &str) {
        self.words += 1;
        let entry = self
            .stems
            .entry(stem.to_string())
            .or_insert_with(|| CloudEntry {
                stem: stem.to_string(),
                ..CloudEntry::default()
            });
        entry.total += 1;
        *entry.full_words.entry(word.to_string()).or_insert(0) += 1;
    }

    pub fn messages(&self) -> u64 {
        self.messages
    }

    pub fn words(&self) -> u64 {
        self.words
    }

    pub fn stem_count(&self) -> usize {
        self.stems.len()
    }

    /// Drops stems below `min_total` and ranks the rest by total
    /// (stem ascending on ties).
    pub fn finish(self, min_total: u64) -> CloudReport {
        let mut entries: Vec<CloudEntry> = self
            .stems
            .into_values()
            .filter(|entry| entry.total >= min_total)
            .collect();
        entries.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.stem.cmp(&b.stem)));

        CloudReport {
            messages: self.messages,
            words: self.words,
            entries,
        }
    }
}
