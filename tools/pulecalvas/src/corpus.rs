//! Corpus walking: every `*.json` thread file under a directory.
//!
//! A thread file looks like
//! `{"parsed_messages": {"<id>": {"message": "<text>"}, ...}}`.
//! Messages keep the order they have in the file, not the order of their
//! ids. Missing keys mean no messages; files that cannot be read or parsed
//! are logged and skipped.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::Deserialize;
use walkdir::WalkDir;

use crate::progress::ProgressReporter;

#[derive(Debug, Default, Deserialize)]
struct ThreadFile {
    #[serde(default)]
    parsed_messages: IndexMap<String, MessageEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct MessageEntry {
    #[serde(default)]
    message: Option<String>,
}

/// Texts of one thread file, in file order.
pub fn read_messages(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let thread: ThreadFile = serde_json::from_str(&text)
        .with_context(|| format!("malformed thread file {}", path.display()))?;

    Ok(thread
        .parsed_messages
        .into_values()
        .filter_map(|entry| entry.message)
        .collect())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub files: usize,
    pub skipped: usize,
    pub messages: u64,
}

#[derive(Debug)]
pub struct Corpus {
    files: Vec<PathBuf>,
}

impl Corpus {
    /// Collects the JSON files under `dir`, recursively and sorted by name.
    pub fn open(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            bail!("corpus directory {} does not exist", dir.display());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("cannot walk corpus entry: {}", err);
                    continue;
                }
            };
            let is_json = entry.path().extension().map_or(false, |ext| ext == "json");
            if entry.file_type().is_file() && is_json {
                files.push(entry.into_path());
            }
        }

        debug!("{} thread files under {}", files.len(), dir.display());
        Ok(Self { files })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Hands every message to `on_message`, file by file.
    pub fn walk<F>(&self, progress: &ProgressReporter, mut on_message: F) -> CorpusStats
    where
        F: FnMut(&str),
    {
        let mut stats = CorpusStats::default();

        for path in &self.files {
            match read_messages(path) {
                Ok(messages) => {
                    stats.files += 1;
                    for message in &messages {
                        stats.messages += 1;
                        on_message(message);
                    }
                }
                Err(err) => {
                    warn!("skipping {:#}", err);
                    stats.skipped += 1;
                }
            }

            let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            progress.file_completed(&name);
        }

        progress.finish();
        stats
    }
}
