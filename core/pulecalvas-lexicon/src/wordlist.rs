//! Readers for the plain-text word lists a lexicon is built from.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LexiconError;

/// Where to find the raw word lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconSources {
    /// One infinitive per line; pronominal entries (`lavarse`) are allowed.
    pub verbs: PathBuf,
    /// Third person singular present forms. Derived from `verbs` when absent.
    pub verb_forms: Option<PathBuf>,
    /// Full-form list, or the `.dic` half of a Hunspell pair.
    pub dictionary: PathBuf,
    /// Hunspell `.aff` file. Without it a `.dic` only contributes its bare
    /// stems (`moto`, never `motos`).
    pub affix: Option<PathBuf>,
}

pub(crate) fn read(path: &Path) -> Result<String, LexiconError> {
    fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))
}

/// Meaningful lines: trimmed, lowercased, no blanks, no `#` comments.
fn entries(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
}

/// Drops the pronominal `se` the same way verb categories list them.
fn bare_infinitive(entry: &str) -> &str {
    match pulecalvas_morph::split_infinitive(entry) {
        Ok((stem, class)) => &entry[..stem.len() + class.suffix().len()],
        Err(_) => entry,
    }
}

pub fn parse_verbs(text: &str) -> HashSet<String> {
    entries(text)
        .map(|entry| bare_infinitive(&entry).to_string())
        .collect()
}

/// Forms may also be comma separated (`pule, pula`).
pub fn parse_verb_forms(text: &str) -> HashSet<String> {
    entries(text)
        .flat_map(|line| {
            line.split(',')
                .map(str::trim)
                .filter(|form| !form.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Accepts both plain lists and Hunspell `.dic` files: a leading entry
/// count is skipped and `/FLAGS` plus morphological fields are cut off.
/// Only the stems survive; inflected forms need the `.aff` rules
/// (see [`crate::hunspell`]).
pub fn parse_dictionary(text: &str) -> HashSet<String> {
    let mut lines = entries(text).peekable();
    if lines
        .peek()
        .map_or(false, |first| first.chars().all(|c| c.is_ascii_digit()))
    {
        lines.next();
    }
    lines
        .filter_map(|line| {
            let word = line.split(['/', '\t', ' ']).next()?.trim();
            (!word.is_empty()).then(|| word.to_string())
        })
        .collect()
}

pub fn read_verbs(path: &Path) -> Result<HashSet<String>, LexiconError> {
    Ok(parse_verbs(&read(path)?))
}

pub fn read_verb_forms(path: &Path) -> Result<HashSet<String>, LexiconError> {
    Ok(parse_verb_forms(&read(path)?))
}

pub fn read_dictionary(path: &Path) -> Result<HashSet<String>, LexiconError> {
    Ok(parse_dictionary(&read(path)?))
}

/// Regular third person forms for every verb that has one.
pub fn derive_verb_forms<'a>(verbs: impl IntoIterator<Item = &'a String>) -> HashSet<String> {
    verbs
        .into_iter()
        .filter_map(|verb| match pulecalvas_morph::third_person_present(verb) {
            Ok(form) => Some(form),
            Err(e) => {
                log::debug!("skipping verb form derivation: {}", e);
                None
            }
        })
        .collect()
}
