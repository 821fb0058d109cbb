//! Optional JSON configuration shared by every subcommand.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pulecalvas_lexicon::LexiconSources;
use pulecalvas_parser::DEFAULT_MIN_CANDIDATE_LEN;
use pulecalvas_solver::DEFAULT_MIN_TOTAL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// rkyv lexicon cache.
    pub lexicon: Option<PathBuf>,
    /// Word lists used to build the cache when it is missing.
    pub verbs: Option<PathBuf>,
    pub verb_forms: Option<PathBuf>,
    pub dictionary: Option<PathBuf>,
    /// Hunspell `.aff` paired with a `.dic` dictionary.
    pub affix: Option<PathBuf>,

    /// Words must be longer than this to be decomposed.
    pub min_length: usize,
    /// Stems below this total are left out of the word cloud.
    pub min_total: u64,

    /// Added to the built-in Spanish stopword list.
    pub extra_stopwords: Vec<String>,
    /// Leave punctuation runs (`...`, `!!`) out of the content words.
    pub skip_punctuation: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            lexicon: None,
            verbs: None,
            verb_forms: None,
            dictionary: None,
            affix: None,
            min_length: DEFAULT_MIN_CANDIDATE_LEN,
            min_total: DEFAULT_MIN_TOTAL,
            extra_stopwords: Vec::new(),
            skip_punctuation: false,
        }
    }
}

impl AnalysisConfig {
    /// Defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}

/// Word list paths from the command line, falling back to the config file.
#[derive(Debug, Clone, Default)]
pub struct SourceArgs {
    pub verbs: Option<PathBuf>,
    pub verb_forms: Option<PathBuf>,
    pub dictionary: Option<PathBuf>,
    pub affix: Option<PathBuf>,
}

impl SourceArgs {
    /// `None` unless both the verb list and the dictionary are known.
    pub fn resolve(&self, config: &AnalysisConfig) -> Option<LexiconSources> {
        let verbs = self.verbs.clone().or_else(|| config.verbs.clone())?;
        let dictionary = self.dictionary.clone().or_else(|| config.dictionary.clone())?;
        let verb_forms = self.verb_forms.clone().or_else(|| config.verb_forms.clone());
        let affix = self.affix.clone().or_else(|| config.affix.clone());

        Some(LexiconSources {
            verbs,
            verb_forms,
            dictionary,
            affix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let config = AnalysisConfig::load(None).unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.min_length, 7);
        assert_eq!(config.min_total, 10);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"min_total": 3, "extra_stopwords": ["jaja"]}"#).unwrap();

        let config = AnalysisConfig::load(Some(&path)).unwrap();
        assert_eq!(config.min_total, 3);
        assert_eq!(config.min_length, 7);
        assert_eq!(config.extra_stopwords, ["jaja"]);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"min_lenght": 3}"#).unwrap();
        assert!(AnalysisConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_sources_resolution() {
        let config = AnalysisConfig {
            dictionary: Some("es_ES.dic".into()),
            ..AnalysisConfig::default()
        };

        assert!(SourceArgs::default().resolve(&config).is_none());

        let args = SourceArgs {
            verbs: Some("verbos.txt".into()),
            ..SourceArgs::default()
        };
        let sources = args.resolve(&config).unwrap();
        assert_eq!(sources.verbs, PathBuf::from("verbos.txt"));
        assert_eq!(sources.dictionary, PathBuf::from("es_ES.dic"));
        assert!(sources.verb_forms.is_none());
        assert!(sources.affix.is_none());
    }

    #[test]
    fn test_affix_from_config_or_flag() {
        let config = AnalysisConfig {
            verbs: Some("verbos.txt".into()),
            dictionary: Some("es_ES.dic".into()),
            affix: Some("es_ES.aff".into()),
            ..AnalysisConfig::default()
        };
        let sources = SourceArgs::default().resolve(&config).unwrap();
        assert_eq!(sources.affix, Some(PathBuf::from("es_ES.aff")));

        let args = SourceArgs {
            affix: Some("otro.aff".into()),
            ..SourceArgs::default()
        };
        let sources = args.resolve(&config).unwrap();
        assert_eq!(sources.affix, Some(PathBuf::from("otro.aff")));
    }
}
