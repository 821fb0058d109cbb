//! Lexicon Provider: the verb, verb-form and dictionary sets the compound
//! finder queries, plus Snowball stemming.
//!
//! A lexicon is built once from word lists ([`LexiconSources`]) and cached
//! as an rkyv archive. After construction it is immutable.

pub mod cache;
pub mod error;
pub mod hunspell;
pub mod wordlist;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use pulecalvas_protocol::{
    AffixDictionary, ArchivedLexiconArchive, Lexicon, LexiconArchive, LEXICON_FORMAT_VERSION,
};
use rust_stemmers::{Algorithm, Stemmer};

pub use error::LexiconError;
pub use hunspell::HunspellChecker;
pub use wordlist::LexiconSources;

/// Snowball Spanish stemmer. Usable on its own, without any word list.
pub struct SpanishStemmer(Stemmer);

impl SpanishStemmer {
    pub fn new() -> Self {
        Self(Stemmer::create(Algorithm::Spanish))
    }

    pub fn stem(&self, word: &str) -> String {
        self.0.stem(word).into_owned()
    }
}

impl Default for SpanishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SpanishStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SpanishStemmer")
    }
}

pub struct SpanishLexicon {
    verbs: HashSet<String>,
    verb_forms: HashSet<String>,
    words: HashSet<String>,
    hunspell: Option<HunspellChecker>,
    stemmer: SpanishStemmer,
}

impl fmt::Debug for SpanishLexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanishLexicon")
            .field("verbs", &self.verbs.len())
            .field("verb_forms", &self.verb_forms.len())
            .field("words", &self.words.len())
            .field("hunspell", &self.hunspell.is_some())
            .finish()
    }
}

impl SpanishLexicon {
    pub fn new<V, F, W>(verbs: V, verb_forms: F, words: W) -> Self
    where
        V: IntoIterator<Item = String>,
        F: IntoIterator<Item = String>,
        W: IntoIterator<Item = String>,
    {
        Self {
            verbs: verbs.into_iter().collect(),
            verb_forms: verb_forms.into_iter().collect(),
            words: words.into_iter().collect(),
            hunspell: None,
            stemmer: SpanishStemmer::new(),
        }
    }

    /// Words the checker accepts are valid on top of the plain word set.
    pub fn with_hunspell(mut self, checker: HunspellChecker) -> Self {
        self.hunspell = Some(checker);
        self
    }

    /// `path` names the cache in errors when the stored affix pair no
    /// longer parses.
    pub fn from_archived(archived: &ArchivedLexiconArchive, path: &Path) -> Result<Self, LexiconError> {
        let owned = |list: &rkyv::vec::ArchivedVec<rkyv::string::ArchivedString>| {
            list.iter().map(|s| s.as_str().to_owned()).collect::<Vec<_>>()
        };
        let lexicon = Self::new(
            owned(&archived.verbs),
            owned(&archived.verb_forms),
            owned(&archived.words),
        );
        match archived.hunspell.as_ref() {
            Some(pair) => {
                let source = AffixDictionary {
                    aff: pair.aff.as_str().to_owned(),
                    dic: pair.dic.as_str().to_owned(),
                };
                Ok(lexicon.with_hunspell(HunspellChecker::new(source, path)?))
            }
            None => Ok(lexicon),
        }
    }

    /// Builds from raw word lists. Missing verb forms are derived from the
    /// verbs with regular conjugation.
    pub fn from_sources(sources: &LexiconSources) -> Result<Self, LexiconError> {
        let verbs = wordlist::read_verbs(&sources.verbs)?;
        if verbs.is_empty() {
            return Err(LexiconError::Empty("verb list"));
        }

        let verb_forms = match &sources.verb_forms {
            Some(path) => wordlist::read_verb_forms(path)?,
            None => {
                log::info!("no verb form list given, deriving regular forms from {} verbs", verbs.len());
                wordlist::derive_verb_forms(&verbs)
            }
        };

        let words = wordlist::read_dictionary(&sources.dictionary)?;
        if words.is_empty() {
            return Err(LexiconError::Empty("dictionary"));
        }

        let mut lexicon = Self::new(verbs, verb_forms, words);
        match &sources.affix {
            Some(aff) => {
                lexicon = lexicon.with_hunspell(HunspellChecker::read(aff, &sources.dictionary)?);
            }
            None if is_hunspell_dic(&sources.dictionary) => {
                log::warn!(
                    "{} looks like a Hunspell .dic but no affix file was given; inflected forms will be unknown",
                    sources.dictionary.display()
                );
            }
            None => {}
        }
        log::info!(
            "built lexicon: {} verbs, {} verb forms, {} words, affix rules: {}",
            lexicon.verbs.len(),
            lexicon.verb_forms.len(),
            lexicon.words.len(),
            lexicon.hunspell.is_some()
        );
        Ok(lexicon)
    }

    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let bytes = cache::read_bytes(path)?;
        let archived = cache::validate(path, &bytes)?;
        let lexicon = Self::from_archived(archived, path)?;
        log::info!("loaded lexicon cache {}: {:?}", path.display(), lexicon);
        Ok(lexicon)
    }

    pub fn save(&self, path: &Path) -> Result<(), LexiconError> {
        cache::write_archive(path, &self.to_archive())
    }

    /// Loads the cache at `path`, building and writing it first when it does
    /// not exist yet.
    pub fn load_or_build(path: &Path, sources: Option<&LexiconSources>) -> Result<Self, LexiconError> {
        if path.exists() {
            log::debug!("lexicon cache hit: {}", path.display());
            return Self::load(path);
        }

        let sources = sources.ok_or_else(|| LexiconError::MissingSources {
            path: path.to_path_buf(),
        })?;
        let lexicon = Self::from_sources(sources)?;
        lexicon.save(path)?;
        Ok(lexicon)
    }

    /// Sorted snapshot, so equal lexicons produce identical caches.
    pub fn to_archive(&self) -> LexiconArchive {
        let sorted = |set: &HashSet<String>| {
            let mut list: Vec<String> = set.iter().cloned().collect();
            list.sort_unstable();
            list
        };
        LexiconArchive {
            version: LEXICON_FORMAT_VERSION,
            verbs: sorted(&self.verbs),
            verb_forms: sorted(&self.verb_forms),
            words: sorted(&self.words),
            hunspell: self.hunspell.as_ref().map(|h| h.source().clone()),
        }
    }

    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }

    pub fn verb_form_count(&self) -> usize {
        self.verb_forms.len()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn has_affix_rules(&self) -> bool {
        self.hunspell.is_some()
    }
}

fn is_hunspell_dic(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("dic"))
}

impl Lexicon for SpanishLexicon {
    fn contains_verb(&self, infinitive: &str) -> bool {
        self.verbs.contains(infinitive)
    }

    fn contains_verb_form(&self, form: &str) -> bool {
        self.verb_forms.contains(form)
    }

    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(word) || self.hunspell.as_ref().map_or(false, |h| h.check(word))
    }

    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }
}
