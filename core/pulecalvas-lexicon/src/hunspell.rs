//! Affix-aware spell checking for a Hunspell `.aff` / `.dic` pair.
//!
//! The `.dic` file only lists stems with flags (`moto/S`); the inflected
//! forms (`motos`) exist only through the `.aff` rules, so membership is
//! answered by a Hunspell-compatible checker rather than a word set.

use std::fmt;
use std::path::Path;

use pulecalvas_protocol::AffixDictionary;
use spellbook::Dictionary;

use crate::error::LexiconError;
use crate::wordlist;

pub struct HunspellChecker {
    source: AffixDictionary,
    dictionary: Dictionary,
}

impl HunspellChecker {
    /// `origin` is only used to name the files in errors.
    pub fn new(source: AffixDictionary, origin: &Path) -> Result<Self, LexiconError> {
        let dictionary =
            Dictionary::new(&source.aff, &source.dic).map_err(|e| LexiconError::Affix {
                path: origin.to_path_buf(),
                reason: format!("{:?}", e),
            })?;
        Ok(Self { source, dictionary })
    }

    pub fn read(aff: &Path, dic: &Path) -> Result<Self, LexiconError> {
        let source = AffixDictionary {
            aff: wordlist::read(aff)?,
            dic: wordlist::read(dic)?,
        };
        Self::new(source, aff)
    }

    pub fn check(&self, word: &str) -> bool {
        self.dictionary.check(word)
    }

    pub fn source(&self) -> &AffixDictionary {
        &self.source
    }
}

impl fmt::Debug for HunspellChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HunspellChecker")
            .field("aff_bytes", &self.source.aff.len())
            .field("dic_bytes", &self.source.dic.len())
            .finish()
    }
}
