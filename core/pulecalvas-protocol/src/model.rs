use rkyv::{Archive, Deserialize, Serialize};
use crate::morphology::PartOfSpeech;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Bumped whenever the archived layout changes.
pub const LEXICON_FORMAT_VERSION: u32 = 2;

/// On-disk lexicon cache. Entries are lowercase and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexiconArchive {
    pub version: u32,
    /// Infinitives (`pulir`, `pisar`).
    pub verbs: Vec<String>,
    /// Third person singular present forms (`pule`, `pisa`).
    pub verb_forms: Vec<String>,
    /// Full-form dictionary used for spell checking.
    pub words: Vec<String>,
    /// Hunspell pair checked on top of `words`, kept verbatim.
    pub hunspell: Option<AffixDictionary>,
}

/// Raw text of a Hunspell `.aff` / `.dic` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct AffixDictionary {
    pub aff: String,
    pub dic: String,
}

/// Syllables of a single word plus the index of the stressed one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct SyllableSequence {
    pub syllables: Vec<String>,
    pub stress: Option<usize>,
}

impl SyllableSequence {
    pub fn new(syllables: Vec<String>, stress: Option<usize>) -> Self {
        Self { syllables, stress }
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// The first `n` syllables glued back together (all of them if `n` is too large).
    pub fn prefix(&self, n: usize) -> String {
        let end = n.min(self.syllables.len());
        self.syllables[..end].concat()
    }

    /// Syllables from index `n` to the end; empty if `n` is past the end.
    pub fn suffix_from(&self, n: usize) -> String {
        let start = n.min(self.syllables.len());
        self.syllables[start..].concat()
    }

    pub fn joined(&self) -> String {
        self.syllables.concat()
    }
}

/// A verb/noun split point that passed the verb lexicon checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct SplitCandidate {
    /// Number of syllables in the verb part.
    pub len: usize,
    /// Stem of the verb part.
    pub root: String,
    /// Infinitive rebuilt from `root`.
    pub conj: String,
}

/// A confirmed verb + noun compound.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Decomposition {
    pub word: String,
    pub verb: String,
    pub noun: String,
    pub root: String,
    pub conj: String,
    /// Tag of the noun part on its own.
    pub noun_pos: PartOfSpeech,
    /// Tag of the whole word inside its message.
    pub word_pos: PartOfSpeech,
    /// Syllable index where the noun starts.
    pub split: usize,
}

/// `pulecalvas = pule-calvas - pul/pular - calvas = NOUN - pulecalvas = NOUN`
impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {}-{} - {}/{} - {} = {} - {} = {}",
            self.word,
            self.verb,
            self.noun,
            self.root,
            self.conj,
            self.noun,
            self.noun_pos,
            self.word,
            self.word_pos
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct TaggedToken {
    pub text: String,
    pub pos: PartOfSpeech,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self { text: text.into(), pos }
    }
}
