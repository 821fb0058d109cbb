use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;
use core::fmt;
use core::str::FromStr;

/// Universal Dependencies part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    #[cfg_attr(feature = "serde", serde(rename = "ADJ"))]
    Adjective = 0,
    #[cfg_attr(feature = "serde", serde(rename = "ADP"))]
    Adposition = 1,
    #[cfg_attr(feature = "serde", serde(rename = "ADV"))]
    Adverb = 2,
    #[cfg_attr(feature = "serde", serde(rename = "AUX"))]
    Auxiliary = 3,
    #[cfg_attr(feature = "serde", serde(rename = "CCONJ"))]
    CoordinatingConjunction = 4,
    #[cfg_attr(feature = "serde", serde(rename = "DET"))]
    Determiner = 5,
    #[cfg_attr(feature = "serde", serde(rename = "INTJ"))]
    Interjection = 6,
    #[cfg_attr(feature = "serde", serde(rename = "NOUN"))]
    Noun = 7,
    #[cfg_attr(feature = "serde", serde(rename = "NUM"))]
    Numeral = 8,
    #[cfg_attr(feature = "serde", serde(rename = "PART"))]
    Particle = 9,
    #[cfg_attr(feature = "serde", serde(rename = "PRON"))]
    Pronoun = 10,
    #[cfg_attr(feature = "serde", serde(rename = "PROPN"))]
    ProperNoun = 11,
    #[cfg_attr(feature = "serde", serde(rename = "PUNCT"))]
    Punctuation = 12,
    #[cfg_attr(feature = "serde", serde(rename = "SCONJ"))]
    SubordinatingConjunction = 13,
    #[cfg_attr(feature = "serde", serde(rename = "SYM"))]
    Symbol = 14,
    #[cfg_attr(feature = "serde", serde(rename = "VERB"))]
    Verb = 15,
    /// Anything the tagger could not classify.
    #[cfg_attr(feature = "serde", serde(rename = "X"))]
    Other = 16,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 17] = [
        PartOfSpeech::Adjective,
        PartOfSpeech::Adposition,
        PartOfSpeech::Adverb,
        PartOfSpeech::Auxiliary,
        PartOfSpeech::CoordinatingConjunction,
        PartOfSpeech::Determiner,
        PartOfSpeech::Interjection,
        PartOfSpeech::Noun,
        PartOfSpeech::Numeral,
        PartOfSpeech::Particle,
        PartOfSpeech::Pronoun,
        PartOfSpeech::ProperNoun,
        PartOfSpeech::Punctuation,
        PartOfSpeech::SubordinatingConjunction,
        PartOfSpeech::Symbol,
        PartOfSpeech::Verb,
        PartOfSpeech::Other,
    ];

    /// The UD tag as printed in reports (`NOUN`, `VERB`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Adjective => "ADJ",
            PartOfSpeech::Adposition => "ADP",
            PartOfSpeech::Adverb => "ADV",
            PartOfSpeech::Auxiliary => "AUX",
            PartOfSpeech::CoordinatingConjunction => "CCONJ",
            PartOfSpeech::Determiner => "DET",
            PartOfSpeech::Interjection => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Numeral => "NUM",
            PartOfSpeech::Particle => "PART",
            PartOfSpeech::Pronoun => "PRON",
            PartOfSpeech::ProperNoun => "PROPN",
            PartOfSpeech::Punctuation => "PUNCT",
            PartOfSpeech::SubordinatingConjunction => "SCONJ",
            PartOfSpeech::Symbol => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Other => "X",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag;

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown part-of-speech tag")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownTag {}

impl FromStr for PartOfSpeech {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartOfSpeech::ALL
            .iter()
            .copied()
            .find(|pos| pos.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownTag)
    }
}

/// Regular Spanish conjugation classes, keyed by infinitive ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum ConjugationClass {
    Ar = 1,
    Er = 2,
    Ir = 3,
}

impl ConjugationClass {
    /// Iteration order used when rebuilding infinitives from a stem.
    pub const ALL: [ConjugationClass; 3] =
        [ConjugationClass::Ar, ConjugationClass::Er, ConjugationClass::Ir];

    pub const fn suffix(self) -> &'static str {
        match self {
            ConjugationClass::Ar => "ar",
            ConjugationClass::Er => "er",
            ConjugationClass::Ir => "ir",
        }
    }

    /// Class of an infinitive such as `pulir`; `None` for anything else.
    pub fn from_infinitive(infinitive: &str) -> Option<Self> {
        ConjugationClass::ALL
            .iter()
            .copied()
            .find(|class| infinitive.len() > 2 && infinitive.ends_with(class.suffix()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Person {
    First = 1,
    Second = 2,
    Third = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Number {
    Singular = 0,
    Plural = 1,
}

bitflags! {
    /// Lexical facts the lexer attaches to every token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct WordFlags: u32 {
        const STOPWORD = 1;
        /// Single character tokens.
        const SHORT = 2;
        const IN_DICTIONARY = 4;
        const PUNCTUATION = 8;
        /// Long, out-of-dictionary word worth decomposing.
        const CANDIDATE = 16;
    }
}

impl WordFlags {
    /// Tokens that survive the stopword/length filter. Multi-character
    /// punctuation (`...`, `!!`) passes unless the lexer is told otherwise.
    pub fn is_content(self) -> bool {
        !self.intersects(WordFlags::STOPWORD | WordFlags::SHORT)
    }
}
