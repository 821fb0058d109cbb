#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

use alloc::string::String;

use core::fmt;

pub mod conjugation;
pub mod syllable;

pub use conjugation::{generate, split_infinitive, third_person_present};
pub use syllable::{syllabize, SpanishSyllabizer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MorphError {
    NotAnInfinitive(String),
}

impl fmt::Display for MorphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorphError::NotAnInfinitive(word) => write!(f, "'{}' is not a Spanish infinitive", word),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MorphError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use pulecalvas_protocol::Syllabizer;

    #[test]
    fn test_error_display() {
        let err = MorphError::NotAnInfinitive("calvas".to_string());
        assert_eq!(err.to_string(), "'calvas' is not a Spanish infinitive");
    }

    #[test]
    fn test_syllabizer_trait_object() {
        let syllabizer: &dyn Syllabizer = &SpanishSyllabizer::new();
        assert_eq!(syllabizer.syllabize("pulecalvas").len(), 4);
    }
}
