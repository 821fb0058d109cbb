#![no_std] // Shared by the no_std morphology crate

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod capability;
pub mod morphology;

// Re-export core types for convenience
pub use capability::{Lexicon, PosTagger, Syllabizer};
pub use morphology::*;

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_lexicon_archive_serialization() {
        let original = LexiconArchive {
            version: LEXICON_FORMAT_VERSION,
            verbs: vec!["pular".to_string(), "pisar".to_string()],
            verb_forms: vec!["pule".to_string(), "pisa".to_string()],
            words: vec!["calvas".to_string()],
            hunspell: Some(AffixDictionary {
                aff: "SFX S Y 1\nSFX S 0 s [aeiou]\n".to_string(),
                dic: "1\nmoto/S\n".to_string(),
            }),
        };

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize LexiconArchive");

        // Simulate loading the cache from disk
        let deserialized: LexiconArchive =
            from_bytes(&bytes).expect("Failed to deserialize LexiconArchive");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_pos_tags_parse_back() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(pos.as_str().parse::<PartOfSpeech>(), Ok(pos));
        }
        assert_eq!("noun".parse::<PartOfSpeech>(), Ok(PartOfSpeech::Noun));
        assert_eq!("SPACE".parse::<PartOfSpeech>(), Err(UnknownTag));
    }

    #[test]
    fn test_conjugation_class_from_infinitive() {
        assert_eq!(ConjugationClass::from_infinitive("pular"), Some(ConjugationClass::Ar));
        assert_eq!(ConjugationClass::from_infinitive("vender"), Some(ConjugationClass::Er));
        assert_eq!(ConjugationClass::from_infinitive("pulir"), Some(ConjugationClass::Ir));
        assert_eq!(ConjugationClass::from_infinitive("ir"), None);
        assert_eq!(ConjugationClass::from_infinitive("calvas"), None);
    }

    #[test]
    fn test_syllable_sequence_slices() {
        let seq = SyllableSequence::new(
            vec!["pu".into(), "le".into(), "cal".into(), "vas".into()],
            Some(2),
        );
        assert_eq!(seq.prefix(2), "pule");
        assert_eq!(seq.suffix_from(2), "calvas");
        assert_eq!(seq.prefix(9), "pulecalvas");
        assert_eq!(seq.suffix_from(9), String::new());
        assert_eq!(seq.joined(), "pulecalvas");
    }

    #[test]
    fn test_word_flags_content_filter() {
        assert!(WordFlags::CANDIDATE.is_content());
        assert!(WordFlags::PUNCTUATION.is_content());
        assert!(!(WordFlags::STOPWORD | WordFlags::IN_DICTIONARY).is_content());
        assert!(!WordFlags::SHORT.is_content());
    }

    #[test]
    fn test_decomposition_report_line() {
        use alloc::format;
        let found = Decomposition {
            word: "pulecalvas".into(),
            verb: "pule".into(),
            noun: "calvas".into(),
            root: "pul".into(),
            conj: "pular".into(),
            noun_pos: PartOfSpeech::Noun,
            word_pos: PartOfSpeech::Other,
            split: 2,
        };
        assert_eq!(
            format!("{}", found),
            "pulecalvas = pule-calvas - pul/pular - calvas = NOUN - pulecalvas = X"
        );
    }
}
