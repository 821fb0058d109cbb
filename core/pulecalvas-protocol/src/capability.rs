//! The three collaborators the decomposition core depends on.

use alloc::string::String;
use alloc::vec::Vec;

use crate::model::{SyllableSequence, TaggedToken};

/// Read-only verb/dictionary lookups plus stemming.
pub trait Lexicon {
    /// Is `infinitive` a known verb (`pular`)?
    fn contains_verb(&self, infinitive: &str) -> bool;
    /// Is `form` a known third person singular present form (`pule`)?
    fn contains_verb_form(&self, form: &str) -> bool;
    fn is_valid_word(&self, word: &str) -> bool;
    fn stem(&self, word: &str) -> String;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains_verb(&self, infinitive: &str) -> bool {
        (**self).contains_verb(infinitive)
    }

    fn contains_verb_form(&self, form: &str) -> bool {
        (**self).contains_verb_form(form)
    }

    fn is_valid_word(&self, word: &str) -> bool {
        (**self).is_valid_word(word)
    }

    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }
}

pub trait Syllabizer {
    fn syllabize(&self, word: &str) -> SyllableSequence;
}

pub trait PosTagger {
    /// Tags an already tokenized sentence; output index `i` belongs to `tokens[i]`.
    fn tag_tokens(&self, tokens: &[&str]) -> Vec<TaggedToken>;

    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        self.tag_tokens(&tokens)
    }
}
