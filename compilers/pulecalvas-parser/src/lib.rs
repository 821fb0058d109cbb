pub mod filter;
pub mod parser;
pub mod tagger;
pub mod token;

use pulecalvas_protocol::{Lexicon, WordFlags};

use crate::filter::StopwordFilter;
use crate::parser::{parse_with_spans, RawToken};
use crate::token::{MessageTokens, Token, TokenKind};

pub use filter::is_valid;
pub use tagger::HeuristicTagger;

/// Words must be longer than this (in chars) to be decomposed.
pub const DEFAULT_MIN_CANDIDATE_LEN: usize = 7;

pub struct Lexer<'a, L: ?Sized> {
    lexicon: &'a L,
    stopwords: &'a StopwordFilter,
    min_candidate_len: usize,
    skip_punctuation: bool,
}

impl<'a, L: Lexicon + ?Sized> Lexer<'a, L> {
    pub fn new(lexicon: &'a L, stopwords: &'a StopwordFilter) -> Self {
        Self {
            lexicon,
            stopwords,
            min_candidate_len: DEFAULT_MIN_CANDIDATE_LEN,
            skip_punctuation: false,
        }
    }

    pub fn with_min_candidate_len(mut self, len: usize) -> Self {
        self.min_candidate_len = len;
        self
    }

    /// Drop multi-character punctuation runs from the content tokens.
    pub fn skip_punctuation(mut self, skip: bool) -> Self {
        self.skip_punctuation = skip;
        self
    }

    /// Primary entry point: Text -> Classified Tokens
    pub fn tokenize<'t>(&self, input: &'t str) -> MessageTokens<'t> {
        let tokens = parse_with_spans(input)
            .into_iter()
            .map(|(span, raw)| {
                let kind = match raw {
                    RawToken::Word(_) => TokenKind::Word,
                    RawToken::Punct(_) => TokenKind::Punctuation,
                };
                let text = raw.text();
                let lower = text.to_lowercase();
                let flags = self.classify(&lower, kind);
                Token { span, text, lower, kind, flags }
            })
            .collect::<Vec<_>>();
        log::trace!("lexed {} tokens from {:?}", tokens.len(), input);

        MessageTokens {
            tokens,
            skip_punctuation: self.skip_punctuation,
        }
    }

    fn classify(&self, lower: &str, kind: TokenKind) -> WordFlags {
        let mut flags = WordFlags::empty();

        if !is_valid(lower, self.stopwords) {
            if lower.chars().count() <= 1 {
                flags |= WordFlags::SHORT;
            } else {
                flags |= WordFlags::STOPWORD;
            }
        }
        if kind == TokenKind::Punctuation {
            flags |= WordFlags::PUNCTUATION;
        }
        if self.lexicon.is_valid_word(lower) {
            flags |= WordFlags::IN_DICTIONARY;
        }

        let long_enough = lower.chars().count() > self.min_candidate_len;
        if kind == TokenKind::Word
            && flags.is_content()
            && !flags.contains(WordFlags::IN_DICTIONARY)
            && long_enough
        {
            flags |= WordFlags::CANDIDATE;
        }

        flags
    }
}
