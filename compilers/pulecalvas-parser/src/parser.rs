use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    combinator::map,
    IResult,
};
use crate::token::Span;

/// Word characters in the `\w` sense: letters (accented included), digits, underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_punct_char(c: char) -> bool {
    !is_word_char(c) && !c.is_whitespace()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawToken<'a> {
    Word(&'a str),
    /// A run of punctuation such as `...` or `¿`.
    Punct(&'a str),
}

impl<'a> RawToken<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            RawToken::Word(s) | RawToken::Punct(s) => s,
        }
    }
}

/// Splits text into alternating word and punctuation runs (`\w+|[^\w\s]+`),
/// the same cut as a word/punct tokenizer.
pub fn parse_with_spans(original_input: &str) -> Vec<(Span, RawToken)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip whitespace (Unicode aware, messages carry NBSPs)
        let (next_input, _) =
            match take_while::<_, &str, nom::error::Error<&str>>(char::is_whitespace)(input) {
                Ok(res) => res,
                Err(_) => break,
            };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Try to match a token
        let parse_res: IResult<&str, RawToken> = alt((
            map(take_while1(is_word_char), RawToken::Word),
            map(take_while1(is_punct_char), RawToken::Punct),
        ))(input);

        match parse_res {
            Ok((next_input, token)) => {
                let len = input.len() - next_input.len();
                let start = original_input.len() - input.len();

                result.push((Span::new(start, start + len), token));
                input = next_input;
            }
            Err(_) => {
                // Skip one char to recover (resilient parsing)
                if let Some(c) = input.chars().next() {
                    input = &input[c.len_utf8()..];
                } else {
                    break;
                }
            }
        }
    }

    result
}

/// Just the token texts.
pub fn tokenize(input: &str) -> Vec<&str> {
    parse_with_spans(input)
        .into_iter()
        .map(|(_, raw)| raw.text())
        .collect()
}
