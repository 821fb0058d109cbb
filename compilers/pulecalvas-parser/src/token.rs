use pulecalvas_protocol::WordFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punctuation,
}

#[derive(Debug, Clone)]
pub struct Token<'a> {
    pub span: Span,
    /// Text as written, used for tagging.
    pub text: &'a str,
    /// Lowercased text, used for every lexicon lookup.
    pub lower: String,
    pub kind: TokenKind,
    pub flags: WordFlags,
}

impl Token<'_> {
    pub fn is_candidate(&self) -> bool {
        self.flags.contains(WordFlags::CANDIDATE)
    }
}

/// One message after lexing. Token indices match the tagger's indices.
#[derive(Debug, Clone, Default)]
pub struct MessageTokens<'a> {
    pub tokens: Vec<Token<'a>>,
    pub(crate) skip_punctuation: bool,
}

impl<'a> MessageTokens<'a> {
    /// Original-case token texts, ready for sentence tagging.
    pub fn surface(&self) -> Vec<&'a str> {
        self.tokens.iter().map(|t| t.text).collect()
    }

    /// Tokens that pass the stopword and length filter, with their index
    /// in the full token list.
    pub fn content(&self) -> impl Iterator<Item = (usize, &Token<'a>)> + '_ {
        self.tokens.iter().enumerate().filter(move |(_, t)| {
            t.flags.is_content()
                && !(self.skip_punctuation && t.flags.contains(WordFlags::PUNCTUATION))
        })
    }

    /// Content tokens worth handing to the decomposer.
    pub fn candidates(&self) -> impl Iterator<Item = (usize, &Token<'a>)> + '_ {
        self.content().filter(|(_, t)| t.is_candidate())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
