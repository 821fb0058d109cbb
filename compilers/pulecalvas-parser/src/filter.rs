use std::collections::HashSet;

/// Stopword lookup; the Spanish list plus whatever the corpus needs on top.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl StopwordFilter {
    pub fn new(stopwords: HashSet<String>) -> Self {
        Self { stopwords }
    }

    pub fn spanish() -> Self {
        let stopwords = stop_words::get(stop_words::LANGUAGE::Spanish)
            .into_iter()
            .map(|w| w.to_string().to_lowercase())
            .collect();
        Self { stopwords }
    }

    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(extra.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

/// Content test applied to every lowercased token: longer than one
/// character and not a stopword.
pub fn is_valid(word: &str, stopwords: &StopwordFilter) -> bool {
    word.chars().count() > 1 && !stopwords.is_stopword(word)
}
