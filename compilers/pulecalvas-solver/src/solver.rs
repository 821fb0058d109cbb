use log::{debug, info};
use pulecalvas_parser::token::MessageTokens;
use pulecalvas_protocol::{
    Decomposition, Lexicon, PartOfSpeech, PosTagger, SplitCandidate, SyllableSequence, Syllabizer,
    TaggedToken,
};

use crate::candidates::build_candidates;

/// Turns split candidates into confirmed decompositions.
///
/// The noun part is the syllables after the split; it has to be a valid
/// dictionary word. `sentence` is the tagging of the whole message and
/// `index` the word's position in it; a missing index tags the word `X`.
pub fn validate_candidates<L, T>(
    word: &str,
    syllables: &SyllableSequence,
    candidates: &[SplitCandidate],
    lexicon: &L,
    tagger: &T,
    sentence: &[TaggedToken],
    index: usize,
) -> Vec<Decomposition>
where
    L: Lexicon + ?Sized,
    T: PosTagger + ?Sized,
{
    let mut found = Vec::new();

    for candidate in candidates {
        let noun = syllables.suffix_from(candidate.len);
        if !lexicon.is_valid_word(&noun) {
            debug!("{}: '{}' is not a dictionary word", word, noun);
            continue;
        }

        let noun_pos = tagger
            .tag(&noun)
            .first()
            .map_or(PartOfSpeech::Other, |t| t.pos);
        let word_pos = sentence.get(index).map_or(PartOfSpeech::Other, |t| t.pos);

        let decomposition = Decomposition {
            word: word.to_string(),
            verb: syllables.prefix(candidate.len),
            noun,
            root: candidate.root.clone(),
            conj: candidate.conj.clone(),
            noun_pos,
            word_pos,
            split: candidate.len,
        };
        info!("{}", decomposition);
        found.push(decomposition);
    }

    found
}

/// The compound finder: holds its three collaborators by reference and
/// never mutates them.
pub struct Decomposer<'a, L: ?Sized, S: ?Sized, T: ?Sized> {
    lexicon: &'a L,
    syllabizer: &'a S,
    tagger: &'a T,
}

impl<'a, L, S, T> Decomposer<'a, L, S, T>
where
    L: Lexicon + ?Sized,
    S: Syllabizer + ?Sized,
    T: PosTagger + ?Sized,
{
    pub fn new(lexicon: &'a L, syllabizer: &'a S, tagger: &'a T) -> Self {
        Self {
            lexicon,
            syllabizer,
            tagger,
        }
    }

    /// All verb + noun readings of `word` (lowercase). Misses of any kind
    /// give an empty result.
    pub fn find_decompositions(
        &self,
        word: &str,
        sentence: &[TaggedToken],
        index: usize,
    ) -> Vec<Decomposition> {
        let syllables = self.syllabizer.syllabize(word);
        if syllables.is_empty() {
            return Vec::new();
        }

        let candidates = build_candidates(&syllables, self.lexicon);
        if candidates.is_empty() {
            return Vec::new();
        }
        debug!("{}: {} split candidate(s) over {:?}", word, candidates.len(), syllables.syllables);

        validate_candidates(
            word,
            &syllables,
            &candidates,
            self.lexicon,
            self.tagger,
            sentence,
            index,
        )
    }

    /// Tags the message once, then decomposes every candidate token.
    pub fn analyze_message(&self, message: &MessageTokens<'_>) -> Vec<Decomposition> {
        let mut candidates = message.candidates().peekable();
        if candidates.peek().is_none() {
            return Vec::new();
        }

        let sentence = self.tagger.tag_tokens(&message.surface());
        candidates
            .flat_map(|(index, token)| self.find_decompositions(&token.lower, &sentence, index))
            .collect()
    }
}
