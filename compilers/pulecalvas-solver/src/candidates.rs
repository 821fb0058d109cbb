use pulecalvas_protocol::{ConjugationClass, Lexicon, SplitCandidate, SyllableSequence};

/// Verb part lengths tried, in syllables.
pub const VERB_LENS: [usize; 3] = [2, 3, 4];

/// Proposes verb/noun split points consistent with the verb lexicon.
///
/// For each length `L` the first `L` syllables must be a known third person
/// form, `stem + ar|er|ir` a known infinitive, and at least two syllables
/// must remain for the noun. Results come in `L`-then-suffix order and may
/// repeat a length when several conjugations match.
pub fn build_candidates<L>(syllables: &SyllableSequence, lexicon: &L) -> Vec<SplitCandidate>
where
    L: Lexicon + ?Sized,
{
    let count = syllables.len();
    let mut candidates = Vec::new();

    for len in VERB_LENS {
        // `len < count - 1` without underflow
        if len + 1 >= count {
            continue;
        }

        let verb = syllables.prefix(len);
        if !lexicon.contains_verb_form(&verb) {
            continue;
        }

        let root = lexicon.stem(&verb);
        for class in ConjugationClass::ALL {
            let conj = format!("{}{}", root, class.suffix());
            if lexicon.contains_verb(&conj) {
                candidates.push(SplitCandidate {
                    len,
                    root: root.clone(),
                    conj,
                });
            }
        }
    }

    candidates
}
