//! Orthographic syllabification of Spanish words.
//!
//! The word is first cut into units: vowel nuclei (diphthongs and
//! triphthongs stay together) and consonant units (`ch`, `ll`, `rr`, and the
//! `qu`/`gu` onsets count as one). Consonants between two nuclei are then
//! shared out following the usual onset rules. Every input character ends up
//! in exactly one syllable, so the syllables always concatenate back to the
//! input.

use alloc::string::String;
use alloc::vec::Vec;

use pulecalvas_protocol::{Syllabizer, SyllableSequence};

#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishSyllabizer;

impl SpanishSyllabizer {
    pub fn new() -> Self {
        Self
    }
}

impl Syllabizer for SpanishSyllabizer {
    fn syllabize(&self, word: &str) -> SyllableSequence {
        syllabize(word)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vowel {
    /// a, e, o and any accented vowel.
    Strong,
    /// Unaccented i, u, ü (and word-final y).
    Weak,
}

#[derive(Debug)]
enum Unit {
    Nucleus(String),
    Consonant(String),
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn vowel_kind(c: char) -> Option<Vowel> {
    match fold(c) {
        // ä, ë, ö behave as their plain vowels
        'a' | 'e' | 'o' | 'ä' | 'ë' | 'ö' => Some(Vowel::Strong),
        'á' | 'é' | 'í' | 'ó' | 'ú' | 'à' | 'è' | 'ì' | 'ò' | 'ù' => Some(Vowel::Strong),
        'i' | 'u' | 'ü' | 'ï' => Some(Vowel::Weak),
        _ => None,
    }
}

fn is_accented(c: char) -> bool {
    matches!(fold(c), 'á' | 'é' | 'í' | 'ó' | 'ú' | 'à' | 'è' | 'ì' | 'ò' | 'ù')
}

/// `y` is a vowel when no vowel follows it (`rey`, `muy`, `y`).
fn classify(chars: &[char], i: usize) -> Option<Vowel> {
    if fold(chars[i]) == 'y' {
        let next_is_vowel = chars.get(i + 1).map_or(false, |&n| vowel_kind(n).is_some());
        return if next_is_vowel { None } else { Some(Vowel::Weak) };
    }
    vowel_kind(chars[i])
}

fn is_front_vowel(c: Option<&char>) -> bool {
    matches!(c.map(|&c| fold(c)), Some('e' | 'é' | 'i' | 'í'))
}

/// Length in chars of the consonant unit starting at `i`.
fn consonant_unit_len(chars: &[char], i: usize) -> usize {
    let c = fold(chars[i]);
    let next = chars.get(i + 1).map(|&n| fold(n));
    match (c, next) {
        ('c', Some('h')) | ('l', Some('l')) | ('r', Some('r')) => 2,
        // the u of que/qui is silent
        ('q', Some('u')) => 2,
        ('g', Some('u')) if is_front_vowel(chars.get(i + 2)) => 2,
        _ => 1,
    }
}

/// Onset clusters that never split: pl, br, tr, ...
fn is_inseparable(first: &str, second: &str) -> bool {
    let mut a = first.chars();
    let mut b = second.chars();
    let (Some(a0), None, Some(b0), None) = (a.next(), a.next(), b.next(), b.next()) else {
        return false;
    };
    match (fold(a0), fold(b0)) {
        ('p' | 'b' | 'f' | 'c' | 'g' | 'k', 'l' | 'r') => true,
        ('d' | 't', 'r') => true,
        _ => false,
    }
}

fn split_units(word: &str) -> Vec<Unit> {
    let chars: Vec<char> = word.chars().collect();
    let mut units = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if let Some(kind) = classify(&chars, i) {
            let mut nucleus = String::new();
            nucleus.push(chars[i]);
            let mut has_strong = kind == Vowel::Strong;
            let mut last = chars[i];
            i += 1;

            while i < chars.len() {
                let Some(next) = classify(&chars, i) else { break };
                // two strong vowels or a doubled vowel mean hiatus
                if (next == Vowel::Strong && has_strong) || fold(chars[i]) == fold(last) {
                    break;
                }
                has_strong |= next == Vowel::Strong;
                last = chars[i];
                nucleus.push(chars[i]);
                i += 1;
            }
            units.push(Unit::Nucleus(nucleus));
        } else {
            let len = consonant_unit_len(&chars, i);
            units.push(Unit::Consonant(chars[i..i + len].iter().collect()));
            i += len;
        }
    }

    units
}

fn unit_text(unit: &Unit) -> &str {
    match unit {
        Unit::Nucleus(s) | Unit::Consonant(s) => s.as_str(),
    }
}

/// How many consonant units of an intervocalic cluster stay as coda.
fn coda_len(cluster: &[&str]) -> usize {
    let n = cluster.len();
    match n {
        0 | 1 => 0,
        2 if is_inseparable(cluster[0], cluster[1]) => 0,
        2 => 1,
        _ if is_inseparable(cluster[n - 2], cluster[n - 1]) => n - 2,
        _ => n - 1,
    }
}

fn stressed_syllable(syllables: &[String]) -> Option<usize> {
    if syllables.is_empty() {
        return None;
    }
    if let Some(idx) = syllables.iter().position(|s| s.chars().any(is_accented)) {
        return Some(idx);
    }
    let last = syllables.len() - 1;
    let ends_open = syllables[last]
        .chars()
        .last()
        .map_or(false, |c| vowel_kind(c).is_some() || matches!(fold(c), 'n' | 's'));
    if ends_open && last > 0 {
        Some(last - 1)
    } else {
        Some(last)
    }
}

/// Splits `word` into syllables. Words without vowels come back whole.
pub fn syllabize(word: &str) -> SyllableSequence {
    if word.is_empty() {
        return SyllableSequence::default();
    }

    let units = split_units(word);
    let nuclei: Vec<usize> = units
        .iter()
        .enumerate()
        .filter(|(_, u)| matches!(u, Unit::Nucleus(_)))
        .map(|(idx, _)| idx)
        .collect();

    if nuclei.is_empty() {
        log::trace!("no vowel nucleus in {:?}", word);
        return SyllableSequence::new(alloc::vec![String::from(word)], Some(0));
    }

    let mut syllables = Vec::with_capacity(nuclei.len());
    let mut start = 0;
    for (k, &nucleus_idx) in nuclei.iter().enumerate() {
        let end = match nuclei.get(k + 1) {
            Some(&next_nucleus) => {
                let cluster: Vec<&str> =
                    units[nucleus_idx + 1..next_nucleus].iter().map(unit_text).collect();
                nucleus_idx + 1 + coda_len(&cluster)
            }
            None => units.len(),
        };
        let syllable: String = units[start..end].iter().map(unit_text).collect();
        syllables.push(syllable);
        start = end;
    }

    let stress = stressed_syllable(&syllables);
    SyllableSequence::new(syllables, stress)
}
