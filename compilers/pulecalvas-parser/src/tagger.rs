use pulecalvas_protocol::{Lexicon, PartOfSpeech, PosTagger, TaggedToken};

use crate::parser;

const DETERMINERS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "este", "esta", "estos", "estas",
    "ese", "esa", "esos", "esas", "aquel", "aquella", "aquellos", "aquellas", "mi", "mis",
    "tu", "tus", "su", "sus", "nuestro", "nuestra", "nuestros", "nuestras", "vuestro",
    "vuestra", "vuestros", "vuestras", "cada", "algún", "alguna", "algunos", "algunas",
    "ningún", "ninguna", "todo", "toda", "todos", "todas", "otro", "otra", "otros", "otras",
];

const ADPOSITIONS: &[&str] = &[
    "a", "al", "ante", "bajo", "con", "contra", "de", "del", "desde", "durante", "en", "entre",
    "hacia", "hasta", "mediante", "para", "por", "según", "sin", "sobre", "tras", "vía",
];

const PRONOUNS: &[&str] = &[
    "yo", "tú", "él", "ella", "ello", "nosotros", "nosotras", "vosotros", "vosotras", "ellos",
    "ellas", "me", "te", "se", "nos", "os", "le", "les", "lo", "mí", "ti", "sí", "conmigo",
    "contigo", "consigo", "usted", "ustedes", "alguien", "nadie", "algo", "nada", "quien",
    "quién", "qué", "cuál", "esto", "eso", "aquello",
];

const COORDINATORS: &[&str] = &["y", "e", "o", "u", "ni", "pero", "sino"];

const SUBORDINATORS: &[&str] = &["que", "porque", "aunque", "si", "cuando", "mientras", "como", "pues"];

const AUXILIARIES: &[&str] = &[
    "es", "son", "era", "eran", "fue", "fueron", "ser", "sido", "está", "están", "estaba",
    "estar", "he", "has", "ha", "hemos", "han", "había", "habían", "haber", "hay",
];

const ADVERBS: &[&str] = &[
    "no", "ya", "muy", "más", "menos", "también", "tampoco", "siempre", "nunca", "aquí",
    "allí", "ahí", "hoy", "ayer", "mañana", "bien", "mal", "así", "luego", "después", "antes",
    "todavía", "aún", "casi", "solo", "sólo",
];

const INTERJECTIONS: &[&str] = &[
    "ja", "jaja", "jajaja", "jeje", "oh", "ah", "eh", "hola", "vaya", "ay", "uf", "bah", "ojalá",
];

const NUMERALS: &[&str] = &[
    "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve", "diez", "cien",
    "ciento", "mil", "millón",
];

const NOUN_SUFFIXES: &[&str] = &[
    "ción", "ciones", "sión", "siones", "dad", "dades", "tad", "miento", "mientos", "ismo",
    "ista", "aje", "ura", "eza", "encia", "ancia",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "oso", "osa", "osos", "osas", "ble", "bles", "ivo", "iva", "ivos", "ivas",
];

const SENTENCE_END: &[&str] = &[".", "!", "?", "...", "¡", "¿"];

/// Rule-based part-of-speech tagger: closed-class tables, lexicon lookups
/// and derivational suffixes, falling back to `NOUN`. Good enough for the
/// diagnostics printed next to each compound, not a real tagger.
#[derive(Debug)]
pub struct HeuristicTagger<'a, L: ?Sized> {
    lexicon: &'a L,
}

impl<'a, L: Lexicon + ?Sized> HeuristicTagger<'a, L> {
    pub fn new(lexicon: &'a L) -> Self {
        Self { lexicon }
    }

    fn classify(&self, token: &str, sentence_start: bool) -> PartOfSpeech {
        if token.chars().all(|c| !c.is_alphanumeric()) {
            return if token.chars().any(is_symbol) {
                PartOfSpeech::Symbol
            } else {
                PartOfSpeech::Punctuation
            };
        }

        if token.chars().all(|c| c.is_numeric() || c == '.' || c == ',') {
            return PartOfSpeech::Numeral;
        }

        let lower = token.to_lowercase();
        let word = lower.as_str();

        let tables: [(&[&str], PartOfSpeech); 9] = [
            (DETERMINERS, PartOfSpeech::Determiner),
            (ADPOSITIONS, PartOfSpeech::Adposition),
            (PRONOUNS, PartOfSpeech::Pronoun),
            (COORDINATORS, PartOfSpeech::CoordinatingConjunction),
            (SUBORDINATORS, PartOfSpeech::SubordinatingConjunction),
            (AUXILIARIES, PartOfSpeech::Auxiliary),
            (ADVERBS, PartOfSpeech::Adverb),
            (INTERJECTIONS, PartOfSpeech::Interjection),
            (NUMERALS, PartOfSpeech::Numeral),
        ];
        if let Some((_, pos)) = tables.iter().find(|(table, _)| table.contains(&word)) {
            return *pos;
        }

        if self.lexicon.contains_verb_form(word) || self.lexicon.contains_verb(word) {
            return PartOfSpeech::Verb;
        }

        if !sentence_start && token.chars().next().map_or(false, char::is_uppercase) {
            return PartOfSpeech::ProperNoun;
        }

        if word.ends_with("mente") {
            PartOfSpeech::Adverb
        } else if word.ends_with("ando") || word.ends_with("iendo") {
            PartOfSpeech::Verb
        } else if NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            PartOfSpeech::Noun
        } else if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            PartOfSpeech::Adjective
        } else {
            PartOfSpeech::Noun
        }
    }
}

fn is_symbol(c: char) -> bool {
    matches!(c, '$' | '€' | '%' | '@' | '#' | '&' | '+' | '=' | '<' | '>' | '*' | '/' | '|' | '~')
}

impl<L: Lexicon + ?Sized> PosTagger for HeuristicTagger<'_, L> {
    fn tag_tokens(&self, tokens: &[&str]) -> Vec<TaggedToken> {
        let mut sentence_start = true;
        tokens
            .iter()
            .map(|&token| {
                let pos = self.classify(token, sentence_start);
                sentence_start = SENTENCE_END.contains(&token);
                TaggedToken::new(token, pos)
            })
            .collect()
    }

    /// Tokenizes like the lexer does so standalone tags line up with it.
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        self.tag_tokens(&parser::tokenize(text))
    }
}
