use alloc::format;
use alloc::string::{String, ToString};

use pulecalvas_protocol::{ConjugationClass, Number, Person};

use crate::MorphError;

/// Present indicative endings by person (rows) and number (columns).
type Paradigm = [[&'static str; 2]; 3];

const PRESENT_AR: Paradigm = [["o", "amos"], ["as", "áis"], ["a", "an"]];
const PRESENT_ER: Paradigm = [["o", "emos"], ["es", "éis"], ["e", "en"]];
const PRESENT_IR: Paradigm = [["o", "imos"], ["es", "ís"], ["e", "en"]];

fn paradigm(class: ConjugationClass) -> &'static Paradigm {
    match class {
        ConjugationClass::Ar => &PRESENT_AR,
        ConjugationClass::Er => &PRESENT_ER,
        ConjugationClass::Ir => &PRESENT_IR,
    }
}

/// Splits an infinitive into stem and class. Pronominal infinitives lose
/// their `se` first (`lavarse` -> `lav`, `Ar`).
pub fn split_infinitive(infinitive: &str) -> Result<(&str, ConjugationClass), MorphError> {
    let bare = infinitive
        .strip_suffix("se")
        .filter(|rest| ConjugationClass::from_infinitive(rest).is_some())
        .unwrap_or(infinitive);

    let class = ConjugationClass::from_infinitive(bare)
        .ok_or_else(|| MorphError::NotAnInfinitive(infinitive.to_string()))?;
    Ok((&bare[..bare.len() - class.suffix().len()], class))
}

/// Regular present indicative form built from a stem and paradigm ending.
pub fn generate(stem: &str, class: ConjugationClass, person: Person, number: Number) -> String {
    let row = match person {
        Person::First => 0,
        Person::Second => 1,
        Person::Third => 2,
    };
    let col = match number {
        Number::Singular => 0,
        Number::Plural => 1,
    };
    format!("{}{}", stem, paradigm(class)[row][col])
}

/// Regular third person singular present: `pular` -> `pula`, `pulir` -> `pule`.
///
/// Stem-changing and irregular verbs get their regular (wrong) form; callers
/// that need those should load a real verb-form list instead.
pub fn third_person_present(infinitive: &str) -> Result<String, MorphError> {
    let (stem, class) = split_infinitive(infinitive)?;
    Ok(generate(stem, class, Person::Third, Number::Singular))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_third_person_present() {
        assert_eq!(third_person_present("pular").unwrap(), "pula");
        assert_eq!(third_person_present("pulir").unwrap(), "pule");
        assert_eq!(third_person_present("vender").unwrap(), "vende");
        assert_eq!(third_person_present("lavarse").unwrap(), "lava");
    }

    #[test]
    fn test_rejects_non_infinitives() {
        assert!(matches!(
            third_person_present("calvas"),
            Err(MorphError::NotAnInfinitive(_))
        ));
        assert!(third_person_present("ir").is_err());
        assert!(third_person_present("").is_err());
    }

    #[test]
    fn test_split_infinitive() {
        assert_eq!(split_infinitive("toser").unwrap(), ("tos", ConjugationClass::Er));
        assert_eq!(split_infinitive("lavarse").unwrap(), ("lav", ConjugationClass::Ar));
        assert_eq!(split_infinitive("irse").unwrap_err(), MorphError::NotAnInfinitive("irse".into()));
    }

    #[test]
    fn test_full_paradigm() {
        assert_eq!(generate("cant", ConjugationClass::Ar, Person::First, Number::Plural), "cantamos");
        assert_eq!(generate("com", ConjugationClass::Er, Person::Second, Number::Singular), "comes");
        assert_eq!(generate("viv", ConjugationClass::Ir, Person::Third, Number::Plural), "viven");
    }

    proptest! {
        #[test]
        fn test_safe_generation(stem in "[a-z]+") {
            for class in ConjugationClass::ALL {
                let infinitive = format!("{}{}", stem, class.suffix());
                let form = third_person_present(&infinitive).unwrap();
                prop_assert!(form.starts_with(stem.as_str()));
                prop_assert_eq!(form.len(), stem.len() + 1);
            }
        }
    }
}
