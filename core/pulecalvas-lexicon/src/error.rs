use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("lexicon cache {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("lexicon cache {} has format version {found}, expected {expected}", path.display())]
    Version {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    #[error("cannot parse Hunspell dictionary {}: {reason}", path.display())]
    Affix { path: PathBuf, reason: String },

    #[error("failed to serialize lexicon: {0}")]
    Serialize(String),

    #[error("{0} contains no entries")]
    Empty(&'static str),

    #[error("lexicon cache {} is missing and no word lists were given to build it", path.display())]
    MissingSources { path: PathBuf },
}

impl LexiconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LexiconError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LexiconError::Version {
            path: PathBuf::from("lex.rkyv"),
            found: 7,
            expected: 1,
        };
        assert_eq!(
            err.to_string(),
            "lexicon cache lex.rkyv has format version 7, expected 1"
        );
        assert_eq!(
            LexiconError::Empty("verb list").to_string(),
            "verb list contains no entries"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = LexiconError::io("verbs.txt", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.to_string().starts_with("failed to access verbs.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
