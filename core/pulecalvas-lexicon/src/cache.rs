//! rkyv persistence of [`LexiconArchive`].

use std::fs;
use std::path::Path;

use pulecalvas_protocol::{ArchivedLexiconArchive, LexiconArchive, LEXICON_FORMAT_VERSION};
use rkyv::AlignedVec;

use crate::error::LexiconError;

pub fn write_archive(path: &Path, archive: &LexiconArchive) -> Result<(), LexiconError> {
    let bytes = rkyv::to_bytes::<_, 4096>(archive)
        .map_err(|e| LexiconError::Serialize(format!("{:?}", e)))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LexiconError::io(parent, e))?;
    }
    fs::write(path, &bytes).map_err(|e| LexiconError::io(path, e))?;
    log::debug!("wrote {} byte lexicon cache to {}", bytes.len(), path.display());
    Ok(())
}

/// Reads the cache into an aligned buffer; validate it with [`validate`].
pub fn read_bytes(path: &Path) -> Result<AlignedVec, LexiconError> {
    let raw = fs::read(path).map_err(|e| LexiconError::io(path, e))?;
    let mut aligned = AlignedVec::with_capacity(raw.len());
    aligned.extend_from_slice(&raw);
    Ok(aligned)
}

pub fn validate<'a>(
    path: &Path,
    bytes: &'a [u8],
) -> Result<&'a ArchivedLexiconArchive, LexiconError> {
    let archived = rkyv::check_archived_root::<LexiconArchive>(bytes).map_err(|e| {
        LexiconError::Corrupt {
            path: path.to_path_buf(),
            reason: format!("{:?}", e),
        }
    })?;

    if archived.version != LEXICON_FORMAT_VERSION {
        return Err(LexiconError::Version {
            path: path.to_path_buf(),
            found: archived.version,
            expected: LEXICON_FORMAT_VERSION,
        });
    }
    Ok(archived)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> LexiconArchive {
        LexiconArchive {
            version: LEXICON_FORMAT_VERSION,
            verbs: vec!["pular".into()],
            verb_forms: vec!["pule".into()],
            words: vec!["calvas".into()],
            hunspell: None,
        }
    }

    #[test]
    fn test_written_cache_validates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("lexicon.rkyv");
        write_archive(&path, &sample()).unwrap();

        let bytes = read_bytes(&path).unwrap();
        let archived = validate(&path, &bytes).unwrap();
        assert_eq!(archived.verbs.len(), 1);
        assert_eq!(archived.verb_forms[0].as_str(), "pule");
    }

    #[test]
    fn test_garbage_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lexicon.rkyv");
        fs::write(&path, b"definitely not an archive").unwrap();

        let bytes = read_bytes(&path).unwrap();
        assert!(matches!(
            validate(&path, &bytes),
            Err(LexiconError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_version_mismatch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lexicon.rkyv");
        let mut old = sample();
        old.version = LEXICON_FORMAT_VERSION + 1;
        write_archive(&path, &old).unwrap();

        let bytes = read_bytes(&path).unwrap();
        assert!(matches!(
            validate(&path, &bytes),
            Err(LexiconError::Version { .. })
        ));
    }
}
