//! End-to-end tests for the pulecalvas binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().unwrap(),
        };
        fixture.write("verbos.txt", "pulir\npisar\nvender\nlavarse\n");
        fixture.write("formas.txt", "pule\npisa\nvende\nlava\n");
        fixture.write("es_ES.dic", "5\ncalvas\ncharcos/S\nmotos\ncarretera\ncoche\n");
        fixture.write(
            "corpus/hilo-1.json",
            r#"{"parsed_messages": {
                "1": {"message": "Ese pulecalvas pisa la carretera."},
                "2": {"message": "El pisacharcos vende motos y el pulecalvas también."}
            }}"#,
        );
        fixture.write(
            "corpus/viejos/hilo-2.json",
            r#"{"parsed_messages": {"9": {"message": "Un vendemotos con coche."}}}"#,
        );
        fixture
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, content: &str) {
        let path = self.path(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn find(&self) -> Command {
        let mut cmd = Command::cargo_bin("pulecalvas").unwrap();
        cmd.arg("-q")
            .arg("find")
            .arg(self.path("corpus"))
            .arg("--lexicon")
            .arg(self.path("lexicon.rkyv"))
            .arg("--verbs")
            .arg(self.path("verbos.txt"))
            .arg("--verb-forms")
            .arg(self.path("formas.txt"))
            .arg("--dictionary")
            .arg(self.path("es_ES.dic"));
        cmd
    }
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_find_reports_compounds() {
    let fixture = Fixture::new();

    fixture
        .find()
        .assert()
        .success()
        .stdout(predicate::str::contains("# 2 files (0 skipped), 3 messages, 4 matches"))
        .stdout(predicate::str::contains("pulecalvas\t2"))
        .stdout(predicate::str::contains("pisacharcos\t1"))
        .stdout(predicate::str::contains("vendemotos\t1"))
        .stdout(predicate::str::contains("carretera").not());

    // The lexicon cache is written on first use
    assert!(fixture.path("lexicon.rkyv").exists());
}

#[test]
fn test_find_json_output_to_file() {
    let fixture = Fixture::new();
    let report = fixture.path("report.json");

    fixture
        .find()
        .args(["--format", "json", "--output", arg(&report)])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(report).unwrap()).unwrap();
    assert_eq!(value["matches"], 4);
    assert_eq!(value["words"][0]["word"], "pulecalvas");
    assert_eq!(value["words"][0]["count"], 2);
}

#[test]
fn test_compile_then_find_from_cache() {
    let fixture = Fixture::new();
    let cache = fixture.path("cache/lexicon.rkyv");

    Command::cargo_bin("pulecalvas")
        .unwrap()
        .args([
            "-q",
            "compile",
            "--verbs",
            arg(&fixture.path("verbos.txt")),
            "--dictionary",
            arg(&fixture.path("es_ES.dic")),
            "-o",
            arg(&cache),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compiled 4 verbs"));

    Command::cargo_bin("pulecalvas")
        .unwrap()
        .args(["-q", "find", arg(&fixture.path("corpus")), "--lexicon", arg(&cache)])
        .assert()
        .success()
        .stdout(predicate::str::contains("pulecalvas\t2"));
}

#[test]
fn test_missing_lexicon_without_sources_fails() {
    let fixture = Fixture::new();

    Command::cargo_bin("pulecalvas")
        .unwrap()
        .args([
            "find",
            arg(&fixture.path("corpus")),
            "--lexicon",
            arg(&fixture.path("missing.rkyv")),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load lexicon"));
}

#[test]
fn test_malformed_files_are_skipped() {
    let fixture = Fixture::new();
    fixture.write("corpus/roto.json", "{\"parsed_messages\": ");

    fixture
        .find()
        .assert()
        .success()
        .stdout(predicate::str::contains("# 2 files (1 skipped), 3 messages"));
}

#[test]
fn test_config_file_min_length() {
    let fixture = Fixture::new();
    fixture.write("config.json", r#"{"min_length": 10}"#);

    // Only words longer than 10 chars remain: pisacharcos
    fixture
        .find()
        .arg("--config")
        .arg(fixture.path("config.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("pisacharcos\t1"))
        .stdout(predicate::str::contains("pulecalvas").not());
}

#[test]
fn test_cloud() {
    let fixture = Fixture::new();

    Command::cargo_bin("pulecalvas")
        .unwrap()
        .args(["-q", "cloud", arg(&fixture.path("corpus")), "--min-total", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 messages"))
        .stdout(predicate::str::contains("pulecalvas:2"));
}

#[test]
fn test_missing_corpus_directory() {
    let fixture = Fixture::new();

    Command::cargo_bin("pulecalvas")
        .unwrap()
        .args(["-q", "cloud", arg(&fixture.path("nada"))])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

const AFFIX: &str = "SET UTF-8

SFX S Y 2
SFX S 0 s [aeiouáéó]
SFX S 0 es [^aeiouáéó]

SFX G Y 1
SFX G o a/S o
";

/// Same corpus, but the dictionary only lists stems and their affix flags.
fn hunspell_find(fixture: &Fixture, cache: &str, affix: bool) -> Command {
    fixture.write("hunspell/es_ES.dic", "5\ncalvo/GS\ncharco/S\nmoto/S\ncarretera/S\ncoche/S\n");
    fixture.write("hunspell/es_ES.aff", AFFIX);

    let mut cmd = Command::cargo_bin("pulecalvas").unwrap();
    cmd.arg("find")
        .arg(fixture.path("corpus"))
        .arg("--lexicon")
        .arg(fixture.path(cache))
        .arg("--verbs")
        .arg(fixture.path("verbos.txt"))
        .arg("--verb-forms")
        .arg(fixture.path("formas.txt"))
        .arg("--dictionary")
        .arg(fixture.path("hunspell/es_ES.dic"));
    if affix {
        cmd.arg("--affix").arg(fixture.path("hunspell/es_ES.aff"));
    }
    cmd
}

#[test]
fn test_find_with_hunspell_affixes() {
    let fixture = Fixture::new();

    // calvas, charcos and motos only exist through the affix rules
    hunspell_find(&fixture, "affix.rkyv", true)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 matches"))
        .stdout(predicate::str::contains("pulecalvas\t2"))
        .stdout(predicate::str::contains("pisacharcos\t1"))
        .stdout(predicate::str::contains("vendemotos\t1"));

    // The rules are kept in the cache
    Command::cargo_bin("pulecalvas")
        .unwrap()
        .args(["-q", "find", arg(&fixture.path("corpus")), "--lexicon", arg(&fixture.path("affix.rkyv"))])
        .assert()
        .success()
        .stdout(predicate::str::contains("pulecalvas\t2"));
}

#[test]
fn test_dic_without_affix_warns() {
    let fixture = Fixture::new();

    hunspell_find(&fixture, "stems.rkyv", false)
        .assert()
        .success()
        .stderr(predicate::str::contains("no affix file was given"))
        .stdout(predicate::str::contains("pulecalvas").not());
}
