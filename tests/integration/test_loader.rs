//! File loading tests.

use std::fs::File;
use std::io::Write;
use std::sync::Arc;

use tempfile::TempDir;

use lexalign::error::{LexAlignError, LoadError};
use lexalign::{load_alignment, load_ontology, Config, SynsetThesaurus, Thesaurus};

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_ontology_uses_path_as_uri() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "mouse.tsv",
        "# mouse anatomy\n1\theart\n1\tcardiac muscle organ\t0.9\texact_synonym\n2\taorta\n",
    );

    let ontology = load_ontology(&path).unwrap();
    assert_eq!(ontology.uri(), path.display().to_string());
    assert_eq!(ontology.lexicon().term_count(), 2);
    assert_eq!(ontology.lexicon().name_count(), 3);
}

#[test]
fn test_load_alignment_against_ontologies() {
    let dir = TempDir::new().unwrap();
    let source = load_ontology(write_file(&dir, "s.tsv", "1\theart\n2\taorta\n")).unwrap();
    let target = load_ontology(write_file(&dir, "t.tsv", "10\theart\n20\taorta\n")).unwrap();
    let path = write_file(&dir, "reference.tsv", "1\t10\t1.0\n2\t20\t0.8\n");

    let alignment = load_alignment(&path, Arc::clone(&source), Arc::clone(&target)).unwrap();
    assert_eq!(alignment.len(), 2);
    assert_eq!(alignment.sources(), &[1, 2]);
    assert!(Arc::ptr_eq(alignment.source(), &source));
}

#[test]
fn test_load_thesaurus_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "synsets.txt",
        "# noun synsets\ncar, auto, automobile\nheart | ticker\n",
    );

    let thesaurus = SynsetThesaurus::from_file(&path).unwrap();
    assert_eq!(thesaurus.synset_count(), 2);
    let forms = thesaurus.synonym_forms("Car").unwrap();
    assert_eq!(forms.len(), 3);
    assert!(forms.contains("automobile"));
}

#[test]
fn test_parse_error_reports_line() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.tsv", "1\theart\n\nabc\taorta\n");

    let err = load_ontology(&path).unwrap_err();
    assert!(matches!(
        err,
        LexAlignError::Load(LoadError::Parse { line: 3, .. })
    ));
}

#[test]
fn test_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "lexalign.toml",
        "[matching]\nthreshold = 0.7\n\n[cache]\nenabled = false\n",
    );

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.matching.threshold, 0.7);
    assert!(!config.cache.enabled);
    assert_eq!(config.synonym.source, "WordNet");
}
