//! Synonym matcher tests with a cached thesaurus.

use std::collections::BTreeSet;
use std::sync::Arc;

use lexalign::config::CacheConfig;
use lexalign::{
    CachedThesaurus, Lexicon, LexicalType, Matcher, Ontology, Result, SynonymMatcher,
    SynsetThesaurus, Thesaurus,
};

fn ontology(uri: &str, names: &[(u32, &str)]) -> Arc<Ontology> {
    let mut builder = Lexicon::builder();
    for &(term, name) in names {
        builder.add(term, name, LexicalType::Label, "", 1.0);
    }
    Arc::new(Ontology::new(uri, builder.build()))
}

fn thesaurus() -> SynsetThesaurus {
    SynsetThesaurus::from_synsets(vec![
        vec!["car", "automobile"],
        vec!["heart", "ticker"],
        vec!["heart", "center", "centre"],
    ])
}

#[test]
fn test_car_automobile_scenario() {
    let source = ontology("a", &[(1, "car")]);
    let target = ontology("b", &[(10, "car"), (11, "automobile")]);
    let matcher = SynonymMatcher::new(Arc::new(thesaurus()));

    let alignment = matcher.match_ontologies(&source, &target, 0.8).unwrap();

    let m = alignment.get(1, 11).expect("car should reach automobile");
    assert!((m.similarity() - 0.88 * 0.99).abs() < 1e-9);
    // Verbatim car/car is not this matcher's evidence
    assert!(!alignment.contains(1, 10));
}

/// Thesaurus knowing only that a car is an automobile.
struct CarThesaurus;

impl Thesaurus for CarThesaurus {
    fn synonym_forms(&self, name: &str) -> Result<BTreeSet<String>> {
        Ok(match name {
            "car" => BTreeSet::from(["automobile".to_string()]),
            _ => BTreeSet::new(),
        })
    }

    fn name(&self) -> &str {
        "car"
    }
}

#[test]
fn test_car_automobile_single_form() {
    let source = ontology("a", &[(1, "Car")]);
    let target = ontology("b", &[(10, "Car"), (11, "Automobile")]);
    let matcher = SynonymMatcher::new(Arc::new(CarThesaurus));

    let alignment = matcher.match_ontologies(&source, &target, 0.8).unwrap();

    // One form: confidence 0.89, target weight corrected to 0.99
    let m = alignment.get(1, 11).expect("car should reach automobile");
    assert!((m.similarity() - 0.89 * 0.99).abs() < 1e-9);
    assert!(!alignment.contains(1, 10));
}

#[test]
fn test_ambiguous_names_are_penalized() {
    // heart has 4 forms across two senses, car only 2
    let lexicon = ontology("a", &[(1, "heart"), (2, "car")]);
    let matcher = SynonymMatcher::new(Arc::new(thesaurus()));

    let extended = matcher.extend(lexicon.lexicon(), 0.0).unwrap();
    let heart = extended.weight("ticker", 1);
    let car = extended.weight("automobile", 2);
    assert!((heart - 0.86).abs() < 1e-9);
    assert!((car - 0.88).abs() < 1e-9);
    assert_eq!(extended.source("centre", 1), Some("WordNet"));
    // Declared names keep their own entries
    assert_eq!(extended.weight("heart", 1), 1.0);
}

#[test]
fn test_cached_thesaurus_serves_repeated_runs() {
    let cached = Arc::new(CachedThesaurus::new(thesaurus(), &CacheConfig::default()));
    let matcher = SynonymMatcher::new(cached.clone());
    let source = ontology("a", &[(1, "car"), (2, "heart")]);
    let target = ontology("b", &[(10, "automobile"), (20, "ticker")]);

    let first = matcher.match_ontologies(&source, &target, 0.5).unwrap();
    let second = matcher.match_ontologies(&source, &target, 0.5).unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first.len(), second.len());
    assert_eq!(cached.stats().entries, 4);
    assert_eq!(cached.name(), "synsets");
}

#[test]
fn test_extension_skips_conflicting_mappings() {
    let source = ontology("a", &[(1, "car"), (2, "heart")]);
    let target = ontology("b", &[(10, "automobile"), (20, "ticker")]);
    let matcher = SynonymMatcher::new(Arc::new(thesaurus()));

    let mut existing = lexalign::Alignment::new(Arc::clone(&source), Arc::clone(&target));
    existing.add(lexalign::Mapping::new(1, 20, 0.5));

    let extension = matcher.extend_alignment(&existing, 0.5).unwrap();
    assert!(extension.is_empty());
}
