//! Word matcher tests over loaded lexicons.

use std::sync::Arc;

use lexalign::{Alignment, Lexicon, LexicalType, Mapping, Matcher, Ontology, WordMatcher};

fn ontology(uri: &str, names: &[(u32, &str)]) -> Arc<Ontology> {
    let mut builder = Lexicon::builder();
    for &(term, name) in names {
        builder.add(term, name, LexicalType::Label, "", 1.0);
    }
    Arc::new(Ontology::new(uri, builder.build()))
}

fn mouse() -> Arc<Ontology> {
    ontology(
        "mouse",
        &[
            (1, "heart left ventricle"),
            (2, "heart right ventricle"),
            (3, "thoracic aorta"),
            (4, "abdominal aorta"),
            (5, "lung"),
            (6, "liver lobe"),
        ],
    )
}

fn human() -> Arc<Ontology> {
    ontology(
        "human",
        &[
            (101, "left ventricle of heart"),
            (102, "right ventricle of heart"),
            (103, "thoracic part of aorta"),
            (104, "kidney"),
            (105, "lobe of liver"),
        ],
    )
}

#[test]
fn test_reordered_names_match() {
    let alignment = WordMatcher::new()
        .match_ontologies(&mouse(), &human(), 0.6)
        .unwrap();

    assert!(alignment.contains(1, 101));
    assert!(alignment.contains(2, 102));
    assert!(alignment.contains(6, 105));
    // "left" alone cannot tie term 1 to the right ventricle
    let same = alignment.get(1, 101).unwrap().similarity();
    let cross = alignment.get(1, 102).map_or(0.0, |m| m.similarity());
    assert!(same > cross);
}

#[test]
fn test_unrelated_terms_do_not_match() {
    let alignment = WordMatcher::new()
        .match_ontologies(&mouse(), &human(), 0.0)
        .unwrap();

    assert!(alignment.iter().all(|m| m.target() != 104));
    assert!(alignment.iter().all(|m| m.source() != 5));
}

#[test]
fn test_shared_matcher_across_threads() {
    let matcher: Arc<dyn Matcher> = Arc::new(WordMatcher::new().parallel(true));
    let (source, target) = (mouse(), human());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let matcher = Arc::clone(&matcher);
            let source = Arc::clone(&source);
            let target = Arc::clone(&target);
            std::thread::spawn(move || matcher.match_ontologies(&source, &target, 0.3).unwrap().len())
        })
        .collect();

    let sizes: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(sizes.iter().all(|&n| n == sizes[0]));
    assert!(sizes[0] > 0);
}

#[test]
fn test_extension_only_adds_unmapped_terms() {
    let (source, target) = (mouse(), human());
    let mut existing = Alignment::new(Arc::clone(&source), Arc::clone(&target));
    existing.add(Mapping::new(1, 101, 1.0));
    existing.add(Mapping::new(3, 103, 1.0));

    let extension = WordMatcher::new().extend_alignment(&existing, 0.3).unwrap();

    assert!(extension.contains(2, 102));
    for m in &extension {
        assert!(!existing.contains_source(m.source()));
        assert!(!existing.contains_target(m.target()));
    }
    assert_eq!(existing.len(), 2);
}
