use itertools::Itertools;
use scorix::{
    grade::{ConceptSet, extract_concepts},
    lemma::{EnglishLemmatizer, IdentityLemmatizer},
};

fn concepts(text: &str) -> ConceptSet {
    extract_concepts(text, &EnglishLemmatizer)
}

#[test]
fn empty_input_yields_empty_set() {
    assert!(concepts("").is_empty());
    assert!(concepts("   \t\n").is_empty());
}

#[test]
fn stop_words_and_short_tokens_are_dropped() {
    let set = concepts("the force of an object");
    assert!(set.contains("force"));
    assert!(set.contains("object"));
    assert!(!set.contains("the"));
    assert!(!set.contains("of"));
    assert_eq!(set.len(), 2);
}

#[test]
fn symbols_and_short_fragments_extract_nothing() {
    // "F = ma" is all punctuation and sub-3-character tokens.
    assert!(concepts("F = ma").is_empty());
}

#[test]
fn case_and_punctuation_do_not_matter() {
    assert_eq!(concepts("Force, equals Mass!"), concepts("force equals mass"));
}

#[test]
fn inflection_collapses_to_the_same_concept() {
    assert_eq!(concepts("the forces acting"), concepts("a force acting"));
}

#[test]
fn word_order_and_duplicates_are_irrelevant() {
    assert_eq!(
        concepts("energy motion energy force"),
        concepts("force motion energy")
    );
}

#[test]
fn extraction_is_idempotent() {
    let first = concepts("Newton's forces cause studies of energy and motion.");
    let rejoined = first.iter().sorted().join(" ");
    assert_eq!(concepts(&rejoined), first);
}

#[test]
fn overlap_ratio_is_zero_for_empty_reference() {
    let answer = concepts("force energy motion");
    let reference = concepts("");
    assert_eq!(answer.overlap_ratio(&reference), 0.0);
}

#[test]
fn overlap_ratio_is_relative_to_the_reference() {
    let answer = concepts("force energy");
    let reference = concepts("force energy motion acceleration");
    assert!((answer.overlap_ratio(&reference) - 0.5).abs() < 1e-9);
}

#[test]
fn identity_lemmatizer_only_lowercases() {
    let set = extract_concepts("The Forces", &IdentityLemmatizer);
    assert!(set.contains("forces"));
    assert!(!set.contains("force"));
}
