use std::collections::HashMap;

use scorix::{
    config::GradingConfig,
    embed::{Embedder, EmbeddingError},
    grade::{MatchOutcome, RuleType, SimilarityScorer, match_rule},
    lemma::EnglishLemmatizer,
};

/// Deterministic embedder: known texts map to fixed vectors, everything else
/// embeds to the zero vector (cosine similarity 0.0).
struct StubEmbedder {
    vectors: HashMap<String, Vec<f32>>,
}

impl StubEmbedder {
    fn new(entries: &[(&str, [f32; 3])]) -> Self {
        Self {
            vectors: entries
                .iter()
                .map(|(text, vector)| ((*text).to_string(), vector.to_vec()))
                .collect(),
        }
    }

    fn empty() -> Self {
        Self::new(&[])
    }
}

impl Embedder for StubEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![0.0, 0.0, 0.0]))
    }
}

/// Embedder that always fails, for verifying which strategies touch the
/// provider.
struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::EmptyResponse)
    }
}

fn outcome(answer: &str, rule: &str, embedder: &dyn Embedder) -> MatchOutcome {
    outcome_as(answer, rule, RuleType::classify(rule), embedder).expect("match rule")
}

fn outcome_as(
    answer: &str,
    rule: &str,
    rule_type: RuleType,
    embedder: &dyn Embedder,
) -> Result<MatchOutcome, EmbeddingError> {
    let lemmatizer = EnglishLemmatizer;
    let config = GradingConfig::default();
    let scorer = SimilarityScorer::new(embedder, &lemmatizer, &config);
    match_rule(answer, rule, rule_type, &scorer)
}

#[test]
fn exact_phrase_substring_hit_scores_one() {
    let result = outcome(
        "Newton's second law says F = ma describes force",
        "mentions the formula F = ma",
        &StubEmbedder::empty(),
    );
    assert!(result.matched);
    assert_eq!(result.score, 1.0);
}

#[test]
fn exact_phrase_misses_when_the_phrase_is_absent() {
    let result = outcome(
        "force equals mass times acceleration",
        "mentions the formula F = ma",
        &StubEmbedder::empty(),
    );
    assert!(!result.matched);
    assert_eq!(result.score, 0.0);
}

#[test]
fn exact_phrase_without_an_extractable_phrase_fails_closed() {
    // The rule wording never yields a candidate phrase, so it can never
    // match, even though the answer repeats the rule verbatim.
    let result = outcome("equation", "equation", &StubEmbedder::empty());
    assert!(!result.matched);
    assert_eq!(result.score, 0.0);
}

#[test]
fn exact_phrase_never_touches_the_provider() {
    let result = outcome_as(
        "the answer mentions gravity",
        "mentions gravity",
        RuleType::ExactPhrase,
        &FailingEmbedder,
    )
    .expect("no embedding needed");
    assert!(result.matched);
}

#[test]
fn keyword_phrase_hit_scores_one() {
    let result = outcome(
        "the phrase energy conservation appears here",
        "contains the phrase energy conservation",
        &StubEmbedder::empty(),
    );
    assert!(result.matched);
    assert_eq!(result.score, 1.0);
}

#[test]
fn keyword_overlap_at_the_boundary_is_matched() {
    // Rule concepts: has, momentum, inertia, velocity, acceleration (5).
    // The answer covers four of them: exactly the 0.8 boundary, inclusive.
    let result = outcome(
        "it has momentum inertia velocity",
        "has momentum inertia velocity acceleration",
        &StubEmbedder::empty(),
    );
    assert!(result.matched);
    assert!((result.score - 0.8).abs() < 1e-9);
}

#[test]
fn keyword_overlap_below_the_boundary_is_unmatched_but_scored() {
    let result = outcome(
        "it has momentum inertia",
        "has momentum inertia velocity acceleration",
        &StubEmbedder::empty(),
    );
    assert!(!result.matched);
    assert!((result.score - 0.6).abs() < 1e-9);
}

#[test]
fn keyword_rule_without_concepts_falls_back_to_semantic() {
    // "of it" has no extractable concepts; the identical embedding makes the
    // semantic fallback score 0.7 * 1.0 with zero concept overlap.
    let embedder = StubEmbedder::new(&[("of it", [1.0, 0.0, 0.0]), ("anything", [1.0, 0.0, 0.0])]);
    let result = outcome_as("anything", "of it", RuleType::ContainsKeywords, &embedder)
        .expect("semantic fallback");
    assert!(result.matched);
    assert!((result.score - 0.7).abs() < 1e-9);
}

#[test]
fn semantic_rule_combines_cosine_and_concept_overlap() {
    let rule = "explains the relationship between force and acceleration";
    let answer = "force and acceleration have a relationship";
    let embedder = StubEmbedder::new(&[(rule, [1.0, 0.0, 0.0]), (answer, [1.0, 0.0, 0.0])]);

    let result = outcome(answer, rule, &embedder);
    // cosine 1.0 weighted 0.7, concept overlap 3/5 weighted 0.3.
    assert!(result.matched);
    assert!((result.score - 0.88).abs() < 1e-9);
}

#[test]
fn semantic_rule_below_threshold_is_unmatched() {
    let rule = "describes cellular respiration";
    let answer = "the sky is blue";
    let embedder = StubEmbedder::new(&[(rule, [1.0, 0.0, 0.0]), (answer, [0.0, 1.0, 0.0])]);

    let result = outcome(answer, rule, &embedder);
    assert!(!result.matched);
    assert!(result.score.abs() < 1e-9);
}

#[test]
fn provider_failure_propagates_from_semantic_matching() {
    let err = outcome_as(
        "some answer",
        "explains the idea",
        RuleType::Semantic,
        &FailingEmbedder,
    );
    assert!(err.is_err());
}
