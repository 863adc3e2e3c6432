#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{results::MatchOutcome, rules::RuleType, similarity::SimilarityScorer};
use crate::{constants::MIN_PHRASE_CHARS, embed::EmbeddingError};

/// Compiles a fixed set of phrase patterns, panicking only on a malformed
/// literal, which cannot happen outside development.
fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("phrase pattern must compile"))
        .collect()
}

/// Ordered patterns that pull the quoted phrase out of an exact-phrase rule.
static EXACT_PHRASE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"mentions?\s+(?:the\s+)?(.+)",
        r"contains?\s+(?:the\s+)?(.+)",
        r"formula\s+(.+)",
        r"equation\s+(.+)",
    ])
});

/// Ordered patterns that pull the keyword phrase out of a keyword rule.
static KEYWORD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"contains?\s+(?:the\s+)?(.+)",
        r"has\s+(?:the\s+)?(.+)",
        r"includes?\s+(?:the\s+)?(.+)",
    ])
});

/// Extracts candidate key phrases from a lowercased rule text.
///
/// Each capture is trimmed of surrounding whitespace and trailing periods;
/// captures that end up too short are discarded as noise.
fn key_phrases(patterns: &[Regex], rule_lower: &str) -> Vec<String> {
    let mut phrases = Vec::new();

    for pattern in patterns {
        for captures in pattern.captures_iter(rule_lower) {
            if let Some(capture) = captures.get(1) {
                let phrase = capture.as_str().trim().trim_end_matches('.');
                if phrase.chars().count() >= MIN_PHRASE_CHARS {
                    phrases.push(phrase.to_string());
                }
            }
        }
    }

    phrases
}

/// Evaluates one rule against one answer using the strategy for `rule_type`.
///
/// Only the keyword and semantic strategies can reach the embedding provider;
/// exact-phrase matching is pure string work and cannot fail.
pub fn match_rule(
    answer: &str,
    rule_text: &str,
    rule_type: RuleType,
    scorer: &SimilarityScorer<'_>,
) -> Result<MatchOutcome, EmbeddingError> {
    match rule_type {
        RuleType::ExactPhrase => Ok(match_exact_phrase(answer, rule_text)),
        RuleType::ContainsKeywords => match_keywords(answer, rule_text, scorer),
        RuleType::Semantic => scorer.score(answer, rule_text),
    }
}

/// Matches an exact-phrase rule by literal substring search.
///
/// A rule whose phrasing yields no candidate phrase never matches; failing
/// closed here is intentional, since these rules promise an exact check.
fn match_exact_phrase(answer: &str, rule_text: &str) -> MatchOutcome {
    let rule_lower = rule_text.to_lowercase();
    let answer_lower = answer.to_lowercase();

    for phrase in key_phrases(&EXACT_PHRASE_PATTERNS, &rule_lower) {
        if answer_lower.contains(&phrase) {
            debug!(%phrase, "exact phrase found in answer");
            return MatchOutcome::hit(1.0);
        }
    }

    MatchOutcome::miss(0.0)
}

/// Matches a keyword rule, degrading from phrase search to lexical overlap to
/// semantic similarity as the rule's phrasing allows.
fn match_keywords(
    answer: &str,
    rule_text: &str,
    scorer: &SimilarityScorer<'_>,
) -> Result<MatchOutcome, EmbeddingError> {
    let rule_concepts = scorer.concepts(rule_text);

    // A rule with no extractable keywords can only be judged by meaning.
    if rule_concepts.is_empty() {
        debug!(rule = rule_text, "keyword rule has no concepts, using semantic fallback");
        return scorer.score(answer, rule_text);
    }

    let rule_lower = rule_text.to_lowercase();
    let answer_lower = answer.to_lowercase();

    for phrase in key_phrases(&KEYWORD_PATTERNS, &rule_lower) {
        if answer_lower.contains(&phrase) {
            debug!(%phrase, "keyword phrase found in answer");
            return Ok(MatchOutcome::hit(1.0));
        }
    }

    let answer_concepts = scorer.concepts(answer);
    let score = answer_concepts.overlap_ratio(&rule_concepts);
    debug!(score, "keyword rule fell back to lexical overlap");

    Ok(MatchOutcome::at_threshold(
        score,
        scorer.config().keyword_overlap_threshold,
    ))
}
