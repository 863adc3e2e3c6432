#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The matching strategy implied by a rule's wording.
///
/// Always derived from the rule text at evaluation time and never persisted,
/// so rewording a rule immediately changes how it is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    /// The rule names a literal phrase the answer must contain.
    ExactPhrase,
    /// The rule lists keywords the answer should cover.
    ContainsKeywords,
    /// The rule describes meaning; matched by embedding similarity.
    Semantic,
}

/// Ordered classifier predicates; the first wording family found anywhere in
/// the rule text decides the strategy. Kept as a flat list so the policy is
/// auditable and testable on its own.
const CLASSIFIER: &[(&[&str], RuleType)] = &[
    (&["mentions", "formula", "equation"], RuleType::ExactPhrase),
    (&["contains", "has", "includes"], RuleType::ContainsKeywords),
];

impl RuleType {
    /// Infers the rule type for `rule_text`.
    ///
    /// This is a heuristic, not a guarantee: ambiguous or empty rules default
    /// to [`RuleType::Semantic`], the most lenient strategy.
    pub fn classify(rule_text: &str) -> Self {
        let rule_lower = rule_text.to_lowercase();

        CLASSIFIER
            .iter()
            .find(|(cues, _)| cues.iter().any(|cue| rule_lower.contains(cue)))
            .map(|(_, rule_type)| *rule_type)
            .unwrap_or(RuleType::Semantic)
    }
}

impl Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RuleType::ExactPhrase => "exact_phrase",
            RuleType::ContainsKeywords => "contains_keywords",
            RuleType::Semantic => "semantic",
        };
        write!(f, "{name}")
    }
}
