#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Concept extraction for lexical-overlap comparisons.
pub mod concepts;
/// The grading engine orchestrating rules, bonuses, and aggregation.
pub mod engine;
/// Per-rule-type matching strategies.
pub mod matcher;
/// Grading result records.
pub mod results;
/// Rule-type classification heuristics.
pub mod rules;
/// Weighted embedding-plus-overlap similarity scoring.
pub mod similarity;
/// Letter-grade threshold tables and grade assignment.
pub mod thresholds;

pub use concepts::{ConceptSet, extract_concepts};
pub use engine::{GradingEngine, QuestionSpec};
pub use matcher::match_rule;
pub use results::{GradingResult, MatchOutcome, QuestionFailure, TestGradingResult};
pub use rules::RuleType;
pub use similarity::SimilarityScorer;
pub use thresholds::{GradeThresholds, ThresholdError, assign_grade};
