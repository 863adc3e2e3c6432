#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// The outcome of evaluating one rule against one answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOutcome {
    /// Whether the rule is judged to have passed.
    pub matched: bool,
    /// Continuous match quality in `[0, 1]`.
    pub score: f64,
}

impl MatchOutcome {
    /// An outcome that passed with the given score.
    pub fn hit(score: f64) -> Self {
        Self {
            matched: true,
            score,
        }
    }

    /// An outcome that failed with the given score.
    pub fn miss(score: f64) -> Self {
        Self {
            matched: false,
            score,
        }
    }

    /// An outcome judged against a threshold; the boundary is inclusive.
    pub fn at_threshold(score: f64, threshold: f64) -> Self {
        Self {
            matched: score >= threshold,
            score,
        }
    }
}

/// Per-question grading output.
///
/// Created once per (answer, question) pair at grading time and immutable
/// thereafter; the caller owns it for persistence or display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct GradingResult {
    /// Identifier of the graded question; empty until attached to one.
    #[builder(default)]
    pub question_id: String,
    /// Numeric score in `[0, 1]`.
    pub score: f64,
    /// Assigned letter grade.
    pub grade: String,
    /// Points earned, `score` times the question's maximum points.
    #[builder(default)]
    pub points_earned: f64,
    /// Texts of the rules the answer satisfied.
    #[builder(default)]
    pub matched_rules: Vec<String>,
    /// Texts of the rules the answer missed.
    #[builder(default)]
    pub missed_rules: Vec<String>,
}

impl GradingResult {
    /// Attaches this result to a question, deriving points earned from the
    /// question's maximum points.
    pub fn for_question(mut self, question_id: impl Into<String>, max_points: f64) -> Self {
        self.question_id = question_id.into();
        self.points_earned = self.score * max_points;
        self
    }
}

/// A question whose evaluation failed, with the reason attributed to it.
///
/// Carried alongside the successful results so one provider outage never
/// erases the questions that were already scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionFailure {
    /// Identifier of the question that could not be evaluated.
    pub question_id: String,
    /// Human-readable reason for the failure.
    pub reason: String,
}

impl QuestionFailure {
    /// Creates a failure record for one question.
    pub fn new(question_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            reason: reason.into(),
        }
    }
}

/// Per-student aggregate over every question in one test submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct TestGradingResult {
    /// Arithmetic mean of the per-question scores.
    pub overall_score: f64,
    /// Letter grade assigned to the overall score.
    pub overall_grade: String,
    /// Sum of points earned across questions.
    pub total_points_earned: f64,
    /// Per-question results, in submission order.
    #[builder(default)]
    pub question_results: Vec<GradingResult>,
    /// Question identifiers that could not be resolved and were skipped.
    #[builder(default)]
    pub skipped_questions: Vec<String>,
    /// Questions whose evaluation failed, each attributed to its reason.
    #[builder(default)]
    pub failed_questions: Vec<QuestionFailure>,
}
