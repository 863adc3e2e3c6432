#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{
    matcher::match_rule,
    results::{GradingResult, MatchOutcome, QuestionFailure, TestGradingResult},
    rules::RuleType,
    similarity::SimilarityScorer,
    thresholds::GradeThresholds,
};
use crate::{
    config::GradingConfig,
    embed::{Embedder, EmbeddingError},
    lemma::Lemmatize,
};

/// Everything the engine needs to know about one question: the model answer,
/// its marking scheme, and the points it is worth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// Model answer used for the quality bonus.
    pub sample_answer: String,
    /// The rule strings making up the marking scheme.
    pub marking_scheme: Vec<String>,
    /// Maximum points the question is worth.
    pub points: f64,
}

impl QuestionSpec {
    /// Creates a question spec.
    pub fn new(
        sample_answer: impl Into<String>,
        marking_scheme: Vec<String>,
        points: f64,
    ) -> Self {
        Self {
            sample_answer: sample_answer.into(),
            marking_scheme,
            points,
        }
    }
}

/// The grading engine: pure orchestration over caller-owned resources.
///
/// Holds no mutable state across calls; every invocation is independent, so a
/// single engine may serve concurrent grading requests given independent
/// inputs.
pub struct GradingEngine<'a> {
    /// The injected embedding provider.
    embedder: &'a dyn Embedder,
    /// The injected lemmatizer.
    lemmatizer: &'a dyn Lemmatize,
    /// Scoring weights and thresholds.
    config: GradingConfig,
}

impl<'a> GradingEngine<'a> {
    /// Creates an engine with the default configuration.
    pub fn new(embedder: &'a dyn Embedder, lemmatizer: &'a dyn Lemmatize) -> Self {
        Self::with_config(embedder, lemmatizer, GradingConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    pub fn with_config(
        embedder: &'a dyn Embedder,
        lemmatizer: &'a dyn Lemmatize,
        config: GradingConfig,
    ) -> Self {
        Self {
            embedder,
            lemmatizer,
            config,
        }
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    /// Builds a similarity scorer over the engine's resources.
    fn scorer(&self) -> SimilarityScorer<'_> {
        SimilarityScorer::new(self.embedder, self.lemmatizer, &self.config)
    }

    /// Scores `answer` against `reference` at the configured semantic
    /// threshold.
    pub fn semantic_similarity(
        &self,
        answer: &str,
        reference: &str,
    ) -> Result<MatchOutcome, EmbeddingError> {
        self.scorer().score(answer, reference)
    }

    /// Grades one answer against a question's marking scheme.
    ///
    /// An empty scheme cannot earn credit: the result is score 0.0 at the
    /// lowest available grade. Otherwise each rule is classified and matched;
    /// matched rules contribute their continuous match score (not a flat 1.0)
    /// to the average, so the aggregate reflects partial credit. Once the
    /// baseline reaches the bonus floor, similarity to the sample answer adds
    /// a weighted bonus, clamped so the score never exceeds 1.0.
    pub fn grade_answer(
        &self,
        answer: &str,
        sample_answer: &str,
        rules: &[String],
        thresholds: &GradeThresholds,
    ) -> Result<GradingResult, EmbeddingError> {
        if rules.is_empty() {
            debug!("empty marking scheme, failing closed");
            return Ok(GradingResult::builder()
                .score(0.0)
                .grade(thresholds.lowest())
                .build());
        }

        let scorer = self.scorer();
        let mut matched_rules = Vec::new();
        let mut missed_rules = Vec::new();
        let mut total_score = 0.0;

        for rule in rules {
            let rule_type = RuleType::classify(rule);
            let outcome = match_rule(answer, rule, rule_type, &scorer)?;
            debug!(
                %rule,
                %rule_type,
                matched = outcome.matched,
                score = outcome.score,
                "evaluated rule"
            );

            if outcome.matched {
                matched_rules.push(rule.clone());
                total_score += outcome.score;
            } else {
                missed_rules.push(rule.clone());
            }
        }

        let mut final_score = total_score / rules.len() as f64;

        if final_score >= self.config.bonus_floor {
            let sample = scorer.score(answer, sample_answer)?;
            let bonus = sample.score * self.config.sample_bonus_weight;
            final_score = (final_score + bonus).min(1.0);
            debug!(bonus, final_score, "applied sample-answer bonus");
        }

        let grade = thresholds.assign(final_score);

        Ok(GradingResult::builder()
            .score(final_score)
            .grade(grade)
            .matched_rules(matched_rules)
            .missed_rules(missed_rules)
            .build())
    }

    /// Grades a multi-question submission.
    ///
    /// Questions the lookup cannot resolve are skipped and reported in the
    /// result, not treated as failures. A provider failure while evaluating
    /// one question is recorded against that question alone; the remaining
    /// questions still grade, and results already scored are kept. Returns
    /// `None` when no question resolved at all, so callers cannot mistake an
    /// ungradable submission for a zero score.
    pub fn grade_test(
        &self,
        question_answers: &[(String, String)],
        questions: &BTreeMap<String, QuestionSpec>,
        thresholds: &GradeThresholds,
    ) -> Option<TestGradingResult> {
        let mut question_results = Vec::new();
        let mut skipped_questions = Vec::new();
        let mut failed_questions = Vec::new();
        let mut total_points_earned = 0.0;

        for (question_id, answer) in question_answers {
            let Some(question) = questions.get(question_id) else {
                warn!(%question_id, "question not found, skipping");
                skipped_questions.push(question_id.clone());
                continue;
            };

            let result = match self.grade_answer(
                answer,
                &question.sample_answer,
                &question.marking_scheme,
                thresholds,
            ) {
                Ok(result) => result.for_question(question_id.clone(), question.points),
                Err(error) => {
                    warn!(%question_id, %error, "question evaluation failed");
                    failed_questions.push(QuestionFailure::new(question_id, error.to_string()));
                    continue;
                }
            };

            total_points_earned += result.points_earned;
            question_results.push(result);
        }

        if question_results.is_empty() {
            return None;
        }

        let overall_score = question_results.iter().map(|r| r.score).sum::<f64>()
            / question_results.len() as f64;
        let overall_grade = thresholds.assign(overall_score);
        info!(
            overall_score,
            %overall_grade,
            total_points_earned,
            questions = question_results.len(),
            failures = failed_questions.len(),
            "graded test submission"
        );

        Some(
            TestGradingResult::builder()
                .overall_score(overall_score)
                .overall_grade(overall_grade)
                .total_points_earned(total_points_earned)
                .question_results(question_results)
                .skipped_questions(skipped_questions)
                .failed_questions(failed_questions)
                .build(),
        )
    }
}
