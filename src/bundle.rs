#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::grade::{GradeThresholds, QuestionSpec};

/// Default maximum points for a question that does not specify any.
fn default_points() -> f64 {
    10.0
}

/// One question in a bundle: its text, model answer, and marking scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to students.
    pub question: String,
    /// Model answer used for the quality bonus.
    pub sample_answer: String,
    /// The rule strings making up the marking scheme.
    pub marking_scheme: Vec<String>,
    /// Maximum points the question is worth.
    #[serde(default = "default_points")]
    pub points: f64,
}

impl Question {
    /// Projects this record into the engine's question spec.
    pub fn spec(&self) -> QuestionSpec {
        QuestionSpec::new(
            self.sample_answer.clone(),
            self.marking_scheme.clone(),
            self.points,
        )
    }
}

/// One student's submitted answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// The student's display name.
    pub student_name: String,
    /// The student's roll number, if recorded.
    #[serde(default)]
    pub student_roll_no: String,
    /// Answers keyed by question identifier.
    pub question_answers: BTreeMap<String, String>,
}

/// A self-contained grading job: questions, submissions, and an optional
/// teacher threshold table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionBundle {
    /// Teacher's grade-threshold table; the default table applies when
    /// absent.
    #[serde(default)]
    pub grade_thresholds: Option<GradeThresholds>,
    /// Questions keyed by identifier.
    pub questions: BTreeMap<String, Question>,
    /// Every student submission to grade.
    pub submissions: Vec<Submission>,
}

impl SubmissionBundle {
    /// Reads and parses a bundle from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Could not read bundle file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Could not parse bundle file {}", path.display()))
    }

    /// Returns the effective threshold table for this bundle.
    pub fn thresholds(&self) -> GradeThresholds {
        self.grade_thresholds.clone().unwrap_or_default()
    }

    /// Projects every question into the engine's lookup shape.
    pub fn question_specs(&self) -> BTreeMap<String, QuestionSpec> {
        self.questions
            .iter()
            .map(|(id, question)| (id.clone(), question.spec()))
            .collect()
    }

    /// Validates the bundle before any grading happens.
    ///
    /// This is the caller-side boundary the engine relies on: threshold
    /// tables and marking schemes are checked here, never re-validated inside
    /// the engine. Answers referencing unknown questions are only warned
    /// about, since grading skips them as partial-result omissions.
    pub fn validate(&self) -> Result<()> {
        self.thresholds()
            .validate()
            .context("Grade threshold table is invalid")?;

        ensure!(!self.questions.is_empty(), "Bundle has no questions");

        for (id, question) in &self.questions {
            ensure!(
                !question.sample_answer.trim().is_empty(),
                "Question `{id}` has an empty sample answer"
            );
            ensure!(
                !question.marking_scheme.is_empty(),
                "Question `{id}` has an empty marking scheme"
            );
            ensure!(
                question.marking_scheme.iter().all(|rule| !rule.trim().is_empty()),
                "Question `{id}` has a blank rule in its marking scheme"
            );
            ensure!(
                question.points > 0.0,
                "Question `{id}` must be worth a positive number of points"
            );
        }

        for submission in &self.submissions {
            for question_id in submission.question_answers.keys() {
                if !self.questions.contains_key(question_id) {
                    warn!(
                        student = %submission.student_name,
                        %question_id,
                        "answer references an unknown question and will be skipped"
                    );
                }
            }
        }

        Ok(())
    }
}
