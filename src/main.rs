#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # scorix
//!
//! Command-line front end for the marking-scheme autograder. Reads a JSON
//! submission bundle, grades every submission against the bundle's questions,
//! and prints per-question tables with overall grades.

use std::path::Path;

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use scorix::{
    bundle::{Submission, SubmissionBundle},
    config::GradingConfig,
    embed::{CachedEmbedder, OpenAiEmbedder},
    grade::{GradingEngine, GradingResult, TestGradingResult},
    lemma::EnglishLemmatizer,
};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};
use tracing::{Level, metadata::LevelFilter, warn};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Grade every submission in a bundle
    Grade(String),
    /// Validate a bundle without grading it
    Check(String),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the bundle path
    fn b() -> impl Parser<String> {
        positional("BUNDLE").help("Path to a JSON submission bundle")
    }

    let grade = construct!(Cmd::Grade(b()))
        .to_options()
        .command("grade")
        .help("Grade every submission in a bundle");

    let check = construct!(Cmd::Check(b()))
        .to_options()
        .command("check")
        .help("Validate a bundle's thresholds and marking schemes");

    let cmd = construct!([grade, check]);

    cmd.to_options()
        .descr("Marking-scheme autograder for free-text answers")
        .run()
}

/// A display row for one graded question.
#[derive(Tabled)]
struct ResultRow {
    /// Question identifier.
    #[tabled(rename = "Question")]
    question: String,
    /// Score formatted to two places.
    #[tabled(rename = "Score")]
    score: String,
    /// Assigned letter grade.
    #[tabled(rename = "Grade")]
    grade: String,
    /// Points earned on the question.
    #[tabled(rename = "Points")]
    points: String,
    /// How many of the question's rules the answer satisfied.
    #[tabled(rename = "Rules hit")]
    rules_hit: String,
}

impl From<&GradingResult> for ResultRow {
    fn from(result: &GradingResult) -> Self {
        let rule_count = result.matched_rules.len() + result.missed_rules.len();
        Self {
            question: result.question_id.clone(),
            score: format!("{:.2}", result.score),
            grade: result.grade.clone(),
            points: format!("{:.2}", result.points_earned),
            rules_hit: format!("{}/{}", result.matched_rules.len(), rule_count),
        }
    }
}

/// Colors a letter grade for terminal output.
fn colorize_grade(grade: &str) -> String {
    match grade {
        "A" | "B" => grade.green().bold().to_string(),
        "C" => grade.yellow().bold().to_string(),
        _ => grade.red().bold().to_string(),
    }
}

/// Prints one student's graded submission as a table plus a summary line.
fn print_result(submission: &Submission, result: &TestGradingResult) {
    let rows: Vec<ResultRow> = result.question_results.iter().map(Into::into).collect();

    let banner = if submission.student_roll_no.is_empty() {
        submission.student_name.clone()
    } else {
        format!("{} ({})", submission.student_name, submission.student_roll_no)
    };

    let table = Table::new(&rows)
        .with(Panel::header(banner))
        .with(Panel::footer(format!(
            "Overall: {:.2}, {:.2} points earned",
            result.overall_score, result.total_points_earned
        )))
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Modify::new(Rows::last()).with(Alignment::center()))
        .with(Style::modern())
        .to_string();

    println!("{table}");
    println!(
        "{} receives an overall {}\n",
        submission.student_name.bold(),
        colorize_grade(&result.overall_grade)
    );

    for question_id in &result.skipped_questions {
        warn!(%question_id, "skipped answer to unknown question");
    }

    for failure in &result.failed_questions {
        println!(
            "  {} `{}` could not be graded: {}",
            "!".red().bold(),
            failure.question_id,
            failure.reason
        );
    }
}

/// Grades every submission in the bundle at `path`.
fn grade_bundle(path: &str) -> Result<()> {
    let bundle = SubmissionBundle::load(Path::new(path))?;
    bundle.validate()?;

    let embedder = CachedEmbedder::new(
        OpenAiEmbedder::from_env().context("Could not configure the embeddings provider")?,
    );
    let lemmatizer = EnglishLemmatizer;
    let engine = GradingEngine::with_config(&embedder, &lemmatizer, GradingConfig::from_env());

    let thresholds = bundle.thresholds();
    let questions = bundle.question_specs();

    for submission in &bundle.submissions {
        let question_answers: Vec<(String, String)> = submission
            .question_answers
            .iter()
            .map(|(id, answer)| (id.clone(), answer.clone()))
            .collect();

        match engine.grade_test(&question_answers, &questions, &thresholds) {
            Some(result) => print_result(submission, &result),
            None => println!(
                "{}: no gradable answers in this submission\n",
                submission.student_name.yellow()
            ),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Grade(path) => grade_bundle(&path)?,
        Cmd::Check(path) => {
            let bundle = SubmissionBundle::load(Path::new(&path))?;
            bundle.validate()?;
            println!(
                "{path}: {} question(s), {} submission(s), thresholds well-formed",
                bundle.questions.len(),
                bundle.submissions.len()
            );
        }
    }

    Ok(())
}
