//! # scorix
//!
//! An autograder that scores a student's free-text answer against a
//! teacher-authored marking scheme and produces a letter grade.
//!
//! The [`grade`] module is the core: it classifies each rule in a marking
//! scheme by its wording, matches the student's answer against it with the
//! implied strategy (exact phrase, keyword coverage, or semantic similarity),
//! averages the outcomes into a score, and maps the score to a letter through
//! a teacher-owned threshold table. The engine is a pure function library
//! over externally supplied data: the embedding provider and lemmatizer it
//! leans on are caller-owned resources injected at construction time.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Submission-bundle records consumed by the CLI.
pub mod bundle;
/// Grading configuration and environment-backed settings.
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// The embedding-provider interface and its implementations.
pub mod embed;
/// For all things related to grading
pub mod grade;
/// Word-level lemmatization used by concept extraction.
pub mod lemma;
