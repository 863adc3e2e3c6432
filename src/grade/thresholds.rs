#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{cmp::Ordering, collections::BTreeMap};

use serde::{Deserialize, Serialize};

use crate::constants::{CANONICAL_LETTERS, DEFAULT_GRADE_THRESHOLDS};

/// A malformed grade-threshold table.
///
/// Raised by [`GradeThresholds::validate`]; assignment itself never
/// re-validates, by design, since table validation belongs at the boundary
/// where teacher-supplied tables enter the system.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ThresholdError {
    /// The table has no entries at all.
    #[error("The grade threshold table is empty.")]
    Empty,
    /// A minimum percentage fell outside 0-100.
    #[error("Threshold for `{letter}` is outside 0-100: {minimum}")]
    OutOfRange {
        /// The offending letter.
        letter: String,
        /// Its configured minimum.
        minimum: f64,
    },
    /// Minimums are not strictly descending across the canonical letters.
    #[error(
        "Thresholds must be strictly descending: `{lower}` ({lower_minimum}) must stay below \
         `{higher}` ({higher_minimum})."
    )]
    NotDescending {
        /// The letter that should carry the higher minimum.
        higher: String,
        /// Its configured minimum.
        higher_minimum: f64,
        /// The letter that should carry the lower minimum.
        lower: String,
        /// Its configured minimum.
        lower_minimum: f64,
    },
}

/// A teacher's letter-grade table: each letter's minimum percentage score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeThresholds {
    /// Letter to minimum-percentage mapping.
    minimums: BTreeMap<String, f64>,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        DEFAULT_GRADE_THRESHOLDS
            .iter()
            .map(|(letter, minimum)| ((*letter).to_string(), *minimum))
            .collect()
    }
}

impl FromIterator<(String, f64)> for GradeThresholds {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            minimums: iter.into_iter().collect(),
        }
    }
}

impl GradeThresholds {
    /// Wraps an existing letter-to-minimum mapping.
    pub fn new(minimums: BTreeMap<String, f64>) -> Self {
        Self { minimums }
    }

    /// Returns true when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.minimums.is_empty()
    }

    /// Returns the number of letters in the table.
    pub fn len(&self) -> usize {
        self.minimums.len()
    }

    /// Returns the table's entries sorted by minimum percentage, descending.
    fn descending(&self) -> Vec<(&str, f64)> {
        let mut bands: Vec<(&str, f64)> = self
            .minimums
            .iter()
            .map(|(letter, minimum)| (letter.as_str(), *minimum))
            .collect();
        bands.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        bands
    }

    /// Returns the letter with the lowest minimum, the fail-safe grade.
    pub fn lowest(&self) -> String {
        self.descending()
            .last()
            .map(|(letter, _)| (*letter).to_string())
            .unwrap_or_else(|| "F".to_string())
    }

    /// Maps a score in `[0, 1]` to a letter grade.
    ///
    /// The first letter (scanning minimums descending) whose minimum is at or
    /// below the score's percentage wins; when none qualifies, the
    /// lowest-threshold letter is returned rather than an error.
    pub fn assign(&self, score: f64) -> String {
        let percent = score * 100.0;

        for (letter, minimum) in self.descending() {
            if percent >= minimum {
                return letter.to_string();
            }
        }

        self.lowest()
    }

    /// Checks that the table is non-empty, in range, and strictly descending
    /// across the canonical letter order.
    ///
    /// Letters outside the canonical order (say, `A+`) are range-checked but
    /// not ordered, since the canonical invariant does not speak for them.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if self.minimums.is_empty() {
            return Err(ThresholdError::Empty);
        }

        for (letter, minimum) in &self.minimums {
            if !(0.0..=100.0).contains(minimum) {
                return Err(ThresholdError::OutOfRange {
                    letter: letter.clone(),
                    minimum: *minimum,
                });
            }
        }

        let mut previous: Option<(&str, f64)> = None;
        for &letter in CANONICAL_LETTERS {
            let Some(minimum) = self.minimums.get(letter) else {
                continue;
            };
            if let Some((higher, higher_minimum)) = previous
                && *minimum >= higher_minimum
            {
                return Err(ThresholdError::NotDescending {
                    higher: higher.to_string(),
                    higher_minimum,
                    lower: (*letter).to_string(),
                    lower_minimum: *minimum,
                });
            }
            previous = Some((letter, *minimum));
        }

        Ok(())
    }
}

/// Maps a score in `[0, 1]` to a letter grade using `thresholds`.
pub fn assign_grade(score: f64, thresholds: &GradeThresholds) -> String {
    thresholds.assign(score)
}
