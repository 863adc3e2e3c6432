#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::HashSet, fmt::Display};

use itertools::Itertools;

use crate::{
    constants::{MIN_CONCEPT_CHARS, STOP_WORDS},
    lemma::Lemmatize,
};

/// A set of lemmatized content words extracted from one text.
///
/// Order is irrelevant and duplicates collapse; two texts with the same
/// content words modulo case, punctuation, and inflection produce equal sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptSet {
    /// The lemmatized content words.
    words: HashSet<String>,
}

impl ConceptSet {
    /// Returns true when no concepts were extracted.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the number of distinct concepts.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if `word` is one of the extracted concepts.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterates over the concepts in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Counts the concepts shared with `other`.
    pub fn overlap(&self, other: &ConceptSet) -> usize {
        self.words.intersection(&other.words).count()
    }

    /// Returns the share of `reference`'s concepts present in this set, or
    /// 0.0 when the reference has no concepts at all.
    pub fn overlap_ratio(&self, reference: &ConceptSet) -> f64 {
        if reference.is_empty() {
            return 0.0;
        }
        self.overlap(reference) as f64 / reference.len() as f64
    }
}

impl FromIterator<String> for ConceptSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl Display for ConceptSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Sorted so logs and assertion failures read deterministically.
        write!(f, "{}", self.words.iter().sorted().join(", "))
    }
}

/// Extracts the concept set for `text`.
///
/// Lowercases, replaces every character that is neither a word character nor
/// whitespace with a space, splits on whitespace, drops stop words and short
/// tokens, and lemmatizes the survivors. Deterministic; empty input yields an
/// empty set.
pub fn extract_concepts(text: &str, lemmatizer: &dyn Lemmatize) -> ConceptSet {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| !STOP_WORDS.contains(token) && token.chars().count() >= MIN_CONCEPT_CHARS)
        .map(|token| lemmatizer.lemma(token))
        .collect()
}
