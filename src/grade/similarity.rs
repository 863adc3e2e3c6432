#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use tracing::debug;

use super::{
    concepts::{ConceptSet, extract_concepts},
    results::MatchOutcome,
};
use crate::{
    config::GradingConfig,
    embed::{Embedder, EmbeddingError, cosine_similarity},
    lemma::Lemmatize,
};

/// Scores how close an answer is to a reference text.
///
/// Combines embedding cosine similarity with concept overlap using the
/// configured weights. Borrows the caller-owned provider and lemmatizer, so
/// constructing one per grading call is free.
pub struct SimilarityScorer<'a> {
    /// The injected embedding provider.
    embedder: &'a dyn Embedder,
    /// The injected lemmatizer used for concept extraction.
    lemmatizer: &'a dyn Lemmatize,
    /// Weights and thresholds governing the combination.
    config: &'a GradingConfig,
}

impl<'a> SimilarityScorer<'a> {
    /// Creates a scorer over the given resources.
    pub fn new(
        embedder: &'a dyn Embedder,
        lemmatizer: &'a dyn Lemmatize,
        config: &'a GradingConfig,
    ) -> Self {
        Self {
            embedder,
            lemmatizer,
            config,
        }
    }

    /// Returns the configuration this scorer applies.
    pub fn config(&self) -> &GradingConfig {
        self.config
    }

    /// Extracts the concept set for `text` with the scorer's lemmatizer.
    pub fn concepts(&self, text: &str) -> ConceptSet {
        extract_concepts(text, self.lemmatizer)
    }

    /// Scores `answer` against `reference` at the configured semantic
    /// threshold.
    pub fn score(&self, answer: &str, reference: &str) -> Result<MatchOutcome, EmbeddingError> {
        self.score_with_threshold(answer, reference, self.config.semantic_threshold)
    }

    /// Scores `answer` against `reference`, judging `matched` at an explicit
    /// threshold.
    ///
    /// The combined score is `direct_weight * cosine + overlap_weight *
    /// concept_overlap`, where the overlap ratio is 0.0 for a reference with
    /// no extractable concepts. Provider failures propagate and are scoped to
    /// this single comparison.
    pub fn score_with_threshold(
        &self,
        answer: &str,
        reference: &str,
        threshold: f64,
    ) -> Result<MatchOutcome, EmbeddingError> {
        let answer_embedding = self.embedder.embed(answer)?;
        let reference_embedding = self.embedder.embed(reference)?;
        let direct = f64::from(cosine_similarity(&answer_embedding, &reference_embedding));

        let overlap = self
            .concepts(answer)
            .overlap_ratio(&self.concepts(reference));

        let score = direct * self.config.direct_weight + overlap * self.config.overlap_weight;
        debug!(direct, overlap, score, threshold, "semantic comparison");

        Ok(MatchOutcome::at_threshold(score, threshold))
    }
}
