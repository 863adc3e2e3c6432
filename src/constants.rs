#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Stop words dropped during concept extraction: articles, conjunctions, and
/// the common prepositions that carry no gradable content.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Tokens shorter than this many characters are too short to count as
/// concepts.
pub const MIN_CONCEPT_CHARS: usize = 3;

/// Extracted key phrases shorter than this many characters are discarded as
/// noise rather than used for substring matching.
pub const MIN_PHRASE_CHARS: usize = 3;

/// Default letter-grade threshold table, as minimum percentages.
pub const DEFAULT_GRADE_THRESHOLDS: &[(&str, f64)] =
    &[("A", 85.0), ("B", 70.0), ("C", 55.0), ("D", 40.0), ("F", 0.0)];

/// Canonical letter order used when validating threshold tables.
pub const CANONICAL_LETTERS: &[&str] = &["A", "B", "C", "D", "F"];

/// Environment variable naming the OpenAI-compatible embeddings endpoint.
pub const EMBED_ENDPOINT_VAR: &str = "SCORIX_EMBED_ENDPOINT";

/// Environment variable naming the embedding model identifier.
pub const EMBED_MODEL_VAR: &str = "SCORIX_EMBED_MODEL";

/// Environment variable holding the optional embeddings API key.
pub const EMBED_API_KEY_VAR: &str = "SCORIX_EMBED_API_KEY";
