#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::constants::{EMBED_API_KEY_VAR, EMBED_ENDPOINT_VAR, EMBED_MODEL_VAR};

/// Reads an optional weight/threshold override from the environment,
/// defaulting when unset, unparseable, or outside `[0, 1]`.
fn read_ratio(var: &str, default: f64) -> f64 {
    std::env::var(var)
        .ok()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|value| (0.0..=1.0).contains(value))
        .unwrap_or(default)
}

/// Tuning knobs for the grading engine.
///
/// Every constant the scoring pipeline uses lives here so callers can see and
/// override the policy instead of relying on numbers buried in match arms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradingConfig {
    /// Weight of embedding cosine similarity in the combined semantic score.
    pub direct_weight: f64,
    /// Weight of concept overlap in the combined semantic score.
    pub overlap_weight: f64,
    /// Minimum combined score for a semantic comparison to count as matched.
    pub semantic_threshold: f64,
    /// Minimum lexical-overlap ratio for a keyword rule to count as matched.
    pub keyword_overlap_threshold: f64,
    /// Multiplier applied to sample-answer similarity when awarding the bonus.
    pub sample_bonus_weight: f64,
    /// Minimum baseline score before the sample-answer bonus applies.
    pub bonus_floor: f64,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            direct_weight: 0.7,
            overlap_weight: 0.3,
            semantic_threshold: 0.2,
            keyword_overlap_threshold: 0.8,
            sample_bonus_weight: 0.2,
            bonus_floor: 0.5,
        }
    }
}

impl GradingConfig {
    /// Builds a configuration from the defaults, applying any `SCORIX_*`
    /// environment overrides that parse to a value in `[0, 1]`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            direct_weight: read_ratio("SCORIX_DIRECT_WEIGHT", defaults.direct_weight),
            overlap_weight: read_ratio("SCORIX_OVERLAP_WEIGHT", defaults.overlap_weight),
            semantic_threshold: read_ratio(
                "SCORIX_SEMANTIC_THRESHOLD",
                defaults.semantic_threshold,
            ),
            keyword_overlap_threshold: read_ratio(
                "SCORIX_KEYWORD_OVERLAP_THRESHOLD",
                defaults.keyword_overlap_threshold,
            ),
            sample_bonus_weight: read_ratio(
                "SCORIX_SAMPLE_BONUS_WEIGHT",
                defaults.sample_bonus_weight,
            ),
            bonus_floor: read_ratio("SCORIX_BONUS_FLOOR", defaults.bonus_floor),
        }
    }
}

/// Embeddings-endpoint credentials sourced from the environment.
#[derive(Debug, Clone)]
pub struct EmbedEnv {
    /// Fully qualified URL of an OpenAI-compatible `/embeddings` endpoint.
    endpoint: String,
    /// Model identifier sent with every embeddings request.
    model: String,
    /// Optional bearer token; local inference servers often need none.
    api_key: Option<String>,
}

impl EmbedEnv {
    /// Construct an `EmbedEnv` from environment variables; returns `None` if
    /// the endpoint or model is missing.
    pub fn from_env() -> Option<Self> {
        let endpoint = std::env::var(EMBED_ENDPOINT_VAR).ok()?.trim().to_owned();
        let model = std::env::var(EMBED_MODEL_VAR).ok()?.trim().to_owned();

        if endpoint.is_empty() || model.is_empty() {
            return None;
        }

        let api_key = std::env::var(EMBED_API_KEY_VAR)
            .ok()
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty());

        Some(Self {
            endpoint,
            model,
            api_key,
        })
    }

    /// Creates credentials directly, for callers that do not use the
    /// environment.
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            endpoint,
            model,
            api_key,
        }
    }

    /// Returns the embeddings endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the embedding model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the API key, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
