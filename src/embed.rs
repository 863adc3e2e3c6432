#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::HashMap, sync::Mutex};

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::EmbedEnv,
    constants::{EMBED_ENDPOINT_VAR, EMBED_MODEL_VAR},
};

/// An error raised while obtaining an embedding for a single text.
///
/// This is the one error kind the grading pipeline propagates: it is scoped to
/// the rule or answer whose comparison needed the provider, so a failed call
/// never invalidates results that were already scored.
#[derive(thiserror::Error, Debug)]
pub enum EmbeddingError {
    /// No endpoint/model configuration could be found.
    #[error(
        "No embeddings endpoint is configured. Set {} and {}.",
        EMBED_ENDPOINT_VAR,
        EMBED_MODEL_VAR
    )]
    NotConfigured,
    /// The HTTP request to the provider failed.
    #[error("The embeddings request could not be completed: {0}")]
    Request(#[from] reqwest::Error),
    /// The provider answered but returned no vector.
    #[error("The embeddings endpoint returned no vector for the submitted text.")]
    EmptyResponse,
}

/// The injected embedding capability: one operation, text in, vector out.
pub trait Embedder {
    /// Returns a fixed-length dense vector representation of `text`.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Computes cosine similarity between two embedding vectors.
///
/// Returns 0.0 on length mismatch or when either vector has zero norm, so the
/// caller never divides by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Request body for an OpenAI-compatible `/embeddings` call.
#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    /// Model identifier to embed with.
    model: &'a str,
    /// The text to embed.
    input: &'a str,
}

/// A single vector entry in the provider response.
#[derive(Deserialize)]
struct EmbeddingData {
    /// The embedding vector itself.
    embedding: Vec<f32>,
}

/// Response body from an OpenAI-compatible `/embeddings` call.
#[derive(Deserialize)]
struct EmbeddingResponse {
    /// One entry per input; we only ever send one input.
    data: Vec<EmbeddingData>,
}

/// An [`Embedder`] backed by an OpenAI-compatible embeddings endpoint.
pub struct OpenAiEmbedder {
    /// Shared blocking HTTP client reused across requests.
    client: Client,
    /// Endpoint credentials and model selection.
    env: EmbedEnv,
}

impl OpenAiEmbedder {
    /// Creates an embedder from explicit credentials.
    pub fn new(env: EmbedEnv) -> Result<Self, EmbeddingError> {
        let client = Client::builder()
            // Avoid macOS dynamic store lookups that fail in sandboxed environments.
            .no_proxy()
            .build()?;
        Ok(Self { client, env })
    }

    /// Creates an embedder from `SCORIX_EMBED_*` environment variables.
    pub fn from_env() -> Result<Self, EmbeddingError> {
        let env = EmbedEnv::from_env().ok_or(EmbeddingError::NotConfigured)?;
        Self::new(env)
    }
}

impl Embedder for OpenAiEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let body = EmbeddingRequest {
            model: self.env.model(),
            input: text,
        };

        let mut request = self.client.post(self.env.endpoint()).json(&body);
        if let Some(key) = self.env.api_key() {
            request = request.bearer_auth(key);
        }

        let response: EmbeddingResponse = request.send()?.error_for_status()?.json()?;

        response
            .data
            .into_iter()
            .next()
            .map(|entry| entry.embedding)
            .ok_or(EmbeddingError::EmptyResponse)
    }
}

/// Memoizing wrapper around another [`Embedder`].
///
/// The same rule text is embedded once per student otherwise, so the grading
/// loop wraps its provider in this to collapse repeated reference lookups.
pub struct CachedEmbedder<E> {
    /// The provider that actually computes embeddings.
    inner: E,
    /// Text-to-vector memo, keyed on the exact input string.
    cache: Mutex<HashMap<String, Vec<f32>>>,
}

impl<E> CachedEmbedder<E> {
    /// Wraps `inner` with an empty cache.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }
}

impl<E: Embedder> Embedder for CachedEmbedder<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if let Ok(cache) = self.cache.lock()
            && let Some(vector) = cache.get(text)
        {
            debug!(len = text.len(), "embedding cache hit");
            return Ok(vector.clone());
        }

        let vector = self.inner.embed(text)?;
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(text.to_string(), vector.clone());
        }
        Ok(vector)
    }
}
