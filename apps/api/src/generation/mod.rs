//! AI content generation pipeline.
//! Flow: prompt build → model-fallback invocation → JSON parse → schema validation.
//! All OpenRouter calls go through `backend` — no other module talks to the provider.

use thiserror::Error;

pub mod backend;
pub mod fallback;
pub mod handlers;
pub mod prompts;
pub mod service;
pub mod validator;

/// Errors produced by the generation pipeline.
///
/// Per-model failures (everything up to and including `MalformedContent`) are
/// caught inside the fallback loop and logged; only `AllModelsExhausted` and
/// `SchemaValidation` cross the pipeline boundary.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid model ID: {model}. Please verify with OpenRouter.")]
    InvalidModel { model: String },

    #[error("Invalid API key. Check OPENROUTER_API_KEY.")]
    InvalidCredentials,

    #[error("Rate limit exceeded. Try again later.")]
    RateLimited,

    #[error("Insufficient credits or permissions for model: {model}")]
    InsufficientCredits { model: String },

    #[error("OpenRouter API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model {model} returned empty content")]
    EmptyContent { model: String },

    #[error("Model {model} returned invalid JSON: {raw}")]
    MalformedContent { model: String, raw: String },

    #[error("All models failed. Last error: {last_error}")]
    AllModelsExhausted { last_error: String },

    #[error("Validation failed: {}", violations.join(", "))]
    SchemaValidation { violations: Vec<String> },
}
