//! OpenRouter chat-completion backend.
//!
//! ARCHITECTURAL RULE: no other module may call the OpenRouter API directly.
//! The fallback invoker talks to backends only through `GenerationBackend`,
//! which keeps the retry logic testable without network access.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::generation::GenerationError;

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const OPENROUTER_MODELS_URL: &str = "https://openrouter.ai/api/v1/models";

/// Fixed generation parameters, applied to every model attempt.
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 2000;

/// Per-attempt wall-clock cap. The provider contract has no timeout of its
/// own; without this an unresponsive model would stall the whole fallback
/// chain indefinitely.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

/// A generation backend invoked uniformly by model identifier.
///
/// `complete` returns the first choice's message content. Missing or empty
/// content is an `EmptyContent` failure here, so the invoker treats it like
/// any other per-model failure and moves on.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

/// The HTTPS OpenRouter client used in production.
#[derive(Clone)]
pub struct OpenRouterBackend {
    client: Client,
    api_key: String,
}

impl OpenRouterBackend {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Fetches the provider's model catalog.
    pub async fn list_models(&self) -> Result<Vec<Value>, GenerationError> {
        let response = self
            .client
            .get(OPENROUTER_MODELS_URL)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        #[derive(Deserialize)]
        struct ModelCatalog {
            data: Vec<Value>,
        }

        let catalog: ModelCatalog = response.json().await?;
        Ok(catalog.data)
    }
}

#[async_trait]
impl GenerationBackend for OpenRouterBackend {
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<String, GenerationError> {
        let request_body = ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(OPENROUTER_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(classify_status_error(status.as_u16(), &body, model));
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|_| GenerationError::Api {
                status: status.as_u16(),
                message: format!("Non-JSON response from API: {body}"),
            })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| GenerationError::EmptyContent {
                model: model.to_string(),
            })?;

        debug!("Model {model} returned {} bytes of content", content.len());
        Ok(content)
    }
}

/// Maps a non-OK provider response to a specific error by the machine-readable
/// `error.code` in the body, falling back to a generic API error.
fn classify_status_error(status: u16, body: &str, model: &str) -> GenerationError {
    let error = serde_json::from_str::<ProviderError>(body)
        .ok()
        .map(|e| e.error);
    let code = error.as_ref().and_then(|e| e.code);
    let message = error
        .as_ref()
        .and_then(|e| e.message.clone())
        .unwrap_or_default();

    match code {
        Some(400) if message.contains("not a valid model ID") => GenerationError::InvalidModel {
            model: model.to_string(),
        },
        Some(401) => GenerationError::InvalidCredentials,
        Some(429) => GenerationError::RateLimited,
        Some(403) => GenerationError::InsufficientCredits {
            model: model.to_string(),
        },
        _ => GenerationError::Api {
            status,
            message: if message.is_empty() {
                body.to_string()
            } else {
                message
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_invalid_model() {
        let body = r#"{"error": {"code": 400, "message": "foo/bar is not a valid model ID"}}"#;
        let err = classify_status_error(400, body, "foo/bar");
        assert!(matches!(err, GenerationError::InvalidModel { model } if model == "foo/bar"));
    }

    #[test]
    fn test_classify_other_400_is_generic_api_error() {
        let body = r#"{"error": {"code": 400, "message": "malformed request"}}"#;
        let err = classify_status_error(400, body, "foo/bar");
        assert!(matches!(err, GenerationError::Api { status: 400, .. }));
    }

    #[test]
    fn test_classify_invalid_credentials() {
        let body = r#"{"error": {"code": 401, "message": "No auth credentials found"}}"#;
        assert!(matches!(
            classify_status_error(401, body, "m"),
            GenerationError::InvalidCredentials
        ));
    }

    #[test]
    fn test_classify_rate_limited() {
        let body = r#"{"error": {"code": 429, "message": "Rate limit exceeded"}}"#;
        assert!(matches!(
            classify_status_error(429, body, "m"),
            GenerationError::RateLimited
        ));
    }

    #[test]
    fn test_classify_insufficient_credits() {
        let body = r#"{"error": {"code": 403, "message": "Insufficient credits"}}"#;
        let err = classify_status_error(403, body, "meta-llama/llama-3.1-8b-instruct");
        assert!(matches!(
            err,
            GenerationError::InsufficientCredits { model } if model == "meta-llama/llama-3.1-8b-instruct"
        ));
    }

    #[test]
    fn test_classify_unparseable_body_keeps_raw_text() {
        let err = classify_status_error(502, "Bad Gateway", "m");
        match err {
            GenerationError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_content_field_deserializes_to_none() {
        // `choices[0].message` present but no `content` key — must not be a
        // deserialization error; the caller maps it to EmptyContent.
        let body = r#"{"choices": [{"message": {"role": "assistant"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content);
        assert!(content.is_none());
    }

    #[test]
    fn test_whitespace_content_counts_as_empty() {
        let body = r#"{"choices": [{"message": {"content": "   "}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.trim().is_empty());
        assert!(content.is_none());
    }

    #[test]
    fn test_chat_request_serializes_json_object_hint() {
        let request = ChatRequest {
            model: "mistralai/mixtral-8x7b-instruct",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["max_tokens"], 2000);
    }
}
