//! Model-fallback invoker.
//!
//! Tries an ordered list of model identifiers, one attempt each, no backoff.
//! A per-model attempt covers the provider call, content extraction, and the
//! JSON parse: any failure along the way logs a warning and moves to the next
//! candidate. First success wins; exhaustion surfaces the last failure.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::generation::backend::GenerationBackend;
use crate::generation::GenerationError;

/// Models tried in order. Static process-wide configuration — the list is
/// fixed at construction and never mutated at runtime.
pub const DEFAULT_MODELS: &[&str] = &[
    "mistralai/mixtral-8x7b-instruct",
    "meta-llama/llama-3.1-8b-instruct",
];

pub struct FallbackInvoker {
    backend: Arc<dyn GenerationBackend>,
    models: Vec<String>,
}

impl FallbackInvoker {
    pub fn new(backend: Arc<dyn GenerationBackend>, models: Vec<String>) -> Self {
        Self { backend, models }
    }

    pub fn with_default_models(backend: Arc<dyn GenerationBackend>) -> Self {
        Self::new(
            backend,
            DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        )
    }

    /// Generates structured content, falling through the model list in order.
    ///
    /// Returns the first candidate's successfully parsed output. If every
    /// candidate fails, returns `AllModelsExhausted` embedding the message of
    /// the last failure observed.
    pub async fn generate<T: DeserializeOwned>(
        &self,
        system: &str,
        user: &str,
    ) -> Result<T, GenerationError> {
        let mut last_error: Option<GenerationError> = None;

        for model in &self.models {
            match self.try_model::<T>(model, system, user).await {
                Ok(content) => return Ok(content),
                Err(e) => {
                    warn!("Model {model} failed: {e}");
                    last_error = Some(e);
                }
            }
        }

        Err(GenerationError::AllModelsExhausted {
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no models configured".to_string()),
        })
    }

    async fn try_model<T: DeserializeOwned>(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<T, GenerationError> {
        let content = self.backend.complete(model, system, user).await?;

        serde_json::from_str(&content).map_err(|e| {
            debug!("Invalid JSON from {model}: {e}");
            GenerationError::MalformedContent {
                model: model.to_string(),
                raw: content,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;

    use super::*;

    /// Backend that replays a scripted sequence of results and records the
    /// model identifier of each call.
    struct ScriptedBackend {
        responses: Mutex<VecDeque<Result<String, GenerationError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn new(responses: Vec<Result<String, GenerationError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerationBackend for ScriptedBackend {
        async fn complete(
            &self,
            model: &str,
            _system: &str,
            _user: &str,
        ) -> Result<String, GenerationError> {
            self.calls.lock().unwrap().push(model.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("backend called more times than scripted")
        }
    }

    fn invoker(
        backend: Arc<ScriptedBackend>,
        models: &[&str],
    ) -> FallbackInvoker {
        FallbackInvoker::new(backend, models.iter().map(|m| m.to_string()).collect())
    }

    #[tokio::test]
    async fn test_models_tried_in_order_until_first_success() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Err(GenerationError::RateLimited),
            Err(GenerationError::EmptyContent {
                model: "b".to_string(),
            }),
            Ok(r#"{"ok": true}"#.to_string()),
        ]));
        let invoker = invoker(backend.clone(), &["a", "b", "c"]);

        let result: Value = invoker.generate("sys", "user").await.unwrap();
        assert_eq!(result["ok"], true);
        assert_eq!(backend.calls(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_first_success_skips_remaining_candidates() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(
            r#"{"ok": true}"#.to_string()
        )]));
        let invoker = invoker(backend.clone(), &["a", "b", "c"]);

        let _: Value = invoker.generate("sys", "user").await.unwrap();
        assert_eq!(backend.calls(), vec!["a"]);
    }

    #[tokio::test]
    async fn test_exhaustion_wraps_last_failure_not_first() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Err(GenerationError::InvalidCredentials),
            Err(GenerationError::EmptyContent {
                model: "b".to_string(),
            }),
        ]));
        let invoker = invoker(backend, &["a", "b"]);

        let err = invoker.generate::<Value>("sys", "user").await.unwrap_err();
        match err {
            GenerationError::AllModelsExhausted { last_error } => {
                assert!(last_error.contains("Model b returned empty content"));
                assert!(!last_error.contains("Invalid API key"));
            }
            other => panic!("expected AllModelsExhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_falls_through_to_next_model() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Ok("{not json".to_string()),
            Ok(r#"{"ok": true}"#.to_string()),
        ]));
        let invoker = invoker(backend.clone(), &["a", "b"]);

        let result: Value = invoker.generate("sys", "user").await.unwrap();
        assert_eq!(result["ok"], true);
        assert_eq!(backend.calls(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_malformed_json_as_last_failure_names_model_and_raw_text() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok("{not json".to_string())]));
        let invoker = invoker(backend, &["only-model"]);

        let err = invoker.generate::<Value>("sys", "user").await.unwrap_err();
        match err {
            GenerationError::AllModelsExhausted { last_error } => {
                assert!(last_error.contains("only-model"));
                assert!(last_error.contains("{not json"));
            }
            other => panic!("expected AllModelsExhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_each_model_attempted_exactly_once() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            Err(GenerationError::RateLimited),
            Err(GenerationError::RateLimited),
        ]));
        let invoker = invoker(backend.clone(), &["a", "b"]);

        let _ = invoker.generate::<Value>("sys", "user").await;
        assert_eq!(backend.calls(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_empty_model_list_exhausts_immediately() {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        let invoker = invoker(backend.clone(), &[]);

        let err = invoker.generate::<Value>("sys", "user").await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::AllModelsExhausted { last_error } if last_error == "no models configured"
        ));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_default_models_are_ordered_and_nonempty() {
        assert!(!DEFAULT_MODELS.is_empty());
        assert_eq!(DEFAULT_MODELS[0], "mistralai/mixtral-8x7b-instruct");
    }
}
