//! External text-completion service and the semantic fallback built on it.

mod fallback;
mod openai;

pub use fallback::{DocumentContext, SemanticFallback, AI_ERROR_PREFIX, DEFAULT_CONTEXT_CHARS};
pub use openai::OpenAiCompletion;

use async_trait::async_trait;

use crate::error::CompletionError;

/// Result type for completion calls.
pub type Result<T> = std::result::Result<T, CompletionError>;

/// A single-prompt, single-answer text completion service.
///
/// Implementations wrap a specific provider; the resolution cascade only
/// sees this trait, so it can be exercised without network access.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send one free-text prompt and return the generated answer.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Completion service that fails every call with a fixed configuration error.
///
/// Used when no credentials are available, so the server still starts and
/// reports the problem through fallback snippets.
#[derive(Debug, Clone)]
pub struct UnavailableCompletion {
    reason: String,
}

impl UnavailableCompletion {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl CompletionService for UnavailableCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Err(CompletionError::Config(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_completion_always_fails() {
        let service = UnavailableCompletion::new("OPENAI_API_KEY not set");

        let err = service.complete("anything").await.unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: OPENAI_API_KEY not set");
    }
}
