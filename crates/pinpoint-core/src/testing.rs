//! Test doubles for the completion service.
//!
//! Useful for exercising the resolution cascade and the HTTP layer without
//! making real completion calls.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::completion::{CompletionService, Result};
use crate::error::CompletionError;

#[derive(Debug, Clone)]
enum Reply {
    Answer(String),
    Failure(String),
}

/// A mock completion service with a fixed reply and call recording.
#[derive(Debug, Clone)]
pub struct MockCompletion {
    reply: Reply,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockCompletion {
    /// Mock answering every prompt with `"mock answer"`.
    pub fn new() -> Self {
        Self {
            reply: Reply::Answer("mock answer".to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer every prompt with `answer`.
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.reply = Reply::Answer(answer.into());
        self
    }

    /// Fail every prompt with an API error carrying `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.reply = Reply::Failure(message.into());
        self
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn complete(&self, prompt: &str) -> Result<String> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.reply {
            Reply::Answer(answer) => Ok(answer.clone()),
            Reply::Failure(message) => Err(CompletionError::Api(message.clone())),
        }
    }
}
