//! Generated answers for pointers with no deterministic match.

use tracing::{debug, warn};

use super::CompletionService;
use crate::models::{PageText, Snippet};

/// Default number of document characters sent as context.
pub const DEFAULT_CONTEXT_CHARS: usize = 6000;

/// Prefix of snippet text reporting a failed completion call.
pub const AI_ERROR_PREFIX: &str = "AI error: ";

/// Whole-document text shared by every fallback prompt of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentContext {
    text: String,
}

impl DocumentContext {
    /// Render all pages with `Page N:` headers, keeping the first
    /// `max_chars` characters.
    pub fn from_pages(pages: &[PageText], max_chars: usize) -> Self {
        let full_text = pages
            .iter()
            .map(|p| format!("Page {}:\n{}", p.page_number, p.content))
            .collect::<Vec<_>>()
            .join("\n\n");

        let text = match full_text.char_indices().nth(max_chars) {
            Some((cut, _)) => full_text[..cut].to_string(),
            None => full_text,
        };

        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Asks the completion service about a pointer, never failing.
pub struct SemanticFallback<'a> {
    service: &'a dyn CompletionService,
}

impl<'a> SemanticFallback<'a> {
    pub fn new(service: &'a dyn CompletionService) -> Self {
        Self { service }
    }

    /// Build the single-turn prompt for a pointer.
    pub fn prompt(pointer: &str, context: &DocumentContext) -> String {
        format!(
            "You are a helpful AI analyzing a PDF document.\n\n\
             Document content:\n{}\n\n\
             Question: {}\n\n\
             Provide a short, clear answer based only on the document.",
            context.as_str(),
            pointer
        )
    }

    /// Produce exactly one unlocated snippet: the answer, or the failure
    /// description prefixed with [`AI_ERROR_PREFIX`].
    pub async fn answer(&self, pointer: &str, context: &DocumentContext) -> Snippet {
        let prompt = Self::prompt(pointer, context);

        match self.service.complete(&prompt).await {
            Ok(answer) => {
                debug!(pointer, answer_len = answer.len(), "semantic fallback answered");
                Snippet::generated(answer)
            }
            Err(e) => {
                warn!(pointer, error = %e, "semantic fallback failed");
                Snippet::generated(format!("{}{}", AI_ERROR_PREFIX, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockCompletion;
    use pretty_assertions::assert_eq;

    fn pages() -> Vec<PageText> {
        PageText::from_texts(["Invoice date: 12/05/2023", "", "Signed by Jane Roe"])
    }

    #[test]
    fn test_context_renders_page_headers() {
        let context = DocumentContext::from_pages(&pages(), DEFAULT_CONTEXT_CHARS);

        assert_eq!(
            context.as_str(),
            "Page 1:\nInvoice date: 12/05/2023\n\nPage 2:\n\n\nPage 3:\nSigned by Jane Roe"
        );
    }

    #[test]
    fn test_context_truncated_by_characters() {
        let pages = PageText::from_texts(["ąęść".repeat(10)]);
        let context = DocumentContext::from_pages(&pages, 12);

        assert_eq!(context.as_str(), "Page 1:\nąęść");
        assert_eq!(context.as_str().chars().count(), 12);
    }

    #[test]
    fn test_prompt_contains_context_and_question() {
        let context = DocumentContext::from_pages(&pages(), DEFAULT_CONTEXT_CHARS);
        let prompt = SemanticFallback::prompt("Who signed?", &context);

        assert!(prompt.contains("Document content:\nPage 1:\nInvoice date: 12/05/2023"));
        assert!(prompt.contains("Question: Who signed?"));
        assert!(prompt.ends_with("based only on the document."));
    }

    #[tokio::test]
    async fn test_answer_success() {
        let mock = MockCompletion::new().with_answer("Jane Roe");
        let context = DocumentContext::from_pages(&pages(), DEFAULT_CONTEXT_CHARS);

        let snippet = SemanticFallback::new(&mock).answer("Who signed?", &context).await;

        assert_eq!(snippet, Snippet::generated("Jane Roe"));
        assert_eq!(mock.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_answer_failure_becomes_content() {
        let mock = MockCompletion::new().failing("rate limited");
        let context = DocumentContext::from_pages(&pages(), DEFAULT_CONTEXT_CHARS);

        let snippet = SemanticFallback::new(&mock).answer("Who signed?", &context).await;

        assert_eq!(snippet.text, "AI error: API error: rate limited");
        assert_eq!(snippet.page, None);
        assert_eq!(snippet.offset.start, 0);
        assert_eq!(snippet.offset.end, 0);
    }
}
