//! Page-by-page, pointer-by-pointer resolution.

use std::time::Instant;

use tracing::{debug, info};

use super::classifier::classify;
use super::snippet::SnippetBuilder;
use crate::completion::{CompletionService, DocumentContext, SemanticFallback, DEFAULT_CONTEXT_CHARS};
use crate::error::Result;
use crate::models::{AnalysisResponse, PageText, PinpointConfig, Rationale, ResultEntry};
use crate::pdf::DocumentReader;

/// Resolves pointers against document pages.
///
/// Pages are visited in order, pointers in supplied order within each page.
/// Every (page, pointer) pair is classified, matched, and, when matching
/// yields nothing, handed to the semantic fallback. Pairs that still have no
/// snippet are dropped.
pub struct QueryResolver<'a> {
    completion: &'a dyn CompletionService,
    snippets: SnippetBuilder,
    semantic_fallback: bool,
    context_chars: usize,
}

impl<'a> QueryResolver<'a> {
    /// Create a resolver with default settings.
    pub fn new(completion: &'a dyn CompletionService) -> Self {
        Self {
            completion,
            snippets: SnippetBuilder::new(),
            semantic_fallback: true,
            context_chars: DEFAULT_CONTEXT_CHARS,
        }
    }

    /// Create a resolver from configuration.
    pub fn from_config(completion: &'a dyn CompletionService, config: &PinpointConfig) -> Self {
        Self::new(completion)
            .with_keyword_window(config.resolution.keyword_window)
            .with_semantic_fallback(config.resolution.semantic_fallback)
            .with_context_chars(config.completion.context_chars)
    }

    /// Set the keyword excerpt length.
    pub fn with_keyword_window(mut self, window: usize) -> Self {
        self.snippets = self.snippets.with_keyword_window(window);
        self
    }

    /// Enable or disable the semantic fallback.
    pub fn with_semantic_fallback(mut self, enabled: bool) -> Self {
        self.semantic_fallback = enabled;
        self
    }

    /// Set the document context length sent to the fallback.
    pub fn with_context_chars(mut self, chars: usize) -> Self {
        self.context_chars = chars;
        self
    }

    /// Read a document and resolve every pointer against it.
    ///
    /// Fails only when the document as a whole cannot be read.
    pub async fn analyze(
        &self,
        reader: &dyn DocumentReader,
        data: &[u8],
        pointers: &[String],
    ) -> Result<AnalysisResponse> {
        let pages = reader.read_pages(data)?;
        Ok(self.resolve(&pages, pointers).await)
    }

    /// Resolve every pointer on every page.
    pub async fn resolve(&self, pages: &[PageText], pointers: &[String]) -> AnalysisResponse {
        let start = Instant::now();
        let context = DocumentContext::from_pages(pages, self.context_chars);

        let mut results = Vec::new();
        for page in pages {
            for pointer in pointers {
                if let Some(entry) = self.resolve_pair(page, pointer, &context).await {
                    results.push(entry);
                }
            }
        }

        let response = AnalysisResponse { results };

        info!(
            pages = pages.len(),
            pointers = pointers.len(),
            entries = response.results.len(),
            fallback_entries = response.fallback_count(),
            duration_ms = start.elapsed().as_millis(),
            "resolved pointers"
        );

        response
    }

    /// Resolve a single pointer on a single page.
    pub async fn resolve_pair(
        &self,
        page: &PageText,
        pointer: &str,
        context: &DocumentContext,
    ) -> Option<ResultEntry> {
        let mut rationale = classify(pointer, &page.content);
        let mut snippets = self.snippets.build(rationale, pointer, page);

        debug!(
            page = page.page_number,
            pointer,
            %rationale,
            matches = snippets.len(),
            "matched pointer"
        );

        if snippets.is_empty() {
            if !self.semantic_fallback {
                return None;
            }
            rationale = Rationale::SemanticFallback;
            snippets.push(SemanticFallback::new(self.completion).answer(pointer, context).await);
        }

        Some(ResultEntry {
            pointer: pointer.to_string(),
            snippets,
            rationale,
        })
    }
}
