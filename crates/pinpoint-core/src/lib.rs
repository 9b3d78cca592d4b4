//! Core library for resolving natural-language pointers against documents.
//!
//! This crate provides:
//! - PDF processing (ordered per-page text extraction)
//! - Pattern matchers for dates, emails, and phone numbers
//! - Ordered pointer classification and snippet building
//! - A completion-service fallback for pointers with no deterministic match

pub mod completion;
pub mod error;
pub mod models;
pub mod pdf;
pub mod resolve;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use completion::{CompletionService, OpenAiCompletion, UnavailableCompletion};
pub use error::{CompletionError, InputError, PdfError, PinpointError, Result};
pub use models::{
    parse_pointers, AnalysisResponse, Offset, PageText, PinpointConfig, Rationale, ResultEntry,
    Snippet,
};
pub use pdf::{DocumentReader, PdfExtractor, PdfProcessor, PdfReader};
pub use resolve::{classify, QueryResolver, SnippetBuilder};
