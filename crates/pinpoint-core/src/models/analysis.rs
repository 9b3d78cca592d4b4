//! Request and response models for pointer analysis.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Text of a single document page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed).
    pub page_number: u32,
    /// Extracted text; empty when nothing could be extracted.
    pub content: String,
}

impl PageText {
    pub fn new(page_number: u32, content: impl Into<String>) -> Self {
        Self {
            page_number,
            content: content.into(),
        }
    }

    /// Build pages from texts in document order, numbering from 1.
    pub fn from_texts<I, S>(texts: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Self::new(i as u32 + 1, text))
            .collect()
    }
}

/// Character span within a page's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub start: usize,
    pub end: usize,
}

impl Offset {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A located or generated answer fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Matched excerpt or generated answer.
    pub text: String,
    /// Source page; `None` for generated answers.
    pub page: Option<u32>,
    /// Span in the source page; zero for generated answers.
    pub offset: Offset,
}

impl Snippet {
    /// Snippet located on a page.
    pub fn located(text: impl Into<String>, page: u32, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            page: Some(page),
            offset: Offset::new(start, end),
        }
    }

    /// Snippet produced by the completion service, not tied to a page.
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            page: None,
            offset: Offset::default(),
        }
    }
}

/// Strategy that produced the snippets of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rationale {
    DatePattern,
    EmailPattern,
    PhonePattern,
    KeywordSearch,
    SemanticFallback,
}

impl Rationale {
    /// Human-readable description of the strategy.
    pub fn description(&self) -> &'static str {
        match self {
            Rationale::DatePattern => "Date pattern search (regex)",
            Rationale::EmailPattern => "Email address search (regex)",
            Rationale::PhonePattern => "Phone number search (regex)",
            Rationale::KeywordSearch => "Keyword search",
            Rationale::SemanticFallback => "AI-powered semantic search",
        }
    }
}

impl fmt::Display for Rationale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rationale::DatePattern => "DatePattern",
            Rationale::EmailPattern => "EmailPattern",
            Rationale::PhonePattern => "PhonePattern",
            Rationale::KeywordSearch => "KeywordSearch",
            Rationale::SemanticFallback => "SemanticFallback",
        };
        f.write_str(name)
    }
}

/// Resolution of one pointer on one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// The pointer as supplied by the caller.
    pub pointer: String,
    /// Never empty.
    pub snippets: Vec<Snippet>,
    pub rationale: Rationale,
}

/// All entries for a document, ordered by page then pointer order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub results: Vec<ResultEntry>,
}

impl AnalysisResponse {
    /// Entries resolved through the completion service.
    pub fn fallback_count(&self) -> usize {
        self.results
            .iter()
            .filter(|e| e.rationale == Rationale::SemanticFallback)
            .count()
    }
}

/// Parse the caller's pointer list: a JSON array of non-empty strings.
pub fn parse_pointers(raw: &str) -> Result<Vec<String>, InputError> {
    let pointers: Vec<String> =
        serde_json::from_str(raw).map_err(|_| InputError::InvalidPointers)?;

    if pointers.iter().any(|p| p.is_empty()) {
        return Err(InputError::InvalidPointers);
    }

    Ok(pointers)
}
