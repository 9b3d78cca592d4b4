//! Turning strategy matches into positioned snippets.

use crate::models::{PageText, Rationale, Snippet};

use super::rules::{matcher_for, PatternMatch};

/// Default number of characters returned for a keyword hit.
pub const DEFAULT_KEYWORD_WINDOW: usize = 80;

/// Builds page-located snippets for deterministic strategies.
#[derive(Debug, Clone)]
pub struct SnippetBuilder {
    keyword_window: usize,
}

impl SnippetBuilder {
    pub fn new() -> Self {
        Self {
            keyword_window: DEFAULT_KEYWORD_WINDOW,
        }
    }

    /// Set the keyword excerpt length in characters.
    pub fn with_keyword_window(mut self, window: usize) -> Self {
        self.keyword_window = window;
        self
    }

    /// Run the strategy for `rationale` on one page.
    ///
    /// Returns an empty list when the strategy finds nothing, and always for
    /// [`Rationale::SemanticFallback`].
    pub fn build(&self, rationale: Rationale, pointer: &str, page: &PageText) -> Vec<Snippet> {
        match rationale {
            Rationale::KeywordSearch => self.keyword(pointer, page).into_iter().collect(),
            Rationale::SemanticFallback => Vec::new(),
            pattern => match matcher_for(pattern) {
                Some(matcher) => from_matches(page.page_number, matcher.find_all(&page.content)),
                None => Vec::new(),
            },
        }
    }

    /// Excerpt starting at the first case-insensitive occurrence of `pointer`.
    ///
    /// The offset spans the pointer's length, not the excerpt's.
    pub fn keyword(&self, pointer: &str, page: &PageText) -> Option<Snippet> {
        let page_lower = page.content.to_lowercase();
        let byte_idx = page_lower.find(&pointer.to_lowercase())?;
        let start = page_lower[..byte_idx].chars().count();

        let excerpt: String = page
            .content
            .chars()
            .skip(start)
            .take(self.keyword_window)
            .collect();
        let end = start + pointer.chars().count();

        Some(Snippet::located(excerpt, page.page_number, start, end))
    }
}

impl Default for SnippetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One snippet per pattern match, in match order.
pub fn from_matches(page_number: u32, matches: Vec<PatternMatch>) -> Vec<Snippet> {
    matches
        .into_iter()
        .map(|m| Snippet::located(m.text, page_number, m.start, m.end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Offset;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_snippets() {
        let page = PageText::new(2, "Signed 01/02/2020 and 03/04/2021");
        let snippets = SnippetBuilder::new().build(Rationale::DatePattern, "dates", &page);

        assert_eq!(
            snippets,
            vec![
                Snippet::located("01/02/2020", 2, 7, 17),
                Snippet::located("03/04/2021", 2, 22, 32),
            ]
        );
    }

    #[test]
    fn test_pattern_without_matches_is_empty() {
        let page = PageText::new(1, "No contact information");
        let builder = SnippetBuilder::new();

        assert!(builder.build(Rationale::EmailPattern, "email", &page).is_empty());
        assert!(builder.build(Rationale::PhonePattern, "contact", &page).is_empty());
    }

    #[test]
    fn test_keyword_window_and_query_length_offset() {
        let text = format!("Header. Total: $500 {}", "x".repeat(100));
        let page = PageText::new(1, text);

        let snippet = SnippetBuilder::new().keyword("total", &page).unwrap();

        assert_eq!(snippet.text.chars().count(), 80);
        assert!(snippet.text.starts_with("Total: $500"));
        assert_eq!(snippet.page, Some(1));
        assert_eq!(snippet.offset, Offset::new(8, 13));
    }

    #[test]
    fn test_keyword_window_truncated_at_end() {
        let page = PageText::new(3, "Grand Total: $500");
        let snippet = SnippetBuilder::new().keyword("Total", &page).unwrap();

        assert_eq!(snippet.text, "Total: $500");
        assert_eq!(snippet.offset, Offset::new(6, 11));
    }

    #[test]
    fn test_keyword_uses_first_occurrence() {
        let page = PageText::new(1, "total one, TOTAL two");
        let snippet = SnippetBuilder::new()
            .with_keyword_window(5)
            .keyword("Total", &page)
            .unwrap();

        assert_eq!(snippet.text, "total");
        assert_eq!(snippet.offset.start, 0);
    }

    #[test]
    fn test_keyword_offsets_count_characters() {
        let page = PageText::new(1, "Łódź — Kwota: 100 zł");
        let snippet = SnippetBuilder::new().keyword("kwota", &page).unwrap();

        assert_eq!(snippet.offset, Offset::new(7, 12));
        assert_eq!(snippet.text, "Kwota: 100 zł");
    }

    #[test]
    fn test_keyword_absent() {
        let page = PageText::new(1, "nothing to see");
        assert!(SnippetBuilder::new().keyword("total", &page).is_none());
        assert!(SnippetBuilder::new()
            .build(Rationale::KeywordSearch, "total", &page)
            .is_empty());
    }

    #[test]
    fn test_semantic_fallback_builds_nothing() {
        let page = PageText::new(1, "anything");
        assert!(SnippetBuilder::new()
            .build(Rationale::SemanticFallback, "anything", &page)
            .is_empty());
    }
}
