//! Regex-based detectors for dates, emails, and phone numbers.

pub mod dates;
pub mod emails;
pub mod phones;
pub mod patterns;

pub use dates::DateMatcher;
pub use emails::EmailMatcher;
pub use phones::PhoneMatcher;

use regex::Regex;

use crate::models::Rationale;

/// Trait for stateless pattern detectors.
pub trait PatternMatcher: Send + Sync {
    /// The compiled pattern.
    fn pattern(&self) -> &'static Regex;

    /// Find all non-overlapping matches, left to right.
    fn find_all(&self, text: &str) -> Vec<PatternMatch> {
        char_spans(text, self.pattern().find_iter(text))
    }

    /// Find the first match.
    fn find(&self, text: &str) -> Option<PatternMatch> {
        self.find_all(text).into_iter().next()
    }
}

/// A pattern hit with character offsets into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Source text that was matched.
    pub text: String,
    /// Start position in characters.
    pub start: usize,
    /// End position in characters (exclusive).
    pub end: usize,
}

impl PatternMatch {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Matcher backing a pattern rationale.
pub fn matcher_for(rationale: Rationale) -> Option<&'static dyn PatternMatcher> {
    static DATES: DateMatcher = DateMatcher;
    static EMAILS: EmailMatcher = EmailMatcher;
    static PHONES: PhoneMatcher = PhoneMatcher;

    match rationale {
        Rationale::DatePattern => Some(&DATES),
        Rationale::EmailPattern => Some(&EMAILS),
        Rationale::PhonePattern => Some(&PHONES),
        Rationale::KeywordSearch | Rationale::SemanticFallback => None,
    }
}

/// Convert ordered byte-offset matches into character-offset matches.
fn char_spans<'t>(
    text: &'t str,
    matches: impl Iterator<Item = regex::Match<'t>>,
) -> Vec<PatternMatch> {
    let mut results = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for m in matches {
        char_pos += text[byte_pos..m.start()].chars().count();
        let start = char_pos;
        let end = start + m.as_str().chars().count();

        results.push(PatternMatch::new(m.as_str(), start, end));

        byte_pos = m.end();
        char_pos = end;
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_char_spans_after_multibyte_text() {
        let text = "Zażółć: a@b.pl, ünï c@d.io";
        let matches = EmailMatcher.find_all(text);

        assert_eq!(
            matches,
            vec![PatternMatch::new("a@b.pl", 8, 14), PatternMatch::new("c@d.io", 20, 26)]
        );

        for m in &matches {
            let sliced: String = text.chars().skip(m.start).take(m.end - m.start).collect();
            assert_eq!(sliced, m.text);
        }
    }

    #[test]
    fn test_matcher_for_rationale() {
        assert!(matcher_for(Rationale::DatePattern).is_some());
        assert!(matcher_for(Rationale::EmailPattern).is_some());
        assert!(matcher_for(Rationale::PhonePattern).is_some());
        assert!(matcher_for(Rationale::KeywordSearch).is_none());
        assert!(matcher_for(Rationale::SemanticFallback).is_none());
    }
}
