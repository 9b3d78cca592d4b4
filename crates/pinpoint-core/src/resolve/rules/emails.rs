//! Email address detection.

use regex::Regex;

use super::patterns::EMAIL;
use super::PatternMatcher;

/// Email address matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailMatcher;

impl EmailMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl PatternMatcher for EmailMatcher {
    fn pattern(&self) -> &'static Regex {
        &EMAIL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::rules::PatternMatch;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_all_emails() {
        let matcher = EmailMatcher::new();

        let result = matcher.find_all("Contact: john.doe@example.com, billing+eu@acme-corp.co.uk");
        assert_eq!(
            result,
            vec![
                PatternMatch::new("john.doe@example.com", 9, 29),
                PatternMatch::new("billing+eu@acme-corp.co.uk", 31, 57),
            ]
        );
    }

    #[test]
    fn test_requires_alpha_tld() {
        let matcher = EmailMatcher::new();

        assert!(matcher.find("user@localhost").is_none());
        assert!(matcher.find("user@host.1").is_none());
        assert!(matcher.find("no address here").is_none());
    }
}
