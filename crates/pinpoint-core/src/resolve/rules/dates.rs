//! Numeric date detection.

use regex::Regex;

use super::patterns::DATE;
use super::PatternMatcher;

/// Date matcher for day/month/year tokens separated by `/` or `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateMatcher;

impl DateMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl PatternMatcher for DateMatcher {
    fn pattern(&self) -> &'static Regex {
        &DATE
    }
}
