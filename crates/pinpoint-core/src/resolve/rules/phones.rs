//! Phone number detection.
//!
//! The pattern is deliberately permissive: any run of nine or more digits,
//! optionally split once or twice by a dash, dot, or whitespace, counts.

use regex::Regex;

use super::patterns::PHONE;
use super::PatternMatcher;

/// Phone number matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneMatcher;

impl PhoneMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl PatternMatcher for PhoneMatcher {
    fn pattern(&self) -> &'static Regex {
        &PHONE
    }
}
