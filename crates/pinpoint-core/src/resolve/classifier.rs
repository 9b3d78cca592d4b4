//! Ordered classification of pointers into resolution strategies.

use tracing::trace;

use crate::models::Rationale;

/// Condition under which a rule applies.
#[derive(Debug, Clone, Copy)]
enum Trigger {
    /// The lower-cased pointer contains any of the words.
    PointerMentions(&'static [&'static str]),
    /// The lower-cased pointer occurs in the lower-cased page text.
    PointerInPage,
    /// Always applies.
    Always,
}

/// A single predicate → label rule.
#[derive(Debug, Clone, Copy)]
struct ClassificationRule {
    trigger: Trigger,
    rationale: Rationale,
}

/// Rules in priority order; the first applicable rule wins.
const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        trigger: Trigger::PointerMentions(&["date"]),
        rationale: Rationale::DatePattern,
    },
    ClassificationRule {
        trigger: Trigger::PointerMentions(&["email"]),
        rationale: Rationale::EmailPattern,
    },
    ClassificationRule {
        trigger: Trigger::PointerMentions(&["phone", "mobile", "contact"]),
        rationale: Rationale::PhonePattern,
    },
    ClassificationRule {
        trigger: Trigger::PointerInPage,
        rationale: Rationale::KeywordSearch,
    },
    ClassificationRule {
        trigger: Trigger::Always,
        rationale: Rationale::SemanticFallback,
    },
];

impl Trigger {
    fn applies(&self, pointer_lower: &str, page_lower: &str) -> bool {
        match self {
            Trigger::PointerMentions(words) => words.iter().any(|w| pointer_lower.contains(w)),
            Trigger::PointerInPage => page_lower.contains(pointer_lower),
            Trigger::Always => true,
        }
    }
}

/// Pick the strategy for a pointer on a page.
///
/// Pure function of its inputs. Pattern labels are chosen from the pointer
/// alone and never fall through to keyword search, even when the page holds
/// no match for the pattern.
pub fn classify(pointer: &str, page_text: &str) -> Rationale {
    let pointer_lower = pointer.to_lowercase();
    let page_lower = page_text.to_lowercase();

    let rationale = RULES
        .iter()
        .find(|rule| rule.trigger.applies(&pointer_lower, &page_lower))
        .map(|rule| rule.rationale)
        .unwrap_or(Rationale::SemanticFallback);

    trace!(pointer, %rationale, "classified pointer");
    rationale
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "Invoice date: 12/05/2023 contact 9876543210";

    #[test]
    fn test_date_keyword_wins() {
        assert_eq!(classify("List all dates", PAGE), Rationale::DatePattern);
        assert_eq!(classify("DATE of signing", ""), Rationale::DatePattern);
        // "date" outranks "email" even when both are present
        assert_eq!(classify("email update date", PAGE), Rationale::DatePattern);
    }

    #[test]
    fn test_email_keyword() {
        assert_eq!(classify("Extract Email id", PAGE), Rationale::EmailPattern);
        assert_eq!(classify("email contact", PAGE), Rationale::EmailPattern);
    }

    #[test]
    fn test_phone_keywords() {
        assert_eq!(classify("Phone number", PAGE), Rationale::PhonePattern);
        assert_eq!(classify("mobile", ""), Rationale::PhonePattern);
        assert_eq!(classify("Contact details", ""), Rationale::PhonePattern);
    }

    #[test]
    fn test_keyword_search_is_case_insensitive() {
        assert_eq!(classify("INVOICE", PAGE), Rationale::KeywordSearch);
        assert_eq!(classify("Total", "Grand TOTAL: $500"), Rationale::KeywordSearch);
    }

    #[test]
    fn test_semantic_fallback_is_catch_all() {
        assert_eq!(classify("Who signed?", PAGE), Rationale::SemanticFallback);
        assert_eq!(classify("Total", ""), Rationale::SemanticFallback);
    }

    #[test]
    fn test_pattern_label_does_not_depend_on_page() {
        // No dates on the page, label is still the date pattern
        assert_eq!(classify("due date", "nothing here"), Rationale::DatePattern);
    }

    #[test]
    fn test_rules_end_with_catch_all() {
        let last = RULES.last().unwrap();
        assert!(matches!(last.trigger, Trigger::Always));
        assert_eq!(last.rationale, Rationale::SemanticFallback);
    }
}
