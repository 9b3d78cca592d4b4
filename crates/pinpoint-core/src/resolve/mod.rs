//! Pointer resolution: classification, pattern matching, snippet building,
//! and the cascade tying them to the semantic fallback.

mod cascade;
mod classifier;
mod snippet;
pub mod rules;

pub use cascade::QueryResolver;
pub use classifier::classify;
pub use snippet::{from_matches, SnippetBuilder, DEFAULT_KEYWORD_WINDOW};
