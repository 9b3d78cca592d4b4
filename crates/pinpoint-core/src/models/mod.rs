//! Data models for pointer analysis and configuration.

pub mod analysis;
pub mod config;

pub use analysis::{
    parse_pointers, AnalysisResponse, Offset, PageText, Rationale, ResultEntry, Snippet,
};
pub use config::PinpointConfig;
