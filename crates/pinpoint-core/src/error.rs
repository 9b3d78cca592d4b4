//! Error types for the pinpoint-core library.

use thiserror::Error;

/// Main error type for the pinpoint library.
#[derive(Error, Debug)]
pub enum PinpointError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Completion service error.
    #[error("completion error: {0}")]
    Completion(#[from] CompletionError),

    /// Invalid caller input.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors raised by the external text-completion service.
///
/// These never escape the semantic fallback: they are rendered into the
/// snippet text instead.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Missing API key or invalid client settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection failure or timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response or empty completion.
    #[error("API error: {0}")]
    Api(String),

    /// Unexpected response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors in the request itself, rejected before any processing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No document was supplied.
    #[error("No PDF file uploaded")]
    MissingDocument,

    /// The pointer list is not a JSON array of non-empty strings.
    #[error("Pointers must be a JSON array string")]
    InvalidPointers,
}

/// Result type for the pinpoint library.
pub type Result<T> = std::result::Result<T, PinpointError>;
