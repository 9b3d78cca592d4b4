//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;
use crate::models::PageText;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from every page, one string per page.
    fn extract_text_by_pages(&self) -> Result<Vec<String>>;

    /// Extract text from a specific page.
    fn extract_page_text(&self, page: u32) -> Result<String>;

    /// Extract every page's text in order, reading at most `max_pages`
    /// pages (0 = all). Pages whose text cannot be extracted are empty.
    fn extract_pages(&self, max_pages: usize) -> Result<Vec<PageText>>;
}

/// Turns uploaded document bytes into ordered page texts.
pub trait DocumentReader: Send + Sync {
    fn read_pages(&self, data: &[u8]) -> Result<Vec<PageText>>;
}

/// [`DocumentReader`] for PDF uploads.
#[derive(Debug, Clone, Default)]
pub struct PdfReader {
    max_pages: usize,
}

impl PdfReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of pages read (0 = unlimited).
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }
}

impl DocumentReader for PdfReader {
    fn read_pages(&self, data: &[u8]) -> Result<Vec<PageText>> {
        let mut extractor = PdfExtractor::new();
        extractor.load(data)?;
        extractor.extract_pages(self.max_pages)
    }
}
