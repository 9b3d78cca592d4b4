//! Document reading off the async runtime.

use std::sync::Arc;

use pinpoint_core::{DocumentReader, PageText, PdfError};

/// Read pages on the blocking pool.
///
/// A panic inside the extractor is reported as a text-extraction error for
/// this document only.
pub async fn read_pages<D>(reader: Arc<dyn DocumentReader>, data: D) -> Result<Vec<PageText>, PdfError>
where
    D: AsRef<[u8]> + Send + 'static,
{
    tokio::task::spawn_blocking(move || reader.read_pages(data.as_ref()))
        .await
        .unwrap_or_else(|e| {
            let reason = if e.is_panic() {
                "extractor panicked on this document".to_string()
            } else {
                e.to_string()
            };
            Err(PdfError::TextExtraction(reason))
        })
}
