//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;
use crate::models::PageText;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("No document loaded".to_string()))
    }

    /// Per-page text from pdf-extract, if it covers every page.
    fn pages_from_pdf_extract(&self, page_count: usize) -> Option<Vec<String>> {
        let pages = match self.extract_text_by_pages() {
            Ok(pages) => pages,
            Err(e) => {
                debug!("pdf-extract failed, using lopdf per-page extraction: {}", e);
                return None;
            }
        };

        if pages.len() < page_count {
            debug!(
                "pdf-extract returned {} of {} pages, using lopdf per-page extraction",
                pages.len(),
                page_count
            );
            return None;
        }

        Some(pages)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text_by_pages(&self) -> Result<Vec<String>> {
        self.document()?;
        pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self.document()?;
        if page == 0 || page > self.page_count() {
            return Err(PdfError::InvalidPage(page));
        }

        doc.extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    fn extract_pages(&self, max_pages: usize) -> Result<Vec<PageText>> {
        self.document()?;

        let page_count = self.page_count() as usize;
        let limit = if max_pages == 0 {
            page_count
        } else {
            page_count.min(max_pages)
        };

        let extracted = self.pages_from_pdf_extract(page_count);

        let pages: Vec<PageText> = (1..=limit as u32)
            .map(|number| {
                let text = match &extracted {
                    Some(pages) => pages[number as usize - 1].clone(),
                    None => self.extract_page_text(number).unwrap_or_else(|e| {
                        warn!("Failed to extract text from page {}: {}", number, e);
                        String::new()
                    }),
                };
                PageText::new(number, text.trim())
            })
            .collect();

        debug!(
            "Extracted {} of {} pages, {} chars",
            pages.len(),
            page_count,
            pages.iter().map(|p| p.content.len()).sum::<usize>()
        );

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::{DocumentReader, PdfReader};
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Count" => page_texts.len() as i64,
            "Kids" => kids,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut data = Vec::new();
        doc.save_to(&mut data).unwrap();
        data
    }

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert!(extractor.extract_pages(0).is_err());
    }

    #[test]
    fn test_load_rejects_non_pdf() {
        let mut extractor = PdfExtractor::new();
        let err = extractor.load(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[test]
    fn test_extract_pages_in_order() {
        let data = build_pdf(&["Invoice date: 12/05/2023", "Signed by Jane Roe"]);
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        assert_eq!(extractor.page_count(), 2);

        let pages = extractor.extract_pages(0).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[1].page_number, 2);
        assert!(pages[0].content.contains("12/05/2023"));
        assert!(pages[1].content.contains("Jane Roe"));
    }

    #[test]
    fn test_pdf_extract_yields_one_text_per_page() {
        let data = build_pdf(&["alpha page", "beta page"]);
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        let pages = extractor.pages_from_pdf_extract(2).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("alpha page"));
        assert!(!pages[0].contains("beta page"));
        assert!(pages[1].contains("beta page"));
    }

    #[test]
    fn test_form_feed_in_text_does_not_shift_pages() {
        let data = build_pdf(&["first\x0Cstill first", "second"]);
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        let pages = extractor.extract_pages(0).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[1].content.contains("second"));
        assert!(!pages[1].content.contains("still first"));
    }

    #[test]
    fn test_invalid_page_number() {
        let data = build_pdf(&["only page"]);
        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();

        assert!(matches!(extractor.extract_page_text(0), Err(PdfError::InvalidPage(0))));
        assert!(matches!(extractor.extract_page_text(2), Err(PdfError::InvalidPage(2))));
    }

    #[test]
    fn test_reader_respects_max_pages() {
        let data = build_pdf(&["one", "two", "three"]);

        let pages = PdfReader::new().with_max_pages(2).read_pages(&data).unwrap();
        assert_eq!(pages.len(), 2);

        let all = PdfReader::new().read_pages(&data).unwrap();
        assert_eq!(all.len(), 3);
    }
}
