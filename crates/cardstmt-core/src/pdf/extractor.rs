//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::layout::{pages_from_text, PageText};
use super::{PdfProcessor, Result};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    password: Option<String>,
    max_pages: usize,
    min_text_chars: usize,
}

impl PdfExtractor {
    /// Create a new PDF extractor with default settings.
    pub fn new() -> Self {
        Self::from_config(&PdfConfig::default())
    }

    /// Create an extractor from PDF configuration.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            password: config.password.clone(),
            max_pages: config.max_pages,
            min_text_chars: config.min_text_chars,
        }
    }

    /// Set the password used to unlock encrypted statements.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Limit the number of pages extracted (0 = unlimited).
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    fn page_limit(&self) -> usize {
        if self.max_pages == 0 {
            usize::MAX
        } else {
            self.max_pages
        }
    }

    /// Whole-document extraction split on form feeds.
    fn fallback_pages(&self) -> Vec<PageText> {
        match self.extract_text() {
            Ok(text) => pages_from_text(&text)
                .into_iter()
                .take(self.page_limit())
                .collect(),
            Err(e) => {
                debug!("Fallback text extraction failed: {}", e);
                Vec::new()
            }
        }
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

        if doc.is_encrypted() {
            let password = self.password.as_deref().unwrap_or("");
            if doc.decrypt(password).is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF (empty password: {})", password.is_empty());

            // The fallback extractor needs the decrypted bytes
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

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::NotLoaded);
        }
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self.document.as_ref().ok_or(PdfError::NotLoaded)?;
        doc.extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    fn extract_pages(&self) -> Result<Vec<PageText>> {
        let doc = self.document.as_ref().ok_or(PdfError::NotLoaded)?;

        let mut pages = Vec::new();
        for &number in doc.get_pages().keys().take(self.page_limit()) {
            let text = match self.extract_page_text(number) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Failed to extract text from page {}: {}", number, e);
                    String::new()
                }
            };
            trace!("Page {}: {} bytes of text", number, text.len());
            pages.push(PageText::from_text(number, &text));
        }

        if pages.iter().all(|p| p.char_count() == 0) {
            debug!("No text from per-page extraction, trying whole-document extraction");
            pages = self.fallback_pages();
        }

        let chars: usize = pages.iter().map(PageText::char_count).sum();
        debug!("Extracted {} pages with {} text characters", pages.len(), chars);

        if chars == 0 || chars < self.min_text_chars {
            return Err(PdfError::NoText);
        }

        Ok(pages)
    }
}

/// Load a PDF and extract its pages in one step.
pub fn extract_pages(data: &[u8], config: &PdfConfig) -> Result<Vec<PageText>> {
    let mut extractor = PdfExtractor::from_config(config);
    extractor.load(data)?;
    extractor.extract_pages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{
        blank_pdf, encrypted_pdf_with_lines, pageless_pdf, pdf_with_pages, PASSWORD,
    };

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
        assert!(matches!(extractor.extract_pages(), Err(PdfError::NotLoaded)));
    }

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let result = extract_pages(b"this is not a pdf", &PdfConfig::default());
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_blank_pdf_has_no_text() {
        let data = blank_pdf();
        let result = extract_pages(&data, &PdfConfig::default());
        assert!(matches!(result, Err(PdfError::NoText)));
    }

    #[test]
    fn test_extracts_page_text() {
        let data = pdf_with_pages(&[&["Statement Date 16 Oct 2024"], &["Page two"]]);

        let mut extractor = PdfExtractor::new();
        extractor.load(&data).unwrap();
        assert_eq!(extractor.page_count(), 2);

        let pages = extractor.extract_pages().unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].number, 1);
        assert!(pages[0].text().contains("Statement Date 16 Oct 2024"));
        assert!(pages[1].text().contains("Page two"));
    }

    #[test]
    fn test_max_pages_limits_extraction() {
        let data = pdf_with_pages(&[&["first"], &["second"], &["third"]]);

        let mut extractor = PdfExtractor::new().with_max_pages(1);
        extractor.load(&data).unwrap();

        let pages = extractor.extract_pages().unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].text().contains("first"));
    }

    #[test]
    fn test_pageless_pdf() {
        let mut extractor = PdfExtractor::new();
        let result = extractor.load(&pageless_pdf());
        assert!(matches!(result, Err(PdfError::NoPages)));
        assert!(extractor.document.is_none());
    }

    #[test]
    fn test_encrypted_pdf_with_password() {
        let data = encrypted_pdf_with_lines(&["Total Amount Due  Rs. 8,750.50"]);

        let mut extractor = PdfExtractor::new().with_password(PASSWORD);
        extractor.load(&data).unwrap();

        let pages = extractor.extract_pages().unwrap();
        assert!(pages[0].text().contains("Total Amount Due  Rs. 8,750.50"));
    }

    #[test]
    fn test_encrypted_pdf_with_wrong_password() {
        let data = encrypted_pdf_with_lines(&["Total Amount Due  Rs. 8,750.50"]);

        let mut extractor = PdfExtractor::new().with_password("not-it");
        assert!(matches!(extractor.load(&data), Err(PdfError::Encrypted)));

        // No configured password tries the empty one
        let result = extract_pages(&data, &PdfConfig::default());
        assert!(matches!(result, Err(PdfError::Encrypted)));
    }

    #[test]
    fn test_password_from_config() {
        let data = encrypted_pdf_with_lines(&["Statement Date 16 Oct 2024"]);
        let config = PdfConfig {
            password: Some(PASSWORD.to_string()),
            ..PdfConfig::default()
        };

        let pages = extract_pages(&data, &config).unwrap();
        assert!(pages[0].text().contains("Statement Date 16 Oct 2024"));
    }
}
