//! PDF processing module.

mod extractor;
mod layout;

pub use extractor::{extract_pages, PdfExtractor};
pub use layout::{all_lines, pages_from_text, PageText, TextCell, TextLine};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes, decrypting it if necessary.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract text from a specific page.
    fn extract_page_text(&self, page: u32) -> Result<String>;

    /// Extract every page as lines and cells.
    fn extract_pages(&self) -> Result<Vec<PageText>>;
}
