//! Statement parser facade.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use super::banks::StatementStrategy;
use super::normalizer::Normalizer;
use super::registry;
use crate::error::Result;
use crate::models::config::ParserConfig;
use crate::models::statement::StatementRecord;
use crate::pdf::{self, PageText};
use crate::staging::StagedDocument;

/// Where the statement document comes from.
#[derive(Debug, Clone, Copy)]
pub enum DocumentSource<'a> {
    /// Raw PDF bytes.
    Bytes(&'a [u8]),
    /// Path to a PDF file.
    Path(&'a Path),
}

/// Parses credit-card statements into [`StatementRecord`]s.
///
/// Holds only configuration, so one parser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct StatementParser {
    config: ParserConfig,
    normalizer: Normalizer,
}

impl StatementParser {
    /// Create a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        let normalizer = Normalizer::new(&config.extraction);
        Self { config, normalizer }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a statement for the given bank key.
    ///
    /// The bank key is resolved before the document is read, so an unknown
    /// key fails with `UnsupportedBank` whatever the document contains.
    pub fn parse_statement(&self, source: DocumentSource<'_>, bank: &str) -> Result<StatementRecord> {
        let strategy = registry::resolve(bank)?;

        let pages = match source {
            DocumentSource::Bytes(data) => self.extract_pages(data)?,
            DocumentSource::Path(path) => {
                debug!("Reading {}", path.display());
                let data = std::fs::read(path)?;
                self.extract_pages(&data)?
            }
        };

        self.parse_with(strategy, &pages)
    }

    /// Parse PDF bytes.
    pub fn parse_bytes(&self, data: &[u8], bank: &str) -> Result<StatementRecord> {
        self.parse_statement(DocumentSource::Bytes(data), bank)
    }

    /// Parse a PDF file.
    pub fn parse_path(&self, path: impl AsRef<Path>, bank: &str) -> Result<StatementRecord> {
        self.parse_statement(DocumentSource::Path(path.as_ref()), bank)
    }

    /// Parse an upload stream, staging it in a temporary file that is removed
    /// before this returns.
    pub fn parse_upload<R: Read>(&self, reader: R, bank: &str) -> Result<StatementRecord> {
        registry::resolve(bank)?;

        let staged = StagedDocument::from_reader(reader)?;
        self.parse_path(staged.path(), bank)
    }

    /// Parse already extracted page text.
    pub fn parse_pages(&self, pages: &[PageText], bank: &str) -> Result<StatementRecord> {
        let strategy = registry::resolve(bank)?;
        self.parse_with(strategy, pages)
    }

    /// Extract page text using this parser's PDF settings.
    pub fn extract_pages(&self, data: &[u8]) -> Result<Vec<PageText>> {
        Ok(pdf::extract_pages(data, &self.config.pdf)?)
    }

    fn parse_with(
        &self,
        strategy: &dyn StatementStrategy,
        pages: &[PageText],
    ) -> Result<StatementRecord> {
        let start = Instant::now();

        let fields = strategy.extract_fields(pages)?;
        let record = self.normalizer.normalize(&fields)?;

        info!(
            "Parsed {} statement: {} pages, {} transactions in {}ms",
            strategy.bank(),
            pages.len(),
            record.transactions.len(),
            start.elapsed().as_millis()
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PdfError, StatementError};
    use crate::fixtures;
    use crate::models::bank::BankKey;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_parser_is_shareable() {
        assert_send_sync::<StatementParser>();
    }

    #[test]
    fn test_unknown_bank_wins_over_bad_document() {
        let parser = StatementParser::new();

        let err = parser.parse_bytes(b"not a pdf", "hdfc").unwrap_err();
        assert!(matches!(err, StatementError::UnsupportedBank(_)));

        let err = parser
            .parse_path("/definitely/not/here.pdf", "hdfc")
            .unwrap_err();
        assert!(matches!(err, StatementError::UnsupportedBank(_)));
    }

    #[test]
    fn test_non_pdf_bytes_are_unreadable() {
        let err = StatementParser::new()
            .parse_bytes(b"not a pdf", "axis")
            .unwrap_err();
        assert!(matches!(
            err,
            StatementError::UnreadableDocument(PdfError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_pages() {
        let record = StatementParser::new()
            .parse_pages(&fixtures::axis_pages(), "Axis")
            .unwrap();

        assert_eq!(record.bank, BankKey::Axis);
        assert_eq!(record.total_due, Decimal::from_str("12345.67").unwrap());
        assert_eq!(record.transactions.len(), 4);
    }

    #[test]
    fn test_parse_pdf_bytes() {
        let data = fixtures::pdf_with_pages(&[&[
            "Statement Date : 12-10-2024",
            "Total Amount Due : Rs. 8,750.50",
        ]]);

        let record = StatementParser::new().parse_bytes(&data, "bob").unwrap();
        assert_eq!(record.total_due, Decimal::from_str("8750.50").unwrap());
        assert_eq!(record.due_date, None);
    }

    #[test]
    fn test_parse_upload() {
        let data = fixtures::pdf_with_pages(&[&[
            "Statement Date : 12-10-2024",
            "Total Amount Due : Rs. 8,750.50",
        ]]);

        let record = StatementParser::new()
            .parse_upload(&data[..], "bob")
            .unwrap();
        assert_eq!(record.bank, BankKey::Bob);
    }
}
