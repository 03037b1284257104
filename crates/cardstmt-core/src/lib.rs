//! Core library for Indian credit-card statement parsing.
//!
//! This crate provides:
//! - PDF text extraction with line and column layout
//! - A registry of per-bank statement templates (Axis, BOB, Kotak, SBI)
//! - Field normalization into a canonical statement record
//! - Scoped staging of uploaded documents

pub mod error;
pub mod models;
pub mod pdf;
pub mod staging;
pub mod statement;

#[cfg(test)]
mod fixtures;

pub use error::{ErrorKind, ErrorPayload, PdfError, Result, StatementError};
pub use models::bank::BankKey;
pub use models::config::{ExtractionConfig, ParserConfig, PdfConfig};
pub use models::statement::{StatementPeriod, StatementRecord, Transaction, TransactionType};
pub use pdf::{pages_from_text, PageText, PdfExtractor, PdfProcessor};
pub use staging::StagedDocument;
pub use statement::{supported_banks, DocumentSource, Field, StatementParser};
