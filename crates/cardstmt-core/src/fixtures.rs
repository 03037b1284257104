//! Test fixtures: synthetic statement text and in-memory PDFs.

use crate::pdf::{pages_from_text, PageText};

#[path = "../tests/common/pdf.rs"]
mod documents;

pub use documents::{
    blank_pdf, encrypted_pdf_with_lines, pageless_pdf, pdf_with_pages, PASSWORD,
};

pub const AXIS: &str = include_str!("../tests/fixtures/axis.txt");
pub const BOB: &str = include_str!("../tests/fixtures/bob.txt");
pub const KOTAK: &str = include_str!("../tests/fixtures/kotak.txt");
pub const SBI: &str = include_str!("../tests/fixtures/sbi.txt");

pub fn axis_pages() -> Vec<PageText> {
    pages_from_text(AXIS)
}

pub fn bob_pages() -> Vec<PageText> {
    pages_from_text(BOB)
}

pub fn kotak_pages() -> Vec<PageText> {
    pages_from_text(KOTAK)
}

pub fn sbi_pages() -> Vec<PageText> {
    pages_from_text(SBI)
}
