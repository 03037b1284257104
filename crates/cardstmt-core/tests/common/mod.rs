//! Shared helpers for the integration tests.

#![allow(dead_code)]

mod pdf;

use cardstmt_core::{pages_from_text, PageText};

pub use pdf::{blank_pdf, encrypted_pdf_with_lines, pageless_pdf, pdf_with_lines, PASSWORD};

pub const AXIS: &str = include_str!("../fixtures/axis.txt");
pub const BOB: &str = include_str!("../fixtures/bob.txt");
pub const KOTAK: &str = include_str!("../fixtures/kotak.txt");
pub const SBI: &str = include_str!("../fixtures/sbi.txt");

/// Every fixture paired with its bank key.
pub const ALL: [(&str, &str); 4] = [("axis", AXIS), ("bob", BOB), ("kotak", KOTAK), ("sbi", SBI)];

pub fn pages(text: &str) -> Vec<PageText> {
    pages_from_text(text)
}
