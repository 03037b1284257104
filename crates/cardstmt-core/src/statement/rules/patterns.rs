//! Common regex patterns for Indian credit-card statements.
//!
//! The `*_TOKEN` strings are building blocks that bank modules splice into
//! their own anchors; the compiled statics match a single value token.

use lazy_static::lazy_static;
use regex::Regex;

/// English month names and their usual abbreviations.
pub const MONTH_TOKEN: &str = r"(?i:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

/// Amount with optional currency prefix, grouping commas and sign marker.
pub const AMOUNT_TOKEN: &str = r"(?:₹|Rs\.?|INR|`)?\s*(?:-\s*)?\(?\d+(?:,\d{2,3})*\.\d{2}\)?(?:\s*(?i:DR|CR|D|C)\b\.?)?";

lazy_static! {
    /// Any supported date form.
    pub static ref DATE_TOKEN: String = format!(
        r"(?:\d{{4}}-\d{{2}}-\d{{2}}|\d{{1,2}}[/.\-]\d{{1,2}}[/.\-](?:\d{{4}}|\d{{2}})|\d{{1,2}}(?:st|nd|rd|th)?[\s\-]{month}\.?[\s\-,]*(?:\d{{4}}|\d{{2}})|{month}\.?\s+\d{{1,2}},?\s+\d{{4}})",
        month = MONTH_TOKEN
    );

    pub static ref AMOUNT: Regex = Regex::new(AMOUNT_TOKEN).unwrap();

    pub static ref DATE: Regex = Regex::new(&format!(r"\b{}\b", *DATE_TOKEN)).unwrap();

    /// Two dates joined by a dash or "to".
    pub static ref DATE_RANGE: Regex = Regex::new(&format!(
        r"\b({date})\s*(?:-|–|(?i:to))\s*({date})\b",
        date = *DATE_TOKEN
    ))
    .unwrap();

    /// Masked card number ending in four digits.
    pub static ref CARD_NUMBER: Regex = Regex::new(
        r"[0-9Xx*]{4}[0-9Xx*\s-]{4,16}\d{4}\b"
    ).unwrap();

    /// Amount at the end of a line, used to detect where a wrapped row ends.
    pub static ref TRAILING_AMOUNT: Regex = Regex::new(
        r"(?:₹|Rs\.?|INR|`)?\s*\(?\d[\d,]*\.\d{2}\)?\s*(?i:DR|CR|D|C)?\.?\s*$"
    ).unwrap();

    // Pieces the normalizer strips or reads off a raw amount
    pub static ref CURRENCY_MARK: Regex = Regex::new(r"(?i)₹|\bINR|\bRs\.?|`").unwrap();

    pub static ref SIGN_MARKER: Regex = Regex::new(r"(?i)(?:\d|\)|\s)(DR|CR|D|C)\.?\s*$").unwrap();

    pub static ref PLAIN_NUMBER: Regex = Regex::new(r"^\d+(?:,\d+)*(?:\.\d+)?$").unwrap();
}
