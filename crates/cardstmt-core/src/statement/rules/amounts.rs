//! Amount parsing for Indian statement formats.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::patterns::{CURRENCY_MARK, PLAIN_NUMBER, SIGN_MARKER};
use crate::models::statement::TransactionType;

/// Amount with its debit/credit direction resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedAmount {
    /// Debits positive, credits negative, two decimal places.
    pub value: Decimal,
    pub kind: TransactionType,
}

/// Parse an amount such as `₹12,345.67 Dr`, `Rs. 1,50,000.00`, `9,000.00 C`
/// or `(1,200.00)`.
///
/// An explicit `Dr`/`D` or `Cr`/`C` marker decides the direction; otherwise a
/// leading minus or surrounding parentheses mean credit and a plain amount is
/// a debit.
pub fn parse_signed_amount(s: &str) -> Option<SignedAmount> {
    let stripped = CURRENCY_MARK.replace_all(s, "");
    let mut rest = stripped.trim();

    let mut marker = None;
    if let Some(caps) = SIGN_MARKER.captures(rest) {
        let m = caps.get(1)?;
        marker = Some(match m.as_str().to_ascii_uppercase().as_str() {
            "DR" | "D" => TransactionType::Debit,
            _ => TransactionType::Credit,
        });
        rest = rest[..m.start()].trim_end();
    }

    let mut negative = false;
    if let Some(inner) = rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        negative = true;
        rest = inner.trim();
    }
    if let Some(inner) = rest.strip_prefix('-') {
        negative = true;
        rest = inner.trim_start();
    }

    if !PLAIN_NUMBER.is_match(rest) {
        return None;
    }

    let mut magnitude = Decimal::from_str(&rest.replace(',', "")).ok()?;
    magnitude = magnitude.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    magnitude.rescale(2);

    let kind = marker.unwrap_or(if negative {
        TransactionType::Credit
    } else {
        TransactionType::Debit
    });
    let value = match kind {
        TransactionType::Credit if !magnitude.is_zero() => -magnitude,
        _ => magnitude,
    };

    Some(SignedAmount { value, kind })
}

/// Parse an amount to a signed decimal.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    parse_signed_amount(s).map(|a| a.value)
}

/// Format amount with Indian digit grouping (12,34,567.89).
pub fn format_indian_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount.abs());
    let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    // Last three digits form one group, the rest are grouped in pairs
    let head = chars.len().saturating_sub(3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i < head && (head - i) % 2 == 0 {
            formatted.push(',');
        }
        if i == head && i > 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, formatted, decimal_part)
}
