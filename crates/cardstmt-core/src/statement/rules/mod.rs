//! Shared extraction rules that bank strategies compose.

pub mod amounts;
pub mod dates;
pub mod patterns;
pub mod table;

pub use amounts::{format_indian_amount, parse_amount, parse_signed_amount, SignedAmount};
pub use dates::{parse_date, parse_date_range};
pub use table::TableScanner;

use regex::Regex;

use crate::pdf::{all_lines, PageText, TextLine};

/// Find the value printed for a label.
///
/// The value is taken from the same line after the label when present.
/// Otherwise the next non-blank line is read: under a multi-column header the
/// cell below the label's columns is used, under a lone label the first match
/// on the line.
pub fn value_near_label(pages: &[PageText], label: &Regex, value: &Regex) -> Option<String> {
    let lines: Vec<&TextLine> = all_lines(pages).collect();

    for (i, line) in lines.iter().enumerate() {
        for m in label.find_iter(&line.text) {
            let tail = &line.text[m.end()..];
            if let Some(v) = value.find(tail) {
                return Some(v.as_str().trim().to_string());
            }

            let Some(next) = lines[i + 1..].iter().find(|l| !l.is_blank()) else {
                continue;
            };

            let found = if line.cells.len() > 1 {
                let lead = m.as_str().len() - m.as_str().trim_start().len();
                let start = line.column_of(m.start() + lead);
                let end = line.column_of(m.end());
                next.cell_under(start, end)
                    .and_then(|cell| value.find(&cell.text))
            } else {
                value.find(&next.text)
            };

            if let Some(v) = found {
                return Some(v.as_str().trim().to_string());
            }
        }
    }

    None
}

/// First match of `pattern` on any line, returning capture group 1 when the
/// pattern has one.
pub fn find_first(pages: &[PageText], pattern: &Regex) -> Option<String> {
    all_lines(pages).find_map(|line| {
        let caps = pattern.captures(&line.text)?;
        let m = caps.get(1).or_else(|| caps.get(0))?;
        Some(m.as_str().trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::pages_from_text;
    use patterns::{AMOUNT, DATE, DATE_RANGE};

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_value_on_same_line() {
        let pages = pages_from_text("Statement Date : 12-10-2024\nPayment Due Date : 01-11-2024");

        assert_eq!(
            value_near_label(&pages, &re(r"Payment\s+Due\s+Date"), &DATE),
            Some("01-11-2024".to_string())
        );
    }

    #[test]
    fn test_value_in_column_below_header() {
        let pages = pages_from_text(
            "Credit Limit    Available Credit Limit    Available Cash Limit\n\
             ₹2,00,000.00    ₹1,87,654.33              ₹40,000.00",
        );

        assert_eq!(
            value_near_label(&pages, &re(r"Available\s+Credit\s+Limit"), &AMOUNT),
            Some("₹1,87,654.33".to_string())
        );
        assert_eq!(
            value_near_label(&pages, &re(r"(?:^|\s{2,})Credit\s+Limit"), &AMOUNT),
            Some("₹2,00,000.00".to_string())
        );
        assert_eq!(
            value_near_label(&pages, &re(r"Available\s+Cash\s+Limit"), &AMOUNT),
            Some("₹40,000.00".to_string())
        );
    }

    #[test]
    fn test_value_below_lone_label() {
        let pages = pages_from_text("Statement Period\n\n   16/09/2024 - 15/10/2024");

        assert_eq!(
            value_near_label(&pages, &re(r"Statement\s+Period"), &DATE_RANGE),
            Some("16/09/2024 - 15/10/2024".to_string())
        );
    }

    #[test]
    fn test_missing_label() {
        let pages = pages_from_text("Total Amount Due  Rs. 100.00");
        assert_eq!(value_near_label(&pages, &re(r"Minimum\s+Amount\s+Due"), &AMOUNT), None);
    }

    #[test]
    fn test_find_first_group() {
        let pages = pages_from_text("header\nCard ending 4321\nCard ending 9999");
        assert_eq!(
            find_first(&pages, &re(r"Card ending (\d{4})")),
            Some("4321".to_string())
        );
    }
}
