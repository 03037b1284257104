//! Transaction table scanning with wrapped-row merging.

use regex::Regex;
use tracing::trace;

use super::patterns::TRAILING_AMOUNT;
use crate::error::{Result, StatementError};
use crate::pdf::{all_lines, PageText};
use crate::statement::fields::{Field, RawTransaction};

/// Scanner for one bank's transaction table.
///
/// `row` must define the named groups `date`, `description` and `amount`;
/// `row_start` matches a line opening with a transaction date and should
/// define `date`.
pub struct TableScanner<'a> {
    header: &'a Regex,
    end: &'a Regex,
    row: &'a Regex,
    row_start: &'a Regex,
    ignore: Option<&'a Regex>,
}

/// Row being assembled from one or more physical lines.
struct OpenRow {
    date: String,
    description: String,
    amount: Option<String>,
}

impl OpenRow {
    fn append(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(text);
    }
}

impl<'a> TableScanner<'a> {
    pub fn new(header: &'a Regex, end: &'a Regex, row: &'a Regex, row_start: &'a Regex) -> Self {
        Self {
            header,
            end,
            row,
            row_start,
            ignore: None,
        }
    }

    /// Skip page furniture (page numbers, repeated banners) inside the table.
    pub fn ignore(mut self, pattern: &'a Regex) -> Self {
        self.ignore = Some(pattern);
        self
    }

    /// Collect every transaction row in page order.
    ///
    /// A line that opens with a date but does not fit the row layout, or a
    /// row whose amount never arrives, fails the scan instead of being
    /// dropped.
    pub fn scan(&self, pages: &[PageText]) -> Result<Vec<RawTransaction>> {
        let mut rows = Vec::new();
        let mut open: Option<OpenRow> = None;
        let mut in_table = false;

        for line in all_lines(pages) {
            let text = line.trimmed();
            if text.is_empty() {
                continue;
            }

            if self.header.is_match(text) {
                close(&mut open, &mut rows)?;
                in_table = true;
                continue;
            }
            if !in_table {
                continue;
            }
            if self.end.is_match(text) {
                close(&mut open, &mut rows)?;
                in_table = false;
                continue;
            }
            if self.ignore.is_some_and(|re| re.is_match(text)) {
                continue;
            }

            if let Some(caps) = self.row.captures(text) {
                let group = |name: &str| {
                    caps.name(name)
                        .map_or("", |m| m.as_str().trim())
                        .to_string()
                };
                close(&mut open, &mut rows)?;
                open = Some(OpenRow {
                    date: group("date"),
                    description: group("description"),
                    amount: Some(group("amount")),
                });
                continue;
            }

            let leading_date = self.row_start.captures(text);
            let trailing_amount = TRAILING_AMOUNT.find(text);

            match (leading_date, trailing_amount) {
                // Date with the amount on a later line
                (Some(caps), None) => {
                    close(&mut open, &mut rows)?;
                    let date = caps.name("date").or_else(|| caps.get(0));
                    let (date, rest) = match date {
                        Some(m) => (m.as_str().trim(), &text[m.end()..]),
                        None => continue,
                    };
                    let mut row = OpenRow {
                        date: date.to_string(),
                        description: String::new(),
                        amount: None,
                    };
                    row.append(rest);
                    open = Some(row);
                }
                (None, Some(m)) => match open.as_mut() {
                    // Amount completing a pending row
                    Some(row) if row.amount.is_none() => {
                        row.append(&text[..m.start()]);
                        row.amount = Some(m.as_str().trim().to_string());
                    }
                    // Wrapped text that happens to end in a number
                    Some(row) => row.append(text),
                    None => trace!("Skipping table line outside a row: {}", text),
                },
                // Wrapped description
                (None, None) => match open.as_mut() {
                    Some(row) => row.append(text),
                    None => trace!("Skipping table line outside a row: {}", text),
                },
                (Some(_), Some(_)) => {
                    return Err(StatementError::Normalization {
                        field: Field::Transactions,
                        value: text.to_string(),
                    });
                }
            }
        }

        close(&mut open, &mut rows)?;
        Ok(rows)
    }
}

fn close(open: &mut Option<OpenRow>, rows: &mut Vec<RawTransaction>) -> Result<()> {
    let Some(row) = open.take() else {
        return Ok(());
    };
    match row.amount {
        Some(amount) => {
            rows.push(RawTransaction::new(row.date, row.description, amount));
            Ok(())
        }
        None => Err(StatementError::Normalization {
            field: Field::Transactions,
            value: format!("{} {}", row.date, row.description).trim_end().to_string(),
        }),
    }
}
