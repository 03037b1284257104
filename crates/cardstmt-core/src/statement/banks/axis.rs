//! Axis Bank statements.
//!
//! The summary is a header row ("Total Payment Due", "Minimum Payment Due",
//! "Statement Period", "Payment Due Date", "Statement Generation Date") with
//! the values printed in the row below, and the limits follow the same
//! layout. Every amount carries a `Dr`/`Cr` suffix and card rows may end with
//! a cashback column.

use lazy_static::lazy_static;
use regex::Regex;

use super::StatementStrategy;
use crate::error::Result;
use crate::models::bank::BankKey;
use crate::pdf::PageText;
use crate::statement::fields::{Field, FieldSet};
use crate::statement::rules::patterns::{AMOUNT, CARD_NUMBER, DATE, DATE_RANGE};
use crate::statement::rules::{value_near_label, TableScanner};

lazy_static! {
    static ref CARD_LABEL: Regex = Regex::new(r"(?i)Card\s+No\.?\s*:?").unwrap();
    static ref TOTAL_DUE: Regex = Regex::new(r"(?i)Total\s+Payment\s+Due").unwrap();
    static ref MINIMUM_DUE: Regex = Regex::new(r"(?i)Minimum\s+Payment\s+Due").unwrap();
    static ref PERIOD: Regex = Regex::new(r"(?i)Statement\s+Period").unwrap();
    static ref DUE_DATE: Regex = Regex::new(r"(?i)Payment\s+Due\s+Date").unwrap();
    static ref STATEMENT_DATE: Regex = Regex::new(r"(?i)Statement\s+Generation\s+Date").unwrap();
    static ref CREDIT_LIMIT: Regex = Regex::new(r"(?i)(?:^|\s{2,})Credit\s+Limit").unwrap();
    static ref AVAILABLE_CREDIT: Regex = Regex::new(r"(?i)Available\s+Credit\s+Limit").unwrap();

    static ref TABLE_HEADER: Regex = Regex::new(r"(?i)^DATE\s+TRANSACTION\s+DETAILS").unwrap();
    static ref TABLE_END: Regex = Regex::new(r"(?i)End\s+of\s+Statement").unwrap();
    static ref ROW: Regex = Regex::new(
        r"(?i)^(?P<date>\d{2}/\d{2}/\d{4})\s+(?P<description>.+?)\s+(?P<amount>[\d,]+\.\d{2}\s*(?:Dr|Cr))(?:\s+[\d,]+\.\d{2}\s*(?:Dr|Cr))?\s*$"
    ).unwrap();
    static ref ROW_START: Regex = Regex::new(r"^(?P<date>\d{2}/\d{2}/\d{4})\b").unwrap();
    static ref PAGE_FURNITURE: Regex = Regex::new(r"(?i)^(?:Page\s+\d+\s+of\s+\d+|Axis\s+Bank)").unwrap();
}

/// Axis Bank statement strategy.
pub struct AxisStrategy;

impl StatementStrategy for AxisStrategy {
    fn bank(&self) -> BankKey {
        BankKey::Axis
    }

    fn required_fields(&self) -> &'static [Field] {
        &[Field::StatementDate, Field::DueDate, Field::TotalDue]
    }

    fn locate(&self, pages: &[PageText]) -> Result<FieldSet> {
        let mut fields = FieldSet::new(BankKey::Axis);

        fields.insert_opt(Field::StatementDate, value_near_label(pages, &STATEMENT_DATE, &DATE));
        fields.insert_opt(Field::DueDate, value_near_label(pages, &DUE_DATE, &DATE));
        fields.insert_opt(Field::TotalDue, value_near_label(pages, &TOTAL_DUE, &AMOUNT));
        fields.insert_opt(Field::MinimumDue, value_near_label(pages, &MINIMUM_DUE, &AMOUNT));
        fields.insert_opt(Field::StatementPeriod, value_near_label(pages, &PERIOD, &DATE_RANGE));
        fields.insert_opt(Field::CreditLimit, value_near_label(pages, &CREDIT_LIMIT, &AMOUNT));
        fields.insert_opt(
            Field::AvailableCredit,
            value_near_label(pages, &AVAILABLE_CREDIT, &AMOUNT),
        );
        fields.insert_opt(Field::CardLast4, value_near_label(pages, &CARD_LABEL, &CARD_NUMBER));

        fields.transactions = TableScanner::new(&TABLE_HEADER, &TABLE_END, &ROW, &ROW_START)
            .ignore(&PAGE_FURNITURE)
            .scan(pages)?;

        Ok(fields)
    }
}
