//! Kotak Mahindra Bank statements.
//!
//! Labels and values share a line separated by a wide gap. Dates use
//! `DD-Mon-YYYY`; credits carry a `Cr` suffix or are parenthesised.

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
    static ref CARD_LABEL: Regex = Regex::new(r"(?i)(?:Primary\s+)?Card\s+Number").unwrap();
    static ref STATEMENT_DATE: Regex = Regex::new(r"(?i)Statement\s+Date").unwrap();
    static ref DUE_DATE: Regex = Regex::new(r"(?i)Remember\s+to\s+Pay\s+By|Payment\s+Due\s+Date").unwrap();
    static ref TOTAL_DUE: Regex = Regex::new(r"(?i)Total\s+Amount\s+Due").unwrap();
    static ref MINIMUM_DUE: Regex = Regex::new(r"(?i)Minimum\s+Amount\s+Due").unwrap();
    static ref CREDIT_LIMIT: Regex = Regex::new(r"(?i)Total\s+Credit\s+Limit").unwrap();
    static ref AVAILABLE_CREDIT: Regex = Regex::new(r"(?i)Available\s+Credit\s+Limit").unwrap();
    static ref PERIOD: Regex = Regex::new(r"(?i)Statement\s+Period").unwrap();

    static ref TABLE_HEADER: Regex = Regex::new(r"(?i)^Date\s+Transaction\s+Details\s+Amount").unwrap();
    static ref TABLE_END: Regex = Regex::new(
        r"(?i)^(?:Reward\s+Points\s+Summary|Important\s+Messages|End\s+of\s+Statement)"
    ).unwrap();
    static ref ROW: Regex = Regex::new(
        r"(?i)^(?P<date>\d{2}-[a-z]{3}-\d{4})\s+(?P<description>.+?)\s+(?P<amount>\(?[\d,]+\.\d{2}\)?(?:\s*Cr)?)\s*$"
    ).unwrap();
    static ref ROW_START: Regex = Regex::new(r"(?i)^(?P<date>\d{2}-[a-z]{3}-\d{4})\b").unwrap();
    static ref PAGE_NUMBER: Regex = Regex::new(r"(?i)^Page\s+\d+\s+of\s+\d+$").unwrap();
}

/// Kotak Mahindra Bank statement strategy.
pub struct KotakStrategy;

impl StatementStrategy for KotakStrategy {
    fn bank(&self) -> BankKey {
        BankKey::Kotak
    }

    fn locate(&self, pages: &[PageText]) -> Result<FieldSet> {
        let mut fields = FieldSet::new(BankKey::Kotak);

        fields.insert_opt(Field::StatementDate, value_near_label(pages, &STATEMENT_DATE, &DATE));
        fields.insert_opt(Field::DueDate, value_near_label(pages, &DUE_DATE, &DATE));
        fields.insert_opt(Field::TotalDue, value_near_label(pages, &TOTAL_DUE, &AMOUNT));
        fields.insert_opt(Field::MinimumDue, value_near_label(pages, &MINIMUM_DUE, &AMOUNT));
        fields.insert_opt(Field::CreditLimit, value_near_label(pages, &CREDIT_LIMIT, &AMOUNT));
        fields.insert_opt(
            Field::AvailableCredit,
            value_near_label(pages, &AVAILABLE_CREDIT, &AMOUNT),
        );
        fields.insert_opt(Field::StatementPeriod, value_near_label(pages, &PERIOD, &DATE_RANGE));
        fields.insert_opt(Field::CardLast4, value_near_label(pages, &CARD_LABEL, &CARD_NUMBER));

        fields.transactions = TableScanner::new(&TABLE_HEADER, &TABLE_END, &ROW, &ROW_START)
            .ignore(&PAGE_NUMBER)
            .scan(pages)?;

        Ok(fields)
    }
}
