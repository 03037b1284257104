//! Conversion of located raw values into the canonical record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::trace;

use super::fields::{Field, FieldSet, RawTransaction};
use super::rules::{parse_date, parse_date_range, parse_signed_amount};
use crate::error::{Result, StatementError};
use crate::models::config::ExtractionConfig;
use crate::models::statement::{StatementPeriod, StatementRecord, Transaction};

/// Normalizes a [`FieldSet`] into a [`StatementRecord`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    currency: String,
    year_pivot: u32,
}

impl Normalizer {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            currency: config.currency.clone(),
            year_pivot: config.year_pivot,
        }
    }

    /// Build the canonical record. Every present value must parse; the
    /// statement date and total due must be present.
    pub fn normalize(&self, fields: &FieldSet) -> Result<StatementRecord> {
        let statement_date = self.date(Field::StatementDate, required(fields, Field::StatementDate)?)?;
        let total_due = self.amount(Field::TotalDue, required(fields, Field::TotalDue)?)?;

        let due_date = self.optional(fields, Field::DueDate, |raw| self.date(Field::DueDate, raw))?;
        let statement_period =
            self.optional(fields, Field::StatementPeriod, |raw| self.period(raw))?;
        let minimum_due =
            self.optional(fields, Field::MinimumDue, |raw| self.amount(Field::MinimumDue, raw))?;
        let credit_limit =
            self.optional(fields, Field::CreditLimit, |raw| self.amount(Field::CreditLimit, raw))?;
        let available_credit = self.optional(fields, Field::AvailableCredit, |raw| {
            self.amount(Field::AvailableCredit, raw)
        })?;
        let card_last4 = self.optional(fields, Field::CardLast4, card_last4)?;

        let transactions = fields
            .transactions
            .iter()
            .map(|raw| self.transaction(raw))
            .collect::<Result<Vec<_>>>()?;

        Ok(StatementRecord {
            bank: fields.bank,
            currency: self.currency.clone(),
            statement_date,
            due_date,
            statement_period,
            total_due,
            minimum_due,
            credit_limit,
            available_credit,
            card_last4,
            transactions,
        })
    }

    fn optional<T>(
        &self,
        fields: &FieldSet,
        field: Field,
        parse: impl FnOnce(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        fields.get(field).map(parse).transpose()
    }

    fn date(&self, field: Field, raw: &str) -> Result<NaiveDate> {
        parse_date(raw, self.year_pivot).ok_or_else(|| invalid(field, raw))
    }

    fn amount(&self, field: Field, raw: &str) -> Result<Decimal> {
        parse_signed_amount(raw)
            .map(|a| a.value)
            .ok_or_else(|| invalid(field, raw))
    }

    fn period(&self, raw: &str) -> Result<StatementPeriod> {
        parse_date_range(raw, self.year_pivot)
            .map(|(from, to)| StatementPeriod { from, to })
            .ok_or_else(|| invalid(Field::StatementPeriod, raw))
    }

    fn transaction(&self, raw: &RawTransaction) -> Result<Transaction> {
        let date = parse_date(&raw.date, self.year_pivot)
            .ok_or_else(|| invalid(Field::Transactions, &raw.date))?;
        let amount =
            parse_signed_amount(&raw.amount).ok_or_else(|| invalid(Field::Transactions, &raw.amount))?;

        trace!("{} {} {}", date, raw.description, amount.value);
        Ok(Transaction {
            date,
            description: raw.description.split_whitespace().collect::<Vec<_>>().join(" "),
            amount: amount.value,
            kind: amount.kind,
        })
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

fn required(fields: &FieldSet, field: Field) -> Result<&str> {
    fields.get(field).ok_or(StatementError::FieldExtraction(field))
}

fn card_last4(raw: &str) -> Result<String> {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return Err(invalid(Field::CardLast4, raw));
    }
    Ok(digits[digits.len() - 4..].iter().collect())
}

fn invalid(field: Field, raw: &str) -> StatementError {
    StatementError::Normalization {
        field,
        value: raw.to_string(),
    }
}
