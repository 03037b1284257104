//! Raw, not yet normalized values located by a bank strategy.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatementError};
use crate::models::bank::BankKey;

/// Semantic statement field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    StatementDate,
    DueDate,
    TotalDue,
    MinimumDue,
    CreditLimit,
    AvailableCredit,
    CardLast4,
    StatementPeriod,
    Transactions,
}

impl Field {
    /// Field name as it appears in the output record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::StatementDate => "statement_date",
            Field::DueDate => "due_date",
            Field::TotalDue => "total_due",
            Field::MinimumDue => "minimum_due",
            Field::CreditLimit => "credit_limit",
            Field::AvailableCredit => "available_credit",
            Field::CardLast4 => "card_last4",
            Field::StatementPeriod => "statement_period",
            Field::Transactions => "transactions",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction row as matched on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    pub date: String,
    pub description: String,
    /// Amount including any debit/credit marker.
    pub amount: String,
}

impl RawTransaction {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }
}

/// Values located for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    pub bank: BankKey,
    values: BTreeMap<Field, String>,
    pub transactions: Vec<RawTransaction>,
}

impl FieldSet {
    pub fn new(bank: BankKey) -> Self {
        Self {
            bank,
            values: BTreeMap::new(),
            transactions: Vec::new(),
        }
    }

    /// Record a raw value. The first value located for a field is kept.
    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        self.values
            .entry(field)
            .or_insert_with(|| value.to_string());
    }

    /// Record a value when one was found.
    pub fn insert_opt(&mut self, field: Field, value: Option<String>) {
        if let Some(value) = value {
            self.insert(field, value);
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        match field {
            Field::Transactions => !self.transactions.is_empty(),
            _ => self.values.contains_key(&field),
        }
    }

    /// Fail with the first of `fields` that was not located.
    pub fn require(&self, fields: &[Field]) -> Result<()> {
        match fields.iter().find(|f| !self.contains(**f)) {
            Some(field) => Err(StatementError::FieldExtraction(*field)),
            None => Ok(()),
        }
    }

    /// Located scalar fields in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }
}
