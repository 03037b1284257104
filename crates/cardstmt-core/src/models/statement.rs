//! Canonical credit-card statement record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::bank::BankKey;

/// Normalized result of parsing one statement.
///
/// Optional fields the statement does not print are `None` and serialize as
/// explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRecord {
    /// Issuing bank.
    pub bank: BankKey,

    /// ISO currency code of every amount.
    pub currency: String,

    /// Date the statement was generated.
    pub statement_date: NaiveDate,

    /// Payment due date.
    pub due_date: Option<NaiveDate>,

    /// Billing cycle covered by the statement.
    pub statement_period: Option<StatementPeriod>,

    /// Total amount due. Negative for a credit balance.
    pub total_due: Decimal,

    /// Minimum amount due.
    pub minimum_due: Option<Decimal>,

    /// Total credit limit.
    pub credit_limit: Option<Decimal>,

    /// Credit still available at statement date.
    pub available_credit: Option<Decimal>,

    /// Last four digits of the card number.
    pub card_last4: Option<String>,

    /// Transactions in statement order.
    pub transactions: Vec<Transaction>,
}

impl StatementRecord {
    /// Sum of all debit transactions.
    pub fn total_debits(&self) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Debit)
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of all credit transactions (negative or zero).
    pub fn total_credits(&self) -> Decimal {
        self.transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Credit)
            .map(|t| t.amount)
            .sum()
    }
}

/// Inclusive billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// A single statement line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date.
    pub date: NaiveDate,

    /// Merchant or narration, continuation lines joined with a space.
    pub description: String,

    /// Signed amount: debits positive, credits negative.
    pub amount: Decimal,

    /// Debit or credit.
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Debit,
    Credit,
}

impl TransactionType {
    /// Lowercase label as used in JSON and CSV output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
        }
    }
}
