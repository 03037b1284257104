//! Supported card issuers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatementError;

/// Bank whose statement template is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankKey {
    /// Axis Bank.
    Axis,
    /// Bank of Baroda (BOBCARD).
    Bob,
    /// Kotak Mahindra Bank.
    Kotak,
    /// SBI Card.
    Sbi,
}

impl BankKey {
    /// All supported banks in a stable order.
    pub const ALL: [BankKey; 4] = [BankKey::Axis, BankKey::Bob, BankKey::Kotak, BankKey::Sbi];

    /// Key used on the command line and in the upload form.
    pub fn as_str(&self) -> &'static str {
        match self {
            BankKey::Axis => "axis",
            BankKey::Bob => "bob",
            BankKey::Kotak => "kotak",
            BankKey::Sbi => "sbi",
        }
    }

    /// Issuer name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            BankKey::Axis => "Axis Bank",
            BankKey::Bob => "Bank of Baroda",
            BankKey::Kotak => "Kotak Mahindra Bank",
            BankKey::Sbi => "SBI Card",
        }
    }
}

impl fmt::Display for BankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BankKey {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        BankKey::ALL
            .into_iter()
            .find(|bank| bank.as_str() == key)
            .ok_or_else(|| StatementError::UnsupportedBank(s.trim().to_string()))
    }
}
