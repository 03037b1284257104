//! Bank key to strategy lookup.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use super::banks::{AxisStrategy, BobStrategy, KotakStrategy, SbiStrategy, StatementStrategy};
use crate::error::{Result, StatementError};
use crate::models::bank::BankKey;

lazy_static! {
    static ref REGISTRY: BTreeMap<BankKey, Box<dyn StatementStrategy>> = {
        let strategies: Vec<Box<dyn StatementStrategy>> = vec![
            Box::new(AxisStrategy),
            Box::new(BobStrategy),
            Box::new(KotakStrategy),
            Box::new(SbiStrategy),
        ];
        strategies.into_iter().map(|s| (s.bank(), s)).collect()
    };
}

/// Resolve a bank key such as `"Axis"` or `" sbi "` to its strategy.
pub fn resolve(key: &str) -> Result<&'static dyn StatementStrategy> {
    let bank: BankKey = key.parse()?;
    strategy_for(bank)
}

/// Strategy registered for a bank.
pub fn strategy_for(bank: BankKey) -> Result<&'static dyn StatementStrategy> {
    REGISTRY
        .get(&bank)
        .map(|s| s.as_ref())
        .ok_or_else(|| StatementError::UnsupportedBank(bank.to_string()))
}

/// Registered bank keys in stable order.
pub fn supported_banks() -> Vec<BankKey> {
    REGISTRY.keys().copied().collect()
}
