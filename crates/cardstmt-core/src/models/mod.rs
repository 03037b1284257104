//! Data models: canonical statement record, bank keys, and configuration.

pub mod bank;
pub mod config;
pub mod statement;
