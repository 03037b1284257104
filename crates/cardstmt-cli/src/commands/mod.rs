pub mod banks;
pub mod batch;
pub mod config;
pub mod dump;
pub mod parse;
