//! Statement parsing: bank dispatch, field location and normalization.

pub mod banks;
mod fields;
mod normalizer;
mod parser;
mod registry;
pub mod rules;

pub use banks::StatementStrategy;
pub use fields::{Field, FieldSet, RawTransaction};
pub use normalizer::Normalizer;
pub use parser::{DocumentSource, StatementParser};
pub use registry::{resolve, strategy_for, supported_banks};
