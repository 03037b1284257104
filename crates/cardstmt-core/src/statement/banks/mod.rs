//! Per-bank statement templates.

pub mod axis;
pub mod bob;
pub mod kotak;
pub mod sbi;

pub use axis::AxisStrategy;
pub use bob::BobStrategy;
pub use kotak::KotakStrategy;
pub use sbi::SbiStrategy;

use tracing::debug;

use super::fields::{Field, FieldSet};
use crate::error::Result;
use crate::models::bank::BankKey;
use crate::pdf::PageText;

/// Fields every supported template prints.
pub const DEFAULT_REQUIRED: &[Field] = &[Field::StatementDate, Field::TotalDue];

/// Extraction logic for one bank's statement template.
pub trait StatementStrategy: Send + Sync {
    /// Bank this strategy handles.
    fn bank(&self) -> BankKey;

    /// Fields whose absence means the document is not this bank's statement.
    fn required_fields(&self) -> &'static [Field] {
        DEFAULT_REQUIRED
    }

    /// Locate raw field values and transaction rows.
    ///
    /// Fails only when a transaction row is present but malformed.
    fn locate(&self, pages: &[PageText]) -> Result<FieldSet>;

    /// Locate fields and check that the required ones were found.
    fn extract_fields(&self, pages: &[PageText]) -> Result<FieldSet> {
        let fields = self.locate(pages)?;
        debug!(
            "{}: located {} fields, {} transaction rows",
            self.bank(),
            fields.iter().count(),
            fields.transactions.len()
        );
        fields.require(self.required_fields())?;
        Ok(fields)
    }
}
