//! Scoped temporary storage for uploaded statements.

use std::io::{self, Read, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::error::Result;

/// An uploaded document written to a temporary file.
///
/// The file is deleted when the value is dropped.
#[derive(Debug)]
pub struct StagedDocument {
    file: NamedTempFile,
    len: u64,
}

impl StagedDocument {
    /// Copy a stream into a new temporary file.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut file = Builder::new()
            .prefix("statement-")
            .suffix(".pdf")
            .tempfile()?;
        let len = io::copy(&mut reader, &mut file)?;
        file.flush()?;

        debug!("Staged {} bytes at {}", len, file.path().display());
        Ok(Self { file, len })
    }

    /// Stage an in-memory document.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_reader(data)
    }

    /// Location of the staged file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Number of bytes staged.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
