//! Configuration structures for the parsing pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, StatementError};

/// Main configuration for the cardstmt pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Field normalization configuration.
    pub extraction: ExtractionConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to extract (0 = unlimited).
    pub max_pages: usize,

    /// Minimum number of non-whitespace characters for a readable document.
    pub min_text_chars: usize,

    /// Password for encrypted statements. The empty password is tried when unset.
    pub password: Option<String>,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 0,
            min_text_chars: 1,
            password: None,
        }
    }
}

/// Field normalization configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// ISO currency code attached to every amount.
    pub currency: String,

    /// Two-digit years up to and including this value are in the 2000s,
    /// later ones in the 1900s.
    pub year_pivot: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            year_pivot: 50,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| StatementError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StatementError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
