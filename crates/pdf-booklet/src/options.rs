use crate::constants::{DEFAULT_DPI, MAX_DPI, MIN_DPI};
use crate::paper::PaperFormat;
use crate::signature::SignatureSize;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet imposition configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookletOptions {
    /// Source PDF
    pub input: PathBuf,
    /// Merged booklet output path
    pub output: PathBuf,
    /// Rasterization resolution
    pub dpi: u16,
    /// Sub-pages per physical sheet
    pub signature: SignatureSize,
    /// Physical format of one finished sub-page
    pub leaf_format: PaperFormat,
    /// Physical sheet format
    pub sheet_format: PaperFormat,
    /// Sheet orientation relative to `sheet_format`
    pub orientation: Orientation,
    /// Directory for intermediate sheet files; a temp dir when unset
    pub work_dir: Option<PathBuf>,
    /// Keep intermediate sheet files after merging (requires `work_dir`)
    pub keep_sheets: bool,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::new(),
            dpi: DEFAULT_DPI,
            signature: SignatureSize::S8,
            leaf_format: PaperFormat::A6,
            sheet_format: PaperFormat::A4,
            orientation: Orientation::Portrait,
            work_dir: None,
            keep_sheets: false,
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(BookletError::Config("no input file specified".to_string()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(BookletError::Config("no output file specified".to_string()));
        }
        if self.dpi < MIN_DPI || self.dpi > MAX_DPI {
            return Err(BookletError::Config(format!(
                "dpi {} outside supported range {}..={}",
                self.dpi, MIN_DPI, MAX_DPI
            )));
        }
        for (label, format) in [("leaf", self.leaf_format), ("sheet", self.sheet_format)] {
            let (w, h) = format.dimensions_mm();
            if w <= 0.0 || h <= 0.0 {
                return Err(BookletError::Config(format!(
                    "{} format must have positive dimensions",
                    label
                )));
            }
        }
        if self.keep_sheets && self.work_dir.is_none() {
            return Err(BookletError::Config(
                "keep_sheets requires an explicit work_dir".to_string(),
            ));
        }
        Ok(())
    }
}
