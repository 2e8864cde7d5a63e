use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("document not found: {0}")]
    DocumentNotFound(PathBuf),
    #[error("rasterizer backend unavailable: {0}")]
    Backend(String),
    #[error("failed to rasterize {path}: {reason}")]
    Render { path: PathBuf, reason: String },
    #[error("unsupported signature size: {0}")]
    InvalidSignatureSize(usize),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("document has no pages")]
    EmptyDocument,
    #[error("sheet composition failed: {0}")]
    Composition(String),
    #[error("failed to merge sheet file {path}: {reason}")]
    Merge { path: PathBuf, reason: String },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Sheet orientation relative to the physical sheet format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Which physical side of a duplex sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}
