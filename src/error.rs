use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid icon size: {0}. Must be between 1 and {1}")]
    InvalidSize(u32, u32),

    #[error("Invalid file name prefix: {0:?}")]
    InvalidPrefix(String),

    #[error("Invalid optimization level: {0}. Must be between 0 and 6")]
    InvalidOptimizationLevel(u8),
}

pub type Result<T> = std::result::Result<T, IconError>;
