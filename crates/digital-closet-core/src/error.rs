use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationReport;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the digital-closet library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding or resizing error
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// File not found error
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// An image set was built from an empty listing
    #[error("An image set needs at least one image")]
    EmptyImageSet,

    /// One or more category directories failed validation
    #[error("{0}")]
    Validation(ValidationReport),
}
