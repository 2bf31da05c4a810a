use thiserror::Error;

/// Result type for scancat operations
pub type Result<T> = std::result::Result<T, ScancatError>;

/// Error types for scancat operations
///
/// The classification engine itself never fails; these cover the caller
/// side, reading and decoding image files.
#[derive(Error, Debug)]
pub enum ScancatError {
    /// Image decoding error
    #[error("image error: {0}")]
    ImageError(#[from] image::ImageError),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
