use thiserror::Error;

/// Everything that can go wrong while building, initialising or feeding a hotspot
#[derive(Error, Debug)]
pub enum HotspotError {
    /// The requested quad extents were negative, NaN or infinite
    #[error("Hotspot size must be finite and non-negative, got {width}x{height}")]
    InvalidSize {
        /// Requested width
        width: f32,
        /// Requested height
        height: f32,
    },
    /// The GPU backend rejected an operation
    #[error("There was a problem with a GPU operation: {0}")]
    Gpu(String),
    /// An image could not be decoded
    #[error("There was a problem decoding an image")]
    Image(#[from] image::ImageError),
    /// Reading an image source failed
    #[error(transparent)]
    IO(#[from] std::io::Error),
    /// Anything else
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
