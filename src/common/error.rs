use enough::StopReason;
use image::{ColorType, ImageError};
use qrcode::types::QrError;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    // Input validation
    #[error("Empty content")]
    EmptyContent,

    #[error("Invalid size: {0}, must be at least 1 pixel")]
    InvalidSize(u32),

    #[error("Invalid recovery level: {0}, expected 0..=3")]
    InvalidRecoveryLevel(u8),

    #[error("Invalid anchor mode: {0}, expected 0..=11")]
    InvalidAnchorMode(u8),

    #[error("Border of {0} pixels overflows the canvas size")]
    BorderTooLarge(u32),

    #[error("Empty reference image")]
    EmptyReference,

    // Collaborators
    #[error("QR generation failed: {0}")]
    Generation(#[from] QrError),

    #[error("Image io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode failed: {0}")]
    Decode(#[source] ImageError),

    #[error("PNG encode failed: {0}")]
    Encode(#[source] ImageError),

    // Color fill
    #[error("Unsupported pixel format: {0:?}")]
    UnsupportedPixelFormat(ColorType),

    #[error("Operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for RenderError {
    fn from(r: StopReason) -> Self {
        RenderError::Cancelled(r)
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
