use thiserror::Error;

use crate::fingerprint_pipeline::sensor::types::RejectReason;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("No fingerprint sensor available: {0}")]
    SensorUnavailable(String),

    #[error("Biometric session failed: {0}")]
    SessionError(String),

    #[error("Sample rejected by sensor: {0}")]
    SampleRejected(RejectReason),

    #[error("Failed to parse sample container: {0}")]
    SampleFormatError(String),

    #[error("Capture timed out")]
    Timeout,

    #[error("Capture was canceled")]
    Canceled,

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode BMP image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Pixel buffer too small: expected at least {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("Bitmap holds no image data")]
    EmptyBitmap,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CaptureError>;
