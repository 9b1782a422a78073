use std::io::Write;

use crate::fingerprint_pipeline::bitmap::types::Bitmap;
use crate::fingerprint_pipeline::common::error::Result;

/// Trait for serializing a staged bitmap to a BMP byte stream.
pub trait BmpWriter {
    /// Writes `bitmap` to `output` as a complete BMP file.
    fn write_bmp(&self, bitmap: &Bitmap, output: &mut dyn Write) -> Result<()>;
}
