use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::fingerprint_pipeline::bitmap::grayscale_writer::GrayscaleBmpWriter;
use crate::fingerprint_pipeline::bitmap::writer::BmpWriter;
use crate::fingerprint_pipeline::common::error::{CaptureError, Result};

/// In-memory 8-bit grayscale image. One byte per pixel, row-major, top row
/// first. A freshly constructed bitmap is empty until pixel data is staged
/// into it with [`Bitmap::set_image_data`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Creates an empty bitmap with no staged pixel data.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self { width, height, data }
    }

    /// Stages raw 8-bit pixel data into the bitmap, replacing whatever was
    /// staged before.
    ///
    /// `data` must hold at least `width * height` bytes; any excess is
    /// ignored. Exactly `width * height` bytes are copied, so the caller's
    /// buffer can be freed afterwards.
    pub fn set_image_data(&mut self, data: &[u8], width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(CaptureError::InvalidDimensions(width, height));
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(CaptureError::InvalidDimensions(width, height))?;

        if data.len() < expected {
            return Err(CaptureError::BufferTooSmall {
                expected,
                actual: data.len(),
            });
        }

        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.extend_from_slice(&data[..expected]);

        Ok(())
    }

    /// Width in pixels, 0 while empty.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels, 0 while empty.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The staged pixel buffer, exactly `width * height` bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// True until pixel data has been staged.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Serializes the staged pixels to an 8-bit grayscale BMP file at `path`.
    ///
    /// An empty bitmap is an error and leaves no file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if self.is_empty() {
            return Err(CaptureError::EmptyBitmap);
        }

        let path = path.as_ref();

        let file = File::create(path).map_err(|e| {
            CaptureError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;

        let mut output = BufWriter::new(file);
        GrayscaleBmpWriter.write_bmp(self, &mut output)?;
        output.flush()?;

        debug!("Saved bitmap to {}", path.display());
        Ok(())
    }

    /// Loads an image file and converts it to 8-bit grayscale.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let image = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(io) => {
                CaptureError::InputReadError(format!("{}: {}", path.display(), io))
            }
            other => CaptureError::DecodeError(other.to_string()),
        })?;

        let gray = image.to_luma8();
        let (width, height) = gray.dimensions();
        debug!("Loaded {} as {}x{} grayscale", path.display(), width, height);

        let mut bitmap = Bitmap::new();
        bitmap.set_image_data(gray.as_raw(), width, height)?;
        Ok(bitmap)
    }
}
