use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use tracing::debug;

use crate::fingerprint_pipeline::bitmap::types::Bitmap;
use crate::fingerprint_pipeline::bitmap::writer::BmpWriter;
use crate::fingerprint_pipeline::common::error::{CaptureError, Result};

const FILE_HEADER_LEN: u32 = 14;
const INFO_HEADER_LEN: u32 = 40;
const PALETTE_LEN: u32 = 256 * 4;
const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_LEN + INFO_HEADER_LEN + PALETTE_LEN;

/// Writes 8-bit-per-pixel grayscale BMP files: a BITMAPFILEHEADER, a
/// BITMAPINFOHEADER, a 256-entry gray palette, then the pixel rows stored
/// bottom-up and padded to a 4-byte boundary.
pub struct GrayscaleBmpWriter;

impl BmpWriter for GrayscaleBmpWriter {
    fn write_bmp(&self, bitmap: &Bitmap, output: &mut dyn Write) -> Result<()> {
        if bitmap.is_empty() {
            return Err(CaptureError::EmptyBitmap);
        }

        let width = bitmap.width();
        let height = bitmap.height();

        // The info header stores dimensions as signed 32-bit values.
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(CaptureError::EncodeError(format!(
                "dimensions {}x{} exceed the BMP header range",
                width, height
            )));
        }

        let stride = ((width + 3) & !3) as usize;
        let image_size = stride as u64 * height as u64;
        let file_size = PIXEL_DATA_OFFSET as u64 + image_size;
        if file_size > u32::MAX as u64 {
            return Err(CaptureError::EncodeError(format!(
                "image of {} bytes does not fit in a BMP file",
                image_size
            )));
        }

        debug!("Encoding {}x{} bitmap, {} bytes total", width, height, file_size);

        // BITMAPFILEHEADER
        output.write_all(b"BM")?;
        output.write_u32::<LittleEndian>(file_size as u32)?;
        output.write_u16::<LittleEndian>(0)?;
        output.write_u16::<LittleEndian>(0)?;
        output.write_u32::<LittleEndian>(PIXEL_DATA_OFFSET)?;

        // BITMAPINFOHEADER
        output.write_u32::<LittleEndian>(INFO_HEADER_LEN)?;
        output.write_i32::<LittleEndian>(width as i32)?;
        // Positive height marks the rows as bottom-up.
        output.write_i32::<LittleEndian>(height as i32)?;
        output.write_u16::<LittleEndian>(1)?; // color planes
        output.write_u16::<LittleEndian>(8)?; // bits per pixel
        output.write_u32::<LittleEndian>(0)?; // BI_RGB, uncompressed
        output.write_u32::<LittleEndian>(image_size as u32)?;
        output.write_i32::<LittleEndian>(0)?; // horizontal pixels per meter
        output.write_i32::<LittleEndian>(0)?; // vertical pixels per meter
        output.write_u32::<LittleEndian>(256)?; // palette entries
        output.write_u32::<LittleEndian>(0)?; // important colors

        // Grayscale palette: entry i is (B, G, R, reserved) = (i, i, i, 0).
        for i in 0..=255u8 {
            output.write_all(&[i, i, i, 0])?;
        }

        let padding = vec![0u8; stride - width as usize];
        for row in bitmap.data().chunks_exact(width as usize).rev() {
            output.write_all(row)?;
            output.write_all(&padding)?;
        }

        Ok(())
    }
}
