//! ANSI INCITS 381 sample container parsing.
//!
//! A raw capture hands back one opaque buffer: a BIR block table followed by
//! the blocks it points at. The standard data block carries an ANSI 381
//! finger image record, which is a general header describing the capture,
//! one record header per view, and then raw grayscale pixels. Parsing is
//! kept pure so the format handling can be exercised without a sensor.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::fingerprint_pipeline::common::error::{CaptureError, Result};
use crate::fingerprint_pipeline::sensor::types::FingerprintSample;

/// Byte length of the BIR block table: three `{size, offset}` pairs.
pub const BIR_BLOCK_TABLE_LEN: usize = 24;
/// Byte length of the packed ANSI 381 general header.
pub const ANSI_381_HEADER_LEN: usize = 38;
/// Byte length of one packed ANSI 381 finger record header.
pub const ANSI_381_RECORD_LEN: usize = 14;

const SUPPORTED_PIXEL_DEPTH: u8 = 8;
const COMPRESSION_NONE: u8 = 0;

struct BlockEntry {
    size: u32,
    offset: u32,
}

/// Extracts the first finger image from a raw capture buffer.
///
/// Multi-view records are legal in the standard; only the first view is
/// decoded since the sensors this targets deliver exactly one.
pub fn parse_bir(buffer: &[u8], unit_id: u32) -> Result<FingerprintSample> {
    if buffer.len() < BIR_BLOCK_TABLE_LEN {
        return Err(CaptureError::SampleFormatError(format!(
            "container of {} bytes is too short for the block table",
            buffer.len()
        )));
    }

    let mut table = Cursor::new(&buffer[..BIR_BLOCK_TABLE_LEN]);
    let _header_block = read_block_entry(&mut table)?;
    let standard_block = read_block_entry(&mut table)?;
    let _vendor_block = read_block_entry(&mut table)?;

    let standard = block_slice(buffer, &standard_block, "standard data block")?;
    parse_ansi_381(standard, unit_id)
}

fn read_block_entry(table: &mut Cursor<&[u8]>) -> Result<BlockEntry> {
    let size = table.read_u32::<LittleEndian>()?;
    let offset = table.read_u32::<LittleEndian>()?;
    Ok(BlockEntry { size, offset })
}

fn block_slice<'a>(buffer: &'a [u8], entry: &BlockEntry, what: &str) -> Result<&'a [u8]> {
    if entry.size == 0 {
        return Err(CaptureError::SampleFormatError(format!("{what} is empty")));
    }

    let start = entry.offset as usize;
    match start.checked_add(entry.size as usize) {
        Some(end) if end <= buffer.len() => Ok(&buffer[start..end]),
        _ => Err(CaptureError::SampleFormatError(format!(
            "{what} at offset {} with {} bytes runs past the {}-byte container",
            entry.offset,
            entry.size,
            buffer.len()
        ))),
    }
}

fn parse_ansi_381(block: &[u8], unit_id: u32) -> Result<FingerprintSample> {
    if block.len() < ANSI_381_HEADER_LEN + ANSI_381_RECORD_LEN {
        return Err(CaptureError::SampleFormatError(format!(
            "standard data block of {} bytes is too short for the record headers",
            block.len()
        )));
    }

    let mut header = Cursor::new(&block[..ANSI_381_HEADER_LEN]);
    let _record_length = header.read_u64::<LittleEndian>()?;
    let _format_identifier = header.read_u32::<LittleEndian>()?;
    let _version_number = header.read_u32::<LittleEndian>()?;
    let _product_id = header.read_u32::<LittleEndian>()?;
    let _capture_device_id = header.read_u16::<LittleEndian>()?;
    let _image_acquisition_level = header.read_u16::<LittleEndian>()?;
    let _horizontal_scan_resolution = header.read_u16::<LittleEndian>()?;
    let _vertical_scan_resolution = header.read_u16::<LittleEndian>()?;
    let horizontal_resolution = header.read_u16::<LittleEndian>()?;
    let vertical_resolution = header.read_u16::<LittleEndian>()?;
    let element_count = header.read_u8()?;
    let _scale_units = header.read_u8()?;
    let pixel_depth = header.read_u8()?;
    let compression = header.read_u8()?;

    if element_count == 0 {
        return Err(CaptureError::SampleFormatError(
            "record contains no finger images".to_string(),
        ));
    }
    if pixel_depth != SUPPORTED_PIXEL_DEPTH {
        return Err(CaptureError::SampleFormatError(format!(
            "unsupported pixel depth {pixel_depth}, only {SUPPORTED_PIXEL_DEPTH}-bit grayscale is handled"
        )));
    }
    if compression != COMPRESSION_NONE {
        return Err(CaptureError::SampleFormatError(format!(
            "record uses compression algorithm {compression}, expected uncompressed pixels"
        )));
    }

    let mut record = Cursor::new(&block[ANSI_381_HEADER_LEN..ANSI_381_HEADER_LEN + ANSI_381_RECORD_LEN]);
    let _block_length = record.read_u32::<LittleEndian>()?;
    let width = u32::from(record.read_u16::<LittleEndian>()?);
    let height = u32::from(record.read_u16::<LittleEndian>()?);
    let _position = record.read_u8()?;
    let _count_of_views = record.read_u8()?;
    let _view_number = record.read_u8()?;
    let quality = record.read_u8()?;

    let pixel_count = width as usize * height as usize;
    let pixels_start = ANSI_381_HEADER_LEN + ANSI_381_RECORD_LEN;
    let available = block.len() - pixels_start;
    if available < pixel_count {
        return Err(CaptureError::SampleFormatError(format!(
            "pixel block for a {width}x{height} image needs {pixel_count} bytes but only {available} remain"
        )));
    }

    Ok(FingerprintSample {
        unit_id,
        width,
        height,
        data: block[pixels_start..pixels_start + pixel_count].to_vec(),
        horizontal_resolution,
        vertical_resolution,
        quality,
    })
}
