#[cfg(test)]
mod tests {
    use byteorder::{LittleEndian, WriteBytesExt};

    use crate::fingerprint_pipeline::common::error::CaptureError;
    use crate::fingerprint_pipeline::sensor::bir::{
        self, ANSI_381_HEADER_LEN, ANSI_381_RECORD_LEN, BIR_BLOCK_TABLE_LEN,
    };
    use crate::fingerprint_pipeline::sensor::types::RejectReason;

    /// Builds a container the way the framework lays one out: block table,
    /// ANSI 381 general header, one finger record header, pixels.
    fn synthetic_bir(width: u16, height: u16, pixel_depth: u8, compression: u8, pixels: &[u8]) -> Vec<u8> {
        let standard_len = ANSI_381_HEADER_LEN + ANSI_381_RECORD_LEN + pixels.len();
        let mut buffer = Vec::new();

        // Block table: empty header block, the standard block, empty vendor block.
        buffer.write_u32::<LittleEndian>(0).unwrap();
        buffer.write_u32::<LittleEndian>(0).unwrap();
        buffer.write_u32::<LittleEndian>(standard_len as u32).unwrap();
        buffer.write_u32::<LittleEndian>(BIR_BLOCK_TABLE_LEN as u32).unwrap();
        buffer.write_u32::<LittleEndian>(0).unwrap();
        buffer.write_u32::<LittleEndian>(0).unwrap();

        // General header.
        buffer.write_u64::<LittleEndian>(standard_len as u64).unwrap(); // record length
        buffer.write_u32::<LittleEndian>(0x0052_4946).unwrap(); // format identifier "FIR\0"
        buffer.write_u32::<LittleEndian>(0x0030_3130).unwrap(); // version "010\0"
        buffer.write_u32::<LittleEndian>(0).unwrap(); // product id
        buffer.write_u16::<LittleEndian>(1).unwrap(); // capture device id
        buffer.write_u16::<LittleEndian>(31).unwrap(); // acquisition level
        buffer.write_u16::<LittleEndian>(197).unwrap(); // horizontal scan resolution
        buffer.write_u16::<LittleEndian>(197).unwrap(); // vertical scan resolution
        buffer.write_u16::<LittleEndian>(197).unwrap(); // horizontal image resolution
        buffer.write_u16::<LittleEndian>(197).unwrap(); // vertical image resolution
        buffer.write_u8(1).unwrap(); // element count
        buffer.write_u8(2).unwrap(); // scale units: pixels per centimeter
        buffer.write_u8(pixel_depth).unwrap();
        buffer.write_u8(compression).unwrap();
        buffer.write_u16::<LittleEndian>(0).unwrap(); // reserved

        // Finger record header.
        buffer
            .write_u32::<LittleEndian>((ANSI_381_RECORD_LEN + pixels.len()) as u32)
            .unwrap();
        buffer.write_u16::<LittleEndian>(width).unwrap();
        buffer.write_u16::<LittleEndian>(height).unwrap();
        buffer.write_u8(0).unwrap(); // finger position
        buffer.write_u8(1).unwrap(); // count of views
        buffer.write_u8(1).unwrap(); // view number
        buffer.write_u8(75).unwrap(); // image quality
        buffer.write_u8(0).unwrap(); // impression type
        buffer.write_u8(0).unwrap(); // reserved

        buffer.extend_from_slice(pixels);
        buffer
    }

    #[test]
    fn test_parse_well_formed_sample() {
        let pixels: Vec<u8> = (0..12).collect();
        let buffer = synthetic_bir(4, 3, 8, 0, &pixels);

        let sample = bir::parse_bir(&buffer, 3).unwrap();

        assert_eq!(sample.unit_id, 3);
        assert_eq!(sample.width, 4);
        assert_eq!(sample.height, 3);
        assert_eq!(sample.data, pixels);
        assert_eq!(sample.horizontal_resolution, 197);
        assert_eq!(sample.vertical_resolution, 197);
        assert_eq!(sample.quality, 75);
    }

    #[test]
    fn test_parse_rejects_truncated_block_table() {
        let result = bir::parse_bir(&[0u8; 10], 1);
        assert!(matches!(result.unwrap_err(), CaptureError::SampleFormatError(_)));
    }

    #[test]
    fn test_parse_rejects_block_running_past_container() {
        let pixels = vec![0u8; 12];
        let buffer = synthetic_bir(4, 3, 8, 0, &pixels);

        let result = bir::parse_bir(&buffer[..buffer.len() - 4], 1);
        assert!(matches!(result.unwrap_err(), CaptureError::SampleFormatError(_)));
    }

    #[test]
    fn test_parse_rejects_unsupported_pixel_depth() {
        let pixels = vec![0u8; 12];
        let buffer = synthetic_bir(4, 3, 16, 0, &pixels);

        let result = bir::parse_bir(&buffer, 1);
        assert!(matches!(result.unwrap_err(), CaptureError::SampleFormatError(_)));
    }

    #[test]
    fn test_parse_rejects_compressed_records() {
        let pixels = vec![0u8; 12];
        let buffer = synthetic_bir(4, 3, 8, 1, &pixels);

        let result = bir::parse_bir(&buffer, 1);
        assert!(matches!(result.unwrap_err(), CaptureError::SampleFormatError(_)));
    }

    #[test]
    fn test_parse_rejects_short_pixel_block() {
        // The record claims 4x4 but only a 4x3 pixel payload follows.
        let pixels = vec![0u8; 12];
        let buffer = synthetic_bir(4, 4, 8, 0, &pixels);

        let result = bir::parse_bir(&buffer, 1);
        assert!(matches!(result.unwrap_err(), CaptureError::SampleFormatError(_)));
    }

    #[test]
    fn test_reject_reason_from_detail_codes() {
        assert_eq!(RejectReason::from(7), RejectReason::PoorQuality);
        assert_eq!(RejectReason::from(10), RejectReason::MergeFailure);
        assert_eq!(RejectReason::from(42), RejectReason::Other(42));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_capture_unavailable_off_windows() {
        use crate::fingerprint_pipeline::sensor::types::CaptureConfig;
        use crate::fingerprint_pipeline::sensor::{FingerprintSensor, WinBioSensor};

        let result = WinBioSensor.capture_sample(&CaptureConfig::default());
        assert!(matches!(result.unwrap_err(), CaptureError::SensorUnavailable(_)));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_enumerate_unavailable_off_windows() {
        let result = crate::fingerprint_pipeline::sensor::enumerate_units();
        assert!(matches!(result.unwrap_err(), CaptureError::SensorUnavailable(_)));
    }
}
