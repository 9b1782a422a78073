#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::fingerprint_pipeline::bitmap::grayscale_writer::GrayscaleBmpWriter;
    use crate::fingerprint_pipeline::bitmap::types::Bitmap;
    use crate::fingerprint_pipeline::bitmap::writer::BmpWriter;
    use crate::fingerprint_pipeline::common::error::CaptureError;

    fn staged(width: u32, height: u32) -> Bitmap {
        let data: Vec<u8> = (0..width as usize * height as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        let mut bitmap = Bitmap::new();
        bitmap.set_image_data(&data, width, height).unwrap();
        bitmap
    }

    #[test]
    fn test_staging_copies_exact_pixel_count() {
        let mut bitmap = Bitmap::new();
        let data = vec![7u8; 10]; // 3x2 needs 6, the rest is slack

        bitmap.set_image_data(&data, 3, 2).unwrap();

        assert_eq!(bitmap.width(), 3);
        assert_eq!(bitmap.height(), 2);
        assert_eq!(bitmap.data(), &[7u8; 6][..]);
    }

    #[test]
    fn test_staging_replaces_previous_contents() {
        let mut bitmap = staged(4, 4);

        bitmap.set_image_data(&[1, 2, 3, 4], 2, 2).unwrap();

        assert_eq!(bitmap.width(), 2);
        assert_eq!(bitmap.height(), 2);
        assert_eq!(bitmap.data(), &[1, 2, 3, 4][..]);
    }

    #[test]
    fn test_staging_rejects_zero_dimensions() {
        let mut bitmap = Bitmap::new();

        let result = bitmap.set_image_data(&[], 0, 4);

        assert!(matches!(
            result.unwrap_err(),
            CaptureError::InvalidDimensions(0, 4)
        ));
        assert!(bitmap.is_empty());
    }

    #[test]
    fn test_staging_rejects_short_buffer() {
        let mut bitmap = Bitmap::new();

        let result = bitmap.set_image_data(&[0u8; 5], 3, 2);

        match result.unwrap_err() {
            CaptureError::BufferTooSmall { expected, actual } => {
                assert_eq!(expected, 6);
                assert_eq!(actual, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(bitmap.is_empty());
    }

    #[test]
    fn test_save_on_empty_bitmap_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never_staged.bmp");

        let result = Bitmap::new().save(&path);

        assert!(matches!(result.unwrap_err(), CaptureError::EmptyBitmap));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_then_open_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.bmp");
        let bitmap = staged(37, 21); // odd width to exercise row padding

        bitmap.save(&path).unwrap();
        let reloaded = Bitmap::open(&path).unwrap();

        assert_eq!(reloaded, bitmap);
    }

    #[test]
    fn test_open_missing_file() {
        let result = Bitmap::open("no/such/file.bmp");
        assert!(matches!(result.unwrap_err(), CaptureError::InputReadError(_)));
    }

    #[test]
    fn test_bmp_layout_is_byte_exact() {
        let mut bitmap = Bitmap::new();
        bitmap.set_image_data(&[1, 2, 3, 4, 5, 6], 3, 2).unwrap();

        let mut output = Cursor::new(Vec::new());
        GrayscaleBmpWriter.write_bmp(&bitmap, &mut output).unwrap();
        let bytes = output.into_inner();

        // 14 + 40 + 1024 header and palette bytes, then two 4-byte rows.
        assert_eq!(bytes.len(), 1086);
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(u32::from_le_bytes(bytes[2..6].try_into().unwrap()), 1086); // file size
        assert_eq!(u32::from_le_bytes(bytes[10..14].try_into().unwrap()), 1078); // pixel offset
        assert_eq!(u32::from_le_bytes(bytes[14..18].try_into().unwrap()), 40); // info header size
        assert_eq!(i32::from_le_bytes(bytes[18..22].try_into().unwrap()), 3); // width
        assert_eq!(i32::from_le_bytes(bytes[22..26].try_into().unwrap()), 2); // height, bottom-up
        assert_eq!(u16::from_le_bytes(bytes[26..28].try_into().unwrap()), 1); // planes
        assert_eq!(u16::from_le_bytes(bytes[28..30].try_into().unwrap()), 8); // bits per pixel
        assert_eq!(u32::from_le_bytes(bytes[30..34].try_into().unwrap()), 0); // BI_RGB
        assert_eq!(u32::from_le_bytes(bytes[34..38].try_into().unwrap()), 8); // image size
        assert_eq!(u32::from_le_bytes(bytes[46..50].try_into().unwrap()), 256); // palette entries

        // Palette entry 0x40 is the gray (0x40, 0x40, 0x40, 0).
        let entry = &bytes[54 + 4 * 0x40..54 + 4 * 0x40 + 4];
        assert_eq!(entry, &[0x40, 0x40, 0x40, 0]);

        // Rows are stored bottom-up, zero padded to 4 bytes.
        assert_eq!(&bytes[1078..1082], &[4, 5, 6, 0]);
        assert_eq!(&bytes[1082..1086], &[1, 2, 3, 0]);
    }

    #[test]
    fn test_writer_rejects_empty_bitmap() {
        let mut output = Cursor::new(Vec::new());

        let result = GrayscaleBmpWriter.write_bmp(&Bitmap::new(), &mut output);

        assert!(matches!(result.unwrap_err(), CaptureError::EmptyBitmap));
        assert!(output.into_inner().is_empty());
    }
}
