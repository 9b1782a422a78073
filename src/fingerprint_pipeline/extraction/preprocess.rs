//! Grayscale preprocessing: histogram equalization and binarization.

use crate::fingerprint_pipeline::bitmap::types::Bitmap;
use crate::fingerprint_pipeline::extraction::types::RidgeMap;

/// Spreads the intensity histogram across the full 8-bit range.
///
/// Classic cumulative-distribution remap: level `v` becomes
/// `round(cdf(v) * 255 / pixel_count)`. An empty bitmap stays empty.
pub fn equalize(bitmap: &Bitmap) -> Bitmap {
    if bitmap.is_empty() {
        return Bitmap::new();
    }

    let mut histogram = [0u64; 256];
    for &pixel in bitmap.data() {
        histogram[pixel as usize] += 1;
    }

    let mut cdf = [0u64; 256];
    let mut cumulative = 0u64;
    for (level, &count) in histogram.iter().enumerate() {
        cumulative += count;
        cdf[level] = cumulative;
    }

    let scale = 255.0 / bitmap.data().len() as f32;
    let data = bitmap
        .data()
        .iter()
        .map(|&pixel| (cdf[pixel as usize] as f32 * scale).round() as u8)
        .collect();

    Bitmap::from_parts(bitmap.width(), bitmap.height(), data)
}

/// Thresholds an equalized image into a ridge map. Intensity strictly above
/// `threshold` is ridge, everything else is valley.
pub fn binarize(bitmap: &Bitmap, threshold: u8) -> RidgeMap {
    let cells = bitmap
        .data()
        .iter()
        .map(|&pixel| u8::from(pixel > threshold))
        .collect();

    RidgeMap::from_parts(bitmap.width(), bitmap.height(), cells)
}
