use std::collections::HashMap;

use bioguard_capture_rs::fingerprint_pipeline::{
    Bitmap, ExtractionConfig, MinutiaKind, TemplateExtractor,
};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/fingerprint_input.bmp".to_string());

    let bitmap = Bitmap::open(&path)?;
    println!("Image: {}x{} pixels", bitmap.width(), bitmap.height());

    let mut levels = HashMap::new();
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum = 0u64;

    for &pixel in bitmap.data() {
        *levels.entry(pixel).or_insert(0u64) += 1;
        min = min.min(pixel);
        max = max.max(pixel);
        sum += pixel as u64;
    }

    let total_pixels = bitmap.data().len() as u64;
    println!("\nGray levels:");
    println!("  Range: {} - {} (span: {})", min, max, max - min);
    println!("  Unique values: {}", levels.len());
    println!("  Mean: {:.2}", sum as f64 / total_pixels as f64);
    println!("  Effective bits: {:.2}", (levels.len() as f64).log2());

    // Saturated samples usually mean the finger pressed too hard.
    let dark = bitmap.data().iter().filter(|&&p| p < 16).count();
    let bright = bitmap.data().iter().filter(|&&p| p > 239).count();
    println!("\nExposure:");
    println!(
        "  Near-black pixels (< 16): {} ({:.2}%)",
        dark,
        dark as f64 / total_pixels as f64 * 100.0
    );
    println!(
        "  Near-white pixels (> 239): {} ({:.2}%)",
        bright,
        bright as f64 / total_pixels as f64 * 100.0
    );

    let extractor = TemplateExtractor::new(ExtractionConfig::default());
    let template = extractor.extract(&bitmap)?;

    let endings = template
        .minutiae
        .iter()
        .filter(|m| m.kind == MinutiaKind::RidgeEnding)
        .count();
    let bifurcations = template.minutiae.len() - endings;

    println!("\nTemplate:");
    println!("  Minutiae: {}", template.minutiae.len());
    println!("  Ridge endings: {}", endings);
    println!("  Bifurcations: {}", bifurcations);

    Ok(())
}
