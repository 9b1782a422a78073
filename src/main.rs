use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use bioguard_capture_rs::fingerprint_pipeline::{
    CaptureConfig, CaptureToBmpPipeline, ExtractionConfig, FingerprintTemplate, Result,
    TemplateExtractor, enumerate_units,
};
use bioguard_capture_rs::logger;

use tracing::{error, info};

const OUTPUT_PATH: &str = "data/fingerprint_input.bmp";
const CAPTURE_TIMEOUT: Duration = Duration::from_secs(30);

fn main() -> ExitCode {
    logger::init();

    info!("Starting bioguard capture...");

    match capture_and_extract() {
        Ok(template) => {
            info!(
                minutiae = template.minutiae.len(),
                output = OUTPUT_PATH,
                "Capture successful!"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Capture failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn capture_and_extract() -> Result<FingerprintTemplate> {
    let units = enumerate_units()?;
    for unit in &units {
        info!(
            unit_id = unit.unit_id,
            description = %unit.description,
            manufacturer = %unit.manufacturer,
            "Fingerprint unit available"
        );
    }

    if let Some(parent) = Path::new(OUTPUT_PATH).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = CaptureConfig::builder()
        .timeout(Some(CAPTURE_TIMEOUT))
        .build();
    let pipeline = CaptureToBmpPipeline::new(config);

    info!("Touch the sensor to capture");
    let bitmap = pipeline.capture_to_file(OUTPUT_PATH)?;

    let extractor = TemplateExtractor::new(ExtractionConfig::default());
    extractor.extract(&bitmap)
}
