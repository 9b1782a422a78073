use tracing::{info, instrument};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::fingerprint_pipeline::{
    bitmap::{Bitmap, BmpWriter, GrayscaleBmpWriter},
    common::error::{CaptureError, Result},
    sensor::{CaptureConfig, FingerprintSensor, WinBioSensor},
};

pub struct CaptureToBmpPipeline<S: FingerprintSensor, W: BmpWriter> {
    sensor: S,
    writer: W,
    config: CaptureConfig,
}

impl CaptureToBmpPipeline<WinBioSensor, GrayscaleBmpWriter> {
    pub fn new(config: CaptureConfig) -> Self {
        Self {
            sensor: WinBioSensor,
            writer: GrayscaleBmpWriter,
            config,
        }
    }
}

impl<S: FingerprintSensor, W: BmpWriter> CaptureToBmpPipeline<S, W> {
    pub fn with_custom(sensor: S, writer: W, config: CaptureConfig) -> Self {
        Self {
            sensor,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(CaptureError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Blocks for one sample and stages it into an owned bitmap.
    #[instrument(skip(self))]
    pub fn capture(&self) -> Result<Bitmap> {
        info!("Starting fingerprint capture");

        let sample = {
            let _span = tracing::info_span!("capture_sample").entered();
            self.sensor.capture_sample(&self.config)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = sample.width,
                height = sample.height
            ).entered();
            self.validate_dimensions(sample.width, sample.height)?;
        }

        let bitmap = {
            let _span = tracing::info_span!("stage_bitmap").entered();
            let mut bitmap = Bitmap::new();
            bitmap.set_image_data(&sample.data, sample.width, sample.height)?;
            bitmap
        };

        info!(
            unit_id = sample.unit_id,
            width = sample.width,
            height = sample.height,
            quality = sample.quality,
            "Capture complete"
        );
        Ok(bitmap)
    }

    /// Captures one sample and encodes it to `output` as a BMP stream. The
    /// staged bitmap is returned for further processing.
    #[instrument(skip(self, output))]
    pub fn capture_to_writer(&self, output: &mut dyn Write) -> Result<Bitmap> {
        let bitmap = self.capture()?;

        {
            let _span = tracing::info_span!("encode_bmp").entered();
            self.writer.write_bmp(&bitmap, output)?;
        }

        Ok(bitmap)
    }

    /// Captures one sample and persists it as a BMP file at `output_path`.
    #[instrument(skip(self, output_path))]
    pub fn capture_to_file<P: AsRef<Path>>(&self, output_path: P) -> Result<Bitmap> {
        let output_path = output_path.as_ref();

        info!(output = %output_path.display(), "Capturing to file");

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            let file = std::fs::File::create(output_path).map_err(|e| {
                CaptureError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
            BufWriter::new(file)
        };

        let bitmap = self.capture_to_writer(&mut output_file)?;
        output_file.flush()?;

        Ok(bitmap)
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CaptureConfig) {
        self.config = config;
    }
}
