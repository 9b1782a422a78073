use tracing::{debug, info, instrument};
use std::path::Path;

use crate::fingerprint_pipeline::{
    bitmap::Bitmap,
    common::error::{CaptureError, Result},
    extraction::{self, ExtractionConfig, FingerprintTemplate},
};

/// Chains the extraction stages over a staged bitmap: equalization,
/// binarization, thinning, cleanup, minutia marking and filtering.
pub struct TemplateExtractor {
    config: ExtractionConfig,
}

impl TemplateExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Extracts a minutia template from a staged bitmap.
    #[instrument(skip(self, bitmap), fields(width = bitmap.width(), height = bitmap.height()))]
    pub fn extract(&self, bitmap: &Bitmap) -> Result<FingerprintTemplate> {
        if bitmap.is_empty() {
            return Err(CaptureError::EmptyBitmap);
        }

        info!("Starting template extraction");

        let equalized = {
            let _span = tracing::info_span!("equalize").entered();
            extraction::equalize(bitmap)
        };

        let mut map = {
            let _span = tracing::info_span!("binarize").entered();
            extraction::binarize(&equalized, self.config.binarize_threshold)
        };

        {
            let _span = tracing::info_span!("thin").entered();
            map = extraction::thin(&map);
        }

        {
            let _span = tracing::info_span!("cleanup").entered();
            extraction::remove_h_breaks(&mut map);
            extraction::remove_isolated_points(&mut map);
            extraction::remove_spikes(&mut map);
        }

        let minutiae = {
            let _span = tracing::info_span!("mark_minutiae").entered();
            extraction::mark_minutiae(&map)
        };
        debug!(marked = minutiae.len(), "Minutiae marked");

        let minutiae = {
            let _span = tracing::info_span!("filter_minutiae").entered();
            extraction::filter_false_minutiae(&minutiae, &self.config)
        };

        info!(minutiae = minutiae.len(), "Template extraction complete");

        Ok(FingerprintTemplate {
            width: bitmap.width(),
            height: bitmap.height(),
            minutiae,
        })
    }

    /// Loads an image file and extracts a template from it.
    #[instrument(skip(self, input_path))]
    pub fn extract_from_file<P: AsRef<Path>>(&self, input_path: P) -> Result<FingerprintTemplate> {
        let input_path = input_path.as_ref();

        info!(input = %input_path.display(), "Extracting template from file");

        let bitmap = {
            let _span = tracing::info_span!("read_input_file").entered();
            Bitmap::open(input_path)?
        };

        self.extract(&bitmap)
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ExtractionConfig) {
        self.config = config;
    }
}
