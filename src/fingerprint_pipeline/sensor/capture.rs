use crate::fingerprint_pipeline::common::error::Result;
use crate::fingerprint_pipeline::sensor::types::{CaptureConfig, FingerprintSample};

/// A fingerprint sensor capable of delivering raw image samples.
///
/// The call blocks the invoking thread until a finger touches the sensor,
/// the configured timeout passes, or the session fails.
pub trait FingerprintSensor {
    fn capture_sample(&self, config: &CaptureConfig) -> Result<FingerprintSample>;
}
