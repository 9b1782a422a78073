//! Capture result and configuration types

use std::fmt;
use std::time::Duration;

/// A raw fingerprint image delivered by a sensor unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintSample {
    /// Biometric unit that produced the sample.
    pub unit_id: u32,
    /// Width of the image in pixels.
    pub width: u32,
    /// Height of the image in pixels.
    pub height: u32,
    /// 8-bit grayscale pixels, row-major, top row first.
    pub data: Vec<u8>,
    /// Horizontal image resolution in pixels per centimeter.
    pub horizontal_resolution: u16,
    /// Vertical image resolution in pixels per centimeter.
    pub vertical_resolution: u16,
    /// Sensor-reported quality of the captured view (0-100).
    pub quality: u8,
}

/// Identity of one enumerated biometric unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorInfo {
    pub unit_id: u32,
    pub description: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
}

/// Sensor feedback explaining why a sample was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    TooHigh,
    TooLow,
    TooLeft,
    TooRight,
    TooFast,
    TooSlow,
    PoorQuality,
    TooSkewed,
    TooShort,
    MergeFailure,
    /// A reject detail code this crate does not recognize.
    Other(u32),
}

impl From<u32> for RejectReason {
    fn from(detail: u32) -> Self {
        match detail {
            1 => Self::TooHigh,
            2 => Self::TooLow,
            3 => Self::TooLeft,
            4 => Self::TooRight,
            5 => Self::TooFast,
            6 => Self::TooSlow,
            7 => Self::PoorQuality,
            8 => Self::TooSkewed,
            9 => Self::TooShort,
            10 => Self::MergeFailure,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooHigh => write!(f, "finger placed too high on the sensor"),
            Self::TooLow => write!(f, "finger placed too low on the sensor"),
            Self::TooLeft => write!(f, "finger placed too far left on the sensor"),
            Self::TooRight => write!(f, "finger placed too far right on the sensor"),
            Self::TooFast => write!(f, "finger moved too quickly"),
            Self::TooSlow => write!(f, "finger moved too slowly"),
            Self::PoorQuality => write!(f, "image quality too poor"),
            Self::TooSkewed => write!(f, "finger placed at an angle"),
            Self::TooShort => write!(f, "swipe too short"),
            Self::MergeFailure => write!(f, "swipe frames could not be merged"),
            Self::Other(detail) => write!(f, "reject detail code {}", detail),
        }
    }
}

/// Configuration for a capture request.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Abort the capture when no sample arrives within this window.
    /// `None` blocks until the sensor is touched.
    pub timeout: Option<Duration>,
    /// Whether to validate sample dimensions before staging.
    pub validate_dimensions: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            validate_dimensions: true,
        }
    }
}

impl CaptureConfig {
    pub fn builder() -> CaptureConfigBuilder {
        CaptureConfigBuilder::default()
    }
}

/// Builder for CaptureConfig
#[derive(Default)]
pub struct CaptureConfigBuilder {
    timeout: Option<Option<Duration>>,
    validate_dimensions: Option<bool>,
}

impl CaptureConfigBuilder {
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> CaptureConfig {
        let default = CaptureConfig::default();
        CaptureConfig {
            timeout: self.timeout.unwrap_or(default.timeout),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
        }
    }
}
