//! Fingerprint sensor access
//!
//! The capture seam, the Windows Biometric Framework backend, and the
//! ANSI INCITS 381 sample container parser.

mod capture;
mod winbio;
#[cfg(windows)]
mod winbio_sys;
pub mod bir;
pub mod types;

#[cfg(test)]
mod tests;

pub use capture::FingerprintSensor;
pub use types::{CaptureConfig, CaptureConfigBuilder, FingerprintSample, RejectReason, SensorInfo};
pub use winbio::{WinBioSensor, enumerate_units};
