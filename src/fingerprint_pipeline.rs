//! Fingerprint capture pipeline module
//!
//! This module provides a structured approach to fingerprint acquisition,
//! with separate modules for sensor access, bitmap staging, minutia
//! extraction, matching, and pipeline orchestration.

pub mod bitmap;
pub mod common;
pub mod extraction;
pub mod matching;
pub mod pipelines;
pub mod sensor;

pub use common::{
    CaptureError,
    Result,
};

pub use sensor::{
    CaptureConfig,
    CaptureConfigBuilder,
    FingerprintSample,
    FingerprintSensor,
    RejectReason,
    SensorInfo,
    WinBioSensor,
    enumerate_units,
};

pub use bitmap::{
    Bitmap,
    BmpWriter,
    GrayscaleBmpWriter,
};

pub use extraction::{
    ExtractionConfig,
    ExtractionConfigBuilder,
    FingerprintTemplate,
    Minutia,
    MinutiaKind,
    RidgeMap,
};

pub use matching::{
    MatchConfig,
    MatchConfigBuilder,
    MatchDecision,
    MatchOutcome,
    match_minutiae,
    match_templates,
};

pub use pipelines::{
    CaptureToBmpPipeline,
    TemplateExtractor,
};
