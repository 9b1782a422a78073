//! Common utilities module
//!
//! Shared error type and result alias used across the capture pipeline.

pub mod error;

pub use error::{CaptureError, Result};
