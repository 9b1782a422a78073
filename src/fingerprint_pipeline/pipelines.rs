//! Pipeline orchestration
//!
//! End-to-end flows built from the sensor, bitmap and extraction modules.

mod capture_to_bmp;
mod template_extractor;


pub use capture_to_bmp::CaptureToBmpPipeline;
pub use template_extractor::TemplateExtractor;
