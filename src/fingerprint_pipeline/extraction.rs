//! Minutia extraction
//!
//! The stages that turn a staged grayscale capture into a minutia template:
//! equalization, binarization, thinning, cleanup, marking and filtering.
//! Each stage is a pure function over [`Bitmap`] or [`RidgeMap`] so it can
//! be tested and benchmarked on its own; the
//! [`TemplateExtractor`](crate::fingerprint_pipeline::pipelines::TemplateExtractor)
//! chains them in order.
//!
//! [`Bitmap`]: crate::fingerprint_pipeline::bitmap::Bitmap
//! [`RidgeMap`]: types::RidgeMap

mod cleanup;
mod filtering;
mod minutiae;
mod preprocess;
mod thinning;
pub mod types;


pub use cleanup::{remove_h_breaks, remove_isolated_points, remove_spikes};
pub use filtering::filter_false_minutiae;
pub use minutiae::mark_minutiae;
pub use preprocess::{binarize, equalize};
pub use thinning::thin;
pub use types::{
    ExtractionConfig,
    ExtractionConfigBuilder,
    FingerprintTemplate,
    Minutia,
    MinutiaKind,
    RidgeMap,
};
