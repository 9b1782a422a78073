//! Bitmap staging and BMP persistence
//!
//! The owned in-memory image type plus the writer seam used to serialize
//! captured samples to disk.

mod writer;
mod grayscale_writer;
pub mod types;

#[cfg(test)]
mod tests;

pub use writer::BmpWriter;
pub use grayscale_writer::GrayscaleBmpWriter;
pub use types::Bitmap;
