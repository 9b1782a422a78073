//! Extraction data types and configuration

use crate::fingerprint_pipeline::common::error::{CaptureError, Result};

/// Binarized fingerprint image. Cells hold 0 (valley or background) or
/// 1 (ridge), row-major, top row first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RidgeMap {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl RidgeMap {
    /// Builds a ridge map from a flat buffer; every nonzero byte counts as
    /// ridge. `cells` must hold at least `width * height` bytes, any excess
    /// is ignored.
    pub fn from_cells(width: u32, height: u32, cells: &[u8]) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(CaptureError::InvalidDimensions(width, height))?;

        if cells.len() < expected {
            return Err(CaptureError::BufferTooSmall {
                expected,
                actual: cells.len(),
            });
        }

        let cells = cells[..expected].iter().map(|&c| u8::from(c != 0)).collect();
        Ok(Self { width, height, cells })
    }

    pub(crate) fn from_parts(width: u32, height: u32, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self { width, height, cells }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The flat cell buffer, row-major.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Consumes the map, returning the flat cell buffer.
    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }

    /// Number of ridge cells in the map.
    pub fn ridge_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.cells[self.index(x, y)]
    }

    pub(crate) fn set(&mut self, x: u32, y: u32, value: u8) {
        let index = self.index(x, y);
        self.cells[index] = value;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    /// The 8 neighbors of an interior cell, clockwise from north:
    /// N, NE, E, SE, S, SW, W, NW.
    pub(crate) fn neighbors(&self, x: u32, y: u32) -> [u8; 8] {
        [
            self.get(x, y - 1),
            self.get(x + 1, y - 1),
            self.get(x + 1, y),
            self.get(x + 1, y + 1),
            self.get(x, y + 1),
            self.get(x - 1, y + 1),
            self.get(x - 1, y),
            self.get(x - 1, y - 1),
        ]
    }

    /// Count of ridge cells among the 8 neighbors of an interior cell.
    pub(crate) fn neighbor_count(&self, x: u32, y: u32) -> u8 {
        self.neighbors(x, y).iter().sum()
    }
}

/// Kind of feature a minutia marks on a thinned ridge skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinutiaKind {
    /// A ridge that stops: exactly one ridge neighbor.
    RidgeEnding,
    /// A ridge that splits: exactly three ridge neighbors.
    Bifurcation,
}

/// One minutia point in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minutia {
    pub x: u32,
    pub y: u32,
    pub kind: MinutiaKind,
}

impl Minutia {
    /// Euclidean distance to another minutia.
    pub fn distance_to(&self, other: &Minutia) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Orientation of the segment from `self` towards `other`, in radians.
    pub fn orientation_to(&self, other: &Minutia) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dy.atan2(dx)
    }
}

/// Minutiae extracted from one fingerprint image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintTemplate {
    /// Width of the source image in pixels.
    pub width: u32,
    /// Height of the source image in pixels.
    pub height: u32,
    /// Minutiae surviving false-minutia filtering.
    pub minutiae: Vec<Minutia>,
}

/// Configuration for template extraction.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Binarization cutoff applied after equalization; intensities strictly
    /// above it become ridge.
    pub binarize_threshold: u8,
    /// Minutia pairs closer than this many pixels are discarded as false.
    pub distance_threshold: f64,
    /// Ridge-ending pairs whose connecting segment is flatter than this
    /// angle (radians) count as one interrupted ridge.
    pub angle_threshold: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            binarize_threshold: 128,
            distance_threshold: 10.0,
            angle_threshold: 0.1,
        }
    }
}

impl ExtractionConfig {
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder::default()
    }
}

/// Builder for ExtractionConfig
#[derive(Default)]
pub struct ExtractionConfigBuilder {
    binarize_threshold: Option<u8>,
    distance_threshold: Option<f64>,
    angle_threshold: Option<f64>,
}

impl ExtractionConfigBuilder {
    pub fn binarize_threshold(mut self, threshold: u8) -> Self {
        self.binarize_threshold = Some(threshold);
        self
    }

    pub fn distance_threshold(mut self, threshold: f64) -> Self {
        self.distance_threshold = Some(threshold);
        self
    }

    pub fn angle_threshold(mut self, threshold: f64) -> Self {
        self.angle_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> ExtractionConfig {
        let default = ExtractionConfig::default();
        ExtractionConfig {
            binarize_threshold: self.binarize_threshold.unwrap_or(default.binarize_threshold),
            distance_threshold: self.distance_threshold.unwrap_or(default.distance_threshold),
            angle_threshold: self.angle_threshold.unwrap_or(default.angle_threshold),
        }
    }
}
