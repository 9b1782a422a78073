//! False-minutia filtering.
//!
//! Two rules prune the marked minutiae: a pair closer than the distance
//! threshold is noise from a single damaged ridge, and an aligned pair of
//! ridge endings with nothing between them is one ridge interrupted by a
//! scar or a dry patch.

use crate::fingerprint_pipeline::extraction::types::{ExtractionConfig, Minutia, MinutiaKind};

/// Returns the minutiae surviving both rules. Every pair is judged against
/// the original list, so removing one pair cannot hide another.
pub fn filter_false_minutiae(minutiae: &[Minutia], config: &ExtractionConfig) -> Vec<Minutia> {
    let mut keep = vec![true; minutiae.len()];

    for i in 0..minutiae.len() {
        for j in (i + 1)..minutiae.len() {
            if is_false_pair(minutiae, i, j, config) {
                keep[i] = false;
                keep[j] = false;
            }
        }
    }

    minutiae
        .iter()
        .zip(keep)
        .filter_map(|(minutia, keep)| keep.then_some(*minutia))
        .collect()
}

fn is_false_pair(minutiae: &[Minutia], i: usize, j: usize, config: &ExtractionConfig) -> bool {
    let a = &minutiae[i];
    let b = &minutiae[j];

    let distance = a.distance_to(b);
    if distance < config.distance_threshold {
        return true;
    }

    a.kind == MinutiaKind::RidgeEnding
        && b.kind == MinutiaKind::RidgeEnding
        && a.orientation_to(b).abs() < config.angle_threshold
        && !has_minutia_between(minutiae, i, j, distance)
}

/// True when some third minutia is closer to both endpoints than they are
/// to each other, which places it on the segment between them.
fn has_minutia_between(minutiae: &[Minutia], i: usize, j: usize, distance: f64) -> bool {
    minutiae.iter().enumerate().any(|(k, candidate)| {
        k != i
            && k != j
            && minutiae[i].distance_to(candidate) < distance
            && minutiae[j].distance_to(candidate) < distance
    })
}
