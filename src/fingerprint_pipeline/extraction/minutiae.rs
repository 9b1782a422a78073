//! Minutia marking on thinned ridge maps.

use crate::fingerprint_pipeline::extraction::types::{Minutia, MinutiaKind, RidgeMap};

/// Walks the interior of a thinned map and records ridge cells whose
/// neighbor count identifies them: one ridge neighbor marks a ridge ending,
/// three mark a bifurcation.
pub fn mark_minutiae(map: &RidgeMap) -> Vec<Minutia> {
    let mut minutiae = Vec::new();
    if map.width() < 3 || map.height() < 3 {
        return minutiae;
    }

    for y in 1..map.height() - 1 {
        for x in 1..map.width() - 1 {
            if map.get(x, y) != 1 {
                continue;
            }

            let kind = match map.neighbor_count(x, y) {
                1 => MinutiaKind::RidgeEnding,
                3 => MinutiaKind::Bifurcation,
                _ => continue,
            };
            minutiae.push(Minutia { x, y, kind });
        }
    }

    minutiae
}
