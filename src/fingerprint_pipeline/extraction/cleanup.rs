//! Morphological cleanup of thinned ridge maps.
//!
//! Three passes run between thinning and minutia marking: H-break removal,
//! isolated-point removal and spike removal.

use crate::fingerprint_pipeline::extraction::types::RidgeMap;

/// The two neighborhood patterns (N, NE, E, SE, S, SW, W, NW) that mark the
/// crossbar cell of an H-shaped ridge break.
const H_PATTERNS: [[u8; 8]; 2] = [
    [1, 0, 1, 0, 1, 1, 1, 0],
    [1, 1, 1, 0, 1, 0, 1, 0],
];

/// Deletes ridge cells whose neighborhood matches an H pattern, repeating
/// until a pass deletes nothing. Only ridge cells are candidates, so every
/// round either clears at least one cell or ends the loop.
pub fn remove_h_breaks(map: &mut RidgeMap) {
    if map.width() < 3 || map.height() < 3 {
        return;
    }

    loop {
        let mut to_delete = Vec::new();
        for y in 1..map.height() - 1 {
            for x in 1..map.width() - 1 {
                if map.get(x, y) == 1 && is_h_break(map, x, y) {
                    to_delete.push((x, y));
                }
            }
        }

        if to_delete.is_empty() {
            break;
        }
        for &(x, y) in &to_delete {
            map.set(x, y, 0);
        }
    }
}

fn is_h_break(map: &RidgeMap, x: u32, y: u32) -> bool {
    let neighbors = map.neighbors(x, y);
    H_PATTERNS.iter().any(|pattern| neighbors == *pattern)
}

/// Deletes ridge cells with no ridge neighbor. Single pass.
pub fn remove_isolated_points(map: &mut RidgeMap) {
    remove_where(map, |count| count == 0);
}

/// Deletes ridge cells with exactly one ridge neighbor. Single pass; both
/// cells of a two-cell fragment go together because marking happens before
/// any deletion.
pub fn remove_spikes(map: &mut RidgeMap) {
    remove_where(map, |count| count == 1);
}

fn remove_where(map: &mut RidgeMap, condition: impl Fn(u8) -> bool) {
    if map.width() < 3 || map.height() < 3 {
        return;
    }

    let mut to_delete = Vec::new();
    for y in 1..map.height() - 1 {
        for x in 1..map.width() - 1 {
            if map.get(x, y) == 1 && condition(map.neighbor_count(x, y)) {
                to_delete.push((x, y));
            }
        }
    }

    for &(x, y) in &to_delete {
        map.set(x, y, 0);
    }
}
