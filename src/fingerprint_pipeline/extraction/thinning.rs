//! Zhang-Suen ridge thinning.
//!
//! T. Y. Zhang and C. Y. Suen, "A fast parallel algorithm for thinning
//! digital patterns", CACM 27(3), 1984.

use crate::fingerprint_pipeline::extraction::types::RidgeMap;

/// Thins ridges down to one-cell-wide skeletons.
///
/// Alternates the two sub-passes until a full iteration deletes nothing.
/// The one-cell border is never touched, so maps narrower than three cells
/// in either direction come back unchanged.
pub fn thin(map: &RidgeMap) -> RidgeMap {
    let mut map = map.clone();
    if map.width() < 3 || map.height() < 3 {
        return map;
    }

    loop {
        let first = erode_pass(&mut map, Subpass::First);
        let second = erode_pass(&mut map, Subpass::Second);
        if !first && !second {
            break;
        }
    }

    map
}

#[derive(Clone, Copy)]
enum Subpass {
    First,
    Second,
}

fn erode_pass(map: &mut RidgeMap, subpass: Subpass) -> bool {
    let mut to_delete = Vec::new();

    for y in 1..map.height() - 1 {
        for x in 1..map.width() - 1 {
            if map.get(x, y) == 1 && erodable(map, x, y, subpass) {
                to_delete.push((x, y));
            }
        }
    }

    for &(x, y) in &to_delete {
        map.set(x, y, 0);
    }

    !to_delete.is_empty()
}

/// Sub-pass conditions over the neighborhood [N, NE, E, SE, S, SW, W, NW]:
/// 2 to 6 ridge neighbors, exactly one 0-to-1 transition walking clockwise,
/// and the directional products that preserve connectivity (N*E*S and E*S*W
/// zero in the first sub-pass, N*E*W and N*S*W in the second).
fn erodable(map: &RidgeMap, x: u32, y: u32, subpass: Subpass) -> bool {
    let n = map.neighbors(x, y);
    let count: u8 = n.iter().sum();

    if !(2..=6).contains(&count) || transitions(&n) != 1 {
        return false;
    }

    match subpass {
        Subpass::First => n[0] * n[2] * n[4] == 0 && n[2] * n[4] * n[6] == 0,
        Subpass::Second => n[0] * n[2] * n[6] == 0 && n[0] * n[4] * n[6] == 0,
    }
}

/// Number of 0-to-1 transitions walking the neighborhood clockwise.
fn transitions(neighbors: &[u8; 8]) -> usize {
    (0..8)
        .filter(|&i| neighbors[i] == 0 && neighbors[(i + 1) % 8] == 1)
        .count()
}
