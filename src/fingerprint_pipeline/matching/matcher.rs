//! Proximity pairing of minutia sets.

use tracing::debug;

use crate::fingerprint_pipeline::extraction::types::{FingerprintTemplate, Minutia};
use crate::fingerprint_pipeline::matching::types::{MatchConfig, MatchDecision, MatchOutcome};

/// Pairs probe minutiae with enrolled ones by proximity.
///
/// Each probe minutia counts at most once: it is matched when any enrolled
/// minutia lies strictly within `max_distance`. The verdict is `Match` when
/// strictly more than `match_threshold` probe minutiae paired.
pub fn match_minutiae(probe: &[Minutia], enrolled: &[Minutia], config: &MatchConfig) -> MatchOutcome {
    let matched = probe
        .iter()
        .filter(|candidate| {
            enrolled
                .iter()
                .any(|reference| candidate.distance_to(reference) < config.max_distance)
        })
        .count();

    let decision = if matched > config.match_threshold {
        MatchDecision::Match
    } else {
        MatchDecision::NoMatch
    };

    debug!(
        matched,
        probe_total = probe.len(),
        enrolled_total = enrolled.len(),
        ?decision,
        "Compared minutia sets"
    );

    MatchOutcome {
        matched,
        probe_total: probe.len(),
        enrolled_total: enrolled.len(),
        decision,
    }
}

/// [`match_minutiae`] over whole templates.
pub fn match_templates(
    probe: &FingerprintTemplate,
    enrolled: &FingerprintTemplate,
    config: &MatchConfig,
) -> MatchOutcome {
    match_minutiae(&probe.minutiae, &enrolled.minutiae, config)
}
