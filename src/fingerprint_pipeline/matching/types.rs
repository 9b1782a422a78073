//! Matching configuration and outcome types

/// Verdict of a template comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchDecision {
    Match,
    NoMatch,
}

/// Result of comparing a probe template against an enrolled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Probe minutiae that found an enrolled counterpart in range.
    pub matched: usize,
    /// Total probe minutiae compared.
    pub probe_total: usize,
    /// Total enrolled minutiae compared against.
    pub enrolled_total: usize,
    /// The thresholded verdict.
    pub decision: MatchDecision,
}

impl MatchOutcome {
    /// True when the comparison crossed the match threshold.
    pub fn is_match(&self) -> bool {
        self.decision == MatchDecision::Match
    }
}

/// Configuration for minutia matching.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// A probe minutia pairs with an enrolled one strictly within this
    /// distance in pixels.
    pub max_distance: f64,
    /// Strictly more pairings than this yields a match.
    pub match_threshold: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_distance: 5.0,
            match_threshold: 11,
        }
    }
}

impl MatchConfig {
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }
}

/// Builder for MatchConfig
#[derive(Default)]
pub struct MatchConfigBuilder {
    max_distance: Option<f64>,
    match_threshold: Option<usize>,
}

impl MatchConfigBuilder {
    pub fn max_distance(mut self, distance: f64) -> Self {
        self.max_distance = Some(distance);
        self
    }

    pub fn match_threshold(mut self, threshold: usize) -> Self {
        self.match_threshold = Some(threshold);
        self
    }

    pub fn build(self) -> MatchConfig {
        let default = MatchConfig::default();
        MatchConfig {
            max_distance: self.max_distance.unwrap_or(default.max_distance),
            match_threshold: self.match_threshold.unwrap_or(default.match_threshold),
        }
    }
}
