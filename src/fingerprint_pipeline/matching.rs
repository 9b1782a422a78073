//! Template matching
//!
//! Decides whether two minutia templates come from the same finger by
//! pairing minutiae on proximity and thresholding the pair count.

mod matcher;
pub mod types;


pub use matcher::{match_minutiae, match_templates};
pub use types::{MatchConfig, MatchConfigBuilder, MatchDecision, MatchOutcome};
