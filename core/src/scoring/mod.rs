//! Rule-based scoring and confidence normalization
//!
//! The scoring engine walks the fixed rule table and accumulates weights
//! into a [`ScoreMap`]; the normalizer turns raw scores into the ranked
//! percentage distribution.

pub mod normalize;
pub mod profiles;

pub use normalize::rank_scores;
pub use profiles::{ScanProfile, WeightedRule, SCAN_PROFILES};

use crate::types::{FeatureVector, ScoreMap};

/// Scores a feature vector against every category's rule set
///
/// Deterministic, no I/O. Every rule of every profile is evaluated; there is
/// no early exit and no mutual exclusion between categories.
pub fn score_features(features: &FeatureVector) -> ScoreMap {
    let mut scores = ScoreMap::new();
    for profile in &SCAN_PROFILES {
        for rule in profile.rules {
            if (rule.applies)(features) {
                scores.add(profile.scan_type, rule.weight);
            }
        }
    }
    scores
}
