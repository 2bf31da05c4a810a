use crate::types::{ScanType, SCAN_TYPES};

/// Raw rule scores, one non-negative value per scan type
///
/// Written only by the scoring engine; read-only once scoring completes.
/// Iteration yields entries in declaration order, which is what the ranker's
/// tie-break relies on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreMap {
    scores: [f64; ScanType::COUNT],
}

impl ScoreMap {
    /// Creates a map with every score at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `weight` to the score for `scan_type`
    pub fn add(&mut self, scan_type: ScanType, weight: f64) {
        self.scores[scan_type.index()] += weight;
    }

    /// Returns the score for `scan_type`
    pub fn get(&self, scan_type: ScanType) -> f64 {
        self.scores[scan_type.index()]
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Iterates entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ScanType, f64)> + '_ {
        SCAN_TYPES.iter().map(move |&st| (st, self.get(st)))
    }
}

/// One ranked entry of the confidence distribution
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ScanScore {
    /// Scan modality category
    pub scan_type: ScanType,

    /// Normalized confidence percentage, one decimal
    pub confidence: f64,
}
