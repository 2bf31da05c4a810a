//! Score normalization and ranking

use crate::types::{round_to, ScanScore, ScanType, ScoreMap, SCAN_TYPES};

/// Converts raw scores into the ranked percentage distribution
///
/// Confidences are each score's share of the total, rounded to one decimal.
/// When no rule fired at all, X-Ray is forced to 1.0 before normalizing so
/// the engine still produces an answer, defaulting to the most common
/// modality.
///
/// The returned list is sorted by descending confidence; exact ties keep
/// declaration order. The best category is always the first entry.
pub fn rank_scores(mut scores: ScoreMap) -> Vec<ScanScore> {
    let mut total = scores.total();
    if total == 0.0 {
        scores.add(ScanType::XRay, 1.0);
        total = 1.0;
    }

    let mut ranked: Vec<ScanScore> = SCAN_TYPES
        .iter()
        .map(|&scan_type| ScanScore {
            scan_type,
            confidence: round_to(scores.get(scan_type) / total * 100.0, 1),
        })
        .collect();

    // Stable sort over the declaration-ordered list: equal confidences keep
    // declaration order.
    ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_category_takes_all() {
        let mut scores = ScoreMap::new();
        scores.add(ScanType::Mri, 4.5);

        let ranked = rank_scores(scores);
        assert_eq!(ranked[0].scan_type, ScanType::Mri);
        assert_eq!(ranked[0].confidence, 100.0);
        for entry in &ranked[1..] {
            assert_eq!(entry.confidence, 0.0);
        }
    }

    #[test]
    fn test_confidences_sum_to_one_hundred() {
        let mut scores = ScoreMap::new();
        scores.add(ScanType::XRay, 6.5);
        scores.add(ScanType::CtScan, 2.0);
        scores.add(ScanType::Mammogram, 3.5);
        scores.add(ScanType::Fluoroscopy, 1.5);

        let ranked = rank_scores(scores);
        let sum: f64 = ranked.iter().map(|s| s.confidence).sum();
        assert!((sum - 100.0).abs() < 0.3, "sum = {}", sum);
    }

    #[test]
    fn test_ranked_descending_with_all_categories_present() {
        let mut scores = ScoreMap::new();
        scores.add(ScanType::Ultrasound, 5.5);
        scores.add(ScanType::DexaScan, 3.5);
        scores.add(ScanType::CtScan, 2.0);

        let ranked = rank_scores(scores);
        assert_eq!(ranked.len(), ScanType::COUNT);
        assert_eq!(ranked[0].scan_type, ScanType::Ultrasound);
        assert_eq!(ranked[0].confidence, 50.0);
        assert_eq!(ranked[1].scan_type, ScanType::DexaScan);
        assert_eq!(ranked[2].scan_type, ScanType::CtScan);
        for pair in ranked.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn test_zero_total_falls_back_to_xray() {
        let ranked = rank_scores(ScoreMap::new());

        assert_eq!(ranked[0].scan_type, ScanType::XRay);
        assert_eq!(ranked[0].confidence, 100.0);
        for entry in &ranked[1..] {
            assert_eq!(entry.confidence, 0.0);
        }
    }

    #[test]
    fn test_exact_tie_keeps_declaration_order() {
        let mut scores = ScoreMap::new();
        scores.add(ScanType::Ultrasound, 2.0);
        scores.add(ScanType::Mri, 2.0);

        let ranked = rank_scores(scores);
        assert_eq!(ranked[0].scan_type, ScanType::Mri);
        assert_eq!(ranked[1].scan_type, ScanType::Ultrasound);
        assert_eq!(ranked[0].confidence, 50.0);
        assert_eq!(ranked[1].confidence, 50.0);
    }

    #[test]
    fn test_zero_scored_ties_also_keep_declaration_order() {
        let mut scores = ScoreMap::new();
        scores.add(ScanType::Fluoroscopy, 1.0);

        let ranked = rank_scores(scores);
        assert_eq!(ranked[0].scan_type, ScanType::Fluoroscopy);
        // Remaining entries are all 0.0 and must appear in declaration order.
        let rest: Vec<ScanType> = ranked[1..].iter().map(|s| s.scan_type).collect();
        let expected: Vec<ScanType> = SCAN_TYPES
            .iter()
            .copied()
            .filter(|&st| st != ScanType::Fluoroscopy)
            .collect();
        assert_eq!(rest, expected);
    }

    #[test]
    fn test_confidence_rounded_to_one_decimal() {
        let mut scores = ScoreMap::new();
        scores.add(ScanType::XRay, 1.0);
        scores.add(ScanType::CtScan, 2.0);

        let ranked = rank_scores(scores);
        assert_eq!(ranked[0].scan_type, ScanType::CtScan);
        assert_eq!(ranked[0].confidence, 66.7);
        assert_eq!(ranked[1].confidence, 33.3);
    }
}
