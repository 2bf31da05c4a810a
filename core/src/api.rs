use crate::features::compute_features;
use crate::scoring::{rank_scores, score_features};
use crate::types::{FeatureSummary, FeatureVector, ScanScore, ScanType};
use image::GrayImage;

/// Main entry point for scan modality classification
///
/// Ties the three engine stages together: feature extraction, rule scoring,
/// and normalization/ranking. The whole pipeline is a pure function of the
/// pixel data; repeated calls on the same image return identical results.
///
/// # Example
///
/// ```
/// use image::{GrayImage, Luma};
/// use scancat_core::{ScanClassifier, ScanType};
///
/// // A uniform mid-gray frame: low entropy, no edges, no texture.
/// let image = GrayImage::from_pixel(64, 64, Luma([128]));
/// let result = ScanClassifier::classify(&image);
///
/// assert_eq!(result.scan_type, ScanType::Ultrasound);
/// assert_eq!(result.confidence, 50.0);
/// assert_eq!(result.all_scores.len(), 8);
/// assert_eq!(result.features.resolution, "64x64");
/// ```
pub struct ScanClassifier;

impl ScanClassifier {
    /// Classifies a decoded grayscale image
    ///
    /// Decoding (and conversion to single-channel grayscale) is the caller's
    /// responsibility; the engine never touches files.
    pub fn classify(image: &GrayImage) -> ClassificationResult {
        let features = compute_features(image);
        Self::classify_features(&features)
    }

    /// Classifies an already-extracted feature vector
    ///
    /// Useful for exercising the scoring and ranking stages in isolation.
    pub fn classify_features(features: &FeatureVector) -> ClassificationResult {
        let scores = score_features(features);
        let ranked = rank_scores(scores);
        let best = ranked[0];

        ClassificationResult {
            scan_type: best.scan_type,
            confidence: best.confidence,
            description: best.scan_type.description(),
            all_scores: ranked,
            features: FeatureSummary::from_features(features),
        }
    }
}

/// Outcome of one classification call
///
/// Immutable once constructed. `all_scores` always holds every category,
/// sorted by descending confidence with ties in declaration order, and
/// `scan_type`/`confidence` mirror its first entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ClassificationResult {
    /// Best-matching scan modality
    pub scan_type: ScanType,

    /// Confidence of the best match, percent with one decimal
    pub confidence: f64,

    /// Plain-language description of the best-matching modality
    pub description: &'static str,

    /// Full ranked confidence distribution
    pub all_scores: Vec<ScanScore>,

    /// Display-rounded feature summary for reporting
    pub features: FeatureSummary,
}
