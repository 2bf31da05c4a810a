/// Scalar image statistics used as classifier input
///
/// Built fresh for every classification call by
/// [`compute_features`](crate::features::compute_features) and treated as
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct FeatureVector {
    /// Width divided by height (1.0 when height is zero)
    pub aspect_ratio: f64,

    /// Arithmetic mean of pixel intensities
    pub mean_intensity: f64,

    /// Population standard deviation of pixel intensities
    pub std_intensity: f64,

    /// Median pixel intensity
    pub median_intensity: f64,

    /// Shannon entropy (base 2) of the 256-bin intensity histogram
    pub entropy: f64,

    /// Variance of the Laplacian response, a sharpness/texture proxy
    pub laplacian_var: f64,

    /// Fraction of pixels flagged by the edge detector, in [0, 1]
    pub edge_density: f64,

    /// Fraction of pixels with intensity below 50
    pub dark_ratio: f64,

    /// Fraction of pixels with intensity above 200
    pub bright_ratio: f64,

    /// 95th minus 5th percentile intensity
    pub contrast: f64,

    /// Original width in pixels
    pub width: u32,

    /// Original height in pixels
    pub height: u32,
}

/// Display-rounded subset of a [`FeatureVector`]
///
/// This is what the reporting side shows: a handful of the statistics,
/// rounded for display, plus a `WxH` resolution string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct FeatureSummary {
    /// Mean intensity, one decimal
    pub mean_intensity: f64,

    /// Contrast (robust range), one decimal
    pub contrast: f64,

    /// Histogram entropy, two decimals
    pub entropy: f64,

    /// Edge density, four decimals
    pub edge_density: f64,

    /// Resolution as "{width}x{height}"
    pub resolution: String,
}

impl FeatureSummary {
    /// Builds the display summary from a full feature vector
    pub fn from_features(features: &FeatureVector) -> Self {
        Self {
            mean_intensity: round_to(features.mean_intensity, 1),
            contrast: round_to(features.contrast, 1),
            entropy: round_to(features.entropy, 2),
            edge_density: round_to(features.edge_density, 4),
            resolution: format!("{}x{}", features.width, features.height),
        }
    }
}

/// Rounds to a fixed number of decimal places
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
