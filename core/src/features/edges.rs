//! Edge density from a dual-threshold gradient edge detector

use image::GrayImage;
use imageproc::edges::canny;

use super::{CANNY_HIGH_THRESHOLD, CANNY_LOW_THRESHOLD};

/// Fraction of pixels flagged as edges by a Canny detector
///
/// Thresholds are the fixed 50/150 pair of the engine design. Images too
/// small for the detector's 3x3 neighbourhood yield 0.0.
pub fn edge_density(image: &GrayImage) -> f64 {
    let (width, height) = image.dimensions();
    if width < 3 || height < 3 {
        return 0.0;
    }
    let edges = canny(image, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD);
    let flagged = edges.as_raw().iter().filter(|&&p| p > 0).count();
    flagged as f64 / (f64::from(width) * f64::from(height))
}
