//! Texture statistics from second-derivative filter responses

use image::GrayImage;
use imageproc::filter::laplacian_filter;

/// Variance of the Laplacian response over the whole image
///
/// Sharper, more textured images produce larger variances; a constant image
/// produces 0.0.
pub fn laplacian_variance(image: &GrayImage) -> f64 {
    let response = laplacian_filter(image);
    let values = response.as_raw();
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean: f64 = values.iter().map(|&v| f64::from(v)).sum::<f64>() / n;
    values
        .iter()
        .map(|&v| {
            let d = f64::from(v) - mean;
            d * d
        })
        .sum::<f64>()
        / n
}
