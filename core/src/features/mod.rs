//! Feature extraction from decoded grayscale images
//!
//! Converts a grayscale image into a fixed-size [`FeatureVector`] of scalar
//! statistics. Pure computation: no I/O, no failure modes. Degenerate inputs
//! (zero-area images) fall back to defined defaults instead of erroring.

pub mod edges;
pub mod intensity;
pub mod texture;

use crate::types::FeatureVector;
use image::GrayImage;

/// Pixels below this intensity count as dark
pub const DARK_THRESHOLD: u8 = 50;

/// Pixels above this intensity count as bright
pub const BRIGHT_THRESHOLD: u8 = 200;

/// Lower threshold of the Canny edge detector
pub const CANNY_LOW_THRESHOLD: f32 = 50.0;

/// Upper threshold of the Canny edge detector
pub const CANNY_HIGH_THRESHOLD: f32 = 150.0;

/// Lower percentile of the robust contrast range
pub const CONTRAST_LOW_PERCENTILE: f64 = 5.0;

/// Upper percentile of the robust contrast range
pub const CONTRAST_HIGH_PERCENTILE: f64 = 95.0;

/// Extracts the full feature vector from a grayscale image
///
/// All thresholds involved (dark/bright bands, edge detector thresholds,
/// percentile bounds) are fixed constants of the design.
pub fn compute_features(image: &GrayImage) -> FeatureVector {
    let (width, height) = image.dimensions();
    let aspect_ratio = if height > 0 {
        f64::from(width) / f64::from(height)
    } else {
        1.0
    };

    let pixels = image.as_raw().as_slice();
    if pixels.is_empty() {
        // Zero-area input: every statistic is defined as zero.
        return FeatureVector {
            aspect_ratio,
            mean_intensity: 0.0,
            std_intensity: 0.0,
            median_intensity: 0.0,
            entropy: 0.0,
            laplacian_var: 0.0,
            edge_density: 0.0,
            dark_ratio: 0.0,
            bright_ratio: 0.0,
            contrast: 0.0,
            width,
            height,
        };
    }

    let mean_intensity = intensity::mean_intensity(pixels);
    let std_intensity = intensity::std_intensity(pixels, mean_intensity);

    let mut sorted = pixels.to_vec();
    sorted.sort_unstable();
    let median_intensity = intensity::median_intensity(&sorted);
    let contrast = intensity::percentile(&sorted, CONTRAST_HIGH_PERCENTILE)
        - intensity::percentile(&sorted, CONTRAST_LOW_PERCENTILE);

    let hist = intensity::histogram(pixels);
    let entropy = intensity::shannon_entropy(&hist);

    FeatureVector {
        aspect_ratio,
        mean_intensity,
        std_intensity,
        median_intensity,
        entropy,
        laplacian_var: texture::laplacian_variance(image),
        edge_density: edges::edge_density(image),
        dark_ratio: intensity::fraction_below(pixels, DARK_THRESHOLD),
        bright_ratio: intensity::fraction_above(pixels, BRIGHT_THRESHOLD),
        contrast,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_constant_image_features() {
        let image = GrayImage::from_pixel(64, 32, Luma([128]));
        let features = compute_features(&image);

        assert_eq!(features.aspect_ratio, 2.0);
        assert_eq!(features.mean_intensity, 128.0);
        assert_eq!(features.std_intensity, 0.0);
        assert_eq!(features.median_intensity, 128.0);
        assert_eq!(features.entropy, 0.0);
        assert_eq!(features.laplacian_var, 0.0);
        assert_eq!(features.edge_density, 0.0);
        assert_eq!(features.dark_ratio, 0.0);
        assert_eq!(features.bright_ratio, 0.0);
        assert_eq!(features.contrast, 0.0);
        assert_eq!(features.width, 64);
        assert_eq!(features.height, 32);
    }

    #[test]
    fn test_zero_area_image_defaults() {
        let image = GrayImage::new(10, 0);
        let features = compute_features(&image);

        assert_eq!(features.aspect_ratio, 1.0);
        assert_eq!(features.mean_intensity, 0.0);
        assert_eq!(features.entropy, 0.0);
        assert_eq!(features.width, 10);
        assert_eq!(features.height, 0);
    }

    #[test]
    fn test_half_dark_half_bright() {
        let image =
            GrayImage::from_fn(100, 10, |x, _| if x < 50 { Luma([0]) } else { Luma([255]) });
        let features = compute_features(&image);

        assert_eq!(features.dark_ratio, 0.5);
        assert_eq!(features.bright_ratio, 0.5);
        assert_eq!(features.mean_intensity, 127.5);
        assert_eq!(features.entropy, 1.0);
        assert_eq!(features.contrast, 255.0);
    }

    #[test]
    fn test_gradient_has_rich_histogram() {
        let image = GrayImage::from_fn(256, 64, |x, _| Luma([x as u8]));
        let features = compute_features(&image);

        // 256 equally likely intensities: maximal entropy for 8-bit data.
        assert!((features.entropy - 8.0).abs() < 1e-9);
        assert_eq!(features.mean_intensity, 127.5);
        assert_eq!(features.median_intensity, 127.5);
        assert!(features.contrast > 200.0);
    }

    #[test]
    fn test_features_are_deterministic() {
        let image = GrayImage::from_fn(48, 48, |x, y| Luma([((x * 7 + y * 13) % 251) as u8]));
        assert_eq!(compute_features(&image), compute_features(&image));
    }
}
