//! Intensity-distribution statistics over raw grayscale pixels

/// Arithmetic mean of pixel intensities
pub fn mean_intensity(pixels: &[u8]) -> f64 {
    if pixels.is_empty() {
        return 0.0;
    }
    let sum: u64 = pixels.iter().map(|&p| u64::from(p)).sum();
    sum as f64 / pixels.len() as f64
}

/// Population standard deviation around a precomputed mean
pub fn std_intensity(pixels: &[u8], mean: f64) -> f64 {
    if pixels.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = pixels
        .iter()
        .map(|&p| {
            let d = f64::from(p) - mean;
            d * d
        })
        .sum();
    (sum_sq / pixels.len() as f64).sqrt()
}

/// Median of a sorted pixel slice
///
/// The median of an even-length sample is the midpoint of the two central
/// values.
pub fn median_intensity(sorted: &[u8]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        f64::from(sorted[n / 2])
    } else {
        (f64::from(sorted[n / 2 - 1]) + f64::from(sorted[n / 2])) / 2.0
    }
}

/// Percentile of a sorted pixel slice, linear interpolation between ranks
pub fn percentile(sorted: &[u8], pct: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    let rank = (n - 1) as f64 * pct / 100.0;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let lo_val = f64::from(sorted[lo]);
    let hi_val = f64::from(sorted[hi]);
    lo_val + (hi_val - lo_val) * (rank - lo as f64)
}

/// 256-bin intensity histogram over the closed range [0, 256)
pub fn histogram(pixels: &[u8]) -> [u64; 256] {
    let mut hist = [0u64; 256];
    for &p in pixels {
        hist[usize::from(p)] += 1;
    }
    hist
}

/// Shannon entropy (base 2) of a histogram normalized to probabilities
///
/// Bins with zero probability contribute nothing to the sum, so a constant
/// image yields exactly 0.0 rather than NaN.
pub fn shannon_entropy(hist: &[u64; 256]) -> f64 {
    let total: u64 = hist.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let mut entropy = 0.0;
    for &count in hist.iter() {
        if count > 0 {
            let p = count as f64 / total;
            entropy -= p * p.log2();
        }
    }
    entropy
}

/// Fraction of pixels strictly below `threshold`
pub fn fraction_below(pixels: &[u8], threshold: u8) -> f64 {
    if pixels.is_empty() {
        return 0.0;
    }
    let count = pixels.iter().filter(|&&p| p < threshold).count();
    count as f64 / pixels.len() as f64
}

/// Fraction of pixels strictly above `threshold`
pub fn fraction_above(pixels: &[u8], threshold: u8) -> f64 {
    if pixels.is_empty() {
        return 0.0;
    }
    let count = pixels.iter().filter(|&&p| p > threshold).count();
    count as f64 / pixels.len() as f64
}
