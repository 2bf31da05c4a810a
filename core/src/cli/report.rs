use crate::api::ClassificationResult;
use std::fmt;

/// Text report formatter for a classification result
///
/// Renders the best match, its description, the full ranked confidence
/// distribution, and the rounded feature summary.
pub struct TextReport<'a> {
    result: &'a ClassificationResult,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(result: &'a ClassificationResult) -> Self {
        Self { result }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scan Classification")?;
        writeln!(f, "===================")?;
        writeln!(f)?;
        writeln!(f, "Scan Type:      {}", self.result.scan_type)?;
        writeln!(f, "Confidence:     {:.1}%", self.result.confidence)?;
        writeln!(f, "Description:    {}", self.result.description)?;
        writeln!(f)?;

        writeln!(f, "Ranked Modalities")?;
        writeln!(f, "-----------------")?;
        for score in &self.result.all_scores {
            writeln!(
                f,
                "{:<12} {:>5.1}%",
                score.scan_type.display_name(),
                score.confidence
            )?;
        }
        writeln!(f)?;

        let features = &self.result.features;
        writeln!(f, "Image Features")?;
        writeln!(f, "--------------")?;
        writeln!(f, "Mean Intensity: {:.1}", features.mean_intensity)?;
        writeln!(f, "Contrast:       {:.1}", features.contrast)?;
        writeln!(f, "Entropy:        {:.2}", features.entropy)?;
        writeln!(f, "Edge Density:   {:.4}", features.edge_density)?;
        writeln!(f, "Resolution:     {}", features.resolution)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ScanClassifier;
    use crate::types::{FeatureVector, ScanType};

    fn result_fixture() -> ClassificationResult {
        let features = FeatureVector {
            aspect_ratio: 1.33,
            mean_intensity: 85.0,
            std_intensity: 62.0,
            median_intensity: 70.0,
            entropy: 6.8,
            laplacian_var: 250.0,
            edge_density: 0.12,
            dark_ratio: 0.45,
            bright_ratio: 0.01,
            contrast: 190.0,
            width: 800,
            height: 600,
        };
        ScanClassifier::classify_features(&features)
    }

    #[test]
    fn test_text_report_format() {
        let result = result_fixture();
        let output = format!("{}", TextReport::new(&result));

        assert!(output.contains("Scan Classification"));
        assert!(output.contains(&format!("Scan Type:      {}", result.scan_type)));
        assert!(output.contains(&format!("Confidence:     {:.1}%", result.confidence)));
        assert!(output.contains("Ranked Modalities"));
        assert!(output.contains("Image Features"));
        assert!(output.contains("Mean Intensity: 85.0"));
        assert!(output.contains("Contrast:       190.0"));
        assert!(output.contains("Resolution:     800x600"));
    }

    #[test]
    fn test_report_lists_every_modality() {
        let result = result_fixture();
        let output = format!("{}", TextReport::new(&result));

        for scan_type in &crate::types::SCAN_TYPES {
            assert!(
                output.contains(scan_type.display_name()),
                "missing {}",
                scan_type
            );
        }
    }

    #[test]
    fn test_report_shows_description_of_best_match() {
        let result = result_fixture();
        assert_eq!(result.scan_type, ScanType::XRay);
        let output = format!("{}", TextReport::new(&result));
        assert!(output.contains(ScanType::XRay.description()));
    }
}
