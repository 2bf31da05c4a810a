use crate::types::{FeatureVector, ScanType};

/// One threshold rule: adds `weight` to a category score when it applies
///
/// Predicates use strict inequalities throughout; boundary values never
/// fire a rule.
pub struct WeightedRule {
    /// Score added when the predicate holds
    pub weight: f64,

    /// Conjunctive threshold predicate over the feature vector
    pub applies: fn(&FeatureVector) -> bool,
}

/// Rule set for a single scan modality
pub struct ScanProfile {
    /// Category these rules score
    pub scan_type: ScanType,

    /// Independent weighted rules; each is evaluated on every call
    pub rules: &'static [WeightedRule],
}

/// The fixed rule table, one profile per category in declaration order
///
/// Every profile is evaluated for every image; an image can score in several
/// categories at once, which is what produces a confidence distribution
/// instead of a single hard label.
pub static SCAN_PROFILES: [ScanProfile; ScanType::COUNT] = [
    // X-Ray: high contrast, large dark background, moderate edges
    ScanProfile {
        scan_type: ScanType::XRay,
        rules: &[
            WeightedRule {
                weight: 3.0,
                applies: |f| f.dark_ratio > 0.3 && f.contrast > 150.0,
            },
            WeightedRule {
                weight: 2.0,
                applies: |f| f.mean_intensity < 100.0 && f.std_intensity > 50.0,
            },
            WeightedRule {
                weight: 1.5,
                applies: |f| f.edge_density > 0.05 && f.edge_density < 0.25,
            },
        ],
    },
    // CT: roughly square cross-section, moderate intensity, high detail
    ScanProfile {
        scan_type: ScanType::CtScan,
        rules: &[
            WeightedRule {
                weight: 2.0,
                applies: |f| f.aspect_ratio > 0.85 && f.aspect_ratio < 1.15,
            },
            WeightedRule {
                weight: 2.0,
                applies: |f| {
                    f.mean_intensity > 60.0 && f.mean_intensity < 160.0 && f.std_intensity > 40.0
                },
            },
            WeightedRule {
                weight: 1.5,
                applies: |f| f.entropy > 6.0,
            },
            WeightedRule {
                weight: 1.0,
                applies: |f| f.edge_density > 0.1,
            },
        ],
    },
    // MRI: high-contrast soft tissue, variable intensity, high entropy
    ScanProfile {
        scan_type: ScanType::Mri,
        rules: &[
            WeightedRule {
                weight: 2.5,
                applies: |f| f.entropy > 5.5 && f.contrast > 120.0,
            },
            WeightedRule {
                weight: 2.0,
                applies: |f| {
                    f.std_intensity > 45.0 && f.mean_intensity > 50.0 && f.mean_intensity < 180.0
                },
            },
            WeightedRule {
                weight: 1.5,
                applies: |f| f.laplacian_var > 100.0,
            },
        ],
    },
    // Ultrasound: speckle noise, lower contrast, grainy texture
    ScanProfile {
        scan_type: ScanType::Ultrasound,
        rules: &[
            WeightedRule {
                weight: 2.5,
                applies: |f| f.entropy < 6.0 && f.std_intensity < 50.0,
            },
            WeightedRule {
                weight: 2.0,
                applies: |f| f.laplacian_var < 200.0 && f.edge_density < 0.1,
            },
            WeightedRule {
                weight: 1.0,
                applies: |f| f.mean_intensity > 40.0 && f.mean_intensity < 140.0,
            },
            WeightedRule {
                weight: 1.0,
                applies: |f| f.dark_ratio > 0.2 && f.dark_ratio < 0.6,
            },
        ],
    },
    // PET: bright hotspots on a dark background
    ScanProfile {
        scan_type: ScanType::PetScan,
        rules: &[
            WeightedRule {
                weight: 3.0,
                applies: |f| f.bright_ratio > 0.05 && f.dark_ratio > 0.4,
            },
            WeightedRule {
                weight: 2.0,
                applies: |f| f.mean_intensity < 80.0 && f.std_intensity > 60.0,
            },
        ],
    },
    // Mammogram: characteristic intensity range and field of view
    ScanProfile {
        scan_type: ScanType::Mammogram,
        rules: &[
            WeightedRule {
                weight: 1.5,
                applies: |f| f.mean_intensity > 30.0 && f.mean_intensity < 120.0,
            },
            WeightedRule {
                weight: 2.0,
                applies: |f| f.dark_ratio > 0.4 && f.contrast > 100.0 && f.contrast < 200.0,
            },
            WeightedRule {
                weight: 1.0,
                applies: |f| f.aspect_ratio > 0.6 && f.aspect_ratio < 1.0,
            },
        ],
    },
    // DEXA: lower-resolution feel, moderate contrast
    ScanProfile {
        scan_type: ScanType::DexaScan,
        rules: &[
            WeightedRule {
                weight: 2.0,
                applies: |f| f.contrast < 150.0 && f.entropy < 5.5,
            },
            WeightedRule {
                weight: 1.5,
                applies: |f| f.edge_density < 0.08,
            },
        ],
    },
    // Fluoroscopy: X-ray-like but lower quality and contrast
    ScanProfile {
        scan_type: ScanType::Fluoroscopy,
        rules: &[
            WeightedRule {
                weight: 1.5,
                applies: |f| f.dark_ratio > 0.2 && f.contrast > 80.0 && f.contrast < 180.0,
            },
            WeightedRule {
                weight: 1.5,
                applies: |f| {
                    f.mean_intensity < 120.0 && f.std_intensity > 30.0 && f.std_intensity < 60.0
                },
            },
        ],
    },
];
