use crate::api::{ClassificationResult, ScanClassifier};
use crate::error::Result;
use crate::types::{ScanType, SCAN_TYPES};
use std::path::PathBuf;

/// Classified image record combining file path and classification result
///
/// Used by the batch tool: one record per successfully decoded file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ScanRecord {
    /// Path to the image file
    pub file_path: PathBuf,

    /// Classification outcome for this file
    pub result: ClassificationResult,
}

impl ScanRecord {
    /// Creates a record by reading, decoding, and classifying an image file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a decodable
    /// raster image.
    pub fn from_file(path: PathBuf) -> Result<Self> {
        let bytes = std::fs::read(&path)?;
        let image = image::load_from_memory(&bytes)?.to_luma8();
        let result = ScanClassifier::classify(&image);

        Ok(Self {
            file_path: path,
            result,
        })
    }
}

/// Counts records per best-matching modality, in declaration order
///
/// Categories with zero records are included, so the batch summary always
/// lists all modalities.
pub fn modality_counts(records: &[ScanRecord]) -> Vec<(ScanType, usize)> {
    SCAN_TYPES
        .iter()
        .map(|&scan_type| {
            let count = records
                .iter()
                .filter(|r| r.result.scan_type == scan_type)
                .count();
            (scan_type, count)
        })
        .collect()
}
