use std::fmt;

/// Scan modality categories recognized by the classifier
///
/// Declaration order is a contract: it is the order scores are reported in
/// and the order used to break confidence ties during ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum ScanType {
    #[cfg_attr(feature = "json", serde(rename = "X-Ray"))]
    XRay,
    #[cfg_attr(feature = "json", serde(rename = "CT Scan"))]
    CtScan,
    #[cfg_attr(feature = "json", serde(rename = "MRI"))]
    Mri,
    #[cfg_attr(feature = "json", serde(rename = "Ultrasound"))]
    Ultrasound,
    #[cfg_attr(feature = "json", serde(rename = "PET Scan"))]
    PetScan,
    #[cfg_attr(feature = "json", serde(rename = "Mammogram"))]
    Mammogram,
    #[cfg_attr(feature = "json", serde(rename = "DEXA Scan"))]
    DexaScan,
    #[cfg_attr(feature = "json", serde(rename = "Fluoroscopy"))]
    Fluoroscopy,
}

/// All scan types in declaration (tie-break) order
pub const SCAN_TYPES: [ScanType; ScanType::COUNT] = [
    ScanType::XRay,
    ScanType::CtScan,
    ScanType::Mri,
    ScanType::Ultrasound,
    ScanType::PetScan,
    ScanType::Mammogram,
    ScanType::DexaScan,
    ScanType::Fluoroscopy,
];

impl ScanType {
    /// Number of scan modality categories
    pub const COUNT: usize = 8;

    /// Returns display name for reports and serialized output
    pub fn display_name(&self) -> &'static str {
        match self {
            ScanType::XRay => "X-Ray",
            ScanType::CtScan => "CT Scan",
            ScanType::Mri => "MRI",
            ScanType::Ultrasound => "Ultrasound",
            ScanType::PetScan => "PET Scan",
            ScanType::Mammogram => "Mammogram",
            ScanType::DexaScan => "DEXA Scan",
            ScanType::Fluoroscopy => "Fluoroscopy",
        }
    }

    /// Returns the plain-language description of this modality
    pub fn description(&self) -> &'static str {
        match self {
            ScanType::XRay => {
                "A radiographic image using X-ray radiation to view internal body structures, \
                 commonly used for bones, chest, and dental imaging."
            }
            ScanType::CtScan => {
                "Computed Tomography scan providing cross-sectional images of the body using \
                 X-rays processed by computer."
            }
            ScanType::Mri => {
                "Magnetic Resonance Imaging using strong magnetic fields and radio waves to \
                 generate detailed images of organs and tissues."
            }
            ScanType::Ultrasound => {
                "Sonographic imaging using high-frequency sound waves to produce images of \
                 internal body structures."
            }
            ScanType::PetScan => {
                "Positron Emission Tomography scan showing metabolic activity, often used in \
                 oncology and neurology."
            }
            ScanType::Mammogram => {
                "Specialized low-dose X-ray imaging of breast tissue for screening and diagnosis."
            }
            ScanType::DexaScan => {
                "Dual-Energy X-ray Absorptiometry scan measuring bone mineral density."
            }
            ScanType::Fluoroscopy => {
                "A real-time X-ray imaging technique used to observe moving body structures."
            }
        }
    }

    /// Returns the position of this type in declaration order
    pub(crate) fn index(&self) -> usize {
        match self {
            ScanType::XRay => 0,
            ScanType::CtScan => 1,
            ScanType::Mri => 2,
            ScanType::Ultrasound => 3,
            ScanType::PetScan => 4,
            ScanType::Mammogram => 5,
            ScanType::DexaScan => 6,
            ScanType::Fluoroscopy => 7,
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
