pub mod api;
pub mod cli;
pub mod error;
pub mod features;
pub mod record;
pub mod scoring;
pub mod types;

pub use api::{ClassificationResult, ScanClassifier};
pub use cli::report::TextReport;
pub use error::{Result, ScancatError};
pub use record::ScanRecord;
pub use types::*;
