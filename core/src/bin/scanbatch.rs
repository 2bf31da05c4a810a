use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use scancat_core::record::modality_counts;
use scancat_core::ScanRecord;
use std::fmt;
use std::path::PathBuf;
use std::process;

/// CLI tool for classifying every scan image in a directory
#[derive(Parser, Debug)]
#[command(name = "scanbatch")]
#[command(about = "Classify scan modality for a directory of images")]
#[command(version)]
struct Cli {
    /// Directory containing image files
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
    /// CSV lines: path,scan_type,confidence
    Csv,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if !cli.directory.is_dir() {
        eprintln!("Error: {} is not a directory", cli.directory.display());
        process::exit(1);
    }

    info!("Processing directory: {}", cli.directory.display());

    let image_files = match collect_image_files(&cli.directory) {
        Ok(files) => files,
        Err(e) => {
            error!("Failed to read directory: {}", e);
            eprintln!("Error: Failed to read directory: {}", e);
            process::exit(1);
        }
    };

    if image_files.is_empty() {
        eprintln!("Error: No image files found in directory");
        process::exit(1);
    }

    info!("Found {} image files", image_files.len());

    let mut records = Vec::new();
    for file_path in image_files {
        match ScanRecord::from_file(file_path.clone()) {
            Ok(record) => {
                info!(
                    "{}: {} ({:.1}%)",
                    file_path.display(),
                    record.result.scan_type,
                    record.result.confidence
                );
                records.push(record);
            }
            Err(e) => {
                warn!("Skipping {}: {}", file_path.display(), e);
            }
        }
    }

    if records.is_empty() {
        eprintln!("Error: No image files could be classified");
        process::exit(1);
    }

    info!("Classified {} files", records.len());

    output_records(&records, cli.format);
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

/// File extensions accepted without content sniffing
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

fn collect_image_files(directory: &PathBuf) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(ext) = path.extension() {
                if IMAGE_EXTENSIONS
                    .iter()
                    .any(|e| ext.eq_ignore_ascii_case(e))
                {
                    files.push(path);
                }
            } else if is_image_file(&path) {
                info!("Found extensionless image file: {}", path.display());
                files.push(path);
            }
        }
    }

    // Directory iteration order is unspecified; report in path order.
    files.sort();
    Ok(files)
}

/// Checks whether a file starts with a known raster-image signature
fn is_image_file(path: &PathBuf) -> bool {
    use std::fs::File;
    use std::io::Read;

    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let mut buffer = [0u8; 32];
    match file.read(&mut buffer) {
        Ok(n) if n > 0 => image::guess_format(&buffer[..n]).is_ok(),
        _ => false,
    }
}

fn output_records(records: &[ScanRecord], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            let report = BatchReport::new(records);
            println!("{}", report);
        }
        OutputFormat::Csv => {
            output_csv(records);
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match output_json(records) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}

fn output_csv(records: &[ScanRecord]) {
    for record in records {
        println!(
            "{},{},{:.1}",
            record.file_path.display(),
            record.result.scan_type,
            record.result.confidence
        );
    }
}

#[cfg(feature = "json")]
fn output_json(records: &[ScanRecord]) -> Result<String, serde_json::Error> {
    use scancat_core::ScanType;
    use serde::Serialize;

    #[derive(Serialize)]
    struct BatchJson<'a> {
        records: &'a [ScanRecord],
        counts: Vec<CountJson>,
    }

    #[derive(Serialize)]
    struct CountJson {
        scan_type: ScanType,
        count: usize,
    }

    let counts = modality_counts(records)
        .into_iter()
        .map(|(scan_type, count)| CountJson { scan_type, count })
        .collect();

    let output = BatchJson { records, counts };
    serde_json::to_string_pretty(&output)
}

/// Text report for a batch classification run
struct BatchReport<'a> {
    records: &'a [ScanRecord],
}

impl<'a> BatchReport<'a> {
    fn new(records: &'a [ScanRecord]) -> Self {
        Self { records }
    }
}

impl<'a> fmt::Display for BatchReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scan Classification Summary")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;

        for record in self.records {
            writeln!(
                f,
                "{}: {} ({:.1}%)",
                record.file_path.display(),
                record.result.scan_type,
                record.result.confidence
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Modality Counts")?;
        writeln!(f, "---------------")?;
        for (scan_type, count) in modality_counts(self.records) {
            writeln!(f, "{:<12} {}", scan_type.display_name(), count)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_test_png(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        let image = GrayImage::from_pixel(16, 16, Luma([100]));
        image.save_with_format(&path, image::ImageFormat::Png).unwrap();
        path
    }

    #[test]
    fn test_is_image_file_with_png_signature() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_png(&temp_dir, "headerless");
        assert!(is_image_file(&path));
    }

    #[test]
    fn test_is_image_file_rejects_other_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes");
        File::create(&path)
            .unwrap()
            .write_all(b"This is not an image file")
            .unwrap();
        assert!(!is_image_file(&path));
    }

    #[test]
    fn test_is_image_file_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty");
        File::create(&path).unwrap();
        assert!(!is_image_file(&path));
    }

    #[test]
    fn test_collect_image_files_by_extension() {
        let temp_dir = TempDir::new().unwrap();

        write_test_png(&temp_dir, "scan1.png");
        write_test_png(&temp_dir, "scan2.PNG");
        File::create(temp_dir.path().join("scan3.txt")).unwrap();
        File::create(temp_dir.path().join("scan4.dat")).unwrap();

        let files = collect_image_files(&temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_collect_image_files_sniffs_extensionless() {
        let temp_dir = TempDir::new().unwrap();

        write_test_png(&temp_dir, "headerless_scan");
        File::create(temp_dir.path().join("headerless_other"))
            .unwrap()
            .write_all(b"not pixels")
            .unwrap();

        let files = collect_image_files(&temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("headerless_scan"));
    }

    #[test]
    fn test_collect_image_files_sorted() {
        let temp_dir = TempDir::new().unwrap();

        write_test_png(&temp_dir, "b.png");
        write_test_png(&temp_dir, "a.png");
        write_test_png(&temp_dir, "c.png");

        let files = collect_image_files(&temp_dir.path().to_path_buf()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_batch_report_lists_files_and_counts() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_test_png(&temp_dir, "scan.png");
        let record = ScanRecord::from_file(path).unwrap();

        let report = BatchReport::new(std::slice::from_ref(&record));
        let output = format!("{}", report);

        assert!(output.contains("Scan Classification Summary"));
        assert!(output.contains("scan.png"));
        assert!(output.contains("Modality Counts"));
        assert!(output.contains(record.result.scan_type.display_name()));
    }
}
