use clap::Parser;
use log::{error, info};
use scancat_core::cli::{Cli, OutputFormat};
use scancat_core::{ScanRecord, TextReport};
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if !cli.file.is_file() {
        eprintln!("Error: {} is not a file", cli.file.display());
        process::exit(1);
    }

    info!("Classifying {}", cli.file.display());

    let record = match ScanRecord::from_file(cli.file.clone()) {
        Ok(record) => record,
        Err(e) => {
            error!("Failed to classify {}: {}", cli.file.display(), e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    info!(
        "Best match: {} ({:.1}%)",
        record.result.scan_type, record.result.confidence
    );

    output_result(&record, cli.format);
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

fn output_result(record: &ScanRecord, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("{}", TextReport::new(&record.result));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(&record.result) {
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
