// ==========================================
// Pre-sale Unit Inventory - CLI Entry Point
// ==========================================
// Usage: presale-unit-import <project-id> <file.csv|file.txt>
// Reads the file, validates every row, and submits the batch to the
// remote create-many endpoint; exits non-zero while validation errors
// remain or on a hard failure
// ==========================================

use anyhow::{bail, Context, Result};
use presale_unit_import::importer::{file_parser, reporter};
use presale_unit_import::{
    accumulate, logging, ImportConfig, UnitImporter, UnitImporterImpl,
};
use presale_unit_import::importer::HttpBulkCreateClient;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    tracing::info!("{} v{}", presale_unit_import::APP_NAME, presale_unit_import::VERSION);

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        bail!("usage: {} <project-id> <file.csv|file.txt>", args[0]);
    }
    let project_id = &args[1];
    let file_path = &args[2];

    let config = ImportConfig::from_env();

    // Parse and validate locally first; nothing is submitted while any
    // row still has errors.
    let text = file_parser::read_import_text(file_path, config.max_file_bytes)
        .with_context(|| format!("cannot read import file {}", file_path))?;
    let batch = accumulate(&text);

    if !batch.is_clean() {
        for line in reporter::invalid_row_lines(&batch) {
            eprintln!("{}", line);
        }
        bail!(
            "{} of {} rows failed validation; fix the file and retry",
            batch.invalid_rows.len(),
            batch.total()
        );
    }

    let client = HttpBulkCreateClient::new(&config)?;
    let importer = UnitImporterImpl::new(client, config);

    // Print the cosmetic progress estimate while the request is in flight.
    let mut progress = importer.progress();
    let total = batch.valid_rows.len();
    let watcher = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let current = *progress.borrow();
            if current > 0 {
                eprint!("\r{}/{}...", current, total);
            }
        }
    });

    let report = importer.import_units(project_id, batch.valid_rows).await?;
    watcher.abort();
    eprintln!();

    println!("{}", reporter::summary_line(&report));
    for line in reporter::failure_lines(&report) {
        println!("{}", line);
    }

    if report.summary.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
