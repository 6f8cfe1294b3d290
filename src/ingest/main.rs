//! GeoNames snapshot builder.
//!
//! Reads the GeoNames main export plus the admin-code sidecar files
//! and produces the read-only SQLite dataset the library searches.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rusqlite::Connection;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use meridian::dataset::{self, AdminCode, AdminTable, GeonameRow};

#[derive(Parser, Debug)]
#[command(name = "ingest")]
#[command(about = "Build the gazetteer SQLite snapshot from GeoNames exports")]
struct Args {
    /// GeoNames main export (tab-separated, e.g. cities500.txt)
    #[arg(short, long, default_value = "cities500.txt")]
    cities: PathBuf,

    /// admin1CodesASCII.txt sidecar file
    #[arg(long, default_value = "admin1CodesASCII.txt")]
    admin1: PathBuf,

    /// admin2Codes.txt sidecar file
    #[arg(long, default_value = "admin2Codes.txt")]
    admin2: PathBuf,

    /// Output database path (recreated from scratch)
    #[arg(short, long, default_value = "cities500.sqlite")]
    output: PathBuf,

    /// Rows per insert transaction
    #[arg(long, default_value = "10000")]
    batch_size: usize,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    if args.output.exists() {
        fs::remove_file(&args.output)
            .with_context(|| format!("Failed to remove existing {}", args.output.display()))?;
    }

    let mut conn = Connection::open(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    dataset::create_schema(&conn).context("Failed to create schema")?;
    info!("Created {} with tables", args.output.display());

    load_admin_codes(&mut conn, &args.admin1, AdminTable::Admin1)?;
    load_admin_codes(&mut conn, &args.admin2, AdminTable::Admin2)?;
    load_geonames(&mut conn, &args.cities, args.batch_size)?;

    dataset::create_indexes(&conn).context("Failed to create indexes")?;
    info!("Indexes created; snapshot ready at {}", args.output.display());

    Ok(())
}

fn tsv_reader(path: &Path) -> csv::Result<csv::Reader<fs::File>> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_path(path)
}

/// The sidecar files are optional: the original dataset works without
/// them, places just lose their resolved admin names.
fn load_admin_codes(conn: &mut Connection, path: &Path, table: AdminTable) -> Result<()> {
    if !path.exists() {
        warn!(
            "{} not found; {} left empty",
            path.display(),
            table.table_name()
        );
        return Ok(());
    }

    let mut reader =
        tsv_reader(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("Failed to read {}", path.display()))?;
        if let Some(code) = AdminCode::parse(&record) {
            rows.push(code);
        }
    }

    dataset::insert_admin_codes(conn, table, &rows)
        .with_context(|| format!("Failed to load {}", table.table_name()))?;
    info!("Imported {} rows into {}", rows.len(), table.table_name());
    Ok(())
}

fn load_geonames(conn: &mut Connection, path: &Path, batch_size: usize) -> Result<()> {
    let mut reader =
        tsv_reader(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let progress = ProgressBar::new_spinner();
    progress.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);

    let mut batch: Vec<GeonameRow> = Vec::with_capacity(batch_size);
    let mut imported: u64 = 0;
    let mut skipped: u64 = 0;

    for record in reader.records() {
        let record = record.with_context(|| format!("Failed to read {}", path.display()))?;
        match GeonameRow::parse(&record) {
            Some(row) => batch.push(row),
            None => {
                skipped += 1;
                continue;
            }
        }

        if batch.len() >= batch_size {
            dataset::insert_geonames(conn, &batch).context("Failed to insert batch")?;
            imported += batch.len() as u64;
            batch.clear();
            progress.set_message(format!("{imported} places"));
            progress.tick();
        }
    }

    if !batch.is_empty() {
        dataset::insert_geonames(conn, &batch).context("Failed to insert batch")?;
        imported += batch.len() as u64;
    }
    progress.finish_and_clear();

    if skipped > 0 {
        warn!("Skipped {} malformed rows", skipped);
    }
    info!("Imported {} places from {}", imported, path.display());
    Ok(())
}
