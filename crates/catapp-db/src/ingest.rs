use std::path::Path;

use catapp_core::errors::{CatError, ErrorInfo};
use catapp_core::EnergyRecord;
use rusqlite::Connection;
use tracing::info;

use crate::schema::{init_schema, insert_record};

fn ingest_error(code: &str, path: &Path, err: impl ToString) -> CatError {
    CatError::Store(
        ErrorInfo::new(code, "failed to ingest records")
            .with_context("path", path.display().to_string())
            .with_hint(err.to_string()),
    )
}

/// Reads energy records from a CSV export whose headers match the store columns.
pub fn read_csv(path: &Path) -> Result<Vec<EnergyRecord>, CatError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|err| ingest_error("catapp_db.csv_open", path, err))?;
    reader
        .deserialize()
        .collect::<Result<Vec<EnergyRecord>, _>>()
        .map_err(|err| ingest_error("catapp_db.csv_record", path, err))
}

/// Loads every record of `path` into the store in a single transaction.
pub fn ingest_csv(conn: &mut Connection, path: &Path) -> Result<usize, CatError> {
    init_schema(conn)?;
    let records = read_csv(path)?;
    let tx = conn
        .transaction()
        .map_err(|err| ingest_error("catapp_db.transaction", path, err))?;
    for record in &records {
        insert_record(&tx, record)?;
    }
    tx.commit()
        .map_err(|err| ingest_error("catapp_db.commit", path, err))?;
    info!("ingested {} records from {}", records.len(), path.display());
    Ok(records.len())
}
