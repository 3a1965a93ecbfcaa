use catapp_core::errors::{CatError, ErrorInfo};
use catapp_core::EnergyRecord;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

pub const SCHEMA_VERSION: i64 = 1;

/// Name of the full-text table holding every energy record.
pub const TABLE: &str = "CatApp";

/// Record columns in their stored order.
pub const COLUMNS: [&str; 9] = [
    "Reaction_Energy",
    "Activation_Energy",
    "Surface",
    "Termination",
    "AB",
    "A",
    "B",
    "Reference",
    "Url",
];

pub fn init_schema(conn: &Connection) -> Result<(), CatError> {
    let created: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE name = ?1",
            [TABLE],
            |row| row.get(0),
        )
        .optional()
        .map_err(|err| CatError::store("catapp_db.schema", "failed to inspect schema", err))?;
    conn.execute_batch(&format!(
        "BEGIN;
        CREATE TABLE IF NOT EXISTS meta(version INTEGER NOT NULL);
        CREATE VIRTUAL TABLE IF NOT EXISTS {TABLE} USING fts5({columns});
        COMMIT;",
        columns = COLUMNS.join(", ")
    ))
    .map_err(|err| CatError::store("catapp_db.schema", "failed to create schema", err))?;
    if created.is_none() {
        info!("created {TABLE} schema v{SCHEMA_VERSION}");
    }
    set_version(conn, SCHEMA_VERSION)
}

fn set_version(conn: &Connection, version: i64) -> Result<(), CatError> {
    let existing: Option<i64> = conn
        .query_row("SELECT version FROM meta LIMIT 1", [], |row| row.get(0))
        .optional()
        .map_err(|err| CatError::store("catapp_db.schema", "failed to read schema version", err))?;
    match existing {
        Some(current) if current == version => Ok(()),
        Some(current) => Err(CatError::Store(
            ErrorInfo::new(
                "catapp_db.schema_version",
                format!("store schema {current} incompatible with expected {version}"),
            )
            .with_hint("rebuild the store with `catapp ingest`"),
        )),
        None => {
            conn.execute("INSERT INTO meta(version) VALUES (?1)", params![version])
                .map_err(|err| {
                    CatError::store("catapp_db.schema", "failed to record schema version", err)
                })?;
            Ok(())
        }
    }
}

/// Inserts one record. Missing energies are stored as the empty string.
pub fn insert_record(conn: &Connection, record: &EnergyRecord) -> Result<(), CatError> {
    conn.execute(
        &format!(
            "INSERT INTO {TABLE}({columns}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            columns = COLUMNS.join(", ")
        ),
        params![
            record.reaction_energy.as_deref().unwrap_or_default(),
            record.activation_energy.as_deref().unwrap_or_default(),
            record.surface,
            record.termination,
            record.ab,
            record.a,
            record.b,
            record.reference,
            record.url,
        ],
    )
    .map_err(|err| {
        CatError::Store(
            ErrorInfo::new("catapp_db.insert_record", "failed to insert record")
                .with_context("reaction", record.reaction().to_string())
                .with_context("surface", record.surface.clone())
                .with_hint(err.to_string()),
        )
    })?;
    Ok(())
}
