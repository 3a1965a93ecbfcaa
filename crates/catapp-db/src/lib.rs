//! SQLite reaction-energy store for CatApp.

pub mod ingest;
pub mod schema;
pub mod store;

pub use ingest::{ingest_csv, read_csv};
pub use schema::{init_schema, insert_record, COLUMNS, SCHEMA_VERSION, TABLE};
pub use store::SqliteStore;
