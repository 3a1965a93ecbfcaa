use std::fs;

use catapp_core::{CatError, EnergyType, RecordStore};
use catapp_db::{ingest_csv, SqliteStore};
use rusqlite::Connection;
use tempfile::{tempdir, NamedTempFile};

const EXPORT: &str = "\
Reaction_Energy,Activation_Energy,Surface,Termination,AB,A,B,Reference,Url
-0.51,1.30,Ru,1,N2,N*,N*,\"Honkala et al., Science 307, 555 (2005)\",https://doi.org/10.1126/science.1106435
0.42,,Pt,111,N2,N*,N*,\"Norskov et al., J. Catal. 209, 275 (2002)\",https://doi.org/10.1006/jcat.2002.3615
";

#[test]
fn ingest_loads_rows_into_a_fresh_store() {
    let dir = tempdir().expect("dir");
    let csv_path = dir.path().join("catapp.csv");
    fs::write(&csv_path, EXPORT).expect("write csv");
    let db = NamedTempFile::new().expect("db");
    let mut conn = Connection::open(db.path()).expect("open");
    let count = ingest_csv(&mut conn, &csv_path).expect("ingest");
    assert_eq!(count, 2);
    drop(conn);

    let store = SqliteStore::open(db.path()).expect("reopen");
    let rows = store
        .same_reaction_rows(
            &"N2|N*|N*".parse().unwrap(),
            EnergyType::ReactionEnergy,
            EnergyType::ActivationEnergy,
        )
        .expect("rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].surface, "Ru");
    assert_eq!(rows[0].termination, "1");
    assert_eq!(rows[0].reference, "Honkala et al., Science 307, 555 (2005)");
}

#[test]
fn malformed_csv_is_rejected_without_partial_rows() {
    let dir = tempdir().expect("dir");
    let csv_path = dir.path().join("broken.csv");
    fs::write(&csv_path, "Reaction_Energy,Surface\n0.1,Pt,extra\n").expect("write csv");
    let mut conn = Connection::open_in_memory().expect("open");
    let err = ingest_csv(&mut conn, &csv_path).unwrap_err();
    assert!(matches!(err, CatError::Store(_)));
    let store = SqliteStore::from_connection(conn);
    assert!(store.unique_reactions().expect("reactions").is_empty());
}

#[test]
fn missing_file_reports_path() {
    let mut conn = Connection::open_in_memory().expect("open");
    let err = ingest_csv(&mut conn, std::path::Path::new("/nonexistent/catapp.csv")).unwrap_err();
    assert_eq!(err.info().code, "catapp_db.csv_open");
    assert_eq!(err.info().context["path"], "/nonexistent/catapp.csv");
}

#[test]
fn open_creates_a_missing_store_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("fresh.db");
    let store = SqliteStore::open(&path).expect("open");
    catapp_db::init_schema(store.connection()).expect("schema");
    assert!(path.exists());
    assert!(store.unique_reactions().expect("reactions").is_empty());
}

#[test]
fn read_only_open_never_creates_the_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.db");
    let err = SqliteStore::open_read_only(&path).unwrap_err();
    assert!(matches!(err, CatError::Store(_)));
    assert_eq!(err.info().code, "catapp_db.open");
    assert!(!path.exists());
}
