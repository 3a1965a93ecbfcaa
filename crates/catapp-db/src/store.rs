use std::path::Path;

use catapp_core::errors::{CatError, ErrorInfo};
use catapp_core::{
    EnergyRecord, EnergyType, JoinedReactionRow, ReactionDescriptor, RecordStore,
    SingleReactionRow, CANONICAL_TERMINATION, LEGACY_TERMINATION,
};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OpenFlags, Params, Row};
use tracing::debug;

use crate::schema::{COLUMNS, TABLE};

/// [`RecordStore`] backed by a SQLite database holding the `CatApp` table.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens a store file for reads and writes, creating it when missing.
    pub fn open(path: &Path) -> Result<Self, CatError> {
        debug!("opening store at {}", path.display());
        let conn = Connection::open(path).map_err(|err| {
            CatError::Store(
                ErrorInfo::new("catapp_db.open", "failed to open sqlite store")
                    .with_context("path", path.display().to_string())
                    .with_hint(err.to_string()),
            )
        })?;
        Ok(Self { conn })
    }

    /// Opens an existing store file for reads only; a missing file is an error.
    pub fn open_read_only(path: &Path) -> Result<Self, CatError> {
        debug!("opening store at {} (read-only)", path.display());
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|err| {
            CatError::Store(
                ErrorInfo::new("catapp_db.open", "failed to open sqlite store")
                    .with_context("path", path.display().to_string())
                    .with_hint(err.to_string()),
            )
        })?;
        Ok(Self { conn })
    }

    /// Opens a private in-memory store.
    pub fn open_in_memory() -> Result<Self, CatError> {
        let conn = Connection::open_in_memory()
            .map_err(|err| CatError::store("catapp_db.open", "failed to open in-memory store", err))?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn collect<T, P, F>(&self, path: &str, sql: &str, params: P, map: F) -> Result<Vec<T>, CatError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql).map_err(|err| {
            CatError::Store(
                ErrorInfo::new("catapp_db.prepare", "failed to prepare query")
                    .with_context("path", path)
                    .with_hint(err.to_string()),
            )
        })?;
        let rows = stmt.query_map(params, map).map_err(|err| {
            CatError::Store(
                ErrorInfo::new("catapp_db.query", "failed to execute query")
                    .with_context("path", path)
                    .with_hint(err.to_string()),
            )
        })?;
        let rows = rows.collect::<Result<Vec<_>, _>>().map_err(|err| {
            CatError::Store(
                ErrorInfo::new("catapp_db.row", "failed to read row")
                    .with_context("path", path)
                    .with_hint(err.to_string()),
            )
        })?;
        debug!(path, rows = rows.len(), "query finished");
        Ok(rows)
    }
}

/// Reads a column as text whatever storage class it was written with.
fn text(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => String::new(),
        ValueRef::Integer(value) => value.to_string(),
        ValueRef::Real(value) => value.to_string(),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    })
}

fn optional_text(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    let value = text(row, idx)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

fn termination_sql(alias: &str) -> String {
    format!("(CASE {alias}.Termination WHEN ?7 THEN ?8 ELSE {alias}.Termination END)")
}

impl RecordStore for SqliteStore {
    fn same_reaction_rows(
        &self,
        reaction: &ReactionDescriptor,
        out_x: EnergyType,
        out_y: EnergyType,
    ) -> Result<Vec<SingleReactionRow>, CatError> {
        let (x, y) = (out_x.column(), out_y.column());
        let sql = format!(
            "SELECT {x}, {y}, Surface, Termination, Reference, Url
            FROM {TABLE}
            WHERE AB = ?1
              AND A = ?2
              AND B = ?3
              AND {x} <> ''
              AND {y} <> ''"
        );
        debug!(reaction = %reaction, %out_x, %out_y, "same-reaction query");
        self.collect(
            "same_reaction",
            &sql,
            params![reaction.ab, reaction.a, reaction.b],
            |row| {
                Ok(SingleReactionRow {
                    x_energy: text(row, 0)?,
                    y_energy: text(row, 1)?,
                    surface: text(row, 2)?,
                    termination: text(row, 3)?,
                    reference: text(row, 4)?,
                    url: text(row, 5)?,
                })
            },
        )
    }

    fn joined_reaction_rows(
        &self,
        x_reaction: &ReactionDescriptor,
        y_reaction: &ReactionDescriptor,
        out_x: EnergyType,
        out_y: EnergyType,
    ) -> Result<Vec<JoinedReactionRow>, CatError> {
        let (x, y) = (out_x.column(), out_y.column());
        // Terminations are compared after the legacy fix-up so "1" and "0001" pair up.
        let sql = format!(
            "SELECT
                a.{x},
                b.{y},
                a.Surface,
                a.Termination,
                a.Reference,
                a.Url,
                b.Reference,
                b.Url
            FROM {TABLE} AS a
            INNER JOIN {TABLE} AS b
            ON (
                (a.AB = ?1 AND a.A = ?2 AND a.B = ?3)
                OR
                (a.AB = ?1 AND a.A = ?3 AND a.B = ?2)
            )
            AND (
                (b.AB = ?4 AND b.A = ?5 AND b.B = ?6)
                OR
                (b.AB = ?4 AND b.A = ?6 AND b.B = ?5)
            )
            AND a.Surface = b.Surface
            AND {a_term} = {b_term}
            AND a.{x} <> ''
            AND b.{y} <> ''",
            a_term = termination_sql("a"),
            b_term = termination_sql("b"),
        );
        debug!(x_reaction = %x_reaction, y_reaction = %y_reaction, %out_x, %out_y, "joined query");
        self.collect(
            "joined",
            &sql,
            params![
                x_reaction.ab,
                x_reaction.a,
                x_reaction.b,
                y_reaction.ab,
                y_reaction.a,
                y_reaction.b,
                LEGACY_TERMINATION,
                CANONICAL_TERMINATION,
            ],
            |row| {
                Ok(JoinedReactionRow {
                    x_energy: text(row, 0)?,
                    y_energy: text(row, 1)?,
                    surface: text(row, 2)?,
                    termination: text(row, 3)?,
                    x_reference: text(row, 4)?,
                    x_url: text(row, 5)?,
                    y_reference: text(row, 6)?,
                    y_url: text(row, 7)?,
                })
            },
        )
    }

    fn unique_reactions(&self) -> Result<Vec<ReactionDescriptor>, CatError> {
        let sql = format!("SELECT DISTINCT AB, A, B FROM {TABLE} ORDER BY AB, A, B");
        self.collect("unique_reactions", &sql, [], |row| {
            Ok(ReactionDescriptor {
                ab: text(row, 0)?,
                a: text(row, 1)?,
                b: text(row, 2)?,
            })
        })
    }

    fn search(&self, query: &str) -> Result<Vec<EnergyRecord>, CatError> {
        let sql = format!(
            "SELECT {columns} FROM {TABLE} WHERE {TABLE} MATCH ?1 ORDER BY Surface",
            columns = COLUMNS.join(", ")
        );
        debug!(query, "full-text search");
        self.collect("search", &sql, [query], |row| {
            Ok(EnergyRecord {
                reaction_energy: optional_text(row, 0)?,
                activation_energy: optional_text(row, 1)?,
                surface: text(row, 2)?,
                termination: text(row, 3)?,
                ab: text(row, 4)?,
                a: text(row, 5)?,
                b: text(row, 6)?,
                reference: text(row, 7)?,
                url: text(row, 8)?,
            })
        })
    }
}
