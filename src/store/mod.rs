/// Persistence layer
///
/// SQLite storage through sqlx. Entity stores keep scalar fields; link
/// tables keep the manager/programmer to project relations. Every store
/// function takes a connection so callers can compose them in a transaction.

pub mod database;
pub mod links;
pub mod managers;
pub mod programmers;
pub mod projects;

pub use database::Database;
pub use links::{LinkTable, MANAGER_PROJECTS, PROGRAMMER_PROJECTS};

use sqlx::{sqlite::SqliteRow, Row};
use uuid::Uuid;

/// Read a text column holding a hyphenated UUID
pub(crate) fn decode_id(row: &SqliteRow, column: &str) -> Result<Uuid, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
