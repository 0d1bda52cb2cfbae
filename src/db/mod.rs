pub mod repository;
pub mod seed;
pub mod sqlite;

pub use sqlite::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),
}
