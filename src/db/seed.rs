//! Load the static catalog into the symptom/medication tables.
//!
//! The checkbox flow reads these tables; the free-text matcher reads the
//! static catalog directly. Seeding from one source keeps both flows on
//! the same dataset.

use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::catalog::{self, CATALOG};

use super::DatabaseError;

/// Seed symptoms, medications, and their links from the static catalog.
/// Idempotent: rows already present are left untouched.
pub fn seed_catalog(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch("BEGIN")?;
    let result = seed_inner(conn);
    match result {
        Ok(()) => {
            conn.execute_batch("COMMIT")?;
            Ok(())
        }
        Err(e) => {
            let _ = conn.execute_batch("ROLLBACK");
            Err(e)
        }
    }
}

fn seed_inner(conn: &Connection) -> Result<(), DatabaseError> {
    for entry in CATALOG {
        conn.execute(
            "INSERT OR IGNORE INTO medications (id, name, description, dosage, warnings)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                Uuid::new_v4().to_string(),
                entry.name,
                entry.description,
                entry.dosage,
                entry.warnings,
            ],
        )?;

        for tag in entry.symptoms {
            conn.execute(
                "INSERT OR IGNORE INTO symptoms (id, name, category) VALUES (?1, ?2, ?3)",
                params![Uuid::new_v4().to_string(), tag, catalog::symptom_category(tag)],
            )?;
            conn.execute(
                "INSERT OR IGNORE INTO symptom_medications (symptom_id, medication_id)
                 SELECT s.id, m.id FROM symptoms s, medications m
                 WHERE s.name = ?1 AND m.name = ?2",
                params![tag, entry.name],
            )?;
        }
    }
    Ok(())
}
