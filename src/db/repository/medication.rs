use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::Medication;

pub fn insert_medication(conn: &Connection, medication: &Medication) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO medications (id, name, description, dosage, warnings)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            medication.id.to_string(),
            medication.name,
            medication.description,
            medication.dosage,
            medication.warnings,
        ],
    )?;
    Ok(())
}

pub fn get_medication_by_name(
    conn: &Connection,
    name: &str,
) -> Result<Option<Medication>, DatabaseError> {
    let medication = conn
        .query_row(
            "SELECT id, name, description, dosage, warnings FROM medications WHERE name = ?1",
            params![name],
            medication_from_row,
        )
        .optional()?;
    Ok(medication)
}

pub fn link_symptom_medication(
    conn: &Connection,
    symptom_id: &Uuid,
    medication_id: &Uuid,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT OR IGNORE INTO symptom_medications (symptom_id, medication_id) VALUES (?1, ?2)",
        params![symptom_id.to_string(), medication_id.to_string()],
    )?;
    Ok(())
}

pub(super) fn medication_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Medication> {
    let id: String = row.get(0)?;
    Ok(Medication {
        id: Uuid::parse_str(&id).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?,
        name: row.get(1)?,
        description: row.get(2)?,
        dosage: row.get(3)?,
        warnings: row.get(4)?,
    })
}
