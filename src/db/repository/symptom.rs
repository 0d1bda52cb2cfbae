use std::collections::HashSet;

use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::{Medication, Symptom};

use super::medication::medication_from_row;

pub fn insert_symptom(conn: &Connection, symptom: &Symptom) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO symptoms (id, name, category) VALUES (?1, ?2, ?3)",
        params![symptom.id.to_string(), symptom.name, symptom.category],
    )?;
    Ok(())
}

pub fn get_all_symptoms(conn: &Connection) -> Result<Vec<Symptom>, DatabaseError> {
    let mut stmt =
        conn.prepare("SELECT id, name, category FROM symptoms ORDER BY category, name")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut symptoms = Vec::new();
    for row in rows {
        let (id, name, category) = row?;
        symptoms.push(Symptom {
            id: Uuid::parse_str(&id)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
            name,
            category,
        });
    }
    Ok(symptoms)
}

pub fn get_symptom_by_name(
    conn: &Connection,
    name: &str,
) -> Result<Option<Symptom>, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT id, name, category FROM symptoms WHERE name = ?1",
            params![name],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        )
        .optional()?;

    row.map(|(id, name, category)| {
        Ok(Symptom {
            id: Uuid::parse_str(&id)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
            name,
            category,
        })
    })
    .transpose()
}

/// Union of medications linked to each named symptom, duplicates removed.
///
/// Names with no catalog match contribute nothing; they are not an error.
/// First-seen order is preserved across the selection.
pub fn medications_for_symptoms(
    conn: &Connection,
    names: &[String],
) -> Result<Vec<Medication>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT m.id, m.name, m.description, m.dosage, m.warnings
         FROM medications m
         JOIN symptom_medications sm ON sm.medication_id = m.id
         JOIN symptoms s ON s.id = sm.symptom_id
         WHERE s.name = ?1
         ORDER BY m.name",
    )?;

    let mut seen: HashSet<Uuid> = HashSet::new();
    let mut medications = Vec::new();
    for name in names {
        let rows = stmt.query_map(params![name], medication_from_row)?;
        for row in rows {
            let medication = row?;
            if seen.insert(medication.id) {
                medications.push(medication);
            }
        }
    }
    Ok(medications)
}
