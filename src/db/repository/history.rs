use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::SearchHistory;

// Fractional seconds keep newest-first ordering stable for
// back-to-back searches within the same second.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn insert_search_history(
    conn: &Connection,
    record: &SearchHistory,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO search_history (id, user_id, symptoms, medications, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            record.id.to_string(),
            record.user_id.to_string(),
            record.symptoms,
            record.medications,
            record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        ],
    )?;
    Ok(())
}

/// All history rows for one user, newest first.
pub fn get_history_for_user(
    conn: &Connection,
    user_id: &Uuid,
) -> Result<Vec<SearchHistory>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, symptoms, medications, timestamp
         FROM search_history WHERE user_id = ?1
         ORDER BY timestamp DESC, rowid DESC",
    )?;

    let rows = stmt.query_map(params![user_id.to_string()], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut history = Vec::new();
    for row in rows {
        let (id, user_id, symptoms, medications, timestamp) = row?;
        history.push(SearchHistory {
            id: Uuid::parse_str(&id)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
            symptoms,
            medications,
            timestamp: NaiveDateTime::parse_from_str(&timestamp, "%Y-%m-%d %H:%M:%S%.f")
                .unwrap_or_default(),
        });
    }
    Ok(history)
}

pub fn count_history_for_user(conn: &Connection, user_id: &Uuid) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM search_history WHERE user_id = ?1",
        params![user_id.to_string()],
        |row| row.get(0),
    )?;
    Ok(count)
}
