//! Search history recording.
//!
//! History is best-effort: a failed insert must never break the search
//! response, so errors are logged and swallowed. Nothing is recorded for
//! searches that matched no medications.

use chrono::Utc;
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::{repository, DatabaseError};
use crate::models::SearchHistory;

/// Record a completed search for a logged-in user.
///
/// `symptoms` is the normalized query text (free-text search) or the
/// comma-joined symptom names (checkbox search). Skipped entirely when
/// no medications matched.
pub fn record_search(
    conn: &mut Connection,
    user_id: Uuid,
    symptoms: &str,
    medications: &[String],
) {
    if medications.is_empty() {
        return;
    }

    let record = SearchHistory {
        id: Uuid::new_v4(),
        user_id,
        symptoms: symptoms.to_string(),
        medications: medications.join(", "),
        timestamp: Utc::now().naive_utc(),
    };

    if let Err(e) = try_record(conn, &record) {
        tracing::error!("failed to record search history: {e}");
    }
}

fn try_record(conn: &mut Connection, record: &SearchHistory) -> Result<(), DatabaseError> {
    let tx = conn.transaction()?;
    repository::insert_search_history(&tx, record)?;
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::models::User;

    fn seeded_user(conn: &Connection) -> Uuid {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            password_hash: "x".into(),
            created_at: Utc::now().naive_utc(),
        };
        repository::insert_user(conn, &user).unwrap();
        user.id
    }

    #[test]
    fn records_search_with_matches() {
        let mut conn = open_memory_database().unwrap();
        let user_id = seeded_user(&conn);

        record_search(
            &mut conn,
            user_id,
            "headache and fever",
            &["Paracetamol".into(), "Ibuprofen".into()],
        );

        let history = repository::get_history_for_user(&conn, &user_id).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].symptoms, "headache and fever");
        assert_eq!(history[0].medications, "Paracetamol, Ibuprofen");
    }

    #[test]
    fn zero_match_search_is_not_recorded() {
        let mut conn = open_memory_database().unwrap();
        let user_id = seeded_user(&conn);

        record_search(&mut conn, user_id, "quantum flu", &[]);

        assert_eq!(
            repository::count_history_for_user(&conn, &user_id).unwrap(),
            0
        );
    }

    #[test]
    fn insert_failure_is_swallowed() {
        let mut conn = open_memory_database().unwrap();
        // No such user: the foreign key rejects the insert, but the call
        // must not panic or propagate.
        record_search(
            &mut conn,
            Uuid::new_v4(),
            "headache",
            &["Paracetamol".into()],
        );
    }
}
