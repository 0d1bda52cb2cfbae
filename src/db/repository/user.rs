use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::User;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn insert_user(conn: &Connection, user: &User) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO users (id, username, email, password_hash, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user.id.to_string(),
            user.username,
            user.email,
            user.password_hash,
            user.created_at.format(TIMESTAMP_FORMAT).to_string(),
        ],
    )?;
    Ok(())
}

pub fn get_user(conn: &Connection, id: &Uuid) -> Result<Option<User>, DatabaseError> {
    get_user_where(conn, "id = ?1", &id.to_string())
}

pub fn get_user_by_username(
    conn: &Connection,
    username: &str,
) -> Result<Option<User>, DatabaseError> {
    get_user_where(conn, "username = ?1", username)
}

pub fn get_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>, DatabaseError> {
    get_user_where(conn, "email = ?1", email)
}

fn get_user_where(
    conn: &Connection,
    predicate: &str,
    value: &str,
) -> Result<Option<User>, DatabaseError> {
    let sql = format!(
        "SELECT id, username, email, password_hash, created_at FROM users WHERE {predicate}"
    );
    let row = conn
        .query_row(&sql, params![value], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })
        .optional()?;

    row.map(|(id, username, email, password_hash, created_at)| {
        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
            username,
            email,
            password_hash,
            created_at: NaiveDateTime::parse_from_str(&created_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
        })
    })
    .transpose()
}
