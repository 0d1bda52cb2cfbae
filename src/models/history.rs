use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded search by an authenticated user. Append-only:
/// never updated or deleted by the application.
///
/// `symptoms` and `medications` are comma-joined display text, not
/// references into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHistory {
    pub id: Uuid,
    pub user_id: Uuid,
    pub symptoms: String,
    pub medications: String,
    pub timestamp: NaiveDateTime,
}
