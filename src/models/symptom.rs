use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A selectable symptom on the checkbox flow, seeded from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symptom {
    pub id: Uuid,
    pub name: String,
    pub category: String,
}
