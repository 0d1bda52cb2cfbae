use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted catalog medication, linked to symptoms many-to-many.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub dosage: String,
    pub warnings: String,
}
