//! Repository layer — entity-scoped database operations.
//!
//! Free functions over `rusqlite::Connection`, one sub-module per entity.
//! All public functions are re-exported here.

mod history;
mod medication;
mod symptom;
mod user;

pub use history::*;
pub use medication::*;
pub use symptom::*;
pub use user::*;
