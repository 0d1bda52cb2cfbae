pub mod history;
pub mod medication;
pub mod symptom;
pub mod user;

pub use history::SearchHistory;
pub use medication::Medication;
pub use symptom::Symptom;
pub use user::User;
