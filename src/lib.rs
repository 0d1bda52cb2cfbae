pub mod api; // HTTP surface: router, middleware, endpoints
pub mod auth; // Password hashing + bearer-token sessions
pub mod catalog; // Static medication catalog + free-text matcher
pub mod config;
pub mod db; // SQLite: migrations, seeding, repositories
pub mod history; // Search history recorder (best-effort)
pub mod models;
