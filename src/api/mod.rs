//! HTTP API: router, endpoints, session middleware, and server lifecycle.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::app_router;
pub use server::{start_server_on, ServerHandle};
pub use types::ApiContext;
