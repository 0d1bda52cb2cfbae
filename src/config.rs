use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Medusa";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "medusa=info"
}

/// Get the application data directory (`~/.medusa/`)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(".medusa")
}

/// Path to the SQLite database. Overridable via `MEDUSA_DB`.
pub fn database_path() -> PathBuf {
    std::env::var("MEDUSA_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|_| app_data_dir().join("medusa.db"))
}

/// Address the server binds to. Overridable via `MEDUSA_ADDR`.
pub fn bind_addr() -> SocketAddr {
    std::env::var("MEDUSA_ADDR")
        .ok()
        .and_then(|addr| addr.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8000)))
}
