use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use medusa::api::{app_router, ApiContext};
use medusa::{config, db};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let db_path = config::database_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).expect("Cannot create data directory");
    }

    // Open once at startup so migrations + catalog seeding run before
    // the first request. Requests open their own connections.
    db::open_database(&db_path).expect("Failed to initialize database");

    let ctx = ApiContext::new(db_path);
    let app = app_router(ctx);

    let addr = config::bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
