//! Binary entrypoint for the roster HTTP server.
//!
//! Reads configuration from environment variables, after loading a `.env`
//! file when one is present:
//! - `ROSTER_DB_PATH`: SQLite database file path (default: "roster.db")
//! - `ROSTER_PORT`: Server listen port (default: "8080")
//! - `ROSTER_LEGACY_ERRORS`: "1" or "true" collapses every error response
//!   to a bodyless 500, matching the old wire contract

use roster_server::router::build_router;
use roster_server::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_path = std::env::var("ROSTER_DB_PATH")
        .unwrap_or_else(|_| "roster.db".to_string());
    let port = std::env::var("ROSTER_PORT")
        .unwrap_or_else(|_| "8080".to_string());
    let legacy_errors = std::env::var("ROSTER_LEGACY_ERRORS")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let state = AppState::new(&db_path, legacy_errors)
        .expect("Failed to initialize application state");

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("roster server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
