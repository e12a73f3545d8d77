//! # sig-api
//!
//! axum HTTP surface over `SignalService`.
//!
//! Domain errors keep their own status codes (404 for unknown ids, 400 for
//! duplicates and rejected transitions); malformed requests are reported as
//! 422 validation errors with the same `{detail, code}` body.

pub mod error;
pub mod payloads;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;

use tokio::net::TcpListener;

/// Serve `state` on `listener` until Ctrl-C.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    allow_any_origin: bool,
) -> std::io::Result<()> {
    let app = router(state, allow_any_origin);
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "signal equipment API listening");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for Ctrl-C; shutting down");
        return;
    }
    tracing::info!("shutdown requested");
}
