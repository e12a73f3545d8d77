//! Route table.

mod aspects;
mod meta;
mod signals;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState, allow_any_origin: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(meta::root))
        .route("/health", get(meta::health))
        .route(
            "/signals",
            get(signals::list_signals).post(signals::create_signal),
        )
        .route(
            "/signals/",
            get(signals::list_signals).post(signals::create_signal),
        )
        .route("/signals/{signal_id}", get(signals::get_signal))
        .route(
            "/signals/{signal_id}/aspects",
            get(aspects::get_signal_aspects).post(aspects::create_aspect),
        )
        .route(
            "/signals/{signal_id}/aspects/",
            get(aspects::get_signal_aspects).post(aspects::create_aspect),
        )
        .route(
            "/aspects/{aspect_id}",
            get(aspects::get_aspect).patch(aspects::update_aspect_state),
        )
        .layer(TraceLayer::new_for_http());

    if allow_any_origin {
        app = app.layer(CorsLayer::permissive());
    }

    app.with_state(state)
}
