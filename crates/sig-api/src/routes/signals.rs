use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use sig_core::entities::Signal;

use crate::error::ApiError;
use crate::payloads::{CreateSignal, ListQuery};
use crate::state::AppState;

pub(super) async fn create_signal(
    State(state): State<AppState>,
    body: Result<Json<CreateSignal>, JsonRejection>,
) -> Result<(StatusCode, Json<Signal>), ApiError> {
    let Json(body) = body?;
    let signal = state.service.create_signal(body.id, &body.name).await?;
    Ok((StatusCode::CREATED, Json(signal)))
}

pub(super) async fn list_signals(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Signal>>, ApiError> {
    let Query(query) = query?;
    let limit = state.general.effective_limit(query.limit);
    let signals = state
        .service
        .list_signals(query.skip.unwrap_or(0), limit)
        .await?;
    Ok(Json(signals))
}

pub(super) async fn get_signal(
    State(state): State<AppState>,
    signal_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Signal>, ApiError> {
    let Path(signal_id) = signal_id?;
    Ok(Json(state.service.get_signal(signal_id).await?))
}
