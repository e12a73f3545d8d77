use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use sig_core::entities::Aspect;
use sig_core::responses::SignalAspects;

use crate::error::ApiError;
use crate::payloads::{CreateAspect, UpdateAspect};
use crate::state::AppState;

pub(super) async fn create_aspect(
    State(state): State<AppState>,
    signal_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<CreateAspect>, JsonRejection>,
) -> Result<(StatusCode, Json<Aspect>), ApiError> {
    let Path(signal_id) = signal_id?;
    let Json(body) = body?;
    let aspect = state
        .service
        .create_aspect(signal_id, body.aspect_type)
        .await?;
    Ok((StatusCode::CREATED, Json(aspect)))
}

pub(super) async fn get_signal_aspects(
    State(state): State<AppState>,
    signal_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SignalAspects>, ApiError> {
    let Path(signal_id) = signal_id?;
    Ok(Json(state.service.get_signal_aspects(signal_id).await?))
}

pub(super) async fn get_aspect(
    State(state): State<AppState>,
    aspect_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Aspect>, ApiError> {
    let Path(aspect_id) = aspect_id?;
    Ok(Json(state.service.get_aspect(aspect_id).await?))
}

pub(super) async fn update_aspect_state(
    State(state): State<AppState>,
    aspect_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateAspect>, JsonRejection>,
) -> Result<Json<Aspect>, ApiError> {
    let Path(aspect_id) = aspect_id?;
    let Json(body) = body?;
    Ok(Json(
        state
            .service
            .update_aspect_state(aspect_id, body.is_on)
            .await?,
    ))
}
