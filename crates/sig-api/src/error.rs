//! HTTP error mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sig_core::errors::CoreError;
use sig_db::error::DatabaseError;
use thiserror::Error;

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be decoded (body, path or query).
    #[error("{0}")]
    Malformed(String),

    /// Failure reported by the storage service.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: &'static str,
}

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            Self::Malformed(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    detail: detail.clone(),
                    code: "validation_error",
                },
            ),
            Self::Database(DatabaseError::Domain(err)) => {
                let status = match err {
                    CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                    CoreError::DuplicateIdentifier { .. }
                    | CoreError::DuplicateName { .. }
                    | CoreError::MutualExclusivityViolation { .. } => StatusCode::BAD_REQUEST,
                    CoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (
                    status,
                    ErrorBody {
                        detail: err.to_string(),
                        code: err.code(),
                    },
                )
            }
            Self::Database(_) => internal(self),
        }
    }
}

fn internal(error: &ApiError) -> (StatusCode, ErrorBody) {
    tracing::error!(%error, "request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorBody {
            detail: "Internal server error".into(),
            code: "internal_error",
        },
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self::Database(DatabaseError::Domain(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sig_core::enums::AspectType;

    #[rstest]
    #[case(CoreError::signal_not_found(1), StatusCode::NOT_FOUND)]
    #[case(CoreError::DuplicateIdentifier { id: 1 }, StatusCode::BAD_REQUEST)]
    #[case(CoreError::DuplicateName { name: "S1".into() }, StatusCode::BAD_REQUEST)]
    #[case(
        CoreError::MutualExclusivityViolation {
            aspect_type: AspectType::Restrictive,
            opposing_type: AspectType::Permissive,
        },
        StatusCode::BAD_REQUEST
    )]
    #[case(CoreError::Validation("bad".into()), StatusCode::UNPROCESSABLE_ENTITY)]
    fn domain_errors_map_to_status(#[case] err: CoreError, #[case] expected: StatusCode) {
        let code = err.code();
        let (status, body) = ApiError::from(err).status_and_body();
        assert_eq!(status, expected);
        assert_eq!(body.code, code);
    }

    #[test]
    fn storage_errors_hide_details() {
        let err = ApiError::from(DatabaseError::InvalidState(
            "expected 0 or 1 in boolean column 2, found 7".into(),
        ));
        let (status, body) = err.status_and_body();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "internal_error");
        assert!(!body.detail.contains("boolean column"));
    }

    #[test]
    fn malformed_is_validation_error() {
        let (status, body) = ApiError::Malformed("missing field `name`".into()).status_and_body();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "validation_error");
    }
}
