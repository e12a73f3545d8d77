use axum::Json;

use crate::payloads::{Health, ServiceInfo};

pub(super) async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Welcome to Signal Equipment API",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub(super) async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        service: "signal-equipment-api",
    })
}
