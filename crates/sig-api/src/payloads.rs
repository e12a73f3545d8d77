//! Request and informational response bodies.

use serde::{Deserialize, Serialize};
use sig_core::enums::AspectType;

/// Body of `POST /signals`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSignal {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /signals/{id}/aspects`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAspect {
    #[serde(rename = "type")]
    pub aspect_type: AspectType,
}

/// Body of `PATCH /aspects/{id}`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpdateAspect {
    pub is_on: bool,
}

/// Query string of `GET /signals`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default, alias = "offset")]
    pub skip: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
}
