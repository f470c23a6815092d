use axum::{Json, body::Bytes};
use serde::de::DeserializeOwned;

use crate::{application::dto::HealthResponse, interface::http::problem::ApiProblem};

pub mod cages_handler;
pub mod dinosaurs_handler;
pub mod problem;

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

fn parse_id(raw: &str, name: &str) -> Result<i64, ApiProblem> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiProblem::bad_request(format!("{name} must be an integer, got '{raw}'")))
}

/// Decodes a JSON write body whatever its `Content-Type` says.
fn json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiProblem> {
    serde_json::from_slice(body)
        .map_err(|err| ApiProblem::bad_request(format!("invalid JSON body: {err}")))
}
