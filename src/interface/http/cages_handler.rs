use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    application::dto::{CageRequest, WriteAck},
    domain::cage::Cage,
    interface::http::{
        json_body, parse_id,
        problem::{ApiProblem, ApiResult},
    },
    state::AppState,
};

pub async fn list_cages(State(state): State<AppState>) -> ApiResult<Json<Vec<Cage>>> {
    let cages = state
        .dino_service
        .list_cages()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(cages))
}

pub async fn get_cage(
    State(state): State<AppState>,
    Path(cage_id): Path<String>,
) -> ApiResult<Json<Cage>> {
    let cage_id = parse_id(&cage_id, "cageId")?;
    let cage = state
        .dino_service
        .get_cage(cage_id)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(cage))
}

pub async fn create_cage(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<WriteAck>)> {
    let request: CageRequest = json_body(&body)?;
    state
        .dino_service
        .create_cage(request)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok((StatusCode::CREATED, Json(WriteAck::default())))
}

pub async fn update_cage(
    State(state): State<AppState>,
    Path(cage_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<WriteAck>> {
    let cage_id = parse_id(&cage_id, "cageId")?;
    let mut request: CageRequest = json_body(&body)?;
    request.id = cage_id;

    state
        .dino_service
        .update_cage(request)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok(Json(WriteAck::default()))
}
