use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    application::dto::{DinosaurRequest, WriteAck},
    domain::dinosaur::Dinosaur,
    interface::http::{
        json_body, parse_id,
        problem::{ApiProblem, ApiResult},
    },
    state::AppState,
};

pub async fn list_dinosaurs(State(state): State<AppState>) -> ApiResult<Json<Vec<Dinosaur>>> {
    let dinos = state
        .dino_service
        .list_dinosaurs()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(dinos))
}

pub async fn list_dinosaurs_by_cage(
    State(state): State<AppState>,
    Path(cage_id): Path<String>,
) -> ApiResult<Json<Vec<Dinosaur>>> {
    let cage_id = parse_id(&cage_id, "cageId")?;
    let dinos = state
        .dino_service
        .list_dinosaurs_by_cage(cage_id)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(dinos))
}

pub async fn get_dinosaur(
    State(state): State<AppState>,
    Path(dino_id): Path<String>,
) -> ApiResult<Json<Dinosaur>> {
    let dino_id = parse_id(&dino_id, "dinoId")?;
    let dino = state
        .dino_service
        .get_dinosaur(dino_id)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(dino))
}

pub async fn create_dinosaur(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<WriteAck>)> {
    let request: DinosaurRequest = json_body(&body)?;
    state
        .dino_service
        .create_dinosaur(request)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok((StatusCode::CREATED, Json(WriteAck::default())))
}

pub async fn update_dinosaur(
    State(state): State<AppState>,
    Path(dino_id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<WriteAck>> {
    let dino_id = parse_id(&dino_id, "dinoId")?;
    let mut request: DinosaurRequest = json_body(&body)?;
    request.id = dino_id;

    state
        .dino_service
        .update_dinosaur(request)
        .await
        .map_err(ApiProblem::from_domain)?;

    Ok(Json(WriteAck::default()))
}
