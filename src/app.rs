use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, Method},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    interface::http::{
        cages_handler::{create_cage, get_cage, list_cages, update_cage},
        dinosaurs_handler::{
            create_dinosaur, get_dinosaur, list_dinosaurs, list_dinosaurs_by_cage,
            update_dinosaur,
        },
        healthcheck,
    },
    state::AppState,
};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the HTTP surface. A request that outlives `request_timeout` is
/// answered with 408 and its handler future, including any in-flight query,
/// is dropped.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(healthcheck))
        .route("/dinosaurs", get(list_dinosaurs))
        .route("/dinosaurs/cage/:cage_id", get(list_dinosaurs_by_cage))
        .route("/dinosaur", post(create_dinosaur))
        .route("/dinosaur/:dino_id", get(get_dinosaur).put(update_dinosaur))
        .route("/cages", get(list_cages))
        .route("/cage", post(create_cage))
        .route("/cage/:cage_id", get(get_cage).put(update_cage))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS]),
        )
        .with_state(state)
}
