use std::sync::Arc;

use crate::application::dino_service::DinoService;

#[derive(Clone)]
pub struct AppState {
    pub dino_service: Arc<DinoService>,
}

impl AppState {
    pub fn new(dino_service: Arc<DinoService>) -> Self {
        Self { dino_service }
    }
}
