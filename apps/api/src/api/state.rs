use std::sync::Arc;

use crate::domain::teapot::Teapot;
use crate::services::TeapotCrudService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub teapots: TeapotCrudService,
    /// Teapots reinstalled by a reset
    pub seeds: Arc<[Teapot]>,
}

impl AppState {
    pub fn new(teapots: TeapotCrudService, seeds: Vec<Teapot>) -> Self {
        Self {
            teapots,
            seeds: seeds.into(),
        }
    }
}
