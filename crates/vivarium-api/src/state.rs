//! Shared application state for the care API.

use std::sync::Arc;

use vivarium_engine::PetService;

/// State shared by every handler: the engine facade.
pub struct AppState {
    /// The pet lifecycle service.
    pub service: Arc<PetService>,
}

impl AppState {
    /// Wrap a service for the router.
    pub const fn new(service: Arc<PetService>) -> Self {
        Self { service }
    }
}
