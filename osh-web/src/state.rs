use std::sync::Arc;

use osh_core::dataset::FacilityBundle;

/// Shared state handed to every handler: the static facility dataset.
#[derive(Clone)]
pub struct AppState {
    pub bundle: Arc<FacilityBundle>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            bundle: Arc::new(FacilityBundle::sample()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
