use crate::Metrics;

use ug_core::UnlinkGuard;

/// Shared state for HTTP handlers. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub guard: UnlinkGuard,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(guard: UnlinkGuard) -> Self {
        Self {
            guard,
            metrics: Metrics::new(),
        }
    }
}
