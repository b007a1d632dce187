use std::sync::Arc;

use cinema_order::PurchaseCoordinator;

#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<PurchaseCoordinator>,
}

impl AppState {
    pub fn new(coordinator: PurchaseCoordinator) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
        }
    }
}
