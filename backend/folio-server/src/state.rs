use folio_core::PageLimits;
use folio_db::ProjectStore;

use std::sync::Arc;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
    pub page_limits: PageLimits,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>, page_limits: PageLimits) -> Self {
        Self { store, page_limits }
    }
}
