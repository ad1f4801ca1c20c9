use std::sync::Arc;

use crate::db::Catalog;

/// Shared application state
///
/// The catalog is immutable after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
