use crate::services::catalog::Catalog;

/// Application state shared across all handlers
pub struct AppState {
    pub catalog: Catalog,
}
