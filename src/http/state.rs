//! Application state for the HTTP server.

use std::sync::Arc;

use crate::models::ModelSet;

/// Shared application state passed to all handlers.
///
/// The model set is loaded once and never mutated, so handlers may compute
/// concurrently without locking.
#[derive(Clone)]
pub struct AppState {
    /// The three forecast model collections.
    pub models: Arc<ModelSet>,
}

impl AppState {
    /// Create a new application state with the given model set.
    pub fn new(models: Arc<ModelSet>) -> Self {
        Self { models }
    }
}
