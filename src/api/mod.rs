//! HTTP API Layer
//!
//! Read-only endpoints over the project store. Handlers receive the store
//! through `AppState`, never through a global.

use crate::project::ProjectStore;
use std::sync::Arc;

// JSON error bodies
pub mod error;

// Featured projects listing (GET)
pub mod featured;

pub use error::ApiError;
pub use featured::{create_project_routes, FEATURED_LIMIT};

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Persistence layer for project records
    pub store: Arc<dyn ProjectStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }
}
