//! Application state for dependency injection.

use std::sync::Arc;

use domain::{FixedPersonDirectory, PersonDirectory};

use crate::config::ApiConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn PersonDirectory>,
    pub config: ApiConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(directory: Arc<dyn PersonDirectory>, config: ApiConfig) -> Self {
        Self { directory, config }
    }

    /// Build state whose directory holds the configured person ids.
    pub fn from_config(config: ApiConfig) -> Self {
        let directory = FixedPersonDirectory::new(config.known_person_ids.iter().copied());
        Self::new(Arc::new(directory), config)
    }
}
