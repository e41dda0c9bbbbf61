//! Application state for the billing API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::models::PlayCatalog;

/// Shared application state.
///
/// Holds the play catalog used for requests that do not supply their own.
#[derive(Clone)]
pub struct AppState {
    /// The default play catalog.
    plays: Arc<PlayCatalog>,
}

impl AppState {
    /// Creates a new application state with the given play catalog.
    pub fn new(plays: PlayCatalog) -> Self {
        Self {
            plays: Arc::new(plays),
        }
    }

    /// Returns a reference to the default play catalog.
    pub fn plays(&self) -> &PlayCatalog {
        &self.plays
    }
}
