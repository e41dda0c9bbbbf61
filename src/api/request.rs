//! Request types for the billing API.
//!
//! This module defines the JSON request body shared by the `/statement`
//! endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{Invoice, PlayCatalog};

/// Request body for the `/statement` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementRequest {
    /// The invoice to bill.
    pub invoice: Invoice,
    /// Optional catalog overriding the server's loaded catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plays: Option<PlayCatalog>,
}

impl StatementRequest {
    /// Returns the request's own catalog, or `default` when none was supplied.
    pub fn plays_or<'a>(&'a self, default: &'a PlayCatalog) -> &'a PlayCatalog {
        self.plays.as_ref().unwrap_or(default)
    }
}
