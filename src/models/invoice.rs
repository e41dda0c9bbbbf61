//! Invoice and raw performance models.
//!
//! These are the input records supplied by the external loader.

use serde::{Deserialize, Serialize};

/// One line of an invoice: a showing of a play and its audience size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Identifier of the play in the catalog.
    #[serde(rename = "playID")]
    pub play_id: String,
    /// Number of attendees.
    pub audience: u32,
}

/// A customer's set of performances billed in one statement.
///
/// The order of `performances` is preserved into every rendered statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Display name of the customer.
    pub customer: String,
    /// The performances to bill, in statement order.
    pub performances: Vec<Performance>,
}
