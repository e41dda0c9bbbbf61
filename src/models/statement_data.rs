//! Statement data models.
//!
//! This module contains [`StatementData`], the fully computed, renderer-ready
//! result for one invoice. Enriched performances borrow the invoice line and
//! the catalog play they were computed from, so building a statement never
//! copies or mutates its inputs.

use serde::Serialize;

use super::{Genre, Performance, Play};

/// A performance together with its resolved play and computed charges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPerformance<'a> {
    /// The invoice line this entry was computed from.
    #[serde(flatten)]
    pub performance: &'a Performance,
    /// The catalog play the performance refers to.
    pub play: &'a Play,
    /// The play's resolved genre.
    pub genre: Genre,
    /// The fee in cents.
    pub amount: u64,
    /// Loyalty points earned by this performance.
    pub volume_credits: u64,
}

impl EnrichedPerformance<'_> {
    /// Returns the audience size of the underlying performance.
    pub fn audience(&self) -> u32 {
        self.performance.audience
    }
}

/// The computed statement for one invoice.
///
/// # Invariants
///
/// `total_amount` is the sum of every performance's `amount` and
/// `total_volume_credits` is the sum of every performance's `volume_credits`.
/// Performances appear in invoice order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementData<'a> {
    /// The customer billed by this statement.
    pub customer: &'a str,
    /// Enriched performances, in invoice order.
    pub performances: Vec<EnrichedPerformance<'a>>,
    /// Sum of all performance amounts, in cents.
    pub total_amount: u64,
    /// Sum of all performance volume credits.
    pub total_volume_credits: u64,
}
