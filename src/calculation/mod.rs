//! Calculation logic for the billing engine.
//!
//! This module contains the per-genre fee rules, the volume credit rules,
//! and the assembly of an invoice into [`StatementData`](crate::models::StatementData).

mod amount;
mod statement_data;
mod volume_credits;

pub use amount::{
    COMEDY_AUDIENCE_THRESHOLD, COMEDY_BASE_AMOUNT, HISTORY_BASE_AMOUNT, TRAGEDY_AUDIENCE_THRESHOLD,
    TRAGEDY_BASE_AMOUNT, amount_for,
};
pub use statement_data::{create_statement_data, enrich_performance};
pub use volume_credits::{
    BASE_CREDIT_THRESHOLD, COMEDY_CREDIT_DIVISOR, HISTORY_BONUS_CREDITS, HISTORY_BONUS_THRESHOLD,
    volume_credits_for,
};
