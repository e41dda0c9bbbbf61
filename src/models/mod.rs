//! Core data models for the billing engine.
//!
//! This module contains the input records (plays, invoices, performances)
//! and the computed statement data handed to the renderers.

mod invoice;
mod play;
mod statement_data;

pub use invoice::{Invoice, Performance};
pub use play::{Genre, Play, PlayCatalog};
pub use statement_data::{EnrichedPerformance, StatementData};
