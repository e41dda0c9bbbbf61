//! Billing statements for theater performance invoices.
//!
//! This crate computes per-performance fees and volume credits for a
//! customer's invoice against a play catalog, totals them, and renders the
//! result as a plain text or HTML statement.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
mod statement;

pub use statement::{
    BatchStatements, html_statement, render_batch, render_statement, statement, statements,
};
