//! Statement entry points.
//!
//! These combine statement data computation with rendering, and are what
//! external callers use to turn an invoice into a printable statement.

use tracing::warn;

use crate::calculation::create_statement_data;
use crate::error::BillingResult;
use crate::models::{Invoice, PlayCatalog};
use crate::render::{StatementFormat, render_html, render_plain_text};

/// Renders an invoice as a plain text statement.
///
/// # Examples
///
/// ```
/// use theater_billing::models::{Invoice, Performance, Play, PlayCatalog};
///
/// let plays: PlayCatalog =
///     [("hamlet", Play { name: "Hamlet".into(), play_type: "tragedy".into() })]
///         .into_iter()
///         .collect();
/// let invoice = Invoice {
///     customer: "BigCo".into(),
///     performances: vec![Performance { play_id: "hamlet".into(), audience: 55 }],
/// };
///
/// let text = theater_billing::statement(&invoice, &plays).unwrap();
/// assert!(text.contains("  Hamlet: $650.00 (55석)"));
/// ```
pub fn statement(invoice: &Invoice, plays: &PlayCatalog) -> BillingResult<String> {
    render_statement(invoice, plays, StatementFormat::PlainText)
}

/// Renders an invoice as an HTML statement.
pub fn html_statement(invoice: &Invoice, plays: &PlayCatalog) -> BillingResult<String> {
    render_statement(invoice, plays, StatementFormat::Html)
}

/// Renders an invoice in the requested format.
pub fn render_statement(
    invoice: &Invoice,
    plays: &PlayCatalog,
    format: StatementFormat,
) -> BillingResult<String> {
    let data = create_statement_data(invoice, plays)?;
    Ok(format.render(&data))
}

/// Renders every invoice in order, one result per invoice.
///
/// A failing invoice only fails its own entry; whether to stop or skip is
/// left to the caller.
pub fn statements<'a>(
    invoices: &'a [Invoice],
    plays: &'a PlayCatalog,
    format: StatementFormat,
) -> impl Iterator<Item = BillingResult<String>> + 'a {
    invoices.iter().map(move |invoice| {
        render_statement(invoice, plays, format).inspect_err(|err| {
            warn!(customer = %invoice.customer, error = %err, "Statement failed");
        })
    })
}

/// Text and HTML statements for a batch of invoices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStatements {
    /// Plain text statements, in invoice order.
    pub text: Vec<String>,
    /// HTML statements, in invoice order.
    pub html: Vec<String>,
    /// Number of invoices skipped because their statement failed.
    pub failed: usize,
}

impl BatchStatements {
    /// Returns every text statement followed by every HTML statement.
    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.text.iter().chain(&self.html).map(String::as_str)
    }
}

/// Renders both formats for every invoice, computing each statement once.
///
/// With `fail_fast` the first failing invoice aborts the batch and its error
/// is returned. Otherwise failing invoices are logged, counted and skipped.
pub fn render_batch(
    invoices: &[Invoice],
    plays: &PlayCatalog,
    fail_fast: bool,
) -> BillingResult<BatchStatements> {
    let mut batch = BatchStatements::default();

    for invoice in invoices {
        match create_statement_data(invoice, plays) {
            Ok(data) => {
                batch.text.push(render_plain_text(&data));
                batch.html.push(render_html(&data));
            }
            Err(err) if fail_fast => return Err(err),
            Err(err) => {
                warn!(customer = %invoice.customer, error = %err, "Statement failed");
                batch.failed += 1;
            }
        }
    }

    Ok(batch)
}
