//! Statement data assembly.
//!
//! Resolves every performance of an invoice against the play catalog,
//! applies the fee and credit rules, and totals the results.

use tracing::debug;

use crate::error::BillingResult;
use crate::models::{EnrichedPerformance, Invoice, Performance, PlayCatalog, StatementData};

use super::amount::amount_for;
use super::volume_credits::volume_credits_for;

/// Enriches a single performance with its play, fee and credits.
///
/// # Errors
///
/// Returns `PlayNotFound` if the performance's play is not in the catalog,
/// or `UnknownGenre` if the play's genre is not recognized.
pub fn enrich_performance<'a>(
    performance: &'a Performance,
    plays: &'a PlayCatalog,
) -> BillingResult<EnrichedPerformance<'a>> {
    let play = plays.get(&performance.play_id)?;
    let genre = play.genre()?;

    Ok(EnrichedPerformance {
        performance,
        play,
        genre,
        amount: amount_for(genre, performance.audience),
        volume_credits: volume_credits_for(genre, performance.audience),
    })
}

/// Computes the statement data for an invoice.
///
/// The first unresolvable play or unknown genre aborts the whole
/// computation; no partial statement is returned.
///
/// # Examples
///
/// ```
/// use theater_billing::calculation::create_statement_data;
/// use theater_billing::models::{Invoice, Performance, Play, PlayCatalog};
///
/// let plays: PlayCatalog = [
///     ("hamlet", Play { name: "Hamlet".into(), play_type: "tragedy".into() }),
///     ("as-like", Play { name: "As You Like It".into(), play_type: "comedy".into() }),
/// ]
/// .into_iter()
/// .collect();
///
/// let invoice = Invoice {
///     customer: "BigCo".into(),
///     performances: vec![
///         Performance { play_id: "hamlet".into(), audience: 31 },
///         Performance { play_id: "as-like".into(), audience: 20 },
///     ],
/// };
///
/// let data = create_statement_data(&invoice, &plays).unwrap();
/// assert_eq!(data.total_amount, 77_000);
/// assert_eq!(data.total_volume_credits, 5);
/// ```
pub fn create_statement_data<'a>(
    invoice: &'a Invoice,
    plays: &'a PlayCatalog,
) -> BillingResult<StatementData<'a>> {
    let performances = invoice
        .performances
        .iter()
        .map(|performance| enrich_performance(performance, plays))
        .collect::<BillingResult<Vec<_>>>()?;

    let total_amount: u64 = performances.iter().map(|p| p.amount).sum();
    let total_volume_credits: u64 = performances.iter().map(|p| p.volume_credits).sum();

    debug!(
        customer = %invoice.customer,
        performances = performances.len(),
        total_amount,
        total_volume_credits,
        "Computed statement data"
    );

    Ok(StatementData {
        customer: &invoice.customer,
        performances,
        total_amount,
        total_volume_credits,
    })
}
