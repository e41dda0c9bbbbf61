//! Plain text statement rendering.

use std::fmt::Write;

use crate::models::StatementData;

use super::currency::usd;

/// Renders statement data as plain text.
///
/// One indented line per performance in invoice order, followed by the
/// total amount and the earned points.
pub fn render_plain_text(data: &StatementData<'_>) -> String {
    let mut result = format!("청구 내역 (고객명: {})\n", data.customer);

    for perf in &data.performances {
        let _ = writeln!(
            result,
            "  {}: {} ({}석)",
            perf.play.name,
            usd(perf.amount),
            perf.audience()
        );
    }

    let _ = writeln!(result, "총액: {}", usd(data.total_amount));
    let _ = writeln!(result, "적립 포인트: {}점", data.total_volume_credits);
    result
}
