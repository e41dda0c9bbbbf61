//! HTML statement rendering.

use std::borrow::Cow;
use std::fmt::Write;

use crate::models::StatementData;

use super::currency::usd;

/// Renders statement data as an HTML fragment.
///
/// Carries the same lines as the plain text rendering wrapped in
/// `<h1>`, `<ul>`/`<li>` and `<p><em>` elements. Customer and play names
/// are HTML-escaped.
pub fn render_html(data: &StatementData<'_>) -> String {
    let mut result = format!(
        "<h1>청구 내역 (고객명: {})</h1>\n<ul>\n",
        escape_html(data.customer)
    );

    for perf in &data.performances {
        let _ = writeln!(
            result,
            "<li>{}: {} ({}석)</li>",
            escape_html(&perf.play.name),
            usd(perf.amount),
            perf.audience()
        );
    }

    let _ = writeln!(result, "</ul>\n<p>총액: <em>{}</em></p>", usd(data.total_amount));
    let _ = writeln!(
        result,
        "<p>적립 포인트: <em>{}</em>점</p>",
        data.total_volume_credits
    );
    result
}

/// Escapes the characters that are significant in HTML text and attributes.
pub(crate) fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
