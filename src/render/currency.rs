//! USD currency formatting.

use rust_decimal::Decimal;

/// Formats an amount in cents as US dollars.
///
/// The result has a leading `$`, comma-grouped thousands and exactly two
/// fraction digits.
///
/// # Examples
///
/// ```
/// use theater_billing::render::usd;
///
/// assert_eq!(usd(173_000), "$1,730.00");
/// assert_eq!(usd(5), "$0.05");
/// ```
pub fn usd(cents: u64) -> String {
    let dollars = Decimal::from_i128_with_scale(i128::from(cents), 2);
    let plain = format!("{:.2}", dollars);
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!("${}.{}", group_thousands(whole), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
