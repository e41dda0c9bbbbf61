//! Performance fee calculation.
//!
//! Fees are computed in cents from the play's genre and the audience size.
//!
//! | Genre   | Base                  | Surcharge                                              |
//! |---------|-----------------------|--------------------------------------------------------|
//! | tragedy | 40000                 | `1000 * (a - 30)` when `a > 30`                        |
//! | comedy  | 30000 + `300 * a`     | `10000 + 500 * (a - 20)` when `a > 20`                 |
//! | history | 10000 + `1500 * a`    | none                                                   |

use crate::models::Genre;

/// Flat tragedy fee in cents.
pub const TRAGEDY_BASE_AMOUNT: u64 = 40_000;

/// Audience size above which tragedies are surcharged per head.
pub const TRAGEDY_AUDIENCE_THRESHOLD: u32 = 30;

/// Flat comedy fee in cents.
pub const COMEDY_BASE_AMOUNT: u64 = 30_000;

/// Audience size above which comedies carry the large-audience surcharge.
pub const COMEDY_AUDIENCE_THRESHOLD: u32 = 20;

/// Flat history fee in cents.
pub const HISTORY_BASE_AMOUNT: u64 = 10_000;

/// Calculates the fee for a single performance, in cents.
///
/// # Examples
///
/// ```
/// use theater_billing::calculation::amount_for;
/// use theater_billing::models::Genre;
///
/// assert_eq!(amount_for(Genre::Tragedy, 31), 41_000);
/// assert_eq!(amount_for(Genre::Comedy, 21), 46_800);
/// assert_eq!(amount_for(Genre::History, 20), 40_000);
/// ```
pub fn amount_for(genre: Genre, audience: u32) -> u64 {
    let audience_count = u64::from(audience);

    match genre {
        Genre::Tragedy => {
            let mut result = TRAGEDY_BASE_AMOUNT;
            if audience > TRAGEDY_AUDIENCE_THRESHOLD {
                result += 1_000 * u64::from(audience - TRAGEDY_AUDIENCE_THRESHOLD);
            }
            result
        }
        Genre::Comedy => {
            let mut result = COMEDY_BASE_AMOUNT + 300 * audience_count;
            if audience > COMEDY_AUDIENCE_THRESHOLD {
                result += 10_000 + 500 * u64::from(audience - COMEDY_AUDIENCE_THRESHOLD);
            }
            result
        }
        Genre::History => HISTORY_BASE_AMOUNT + 1_500 * audience_count,
    }
}
