//! Volume credit (loyalty point) calculation.
//!
//! Every performance earns one credit per attendee above 30. Comedies earn
//! an extra credit per five attendees, and histories earn a flat bonus once
//! the audience exceeds 20.

use crate::models::Genre;

/// Audience size above which every performance earns credits.
pub const BASE_CREDIT_THRESHOLD: u32 = 30;

/// Comedies earn one extra credit per this many attendees.
pub const COMEDY_CREDIT_DIVISOR: u32 = 5;

/// Audience size above which histories earn the flat bonus.
pub const HISTORY_BONUS_THRESHOLD: u32 = 20;

/// Flat bonus credits for a well-attended history.
pub const HISTORY_BONUS_CREDITS: u64 = 10;

/// Calculates the volume credits earned by a single performance.
///
/// # Examples
///
/// ```
/// use theater_billing::calculation::volume_credits_for;
/// use theater_billing::models::Genre;
///
/// assert_eq!(volume_credits_for(Genre::Tragedy, 31), 1);
/// assert_eq!(volume_credits_for(Genre::Comedy, 20), 4);
/// assert_eq!(volume_credits_for(Genre::History, 21), 10);
/// ```
pub fn volume_credits_for(genre: Genre, audience: u32) -> u64 {
    let mut result = u64::from(audience.saturating_sub(BASE_CREDIT_THRESHOLD));

    match genre {
        Genre::Comedy => result += u64::from(audience / COMEDY_CREDIT_DIVISOR),
        Genre::History if audience > HISTORY_BONUS_THRESHOLD => result += HISTORY_BONUS_CREDITS,
        Genre::History | Genre::Tragedy => {}
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_house_earns_nothing() {
        assert_eq!(volume_credits_for(Genre::Tragedy, 0), 0);
        assert_eq!(volume_credits_for(Genre::Comedy, 0), 0);
        assert_eq!(volume_credits_for(Genre::History, 0), 0);
    }

    #[test]
    fn test_tragedy_earns_base_credits_only() {
        assert_eq!(volume_credits_for(Genre::Tragedy, 30), 0);
        assert_eq!(volume_credits_for(Genre::Tragedy, 31), 1);
        assert_eq!(volume_credits_for(Genre::Tragedy, 55), 25);
    }

    #[test]
    fn test_comedy_earns_one_per_five_attendees() {
        assert_eq!(volume_credits_for(Genre::Comedy, 20), 4);
        assert_eq!(volume_credits_for(Genre::Comedy, 21), 4);
        assert_eq!(volume_credits_for(Genre::Comedy, 24), 4);
        assert_eq!(volume_credits_for(Genre::Comedy, 25), 5);
    }

    #[test]
    fn test_comedy_combines_base_and_bonus() {
        // max(35 - 30, 0) + floor(35 / 5)
        assert_eq!(volume_credits_for(Genre::Comedy, 35), 12);
    }

    #[test]
    fn test_history_bonus_requires_more_than_twenty() {
        assert_eq!(volume_credits_for(Genre::History, 20), 0);
        assert_eq!(volume_credits_for(Genre::History, 21), 10);
    }

    #[test]
    fn test_history_combines_base_and_bonus() {
        assert_eq!(volume_credits_for(Genre::History, 40), 20);
    }
}
