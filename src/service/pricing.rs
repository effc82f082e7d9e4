//! Rate-tier pricing for bookings.
//!
//! The total price is derived once at booking creation and stored, so later
//! rate changes never affect existing bookings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Quotes the total price for a rental interval from the car's rate tiers.
///
/// Up to twelve hours costs the twelve-hour rate, up to a full day costs the
/// daily rate, and anything longer costs the daily rate times the number of
/// started days. Durations are clamped to at least one second so a degenerate
/// interval still quotes the lowest tier; callers validate ordering before
/// quoting.
pub fn quote_total_price(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    twelve_hour_rate: Decimal,
    daily_rate: Decimal,
) -> Decimal {
    let total_seconds = (end_time - start_time).num_seconds().max(1);

    if total_seconds <= 12 * SECONDS_PER_HOUR {
        twelve_hour_rate
    } else if total_seconds <= SECONDS_PER_DAY {
        daily_rate
    } else {
        let days = (total_seconds as u64).div_ceil(SECONDS_PER_DAY as u64);
        Decimal::from(days) * daily_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn rates() -> (Decimal, Decimal) {
        (Decimal::new(4500, 2), Decimal::new(7999, 2)) // 45.00, 79.99
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn short_rental_uses_twelve_hour_rate() {
        let (twelve, daily) = rates();
        let price = quote_total_price(start(), start() + Duration::hours(6), twelve, daily);
        assert_eq!(price, twelve);
    }

    #[test]
    fn exactly_twelve_hours_uses_twelve_hour_rate() {
        let (twelve, daily) = rates();
        let price = quote_total_price(start(), start() + Duration::hours(12), twelve, daily);
        assert_eq!(price, twelve);
    }

    #[test]
    fn up_to_a_day_uses_daily_rate() {
        let (twelve, daily) = rates();
        let price = quote_total_price(start(), start() + Duration::hours(13), twelve, daily);
        assert_eq!(price, daily);

        let price = quote_total_price(start(), start() + Duration::hours(24), twelve, daily);
        assert_eq!(price, daily);
    }

    #[test]
    fn multi_day_rental_charges_started_days() {
        let (twelve, daily) = rates();

        // 25 hours rounds up to two days
        let price = quote_total_price(start(), start() + Duration::hours(25), twelve, daily);
        assert_eq!(price, daily * Decimal::from(2));

        // 3 days and 6 hours rounds up to four days
        let price = quote_total_price(
            start(),
            start() + Duration::days(3) + Duration::hours(6),
            twelve,
            daily,
        );
        assert_eq!(price, daily * Decimal::from(4));
    }

    #[test]
    fn exact_multi_day_rental_does_not_round_up() {
        let (twelve, daily) = rates();
        let price = quote_total_price(start(), start() + Duration::days(3), twelve, daily);
        assert_eq!(price, daily * Decimal::from(3));
    }

    #[test]
    fn degenerate_interval_quotes_lowest_tier() {
        let (twelve, daily) = rates();
        let price = quote_total_price(start(), start(), twelve, daily);
        assert_eq!(price, twelve);
    }
}
