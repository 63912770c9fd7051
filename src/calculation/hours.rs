//! Rounding conventions for hours and money.
//!
//! The agreement pays whole hours per bucket, rounded half away from zero,
//! and reports currency with 2 decimal places under the same midpoint rule.
//! Truncation would systematically underpay, so both conversions go through
//! these two helpers and nowhere else.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Converts bucket minutes to whole hours, rounding half away from zero.
pub(crate) fn minutes_to_hours(minutes: i64) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// The `i64` view of an already-rounded hour count.
pub(crate) fn whole_hours(hours: Decimal) -> i64 {
    hours.to_i64().unwrap_or(0)
}

/// Rounds a currency amount to 2 decimal places, half away from zero.
pub(crate) fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
