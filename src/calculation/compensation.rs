//! The banded krone-compensation aggregator.
//!
//! Sums the classified minutes across the period, split by the weekend
//! flag, converts each bucket to whole hours, and applies the agreement's
//! krone rates. Weekend and extended-shift compensation carry the
//! contractual divisor of 5.
//!
//! This aggregator is also where the payroll's per-category hour counts
//! come from; the overtime aggregator adds money only.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::classifier::GuardDutyMinutes;
use super::hours::{minutes_to_hours, round_money, whole_hours};
use crate::models::{Artskode, Artskoder, Satser};

/// The contractual divisor applied to weekend and shift compensation.
fn fifth() -> Decimal {
    Decimal::from(5)
}

/// Computes the krone compensation for the whole period.
///
/// Weekday buckets pay out under their own categories; on weekends every
/// band folds into the weekend category on top of the all-day weekend
/// premium. Holiday day-band minutes ride along with the ordinary
/// day-band minutes at the day rate.
///
/// Each category is rounded to 2 decimal places independently, matching
/// how the payroll system books the artskoder.
pub fn calculate_compensation(
    minutes: &BTreeMap<NaiveDate, GuardDutyMinutes>,
    satser: &Satser,
) -> Artskoder {
    let mut weekend_minutes = 0i64;
    let mut weekend_day_minutes = 0i64;
    let mut weekend_evening_minutes = 0i64;
    let mut weekend_morning_minutes = 0i64;
    let mut day_minutes = 0i64;
    let mut evening_minutes = 0i64;
    let mut morning_minutes = 0i64;
    let mut shift_minutes = 0i64;

    for duty in minutes.values() {
        if duty.is_weekend {
            weekend_minutes += duty.weekend_all_day;
            weekend_day_minutes += duty.day_0620 + duty.holiday_day_0620;
            weekend_evening_minutes += duty.evening_2000;
            weekend_morning_minutes += duty.night_0006;
        } else {
            day_minutes += duty.day_0620 + duty.holiday_day_0620;
            evening_minutes += duty.evening_2000;
            morning_minutes += duty.night_0006;
            shift_minutes += duty.shift_bonus;
        }
    }

    let day_hours = minutes_to_hours(day_minutes);
    let evening_hours = minutes_to_hours(evening_minutes);
    let morning_hours = minutes_to_hours(morning_minutes);
    let shift_hours = minutes_to_hours(shift_minutes);
    let weekend_hours = minutes_to_hours(weekend_minutes);

    let weekend_sum = round_money(weekend_hours * satser.helg / fifth())
        + round_money(minutes_to_hours(weekend_day_minutes) * satser.dag)
        + round_money(minutes_to_hours(weekend_evening_minutes) * satser.natt)
        + round_money(minutes_to_hours(weekend_morning_minutes) * satser.natt);

    Artskoder {
        morgen: Artskode {
            sum: round_money(morning_hours * satser.natt),
            hours: whole_hours(morning_hours),
        },
        dag: Artskode {
            sum: round_money(day_hours * satser.dag),
            hours: whole_hours(day_hours),
        },
        kveld: Artskode {
            sum: round_money(evening_hours * satser.natt),
            hours: whole_hours(evening_hours),
        },
        helg: Artskode {
            sum: weekend_sum,
            hours: whole_hours(weekend_hours),
        },
        skift: Artskode {
            sum: round_money(shift_hours * satser.utvidet / fifth()),
            hours: whole_hours(shift_hours),
        },
        utrykning: Artskode::default(),
    }
}
