//! The guard-duty overtime aggregator.
//!
//! On top of the krone compensation, unworked duty hours earn a share of
//! salary-based overtime: 50% overtime for weekday daytime, 100% for
//! weekday nights and for weekends, all divided by the contractual 5. The
//! hourly overtime base is the salary over the agreement's 1850-hour year.
//!
//! Called once per salary tier; the orchestrator splits the period when
//! the salary changes mid-period.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::classifier::GuardDutyMinutes;
use super::hours::{minutes_to_hours, round_money};
use crate::models::{Artskode, Artskoder};

/// Hours in the agreement's working year, the overtime denominator.
const YEARLY_WORK_HOURS: i64 = 1850;

/// Computes salary-based overtime for one salary tier.
///
/// Returns money only: the duty hours are already reported by the
/// compensation aggregator, and double-counting them would inflate the
/// payroll's hour columns.
///
/// # Example
///
/// ```
/// use vakt_engine::calculation::{calculate_overtime, GuardDutyMinutes};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
/// use std::str::FromStr;
///
/// let date = NaiveDate::from_ymd_opt(2022, 3, 14).unwrap();
/// let mut minutes = BTreeMap::new();
/// minutes.insert(
///     date,
///     GuardDutyMinutes {
///         day_0620: 360,
///         ..GuardDutyMinutes::default()
///     },
/// );
///
/// let result = calculate_overtime(&minutes, Decimal::from(500_000));
/// // 6h × (500000/1850 × 1.5) / 5 = 486.49
/// assert_eq!(result.dag.sum, Decimal::from_str("486.49").unwrap());
/// assert_eq!(result.dag.hours, 0);
/// ```
pub fn calculate_overtime(
    minutes: &BTreeMap<NaiveDate, GuardDutyMinutes>,
    salary: Decimal,
) -> Artskoder {
    let mut weekend_minutes = 0i64;
    let mut day_minutes = 0i64;
    let mut evening_minutes = 0i64;
    let mut morning_minutes = 0i64;

    for duty in minutes.values() {
        if duty.is_weekend {
            weekend_minutes +=
                duty.day_0620 + duty.holiday_day_0620 + duty.evening_2000 + duty.night_0006;
        } else {
            day_minutes += duty.day_0620 + duty.holiday_day_0620;
            evening_minutes += duty.evening_2000;
            morning_minutes += duty.night_0006;
        }
    }

    let hourly_base = salary / Decimal::from(YEARLY_WORK_HOURS);
    let ots_50 = hourly_base * Decimal::new(15, 1);
    let ots_100 = hourly_base * Decimal::from(2);
    let fifth = Decimal::from(5);

    let money = |bucket_minutes: i64, rate: Decimal| {
        round_money(minutes_to_hours(bucket_minutes) * rate / fifth)
    };

    Artskoder {
        morgen: Artskode {
            sum: money(morning_minutes, ots_100),
            hours: 0,
        },
        dag: Artskode {
            sum: money(day_minutes, ots_50),
            hours: 0,
        },
        kveld: Artskode {
            sum: money(evening_minutes, ots_100),
            hours: 0,
        },
        helg: Artskode {
            sum: money(weekend_minutes, ots_100),
            hours: 0,
        },
        skift: Artskode::default(),
        utrykning: Artskode::default(),
    }
}
