//! The callout aggregator.
//!
//! A guard called in to work on a Saturday or Sunday is paid a separate
//! callout supplement for the worked time, four fifths of the weekend
//! krone rate per hour. Only clockings flagged as callouts count, and
//! only the part of them that overlaps the duty roster.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::hours::{minutes_to_hours, round_money, whole_hours};
use super::time_range::{overlap_minutes, TimeRange};
use crate::models::{Artskode, Artskoder, DailyTimesheet, Period, Satser};

/// Computes the weekend callout supplement.
///
/// Walks every callout clocking on a Saturday or Sunday and counts the
/// minutes it overlaps that day's duty periods, clipped to the calendar
/// day. Days in the timesheet without a matching roster entry simply
/// contribute nothing.
///
/// # Example
///
/// ```
/// use vakt_engine::calculation::calculate_callout;
/// use vakt_engine::models::{
///     Clocking, DailyTimesheet, DayKind, OrgCodes, Period, Satser,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
/// use std::str::FromStr;
///
/// let date = NaiveDate::from_ymd_opt(2022, 9, 24).unwrap(); // a Saturday
/// let mut schedule = BTreeMap::new();
/// schedule.insert(
///     date,
///     vec![Period {
///         begin: date.and_hms_opt(0, 0, 0).unwrap(),
///         end: date.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap(),
///     }],
/// );
/// let mut days = BTreeMap::new();
/// days.insert(
///     date,
///     DailyTimesheet {
///         date,
///         scheduled_work_hours: Decimal::ZERO,
///         day_kind: DayKind::Saturday,
///         form_name: "Helgedag".to_string(),
///         base_salary: Decimal::from(500_000),
///         org: OrgCodes::default(),
///         clockings: vec![Clocking {
///             in_: date.and_hms_opt(20, 30, 0).unwrap(),
///             out: date.and_hms_opt(22, 30, 0).unwrap(),
///             is_callout: true,
///         }],
///     },
/// );
/// let satser = Satser {
///     dag: Decimal::from(15),
///     natt: Decimal::from(25),
///     helg: Decimal::from(65),
///     utvidet: Decimal::from(25),
/// };
///
/// let result = calculate_callout(&schedule, &days, &satser);
/// // 2h × 65 × 0.8 = 104.00
/// assert_eq!(result.utrykning.sum, Decimal::from_str("104.00").unwrap());
/// assert_eq!(result.utrykning.hours, 2);
/// ```
pub fn calculate_callout(
    schedule: &BTreeMap<NaiveDate, Vec<Period>>,
    days: &BTreeMap<NaiveDate, DailyTimesheet>,
    satser: &Satser,
) -> Artskoder {
    let mut callout_minutes = 0i64;

    for (date, sheet) in days {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        let Some(periods) = schedule.get(date) else {
            continue;
        };

        for clocking in &sheet.clockings {
            if !clocking.is_callout {
                continue;
            }
            let work_range = TimeRange::from_clocking(clocking);

            for duty_period in periods {
                // Clip the duty period to this calendar day before
                // overlapping it with the clocking.
                let whole_day = Period {
                    begin: date
                        .and_hms_opt(0, 0, 0)
                        .expect("midnight is a valid time"),
                    end: date
                        .succ_opt()
                        .expect("date range stays within chrono's bounds")
                        .and_hms_opt(0, 0, 0)
                        .expect("midnight is a valid time"),
                };
                if let Some(duty_range) = TimeRange::for_threshold(duty_period, &whole_day) {
                    callout_minutes += overlap_minutes(work_range, duty_range);
                }
            }
        }
    }

    let hours = minutes_to_hours(callout_minutes);
    let four_fifths = Decimal::new(8, 1);
    Artskoder {
        utrykning: Artskode {
            sum: round_money(hours * satser.helg * four_fifths),
            hours: whole_hours(hours),
        },
        ..Artskoder::default()
    }
}
