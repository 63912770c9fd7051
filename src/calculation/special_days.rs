//! Calendar rules keyed by the kind of day.
//!
//! The agreement attaches three things to the calendar: the core-hours
//! window during which guard-duty pay never accrues, the exemptions from
//! the daily duty cap, and the daylight-saving-time adjustment on the two
//! clock-change Sundays. All of them live here, keyed by [`DayKind`] or by
//! date, so the classifier never constructs band literals itself.

use chrono::{Datelike, NaiveDate, Weekday};

use super::TimeRange;
use crate::models::DayKind;

/// Minutes subtracted from the night bucket on the last Sunday of March.
pub const DST_SPRING_MODIFIER: i64 = -60;
/// Minutes added to the night bucket on the last Sunday of October.
pub const DST_AUTUMN_MODIFIER: i64 = 60;

/// The core-hours window for a kind of day, if it has one.
///
/// During core hours on-site presence is assumed and guard-duty pay does
/// not accrue, even when duty is scheduled. Weekend days and full holidays
/// have no core hours at all.
///
/// # Example
///
/// ```
/// use vakt_engine::calculation::{core_hours, TimeRange};
/// use vakt_engine::models::DayKind;
///
/// assert_eq!(
///     core_hours(DayKind::Weekday),
///     Some(TimeRange { begin: 540, end: 870 }) // 09:00-14:30
/// );
/// assert_eq!(core_hours(DayKind::Sunday), None);
/// ```
pub fn core_hours(day_kind: DayKind) -> Option<TimeRange> {
    match day_kind {
        DayKind::Weekday => Some(TimeRange {
            begin: 9 * 60,
            end: 14 * 60 + 30,
        }),
        DayKind::ChristmasEve | DayKind::EasterEve => Some(TimeRange {
            begin: 8 * 60,
            end: 12 * 60,
        }),
        DayKind::NewYearsEve => Some(TimeRange {
            begin: 10 * 60,
            end: 12 * 60,
        }),
        DayKind::Saturday | DayKind::Sunday | DayKind::Holiday => None,
    }
}

/// Whether the daily duty cap applies on this kind of day.
///
/// The legal cap limits on-call minutes on days with scheduled ordinary
/// work; Saturdays, Sundays and full holidays are exempt.
pub fn duty_cap_applies(day_kind: DayKind) -> bool {
    !day_kind.is_weekend() && !day_kind.is_full_holiday()
}

/// The daylight-saving-time adjustment for a date, in minutes.
///
/// The clock change happens inside the 00:00-06:00 band: the last Sunday
/// of March is an hour short (−60), the last Sunday of October an hour
/// long (+60). Every other date returns 0.
///
/// # Example
///
/// ```
/// use vakt_engine::calculation::dst_modifier;
/// use chrono::NaiveDate;
///
/// let spring = NaiveDate::from_ymd_opt(2022, 3, 27).unwrap();
/// assert_eq!(dst_modifier(spring), -60);
///
/// let autumn = NaiveDate::from_ymd_opt(2022, 10, 30).unwrap();
/// assert_eq!(dst_modifier(autumn), 60);
///
/// let ordinary = NaiveDate::from_ymd_opt(2022, 3, 20).unwrap();
/// assert_eq!(dst_modifier(ordinary), 0);
/// ```
pub fn dst_modifier(date: NaiveDate) -> i64 {
    if date.weekday() != Weekday::Sun {
        return 0;
    }
    let is_last_of_month = date.day() + 7 > 31;

    match date.month() {
        3 if is_last_of_month => DST_SPRING_MODIFIER,
        10 if is_last_of_month => DST_AUTUMN_MODIFIER,
        _ => 0,
    }
}
