//! Minute-of-day interval arithmetic.
//!
//! Every compensation rule in the agreement is expressed over clock bands
//! within a single duty day, so the whole classifier works on ranges of
//! minutes-of-day. A range belonging to a period that crosses midnight is
//! extended past 1440 instead of wrapping.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::{Clocking, Period};

/// A half-open range of minutes-of-day.
///
/// The range is assumed ascending (`begin <= end`); this is not enforced.
/// `end` may exceed 1440 when the underlying period crosses midnight.
///
/// # Example
///
/// ```
/// use vakt_engine::calculation::TimeRange;
///
/// let night = TimeRange { begin: 0, end: 360 };
/// assert_eq!(night.count(), 360);
/// assert_eq!(night.to_string(), "(0...360)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// First minute of the range.
    pub begin: i32,
    /// One past the last minute of the range.
    pub end: i32,
}

impl TimeRange {
    /// The length of the range in minutes.
    pub fn count(&self) -> i64 {
        i64::from(self.end - self.begin)
    }

    /// Converts a clock interval into a minute-of-day range.
    ///
    /// Seconds are truncated. An interval that crosses midnight gets its
    /// end extended past 1440 so it stays ascending.
    ///
    /// # Example
    ///
    /// ```
    /// use vakt_engine::calculation::TimeRange;
    /// use vakt_engine::models::Clocking;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2022, 3, 19).unwrap();
    /// let clocking = Clocking {
    ///     in_: date.and_hms_opt(22, 15, 30).unwrap(),
    ///     out: date.succ_opt().unwrap().and_hms_opt(1, 30, 0).unwrap(),
    ///     is_callout: true,
    /// };
    /// let range = TimeRange::from_clocking(&clocking);
    /// assert_eq!(range, TimeRange { begin: 1335, end: 1530 });
    /// ```
    pub fn from_clocking(clocking: &Clocking) -> TimeRange {
        let begin = minutes_of_day(clocking.in_);
        let mut end = minutes_of_day(clocking.out);
        if clocking.out.date() > clocking.in_.date() {
            end += 24 * 60;
        }
        TimeRange { begin, end }
    }

    /// Clips a compensation threshold to the portion covered by a duty
    /// period, as a minute-of-day range.
    ///
    /// Returns `None` when the period lies outside the threshold. The
    /// boundary rule is strict: a period that only touches the threshold
    /// boundary (`period.begin == threshold.end` or
    /// `period.end == threshold.begin`) has no coverage at all, not a
    /// zero-length one.
    ///
    /// # Example
    ///
    /// ```
    /// use vakt_engine::calculation::TimeRange;
    /// use vakt_engine::models::Period;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2022, 3, 14).unwrap();
    /// // Duty 16:00 until 07:00 the next morning
    /// let duty = Period {
    ///     begin: date.and_hms_opt(16, 0, 0).unwrap(),
    ///     end: date.succ_opt().unwrap().and_hms_opt(7, 0, 0).unwrap(),
    /// };
    /// // The evening band 20:00-24:00
    /// let threshold = Period {
    ///     begin: date.and_hms_opt(20, 0, 0).unwrap(),
    ///     end: date.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap(),
    /// };
    /// assert_eq!(
    ///     TimeRange::for_threshold(&duty, &threshold),
    ///     Some(TimeRange { begin: 1200, end: 1440 })
    /// );
    /// ```
    pub fn for_threshold(period: &Period, threshold: &Period) -> Option<TimeRange> {
        if period.begin >= threshold.end || period.end <= threshold.begin {
            return None;
        }

        let mut range = TimeRange {
            begin: minutes_of_day(threshold.begin),
            end: minutes_of_day(threshold.end),
        };
        if threshold.end.date() > threshold.begin.date() {
            range.end = 24 * 60 + threshold.end.minute() as i32;
        }

        // Duty may start later than the band opens
        if period.begin > threshold.begin {
            range.begin = minutes_of_day(period.begin);
        }
        // ...or end before the band closes
        if period.end < threshold.end {
            if period.end.date() > period.begin.date() {
                range.end = 24 * 60 + period.end.minute() as i32;
            } else {
                range.end = minutes_of_day(period.end);
            }
        }

        Some(range)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}...{})", self.begin, self.end)
    }
}

/// Returns the number of minutes two ranges overlap, 0 when disjoint.
///
/// Touching boundaries count as disjoint.
///
/// # Example
///
/// ```
/// use vakt_engine::calculation::{overlap_minutes, TimeRange};
///
/// let work = TimeRange { begin: 420, end: 900 };  // 07:00-15:00
/// let day = TimeRange { begin: 360, end: 1200 };  // 06:00-20:00
/// assert_eq!(overlap_minutes(work, day), 480);
///
/// let night = TimeRange { begin: 0, end: 360 };
/// assert_eq!(overlap_minutes(work, night), 0);
/// ```
pub fn overlap_minutes(a: TimeRange, b: TimeRange) -> i64 {
    if a.end <= b.begin || a.begin >= b.end {
        return 0;
    }

    let clipped = TimeRange {
        begin: a.begin.max(b.begin),
        end: a.end.min(b.end),
    };
    clipped.count()
}

fn minutes_of_day(t: NaiveDateTime) -> i32 {
    (t.hour() * 60 + t.minute()) as i32
}
