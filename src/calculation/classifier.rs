//! The per-day duty-minute classifier.
//!
//! For every scheduled day the classifier splits the guard-duty periods
//! into compensation buckets, measured in minutes the employee was on duty
//! but *not* actually working. The order of adjustments matters:
//!
//! 1. raw band minutes (night/evening/day) net of ordinary clockings
//! 2. daylight-saving-time adjustment
//! 3. core-hours exclusion (or the half-holiday split)
//! 4. the legal daily duty cap
//! 5. weekend bucket or the weekday extended-shift bucket
//!
//! Buckets never go negative: every subtraction clamps at zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::special_days::{core_hours, dst_modifier, duty_cap_applies};
use super::time_range::{TimeRange, overlap_minutes};
use crate::error::{EngineError, EngineResult};
use crate::models::{Clocking, DailyTimesheet, DayKind, Period};

/// Minutes in one day.
const FULL_DAY: i64 = 24 * 60;

/// The per-day ledger of guard-duty minutes, split by compensation bucket.
///
/// Built fresh for each scheduled day and consumed immediately by the
/// aggregators; nothing is carried between days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardDutyMinutes {
    /// Unworked duty minutes in [00:00, 06:00).
    pub night_0006: i64,
    /// Unworked duty minutes in [20:00, 24:00).
    pub evening_2000: i64,
    /// Unworked duty minutes in [06:00, 20:00), after the core-hours
    /// exclusion and the daily cap.
    pub day_0620: i64,
    /// The holiday share of the day band: the whole band on a full
    /// holiday, the post-core-hours portion on a half-holiday.
    pub holiday_day_0620: i64,
    /// Unworked duty minutes in the whole day, accrued on Saturdays and
    /// Sundays only.
    pub weekend_all_day: i64,
    /// Unworked duty minutes in [06:00, 07:00) and [17:00, 20:00),
    /// accrued on non-weekend days only.
    pub shift_bonus: i64,
    /// Whether the day was a Saturday or a Sunday.
    pub is_weekend: bool,
}

impl GuardDutyMinutes {
    /// Total minutes across the night, evening and day-band buckets.
    ///
    /// This is the figure the legal daily duty cap is checked against.
    pub fn banded_total(&self) -> i64 {
        self.night_0006 + self.evening_2000 + self.day_0620 + self.holiday_day_0620
    }
}

/// Classifies every scheduled day of the period.
///
/// Fails with [`EngineError::MissingTimesheetDay`] when a scheduled date
/// has no timesheet entry; the reconciliation layer guarantees the keys
/// match, so a hole means the inputs are inconsistent.
pub fn classify_period(
    schedule: &BTreeMap<NaiveDate, Vec<Period>>,
    days: &BTreeMap<NaiveDate, DailyTimesheet>,
) -> EngineResult<BTreeMap<NaiveDate, GuardDutyMinutes>> {
    let mut classified = BTreeMap::new();

    for (&date, periods) in schedule {
        let day = days
            .get(&date)
            .ok_or(EngineError::MissingTimesheetDay { date })?;
        classified.insert(date, classify_day(date, periods, day));
    }

    Ok(classified)
}

/// Classifies one scheduled day into its [`GuardDutyMinutes`] ledger.
///
/// Pure: identical inputs always yield an identical ledger.
///
/// # Example
///
/// A full 24h Saturday duty with no clockings accrues the whole day to the
/// weekend bucket while the night/evening/day buckets keep their raw split:
///
/// ```
/// use vakt_engine::calculation::classify_day;
/// use vakt_engine::models::{DailyTimesheet, DayKind, OrgCodes, Period};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2022, 3, 19).unwrap(); // Saturday
/// let duty = Period {
///     begin: date.and_hms_opt(0, 0, 0).unwrap(),
///     end: date.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap(),
/// };
/// let day = DailyTimesheet {
///     date,
///     scheduled_work_hours: Decimal::ZERO,
///     day_kind: DayKind::Saturday,
///     form_name: "BV".to_string(),
///     base_salary: Decimal::from(500_000),
///     org: OrgCodes::default(),
///     clockings: vec![],
/// };
///
/// let minutes = classify_day(date, &[duty], &day);
/// assert_eq!(minutes.weekend_all_day, 1440);
/// assert_eq!(minutes.night_0006, 360);
/// assert_eq!(minutes.evening_2000, 240);
/// assert_eq!(minutes.day_0620, 840);
/// assert!(minutes.is_weekend);
/// ```
pub fn classify_day(date: NaiveDate, periods: &[Period], day: &DailyTimesheet) -> GuardDutyMinutes {
    let mut duty = GuardDutyMinutes {
        is_weekend: day.day_kind.is_weekend(),
        ..GuardDutyMinutes::default()
    };

    let night_band = band(date, 0, 0, 6, 0);
    let evening_band = band(date, 20, 0, 24, 0);
    let day_band = band(date, 6, 0, 20, 0);

    for period in periods {
        duty.night_0006 += unworked_minutes(period, &night_band, &day.clockings);
        duty.evening_2000 += unworked_minutes(period, &evening_band, &day.clockings);
        duty.day_0620 += unworked_minutes(period, &day_band, &day.clockings);

        if duty.is_weekend {
            let whole_day = band(date, 0, 0, 24, 0);
            duty.weekend_all_day += unworked_minutes(period, &whole_day, &day.clockings);
        } else {
            let morning_shift = band(date, 6, 0, 7, 0);
            let evening_shift = band(date, 17, 0, 20, 0);
            duty.shift_bonus += unworked_minutes(period, &morning_shift, &day.clockings);
            duty.shift_bonus += unworked_minutes(period, &evening_shift, &day.clockings);
        }
    }

    apply_dst_adjustment(date, periods, &night_band, &mut duty);

    if !duty.is_weekend {
        apply_day_band_rules(date, periods, day, &mut duty);
    }

    duty
}

/// The clock change only matters when duty was scheduled inside the
/// affected 00:00-06:00 band.
fn apply_dst_adjustment(
    date: NaiveDate,
    periods: &[Period],
    night_band: &Period,
    duty: &mut GuardDutyMinutes,
) {
    let modifier = dst_modifier(date);
    if modifier == 0 {
        return;
    }
    let has_night_duty = periods
        .iter()
        .any(|p| TimeRange::for_threshold(p, night_band).is_some());
    if !has_night_duty {
        return;
    }

    tracing::debug!(%date, modifier, "applying daylight-saving-time adjustment");
    duty.night_0006 = clamp_at_zero(duty.night_0006 + modifier);
    if duty.is_weekend {
        duty.weekend_all_day = clamp_at_zero(duty.weekend_all_day + modifier);
    }
}

/// Core-hours exclusion, the holiday override and the daily duty cap:
/// everything that reshapes the 06:00-20:00 band on non-weekend days.
fn apply_day_band_rules(
    date: NaiveDate,
    periods: &[Period],
    day: &DailyTimesheet,
    duty: &mut GuardDutyMinutes,
) {
    match day.day_kind {
        DayKind::Holiday => {
            // Nobody is at work on a full holiday, so there is no core
            // window; the whole day band is holiday duty.
            duty.holiday_day_0620 = duty.day_0620;
            duty.day_0620 = 0;
        }
        DayKind::ChristmasEve | DayKind::EasterEve | DayKind::NewYearsEve => {
            // Split the day band at the shortened core window: the part
            // before it is ordinary day duty, the part after it counts as
            // holiday duty, the window itself never accrues.
            let core = core_hours(day.day_kind).expect("half-holidays have core hours");
            let pre_band = band(date, 6, 0, (core.begin / 60) as u32, (core.begin % 60) as u32);
            let post_band = band(date, (core.end / 60) as u32, (core.end % 60) as u32, 20, 0);

            let mut pre = 0;
            let mut post = 0;
            for period in periods {
                pre += unworked_minutes(period, &pre_band, &day.clockings);
                post += unworked_minutes(period, &post_band, &day.clockings);
            }
            duty.day_0620 = pre;
            duty.holiday_day_0620 = post;
        }
        DayKind::Weekday => {
            // Others are at work during core hours to take unforeseen
            // events, so scheduled duty there earns nothing.
            if let Some(core) = core_hours(day.day_kind) {
                let core_band = band(
                    date,
                    (core.begin / 60) as u32,
                    (core.begin % 60) as u32,
                    (core.end / 60) as u32,
                    (core.end % 60) as u32,
                );
                let mut unworked_in_core = 0;
                for period in periods {
                    unworked_in_core += unworked_minutes(period, &core_band, &day.clockings);
                }
                duty.day_0620 = clamp_at_zero(duty.day_0620 - unworked_in_core);
            }
        }
        DayKind::Saturday | DayKind::Sunday => unreachable!("weekend days skip day-band rules"),
    }

    if duty_cap_applies(day.day_kind) {
        apply_duty_cap(day, duty);
    }
}

/// The legal maximum of on-call minutes per day is what is left of the day
/// after the scheduled ordinary work. Excess is removed from the day
/// bucket only.
fn apply_duty_cap(day: &DailyTimesheet, duty: &mut GuardDutyMinutes) {
    let scheduled_minutes = (day.scheduled_work_hours * Decimal::from(60))
        .to_i64()
        .unwrap_or(0);
    let cap = FULL_DAY - scheduled_minutes;

    let excess = duty.banded_total() - cap;
    if excess > 0 {
        duty.day_0620 = clamp_at_zero(duty.day_0620 - excess);
    }
}

/// Duty minutes inside a band, minus the minutes actually worked there.
///
/// Call-out clockings are skipped: they are paid as overtime elsewhere and
/// must not eat into the duty buckets.
fn unworked_minutes(period: &Period, threshold: &Period, clockings: &[Clocking]) -> i64 {
    let Some(duty_range) = TimeRange::for_threshold(period, threshold) else {
        return 0;
    };

    let worked: i64 = clockings
        .iter()
        .filter(|c| !c.is_callout)
        .map(|c| overlap_minutes(TimeRange::from_clocking(c), duty_range))
        .sum();

    clamp_at_zero(duty_range.count() - worked)
}

fn clamp_at_zero(minutes: i64) -> i64 {
    minutes.max(0)
}

/// Builds an absolute threshold period on `date`; an end hour of 24 lands
/// on midnight of the following day.
fn band(date: NaiveDate, begin_h: u32, begin_m: u32, end_h: u32, end_m: u32) -> Period {
    let begin = date
        .and_hms_opt(begin_h, begin_m, 0)
        .expect("valid band start");
    let end = if end_h >= 24 {
        date.succ_opt()
            .expect("valid next day")
            .and_hms_opt(end_h - 24, end_m, 0)
            .expect("valid band end")
    } else {
        date.and_hms_opt(end_h, end_m, 0).expect("valid band end")
    };
    Period { begin, end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrgCodes;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn full_day_duty(d: NaiveDate) -> Vec<Period> {
        vec![Period {
            begin: d.and_hms_opt(0, 0, 0).unwrap(),
            end: d.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap(),
        }]
    }

    fn clocking(d: NaiveDate, in_h: u32, in_m: u32, out_h: u32, out_m: u32) -> Clocking {
        Clocking {
            in_: d.and_hms_opt(in_h, in_m, 0).unwrap(),
            out: d.and_hms_opt(out_h, out_m, 0).unwrap(),
            is_callout: false,
        }
    }

    fn timesheet_day(d: NaiveDate, day_kind: DayKind, clockings: Vec<Clocking>) -> DailyTimesheet {
        let scheduled = if day_kind.is_weekend() {
            Decimal::ZERO
        } else {
            Decimal::from_str("7.75").unwrap()
        };
        DailyTimesheet {
            date: d,
            scheduled_work_hours: scheduled,
            day_kind,
            form_name: "BV 0800-1545 m/Beredskapsvakt, start vakt kl 1600 (2018)".to_string(),
            base_salary: Decimal::from(500_000),
            org: OrgCodes::default(),
            clockings,
        }
    }

    // ==========================================================================
    // Raw bands
    // ==========================================================================
    #[test]
    fn test_weekday_bands_net_of_clockings() {
        // Monday 2022-03-14, 24h duty, worked 07:00-15:00
        let d = date(2022, 3, 14);
        let day = timesheet_day(d, DayKind::Weekday, vec![clocking(d, 7, 0, 15, 0)]);

        let minutes = classify_day(d, &full_day_duty(d), &day);
        assert_eq!(minutes.night_0006, 360);
        assert_eq!(minutes.evening_2000, 240);
        // 840 - 480 worked in band, core hours fully worked
        assert_eq!(minutes.day_0620, 360);
        assert_eq!(minutes.shift_bonus, 240);
        assert!(!minutes.is_weekend);
    }

    #[test]
    fn test_evening_duty_only_touches_evening_band() {
        // Duty 16:00 until midnight
        let d = date(2022, 3, 14);
        let duty = vec![Period {
            begin: d.and_hms_opt(16, 0, 0).unwrap(),
            end: d.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap(),
        }];
        let day = timesheet_day(d, DayKind::Weekday, vec![]);

        let minutes = classify_day(d, &duty, &day);
        assert_eq!(minutes.night_0006, 0);
        assert_eq!(minutes.evening_2000, 240);
        assert_eq!(minutes.day_0620, 240); // 16:00-20:00
        assert_eq!(minutes.shift_bonus, 180); // 17:00-20:00
    }

    #[test]
    fn test_callout_clockings_do_not_reduce_duty_buckets() {
        let d = date(2022, 3, 19); // Saturday
        let mut callout = clocking(d, 2, 0, 4, 0);
        callout.is_callout = true;
        let day = timesheet_day(d, DayKind::Saturday, vec![callout]);

        let minutes = classify_day(d, &full_day_duty(d), &day);
        assert_eq!(minutes.night_0006, 360);
        assert_eq!(minutes.weekend_all_day, 1440);
    }

    // ==========================================================================
    // Weekend
    // ==========================================================================
    #[test]
    fn test_saturday_baseline_keeps_raw_band_split() {
        let d = date(2022, 3, 19);
        let day = timesheet_day(d, DayKind::Saturday, vec![]);

        let minutes = classify_day(d, &full_day_duty(d), &day);
        assert_eq!(minutes.weekend_all_day, 1440);
        assert_eq!(minutes.night_0006, 360);
        assert_eq!(minutes.evening_2000, 240);
        assert_eq!(minutes.day_0620, 840);
        assert_eq!(minutes.shift_bonus, 0);
        assert!(minutes.is_weekend);
    }

    #[test]
    fn test_weekend_skips_core_hours_and_cap() {
        let d = date(2022, 3, 20); // Sunday
        let day = timesheet_day(d, DayKind::Sunday, vec![]);

        let minutes = classify_day(d, &full_day_duty(d), &day);
        // 360 + 240 + 840 = 1440, untouched by the weekday cap
        assert_eq!(minutes.banded_total(), 1440);
    }

    // ==========================================================================
    // Core hours
    // ==========================================================================
    #[test]
    fn test_core_hours_subtracted_when_not_worked() {
        // No clockings at all: the whole 09:00-14:30 window is unworked
        // duty and is excluded from the day bucket, then the cap bites.
        let d = date(2022, 3, 14);
        let day = timesheet_day(d, DayKind::Weekday, vec![]);

        let minutes = classify_day(d, &full_day_duty(d), &day);
        // raw 840 - 330 core = 510; cap 1440-465=975 removes another 135
        assert_eq!(minutes.day_0620, 375);
        assert_eq!(minutes.banded_total(), 975);
    }

    #[test]
    fn test_core_hours_not_subtracted_when_fully_worked() {
        let d = date(2022, 3, 14);
        let day = timesheet_day(d, DayKind::Weekday, vec![clocking(d, 8, 0, 16, 0)]);

        let minutes = classify_day(d, &full_day_duty(d), &day);
        // 840 - 480 worked = 360, core window fully covered by work
        assert_eq!(minutes.day_0620, 360);
    }

    // ==========================================================================
    // Daily cap
    // ==========================================================================
    #[test]
    fn test_cap_removes_excess_from_day_bucket_only() {
        let d = date(2022, 3, 14);
        let day = timesheet_day(d, DayKind::Weekday, vec![]);

        let minutes = classify_day(d, &full_day_duty(d), &day);
        assert_eq!(minutes.night_0006, 360);
        assert_eq!(minutes.evening_2000, 240);
        assert_eq!(minutes.day_0620, 375);
    }

    #[test]
    fn test_cap_clamps_day_bucket_at_zero() {
        // Scheduled work hours so long that the cap exceeds even the
        // night+evening minutes; the day bucket must clamp, not go negative.
        let d = date(2022, 3, 14);
        let mut day = timesheet_day(d, DayKind::Weekday, vec![]);
        day.scheduled_work_hours = Decimal::from(15);

        let minutes = classify_day(d, &full_day_duty(d), &day);
        assert_eq!(minutes.day_0620, 0);
        assert_eq!(minutes.night_0006, 360);
        assert_eq!(minutes.evening_2000, 240);
    }

    #[test]
    fn test_no_cap_when_duty_is_short() {
        let d = date(2022, 3, 14);
        let duty = vec![Period {
            begin: d.and_hms_opt(16, 0, 0).unwrap(),
            end: d.and_hms_opt(20, 0, 0).unwrap(),
        }];
        let day = timesheet_day(d, DayKind::Weekday, vec![]);

        let minutes = classify_day(d, &duty, &day);
        assert_eq!(minutes.day_0620, 240);
    }

    // ==========================================================================
    // DST
    // ==========================================================================
    #[test]
    fn test_spring_clock_change_subtracts_an_hour() {
        let d = date(2022, 3, 27); // last Sunday of March
        let day = timesheet_day(d, DayKind::Sunday, vec![]);

        let minutes = classify_day(d, &full_day_duty(d), &day);
        assert_eq!(minutes.night_0006, 300);
        assert_eq!(minutes.weekend_all_day, 1380);
    }

    #[test]
    fn test_autumn_clock_change_adds_an_hour() {
        let d = date(2022, 10, 30); // last Sunday of October
        let day = timesheet_day(d, DayKind::Sunday, vec![]);

        let minutes = classify_day(d, &full_day_duty(d), &day);
        assert_eq!(minutes.night_0006, 420);
        assert_eq!(minutes.weekend_all_day, 1500);
    }

    #[test]
    fn test_dst_needs_duty_in_the_night_band() {
        // Duty starts at 16:00, far from the clock change window
        let d = date(2022, 3, 27);
        let duty = vec![Period {
            begin: d.and_hms_opt(16, 0, 0).unwrap(),
            end: d.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap(),
        }];
        let day = timesheet_day(d, DayKind::Sunday, vec![]);

        let minutes = classify_day(d, &duty, &day);
        assert_eq!(minutes.night_0006, 0);
        assert_eq!(minutes.weekend_all_day, 480);
    }

    // ==========================================================================
    // Holidays
    // ==========================================================================
    #[test]
    fn test_full_holiday_moves_day_band_into_holiday_bucket() {
        // 2022-05-26 was Ascension Day, a Thursday
        let d = date(2022, 5, 26);
        let day = timesheet_day(d, DayKind::Holiday, vec![]);

        let minutes = classify_day(d, &full_day_duty(d), &day);
        assert_eq!(minutes.day_0620, 0);
        assert_eq!(minutes.holiday_day_0620, 840);
        assert_eq!(minutes.night_0006, 360);
        assert_eq!(minutes.evening_2000, 240);
        assert!(!minutes.is_weekend);
    }

    #[test]
    fn test_christmas_eve_splits_day_band_at_shortened_core() {
        // 2021-12-24 was a Friday
        let d = date(2021, 12, 24);
        let mut day = timesheet_day(d, DayKind::ChristmasEve, vec![]);
        day.scheduled_work_hours = Decimal::from(4); // 08:00-12:00

        let minutes = classify_day(d, &full_day_duty(d), &day);
        // pre-core 06:00-08:00, post-core 12:00-20:00, core excluded
        assert_eq!(minutes.day_0620, 120);
        assert_eq!(minutes.holiday_day_0620, 480);
        // cap 1440 - 240 = 1200 == 360+240+120+480, nothing removed
        assert_eq!(minutes.banded_total(), 1200);
    }

    #[test]
    fn test_new_years_eve_uses_its_own_core_window() {
        // 2021-12-31 was a Friday
        let d = date(2021, 12, 31);
        let mut day = timesheet_day(d, DayKind::NewYearsEve, vec![]);
        day.scheduled_work_hours = Decimal::from(2); // 10:00-12:00

        let minutes = classify_day(d, &full_day_duty(d), &day);
        // pre-core 06:00-10:00, post-core 12:00-20:00
        assert_eq!(minutes.day_0620, 240);
        assert_eq!(minutes.holiday_day_0620, 480);
    }

    #[test]
    fn test_half_holiday_split_respects_clockings() {
        let d = date(2021, 12, 24);
        let mut day = timesheet_day(
            d,
            DayKind::ChristmasEve,
            vec![clocking(d, 6, 0, 13, 0)],
        );
        day.scheduled_work_hours = Decimal::from(4);

        let minutes = classify_day(d, &full_day_duty(d), &day);
        // Worked 06:00-13:00 covers all of pre-core and the first hour
        // after the core window.
        assert_eq!(minutes.day_0620, 0);
        assert_eq!(minutes.holiday_day_0620, 420);
    }

    // ==========================================================================
    // Period classification
    // ==========================================================================
    #[test]
    fn test_classify_period_is_idempotent() {
        let d = date(2022, 3, 14);
        let mut schedule = BTreeMap::new();
        schedule.insert(d, full_day_duty(d));
        let mut days = BTreeMap::new();
        days.insert(d, timesheet_day(d, DayKind::Weekday, vec![clocking(d, 7, 0, 15, 0)]));

        let first = classify_period(&schedule, &days).unwrap();
        let second = classify_period(&schedule, &days).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_period_fails_on_missing_timesheet_day() {
        let d = date(2022, 3, 14);
        let mut schedule = BTreeMap::new();
        schedule.insert(d, full_day_duty(d));
        let days = BTreeMap::new();

        let err = classify_period(&schedule, &days).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingTimesheetDay { date } if date == d
        ));
    }
}
