//! Reconciled timesheet models.
//!
//! The timesheet is the second input to a calculation. It is produced by an
//! external reconciliation component that turns raw clock-badge events into
//! [`Clocking`] intervals with the call-out flag correctly set, and maps the
//! upstream system's working-day labels onto the closed [`DayKind`] enum.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Satser;

/// One actually-worked clock interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clocking {
    /// Clock-in timestamp.
    #[serde(rename = "in")]
    pub in_: NaiveDateTime,
    /// Clock-out timestamp.
    #[serde(rename = "out")]
    pub out: NaiveDateTime,
    /// True when this interval is overtime triggered by a guard-duty
    /// activation (utrykning). Call-out intervals do not reduce the duty
    /// buckets; they are compensated separately.
    #[serde(default)]
    pub is_callout: bool,
}

/// The kind of day, as reckoned by the labor agreement.
///
/// This is a closed set: a new calendar form in the upstream timesheet
/// system must be mapped here explicitly instead of silently falling
/// through to weekday behavior.
///
/// # Example
///
/// ```
/// use vakt_engine::models::DayKind;
///
/// assert!(DayKind::Saturday.is_weekend());
/// assert!(DayKind::Holiday.is_full_holiday());
/// assert!(!DayKind::ChristmasEve.is_full_holiday());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// An ordinary working day (Monday through Friday).
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
    /// A full public holiday falling on a weekday.
    Holiday,
    /// Christmas Eve: a half-holiday with core hours 08:00-12:00.
    ChristmasEve,
    /// Easter Eve: a half-holiday with core hours 08:00-12:00.
    EasterEve,
    /// New Year's Eve: a half-holiday with core hours 10:00-12:00.
    NewYearsEve,
}

impl DayKind {
    /// Whether this day is a Saturday or a Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayKind::Saturday | DayKind::Sunday)
    }

    /// Whether this day is a full public holiday (not a half-holiday).
    pub fn is_full_holiday(self) -> bool {
        matches!(self, DayKind::Holiday)
    }

    /// Whether this day is one of the shortened half-holidays.
    pub fn is_half_holiday(self) -> bool {
        matches!(
            self,
            DayKind::ChristmasEve | DayKind::EasterEve | DayKind::NewYearsEve
        )
    }

    /// Maps a working-day label from the upstream timesheet system.
    ///
    /// Returns `None` for labels the agreement does not recognize, so the
    /// reconciliation layer can reject them instead of defaulting.
    ///
    /// # Example
    ///
    /// ```
    /// use vakt_engine::models::DayKind;
    ///
    /// assert_eq!(DayKind::from_label("Virkedag"), Some(DayKind::Weekday));
    /// assert_eq!(DayKind::from_label("Julaften 0800-1200 *"), Some(DayKind::ChristmasEve));
    /// assert_eq!(DayKind::from_label("Fridag"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<DayKind> {
        match label {
            "Virkedag" => Some(DayKind::Weekday),
            "Lørdag" => Some(DayKind::Saturday),
            "Søndag" => Some(DayKind::Sunday),
            "Helligdag" => Some(DayKind::Holiday),
            "Julaften 0800-1200 *" => Some(DayKind::ChristmasEve),
            "Påskeaften 0800-1200 *" => Some(DayKind::EasterEve),
            "Nyttårsaften 1000-1200 *" => Some(DayKind::NewYearsEve),
            _ => None,
        }
    }
}

/// Accounting codes the compensation is reported under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgCodes {
    /// Cost center.
    pub koststed: String,
    /// Purpose code.
    pub formaal: String,
    /// Activity code.
    pub aktivitet: String,
}

/// One day of the reconciled timesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTimesheet {
    /// The date this entry covers.
    pub date: NaiveDate,
    /// Scheduled ordinary working hours for the day (e.g. 7.75).
    pub scheduled_work_hours: Decimal,
    /// The kind of day under the agreement.
    pub day_kind: DayKind,
    /// The duty-form classification code the day is reported under. Must be
    /// identical for every day in the period.
    pub form_name: String,
    /// The employee's annual base salary in effect on this day. Overtime
    /// rates derive from it via the agreement's 1850-hour divisor.
    pub base_salary: Decimal,
    /// Accounting codes for the day.
    pub org: OrgCodes,
    /// Actually-worked clock intervals.
    #[serde(default)]
    pub clockings: Vec<Clocking>,
}

/// The full reconciled timesheet for one employee over one pay period.
///
/// Carries the identity and approver metadata that ends up on the payroll,
/// the per-day entries, and the agreement rate table in effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledTimesheet {
    /// Employee identifier; must match the duty plan.
    pub ident: String,
    /// Resource identifier in the timesheet system.
    pub resource_id: String,
    /// Identifier of the approving manager.
    pub approver_id: String,
    /// Display name of the approving manager.
    pub approver_name: String,
    /// Ordered per-day entries.
    pub days: BTreeMap<NaiveDate, DailyTimesheet>,
    /// The agreement rate table in effect for the period.
    pub satser: Satser,
}
