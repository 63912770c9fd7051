//! Duty plan model: the schedule of guard-duty periods.
//!
//! The plan is produced by the scheduling frontend and is one of the two
//! inputs to a calculation. Dates are keyed as [`NaiveDate`] in a
//! [`BTreeMap`] so that iteration order, and therefore decimal
//! accumulation order, is deterministic.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One contiguous guard-duty period with absolute timestamps.
///
/// A period may span midnight (for example a 24-hour duty from one midnight
/// to the next). Timestamps are timezone-naive; the scheduling frontend
/// normalizes them before they reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// When the duty period begins.
    #[serde(rename = "start_timestamp")]
    pub begin: NaiveDateTime,
    /// When the duty period ends.
    #[serde(rename = "end_timestamp")]
    pub end: NaiveDateTime,
}

/// A guard-duty plan for one employee over one pay period.
///
/// # Example
///
/// ```
/// use vakt_engine::models::{DutyPlan, Period};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use std::collections::BTreeMap;
/// use uuid::Uuid;
///
/// let date = NaiveDate::from_ymd_opt(2022, 3, 14).unwrap();
/// let mut schedule = BTreeMap::new();
/// schedule.insert(
///     date,
///     vec![Period {
///         begin: date.and_hms_opt(0, 0, 0).unwrap(),
///         end: date.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap(),
///     }],
/// );
///
/// let plan = DutyPlan {
///     id: Uuid::new_v4(),
///     ident: "A123456".to_string(),
///     schedule,
/// };
/// assert_eq!(plan.schedule.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyPlan {
    /// Unique identifier for the plan.
    pub id: Uuid,
    /// Employee identifier (e.g. "A123456").
    pub ident: String,
    /// Ordered mapping from date to the duty periods scheduled that day.
    pub schedule: BTreeMap<NaiveDate, Vec<Period>>,
}
