//! Core data models for the guard-duty compensation engine.
//!
//! This module contains all the domain models used throughout the engine:
//! the duty plan (schedule input), the reconciled timesheet input, the rate
//! table, and the payroll output.

mod payroll;
mod plan;
mod rates;
mod timesheet;

pub use payroll::{Artskode, Artskoder, Payroll};
pub use plan::{DutyPlan, Period};
pub use rates::Satser;
pub use timesheet::{Clocking, DailyTimesheet, DayKind, OrgCodes, ReconciledTimesheet};
