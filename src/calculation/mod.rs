//! The guard-duty calculation pipeline.
//!
//! A calculation runs in three stages. [`classify_period`] turns the duty
//! roster and the reconciled timesheet into unworked minutes per clock
//! band per day. The three aggregators ([`calculate_compensation`],
//! [`calculate_overtime`] and [`calculate_callout`]) each price those
//! minutes independently and return an immutable partial result.
//! [`calculate_guard_duty_pay`] validates the input, runs the stages and
//! sums the partials into one [`Payroll`].
//!
//! [`Payroll`]: crate::models::Payroll

mod callout;
mod classifier;
mod compensation;
mod hours;
mod overtime;
mod salary;
mod special_days;
mod time_range;

pub use callout::calculate_callout;
pub use classifier::{classify_day, classify_period, GuardDutyMinutes};
pub use compensation::calculate_compensation;
pub use overtime::calculate_overtime;
pub use salary::calculate_guard_duty_pay;
pub use special_days::{core_hours, dst_modifier, duty_cap_applies};
pub use time_range::{overlap_minutes, TimeRange};
