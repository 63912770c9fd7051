//! Compensation engine for guard duty (beredskapsvakt).
//!
//! This crate computes the monetary compensation an employee is owed for
//! standby/on-call duty under the guard-duty clause of the state labor
//! agreement, given a duty schedule and a reconciled timesheet of
//! actually-worked clock intervals. It covers the time-of-day compensation
//! bands, weekend and holiday premiums, the core-hours exclusion, the legal
//! daily duty cap, daylight-saving-time adjustment, guard-duty overtime per
//! salary tier, and the weekend call-out premium.
//!
//! The calculation itself is a pure function library; the only I/O in the
//! crate is the rate-table loader in [`config`]. The HTTP handler and the
//! timesheet reconciliation job that feed the engine live elsewhere.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
