//! The guard-duty payroll orchestrator.
//!
//! Ties the pipeline together: validate the reconciled timesheet, classify
//! every scheduled duty minute, run the aggregators, and sum their partial
//! results into one payroll.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::callout::calculate_callout;
use super::classifier::classify_period;
use super::compensation::calculate_compensation;
use super::overtime::calculate_overtime;
use crate::error::{EngineError, EngineResult};
use crate::models::{Artskoder, DutyPlan, Payroll, ReconciledTimesheet};

/// Calculates the complete payroll for one duty plan over one pay period.
///
/// The timesheet must carry a single classification code for the whole
/// period; a code that changes mid-period aborts the calculation. Every
/// scheduled duty day must have a timesheet entry.
///
/// Overtime is salary-based, so when the base salary changes inside the
/// period the overtime aggregator runs once per salary tier, over that
/// tier's days only, and the partial results are summed.
///
/// # Errors
///
/// Returns [`EngineError::ClassificationChanged`] when the form code is
/// not constant across the period, and [`EngineError::MissingTimesheetDay`]
/// when the roster schedules a day the timesheet does not cover.
pub fn calculate_guard_duty_pay(
    plan: &DutyPlan,
    timesheet: &ReconciledTimesheet,
) -> EngineResult<Payroll> {
    validate_single_classification(timesheet)?;

    let minutes = classify_period(&plan.schedule, &timesheet.days)?;

    let compensation = calculate_compensation(&minutes, &timesheet.satser);
    let callout = calculate_callout(&plan.schedule, &timesheet.days, &timesheet.satser);

    // Split the classified days by salary tier before computing overtime.
    let mut tiers: BTreeMap<Decimal, BTreeMap<_, _>> = BTreeMap::new();
    for (date, duty) in &minutes {
        if let Some(day) = timesheet.days.get(date) {
            tiers
                .entry(day.base_salary)
                .or_default()
                .insert(*date, *duty);
        }
    }
    let overtime = tiers
        .iter()
        .map(|(salary, tier_minutes)| calculate_overtime(tier_minutes, *salary))
        .fold(Artskoder::default(), |acc, partial| acc + partial);

    let artskoder = compensation + overtime + callout;

    let org = timesheet
        .days
        .values()
        .next()
        .map(|day| day.org.clone())
        .unwrap_or_default();

    let payroll = Payroll {
        plan_id: plan.id,
        ident: timesheet.ident.clone(),
        approver_id: timesheet.approver_id.clone(),
        approver_name: timesheet.approver_name.clone(),
        org,
        artskoder,
    };

    tracing::info!(
        plan_id = %payroll.plan_id,
        ident = %payroll.ident,
        total = %payroll.total(),
        "calculated guard-duty payroll"
    );

    Ok(payroll)
}

/// Rejects timesheets whose classification code changes mid-period.
fn validate_single_classification(timesheet: &ReconciledTimesheet) -> EngineResult<()> {
    let mut days = timesheet.days.iter();
    let Some((_, first)) = days.next() else {
        return Ok(());
    };

    for (date, day) in days {
        if day.form_name != first.form_name {
            return Err(EngineError::ClassificationChanged {
                expected: first.form_name.clone(),
                found: day.form_name.clone(),
                date: *date,
            });
        }
    }
    Ok(())
}
