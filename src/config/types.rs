//! Configuration types for the agreement rate tables.
//!
//! The engine ships the agreement (HTA) krone rates as a YAML file so a
//! rate revision does not require a new build. Rates are kept as strings
//! until parse time, mirroring how the upstream rate source delivers
//! them.

use chrono::NaiveDate;
use serde::Deserialize;

/// The rates.yaml file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesFile {
    /// Every rate revision, each effective from its own date.
    pub rates: Vec<RateEntry>,
}

/// One revision of the agreement's krone rates.
///
/// Rate values are string-encoded decimals; they are validated when the
/// entry is turned into a [`Satser`].
///
/// [`Satser`]: crate::models::Satser
#[derive(Debug, Clone, Deserialize)]
pub struct RateEntry {
    /// The first date this revision applies to.
    pub effective_date: NaiveDate,
    /// Rate for the day band (06:00-20:00).
    pub dag: String,
    /// Rate for the night bands (20:00-24:00 and 00:00-06:00).
    pub natt: String,
    /// Rate for weekend duty.
    pub helg: String,
    /// Rate for the extended-shift band.
    pub utvidet: String,
}
