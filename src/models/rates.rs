//! The agreement rate table (satser).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// Decimal compensation rates per band, supplied by the caller.
///
/// The rates come from the labor agreement and change roughly yearly; they
/// are not hardcoded in the engine.
///
/// # Example
///
/// ```
/// use vakt_engine::models::Satser;
/// use rust_decimal::Decimal;
///
/// let satser = Satser {
///     dag: Decimal::from(15),
///     natt: Decimal::from(25),
///     helg: Decimal::from(65),
///     utvidet: Decimal::from(25),
/// };
/// assert_eq!(satser.helg, Decimal::from(65));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Satser {
    /// Rate for the day band (06:00-20:00).
    pub dag: Decimal,
    /// Rate for the night bands (20:00-24:00 and 00:00-06:00).
    pub natt: Decimal,
    /// Rate for weekend duty (Saturday and Sunday, 00:00-24:00).
    pub helg: Decimal,
    /// Rate for the extended-shift band (06:00-07:00 and 17:00-20:00).
    pub utvidet: Decimal,
}

impl Satser {
    /// Parses a rate table from string-encoded decimal values.
    ///
    /// The upstream rate source delivers rates as strings; an unparsable
    /// value is a [`EngineError::MalformedRate`] and aborts the calculation.
    ///
    /// # Example
    ///
    /// ```
    /// use vakt_engine::models::Satser;
    /// use rust_decimal::Decimal;
    ///
    /// let satser = Satser::from_strings("15.O", "25", "65", "25");
    /// assert!(satser.is_err());
    ///
    /// let satser = Satser::from_strings("15", "25", "65", "25").unwrap();
    /// assert_eq!(satser.dag, Decimal::from(15));
    /// ```
    pub fn from_strings(dag: &str, natt: &str, helg: &str, utvidet: &str) -> EngineResult<Satser> {
        Ok(Satser {
            dag: parse_rate(dag)?,
            natt: parse_rate(natt)?,
            helg: parse_rate(helg)?,
            utvidet: parse_rate(utvidet)?,
        })
    }
}

fn parse_rate(value: &str) -> EngineResult<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| EngineError::MalformedRate {
        value: value.to_string(),
    })
}
