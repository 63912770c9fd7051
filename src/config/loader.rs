//! Configuration loading functionality.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Satser;

use super::types::{RateEntry, RatesFile};

/// Loads and provides access to the agreement rate tables.
///
/// # Directory Structure
///
/// The configuration directory holds one file:
/// ```text
/// config/hta/
/// └── rates.yaml   # krone rates, one entry per revision
/// ```
///
/// # Example
///
/// ```no_run
/// use vakt_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/hta")?;
/// let date = NaiveDate::from_ymd_opt(2022, 10, 1).unwrap();
/// let satser = loader.satser_for(date)?;
/// println!("Weekend rate: {}", satser.helg);
/// # Ok::<(), vakt_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: Vec<RateEntry>,
}

impl ConfigLoader {
    /// Loads the rate tables from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when rates.yaml is missing
    /// and [`EngineError::ConfigParseError`] when it is not valid YAML or
    /// holds no entries.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rates_path = path.as_ref().join("rates.yaml");
        let file = Self::load_yaml::<RatesFile>(&rates_path)?;

        if file.rates.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: rates_path.display().to_string(),
                message: "no rate entries".to_string(),
            });
        }

        let mut rates = file.rates;
        rates.sort_by_key(|entry| entry.effective_date);

        Ok(Self { rates })
    }

    /// Returns the rate table effective on the given date.
    ///
    /// Picks the most recent revision whose effective date is on or
    /// before the date. The string-encoded rate values are parsed here,
    /// so a malformed revision only fails when it is actually selected.
    pub fn satser_for(&self, date: NaiveDate) -> EngineResult<Satser> {
        let entry = self
            .rates
            .iter()
            .rev()
            .find(|entry| entry.effective_date <= date)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("no rate revision effective on {date}"),
            })?;

        Satser::from_strings(&entry.dag, &entry.natt, &entry.helg, &entry.utvidet)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/hta"
    }

    #[test]
    fn test_load_shipped_rates() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_satser_for_picks_latest_effective_revision() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2022, 10, 1).unwrap();
        let satser = loader.satser_for(date).unwrap();
        assert_eq!(satser.dag, Decimal::from_str("15").unwrap());
        assert_eq!(satser.helg, Decimal::from_str("65").unwrap());
    }

    #[test]
    fn test_satser_for_earlier_date_uses_earlier_revision() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2022, 2, 1).unwrap();
        let satser = loader.satser_for(date).unwrap();
        assert_eq!(satser.helg, Decimal::from_str("55").unwrap());
    }

    #[test]
    fn test_satser_for_date_before_any_revision_fails() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let result = loader.satser_for(date);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rates.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {other:?}"),
        }
    }
}
