//! Configuration loading for the guard-duty compensation engine.
//!
//! The agreement's krone rates live in a YAML file next to the binary, so
//! a yearly rate revision never needs a code change.
//!
//! # Example
//!
//! ```no_run
//! use vakt_engine::config::ConfigLoader;
//! use chrono::NaiveDate;
//!
//! let loader = ConfigLoader::load("./config/hta").unwrap();
//! let date = NaiveDate::from_ymd_opt(2022, 10, 1).unwrap();
//! let satser = loader.satser_for(date).unwrap();
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RateEntry, RatesFile};
