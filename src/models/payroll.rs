//! Payroll output models.
//!
//! A calculation produces exactly one [`Payroll`]. Its per-category totals
//! are keyed by artskode, the accounting code the sum is reported under in
//! the payroll system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Add;
use uuid::Uuid;

use super::OrgCodes;

/// The total for one accounting code: a 2-decimal sum and whole hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artskode {
    /// Compensation in currency, rounded to 2 decimal places.
    pub sum: Decimal,
    /// Whole compensated hours (rounded half away from zero).
    pub hours: i64,
}

impl Add for Artskode {
    type Output = Artskode;

    fn add(self, other: Artskode) -> Artskode {
        Artskode {
            sum: self.sum + other.sum,
            hours: self.hours + other.hours,
        }
    }
}

/// Per-category compensation totals.
///
/// Each aggregator produces one of these as an immutable partial result;
/// the orchestrator sums the partials into the final payroll.
///
/// # Example
///
/// ```
/// use vakt_engine::models::{Artskode, Artskoder};
/// use rust_decimal::Decimal;
///
/// let a = Artskoder {
///     dag: Artskode { sum: Decimal::new(42000, 2), hours: 28 },
///     ..Artskoder::default()
/// };
/// let b = Artskoder {
///     dag: Artskode { sum: Decimal::new(227027, 2), hours: 0 },
///     ..Artskoder::default()
/// };
/// let summed = a + b;
/// assert_eq!(summed.dag.sum, Decimal::new(269027, 2));
/// assert_eq!(summed.dag.hours, 28);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artskoder {
    /// Night duty 00:00-06:00 on weekdays.
    pub morgen: Artskode,
    /// Day duty 06:00-20:00 on weekdays, plus the extended-shift money.
    pub dag: Artskode,
    /// Evening duty 20:00-24:00 on weekdays.
    pub kveld: Artskode,
    /// Weekend duty, all bands.
    pub helg: Artskode,
    /// The extended-shift hours 06:00-07:00 and 17:00-20:00 on weekdays.
    pub skift: Artskode,
    /// Weekend call-out (utrykning) premium.
    pub utrykning: Artskode,
}

impl Add for Artskoder {
    type Output = Artskoder;

    fn add(self, other: Artskoder) -> Artskoder {
        Artskoder {
            morgen: self.morgen + other.morgen,
            dag: self.dag + other.dag,
            kveld: self.kveld + other.kveld,
            helg: self.helg + other.helg,
            skift: self.skift + other.skift,
            utrykning: self.utrykning + other.utrykning,
        }
    }
}

impl Artskoder {
    /// The total compensation across every category.
    pub fn total(&self) -> Decimal {
        self.morgen.sum
            + self.dag.sum
            + self.kveld.sum
            + self.helg.sum
            + self.skift.sum
            + self.utrykning.sum
    }
}

/// The completed payroll for one guard-duty plan over one pay period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payroll {
    /// The duty plan this payroll settles.
    pub plan_id: Uuid,
    /// Employee identifier.
    pub ident: String,
    /// Identifier of the approving manager.
    pub approver_id: String,
    /// Display name of the approving manager.
    pub approver_name: String,
    /// Accounting codes the compensation is reported under.
    pub org: OrgCodes,
    /// Per-category totals.
    pub artskoder: Artskoder,
}

impl Payroll {
    /// The total compensation across every category.
    ///
    /// # Example
    ///
    /// ```
    /// use vakt_engine::models::{Artskode, Artskoder, OrgCodes, Payroll};
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let payroll = Payroll {
    ///     plan_id: Uuid::nil(),
    ///     ident: "A123456".to_string(),
    ///     approver_id: "M654321".to_string(),
    ///     approver_name: "Kalpana, Bran".to_string(),
    ///     org: OrgCodes::default(),
    ///     artskoder: Artskoder {
    ///         helg: Artskode { sum: Decimal::new(62400, 2), hours: 48 },
    ///         ..Artskoder::default()
    ///     },
    /// };
    /// assert_eq!(payroll.total(), Decimal::new(62400, 2));
    /// ```
    pub fn total(&self) -> Decimal {
        self.artskoder.total()
    }
}
