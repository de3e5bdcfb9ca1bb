//! FX rate indices and their observations.
//!
//! An [`FxIndex`] names a published FX rate fixing (e.g. a WM/Refinitiv
//! 4pm London rate) together with the conventions needed to derive the
//! settlement date of a fixing: the fixing calendar and the spot lag.
//! An [`FxIndexObservation`] is a validated reference to one fixing of an
//! index, carrying the derived maturity date.
//!
//! # Examples
//!
//! ```
//! use fxval_core::index::{FxIndex, FxIndexObservation};
//! use fxval_core::reference_data::ReferenceData;
//! use fxval_core::types::Date;
//!
//! let ref_data = ReferenceData::standard();
//! let fixing = Date::from_ymd(2024, 6, 14).unwrap();
//! let obs = FxIndexObservation::of(FxIndex::eur_usd_wm(), fixing, &ref_data).unwrap();
//!
//! // T+2 over a weekend
//! assert_eq!(obs.maturity_date(), Date::from_ymd(2024, 6, 18).unwrap());
//! ```

mod observation;

pub use observation::FxIndexObservation;

use std::fmt;

use crate::reference_data::{HolidayCalendarId, ReferenceData, ReferenceDataError};
use crate::types::{Currency, CurrencyPair, Date};

/// A published FX rate index.
///
/// Identity is the index name: two indices with the same name are the same
/// index, and equality/hashing cover the name only.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FxIndex {
    /// The index name, e.g. "EUR/USD-WM"
    name: String,
    /// The currency pair the index publishes
    currency_pair: CurrencyPair,
    /// The calendar on which fixings are published
    fixing_calendar: HolidayCalendarId,
    /// Business days from fixing to settlement (spot lag)
    maturity_days: u32,
}

impl FxIndex {
    /// Creates an index from its conventions.
    pub fn of(
        name: impl Into<String>,
        currency_pair: CurrencyPair,
        fixing_calendar: HolidayCalendarId,
        maturity_days: u32,
    ) -> Self {
        Self {
            name: name.into(),
            currency_pair,
            fixing_calendar,
            maturity_days,
        }
    }

    /// The WM/Refinitiv EUR/USD index, T+2 on TARGET and New York.
    pub fn eur_usd_wm() -> Self {
        Self::of(
            "EUR/USD-WM",
            pair(Currency::EUR, Currency::USD),
            HolidayCalendarId::of("EUTA+USNY"),
            2,
        )
    }

    /// The WM/Refinitiv GBP/USD index, T+2 on London and New York.
    pub fn gbp_usd_wm() -> Self {
        Self::of(
            "GBP/USD-WM",
            pair(Currency::GBP, Currency::USD),
            HolidayCalendarId::of("GBLO+USNY"),
            2,
        )
    }

    /// The WM/Refinitiv USD/JPY index, T+2 on New York and Tokyo.
    pub fn usd_jpy_wm() -> Self {
        Self::of(
            "USD/JPY-WM",
            pair(Currency::USD, Currency::JPY),
            HolidayCalendarId::of("USNY+JPTO"),
            2,
        )
    }

    /// Returns the index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the currency pair the index publishes.
    pub fn currency_pair(&self) -> CurrencyPair {
        self.currency_pair
    }

    /// Returns the fixing calendar identifier.
    pub fn fixing_calendar(&self) -> &HolidayCalendarId {
        &self.fixing_calendar
    }

    /// Returns the spot lag in business days.
    pub fn maturity_days(&self) -> u32 {
        self.maturity_days
    }

    /// Calculates the maturity (settlement) date implied by a fixing date.
    ///
    /// Shifts the fixing date forward by the spot lag on the fixing
    /// calendar resolved from `ref_data`.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceDataError::CalendarNotFound` if the fixing
    /// calendar is not present in the reference data.
    pub fn maturity_from_fixing(
        &self,
        fixing_date: Date,
        ref_data: &ReferenceData,
    ) -> Result<Date, ReferenceDataError> {
        let calendar = ref_data.calendar(&self.fixing_calendar)?;
        Ok(calendar.shift(fixing_date, self.maturity_days))
    }
}

// Indices are named singletons: identity is the name alone.
impl PartialEq for FxIndex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FxIndex {}

impl std::hash::Hash for FxIndex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for FxIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// Built-in pairs are distinct currencies, so `of` cannot fail here.
fn pair(base: Currency, counter: Currency) -> CurrencyPair {
    match CurrencyPair::of(base, counter) {
        Ok(pair) => pair,
        Err(_) => unreachable!("built-in index pairs use distinct currencies"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_index_conventions() {
        let index = FxIndex::eur_usd_wm();
        assert_eq!(index.name(), "EUR/USD-WM");
        assert_eq!(index.currency_pair().code(), "EUR/USD");
        assert_eq!(index.maturity_days(), 2);
    }

    #[test]
    fn test_maturity_from_fixing_weekend_roll() {
        let ref_data = ReferenceData::standard();
        let index = FxIndex::eur_usd_wm();

        // Thursday fixes for Monday settlement, Friday for Tuesday
        let thursday = Date::from_ymd(2024, 6, 13).unwrap();
        let friday = Date::from_ymd(2024, 6, 14).unwrap();
        assert_eq!(
            index.maturity_from_fixing(thursday, &ref_data).unwrap(),
            Date::from_ymd(2024, 6, 17).unwrap()
        );
        assert_eq!(
            index.maturity_from_fixing(friday, &ref_data).unwrap(),
            Date::from_ymd(2024, 6, 18).unwrap()
        );
    }

    #[test]
    fn test_maturity_from_fixing_missing_calendar() {
        let ref_data = ReferenceData::of(vec![]);
        let index = FxIndex::eur_usd_wm();
        let fixing = Date::from_ymd(2024, 6, 14).unwrap();
        assert!(index.maturity_from_fixing(fixing, &ref_data).is_err());
    }

    #[test]
    fn test_identity_is_name_only() {
        let a = FxIndex::eur_usd_wm();
        let mut b = FxIndex::eur_usd_wm();
        b.maturity_days = 5; // same name, different conventions
        assert_eq!(a, b);

        assert_ne!(FxIndex::eur_usd_wm(), FxIndex::gbp_usd_wm());
    }
}
