//! A single observation of an FX index fixing.

use std::fmt;

use super::FxIndex;
use crate::reference_data::{ReferenceData, ReferenceDataError};
use crate::types::{CurrencyPair, Date};

/// A validated reference to one fixing of an FX index.
///
/// Carries the index, the fixing date, and the maturity (settlement) date
/// the fixing implies. The maturity date is derived from the index
/// conventions at construction and cached on the observation; it is not
/// part of the observation's identity.
///
/// Constructed only via [`FxIndexObservation::of`], which computes the
/// maturity from reference data; immutable thereafter. Serializable for
/// transport, but deliberately not deserializable: restoring one from
/// serialized data would bypass the maturity derivation, so the receiving
/// side reconstructs with `of` and its own reference data.
///
/// # Examples
///
/// ```
/// use fxval_core::index::{FxIndex, FxIndexObservation};
/// use fxval_core::reference_data::ReferenceData;
/// use fxval_core::types::Date;
///
/// let ref_data = ReferenceData::standard();
/// let fixing = Date::from_ymd(2024, 6, 12).unwrap();
/// let obs = FxIndexObservation::of(FxIndex::gbp_usd_wm(), fixing, &ref_data).unwrap();
///
/// assert_eq!(obs.currency_pair().code(), "GBP/USD");
/// assert_eq!(obs.maturity_date(), Date::from_ymd(2024, 6, 14).unwrap());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FxIndexObservation {
    /// The index being observed
    index: FxIndex,
    /// The date of the fixing
    fixing_date: Date,
    /// The settlement date implied by the fixing date
    maturity_date: Date,
}

impl FxIndexObservation {
    /// Creates an observation from an index and fixing date.
    ///
    /// The maturity date is computed from the index conventions using the
    /// supplied reference data; this is the only way to construct an
    /// observation, so the maturity always equals
    /// [`FxIndex::maturity_from_fixing`] of the other two fields.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceDataError` if the index's fixing calendar cannot
    /// be resolved.
    pub fn of(
        index: FxIndex,
        fixing_date: Date,
        ref_data: &ReferenceData,
    ) -> Result<Self, ReferenceDataError> {
        let maturity_date = index.maturity_from_fixing(fixing_date, ref_data)?;
        Ok(Self {
            index,
            fixing_date,
            maturity_date,
        })
    }

    /// Returns the index being observed.
    pub fn index(&self) -> &FxIndex {
        &self.index
    }

    /// Returns the fixing date.
    pub fn fixing_date(&self) -> Date {
        self.fixing_date
    }

    /// Returns the settlement date implied by the fixing date.
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Returns the currency pair of the index.
    pub fn currency_pair(&self) -> CurrencyPair {
        self.index.currency_pair()
    }
}

// Identity is (index, fixing date) only. The maturity date is functionally
// dependent on the other two fields; including it would be redundant and
// could diverge from them if the calendar calculation changes between
// construction and comparison.
impl PartialEq for FxIndexObservation {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.fixing_date == other.fixing_date
    }
}

impl Eq for FxIndexObservation {}

impl std::hash::Hash for FxIndexObservation {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.fixing_date.hash(state);
    }
}

impl fmt::Display for FxIndexObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FxIndexObservation[{} on {}]", self.index, self.fixing_date)
    }
}
