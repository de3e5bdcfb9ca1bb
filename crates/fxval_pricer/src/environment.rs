//! The pricing environment consumed by pricer functions.

use fxval_core::index::FxIndexObservation;
use fxval_core::types::{Currency, Date, DayCount};

use crate::error::PricerError;

/// Market data capabilities required to price cash-flow components.
///
/// Pricer functions take the environment as an opaque collaborator: they
/// request discount factors and FX rates through it and never inspect how
/// the values are produced. The `Sync` bound lets a single environment be
/// shared by concurrent valuation threads.
pub trait PricingEnvironment: Sync {
    /// Returns the valuation date all values are discounted to.
    fn valuation_date(&self) -> Date;

    /// Returns the discount factor from `date` back to the valuation date
    /// for a cash flow in `currency`.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::MissingMarketData`] if no discounting data
    /// is available for the currency.
    fn discount_factor(&self, currency: Currency, date: Date) -> Result<f64, PricerError>;

    /// Returns the FX rate fixed by the given index observation.
    ///
    /// # Errors
    ///
    /// Returns [`PricerError::MissingMarketData`] if the fixing is not
    /// available.
    fn fx_rate(&self, observation: &FxIndexObservation) -> Result<f64, PricerError>;
}

/// A pricing environment discounting every currency at a single
/// continuously compounded flat zero rate.
///
/// Discount factors are `exp(-rate * t)` with `t` the Act/365F year
/// fraction from the valuation date. Dates before the valuation date
/// produce factors above one. No FX fixings are held, so
/// [`PricingEnvironment::fx_rate`] always fails.
///
/// # Examples
///
/// ```
/// use fxval_core::types::{Currency, Date};
/// use fxval_pricer::{FlatPricingEnvironment, PricingEnvironment};
///
/// let env = FlatPricingEnvironment::new(Date::from_ymd(2024, 1, 15).unwrap(), 0.05);
/// let df = env
///     .discount_factor(Currency::USD, Date::from_ymd(2025, 1, 15).unwrap())
///     .unwrap();
/// assert!((df - (-0.05f64 * 366.0 / 365.0).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatPricingEnvironment {
    valuation_date: Date,
    zero_rate: f64,
}

impl FlatPricingEnvironment {
    /// Creates an environment with the given valuation date and flat
    /// continuously compounded zero rate.
    pub fn new(valuation_date: Date, zero_rate: f64) -> Self {
        Self {
            valuation_date,
            zero_rate,
        }
    }

    /// Returns the flat zero rate.
    pub fn zero_rate(&self) -> f64 {
        self.zero_rate
    }
}

impl PricingEnvironment for FlatPricingEnvironment {
    fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    fn discount_factor(&self, _currency: Currency, date: Date) -> Result<f64, PricerError> {
        let t = DayCount::Act365Fixed.year_fraction(self.valuation_date, date);
        Ok((-self.zero_rate * t).exp())
    }

    fn fx_rate(&self, observation: &FxIndexObservation) -> Result<f64, PricerError> {
        Err(PricerError::MissingMarketData {
            description: format!("FX fixing for {observation}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fxval_core::index::FxIndex;
    use fxval_core::reference_data::ReferenceData;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_discount_factor_flat_rate() {
        let env = FlatPricingEnvironment::new(date(2024, 1, 15), 0.05);
        // 2024 is a leap year: 366 days to the same date next year
        let df = env
            .discount_factor(Currency::USD, date(2025, 1, 15))
            .unwrap();
        assert_relative_eq!(df, (-0.05f64 * 366.0 / 365.0).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_discount_factor_on_valuation_date_is_one() {
        let env = FlatPricingEnvironment::new(date(2024, 1, 15), 0.05);
        let df = env
            .discount_factor(Currency::EUR, date(2024, 1, 15))
            .unwrap();
        assert_relative_eq!(df, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_discount_factor_before_valuation_date_exceeds_one() {
        let env = FlatPricingEnvironment::new(date(2024, 1, 15), 0.05);
        let df = env
            .discount_factor(Currency::EUR, date(2024, 1, 1))
            .unwrap();
        assert!(df > 1.0);
    }

    #[test]
    fn test_fx_rate_unavailable() {
        let env = FlatPricingEnvironment::new(date(2024, 1, 15), 0.05);
        let ref_data = ReferenceData::standard();
        let observation =
            FxIndexObservation::of(FxIndex::eur_usd_wm(), date(2024, 6, 14), &ref_data).unwrap();
        let err = env.fx_rate(&observation).unwrap_err();
        assert!(matches!(err, PricerError::MissingMarketData { .. }));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Discount factors decrease as the payment date moves out
            #[test]
            fn discount_factor_monotone(days in 1i64..10_000, extra in 1i64..1_000) {
                let env = FlatPricingEnvironment::new(date(2024, 1, 15), 0.03);
                let near = date(2024, 1, 15).plus_days(days);
                let far = near.plus_days(extra);
                let df_near = env.discount_factor(Currency::USD, near).unwrap();
                let df_far = env.discount_factor(Currency::USD, far).unwrap();
                prop_assert!(df_far < df_near);
            }
        }
    }
}
