//! Pricer functions for cash-flow components.
//!
//! One capability trait per component variant, reference implementations
//! using plain discounting, and a dispatching router that selects the
//! pricer function for a [`fxval_product::CashFlowComponent`] by matching
//! on its variant.

mod discounting;
mod dispatching;

pub use discounting::{DiscountingNotionalExchangePricer, DiscountingRatePeriodPricer};
pub use dispatching::DispatchingCashFlowPricer;

use fxval_product::{NotionalExchange, RatePeriod};

use crate::environment::PricingEnvironment;
use crate::error::PricerError;

/// Prices a fixed-rate accrual period.
///
/// Implementations are stateless and shared across valuation threads.
pub trait RatePeriodPricer: Send + Sync {
    /// Computes the present value of the period, discounted to the
    /// environment's valuation date.
    ///
    /// # Errors
    ///
    /// Propagates [`PricerError::MissingMarketData`] from the environment.
    fn present_value(
        &self,
        env: &dyn PricingEnvironment,
        period: &RatePeriod,
    ) -> Result<f64, PricerError>;

    /// Computes the undiscounted value of the period on its payment date.
    ///
    /// # Errors
    ///
    /// Propagates [`PricerError::MissingMarketData`] from the environment.
    fn future_value(
        &self,
        env: &dyn PricingEnvironment,
        period: &RatePeriod,
    ) -> Result<f64, PricerError>;
}

/// Prices an exchange of notional.
///
/// Implementations are stateless and shared across valuation threads.
pub trait NotionalExchangePricer: Send + Sync {
    /// Computes the present value of the exchange, discounted to the
    /// environment's valuation date.
    ///
    /// # Errors
    ///
    /// Propagates [`PricerError::MissingMarketData`] from the environment.
    fn present_value(
        &self,
        env: &dyn PricingEnvironment,
        exchange: &NotionalExchange,
    ) -> Result<f64, PricerError>;

    /// Computes the undiscounted value of the exchange on its payment
    /// date.
    ///
    /// # Errors
    ///
    /// Propagates [`PricerError::MissingMarketData`] from the environment.
    fn future_value(
        &self,
        env: &dyn PricingEnvironment,
        exchange: &NotionalExchange,
    ) -> Result<f64, PricerError>;
}
