//! # fxval_pricer: Cash-Flow Valuation
//!
//! Pricing layer of the fxval workspace. Values the cash-flow components
//! defined in `fxval_product` against market data supplied through the
//! [`PricingEnvironment`] capability trait:
//! - `environment`: the market-data capability trait and a flat-rate
//!   implementation for tests and examples
//! - `cashflow`: per-variant pricer function traits, discounting reference
//!   implementations, and the dispatching router
//! - `error`: pricing failures
//!
//! Routing is static: [`DispatchingCashFlowPricer`] matches exhaustively
//! on the component variant and forwards to the registered handler, so an
//! unregistered variant fails immediately with
//! [`PricerError::UnsupportedComponent`] rather than silently skipping the
//! component.
//!
//! ## Usage Example
//!
//! ```rust
//! use fxval_core::types::{Currency, CurrencyAmount, Date, DayCount};
//! use fxval_pricer::{DispatchingCashFlowPricer, FlatPricingEnvironment};
//! use fxval_product::{CashFlowComponent, RatePeriod};
//!
//! let env = FlatPricingEnvironment::new(Date::from_ymd(2024, 1, 15).unwrap(), 0.05);
//! let component = CashFlowComponent::from(
//!     RatePeriod::new(
//!         Currency::USD,
//!         1_000_000.0,
//!         0.05,
//!         Date::from_ymd(2024, 1, 15).unwrap(),
//!         Date::from_ymd(2024, 7, 15).unwrap(),
//!         Date::from_ymd(2024, 7, 17).unwrap(),
//!         DayCount::Act365Fixed,
//!     )
//!     .unwrap(),
//! );
//!
//! let pricer = DispatchingCashFlowPricer::default_pricers();
//! let pv = pricer.present_value(&env, &component).unwrap();
//! let fv = pricer.future_value(&env, &component).unwrap();
//! assert!(pv < fv);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cashflow;
pub mod environment;
pub mod error;


pub use cashflow::{
    DiscountingNotionalExchangePricer, DiscountingRatePeriodPricer, DispatchingCashFlowPricer,
    NotionalExchangePricer, RatePeriodPricer,
};
pub use environment::{FlatPricingEnvironment, PricingEnvironment};
pub use error::PricerError;
