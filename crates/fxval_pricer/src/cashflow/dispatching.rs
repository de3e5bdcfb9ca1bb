//! Variant-based routing of cash-flow components to pricer functions.

use fxval_product::CashFlowComponent;

use crate::cashflow::{
    DiscountingNotionalExchangePricer, DiscountingRatePeriodPricer, NotionalExchangePricer,
    RatePeriodPricer,
};
use crate::environment::PricingEnvironment;
use crate::error::PricerError;

static DEFAULT_RATE_PERIOD: DiscountingRatePeriodPricer = DiscountingRatePeriodPricer;
static DEFAULT_NOTIONAL_EXCHANGE: DiscountingNotionalExchangePricer =
    DiscountingNotionalExchangePricer;

/// Routes a [`CashFlowComponent`] to the pricer function for its variant.
///
/// The router holds one handler slot per variant, fixed at construction.
/// Dispatch is an exhaustive match on the component; a component whose
/// slot is empty fails with [`PricerError::UnsupportedComponent`] naming
/// the variant. Handler results pass through unchanged.
///
/// The router is stateless across calls and `Sync`, so a single instance
/// serves any number of concurrent valuation calls.
///
/// # Examples
///
/// ```
/// use fxval_core::types::{Currency, CurrencyAmount, Date};
/// use fxval_pricer::{DispatchingCashFlowPricer, FlatPricingEnvironment};
/// use fxval_product::{CashFlowComponent, NotionalExchange, Payment};
///
/// let env = FlatPricingEnvironment::new(Date::from_ymd(2024, 1, 15).unwrap(), 0.0);
/// let component = CashFlowComponent::from(NotionalExchange::of(Payment::of(
///     CurrencyAmount::of(Currency::USD, 100.0),
///     Date::from_ymd(2024, 7, 17).unwrap(),
/// )));
///
/// let pricer = DispatchingCashFlowPricer::default_pricers();
/// assert_eq!(pricer.present_value(&env, &component).unwrap(), 100.0);
/// ```
#[derive(Clone, Copy)]
pub struct DispatchingCashFlowPricer<'a> {
    rate_period: Option<&'a dyn RatePeriodPricer>,
    notional_exchange: Option<&'a dyn NotionalExchangePricer>,
}

impl<'a> DispatchingCashFlowPricer<'a> {
    /// Creates a router with explicit handler slots.
    ///
    /// An empty slot makes the corresponding variant unsupported.
    pub fn new(
        rate_period: Option<&'a dyn RatePeriodPricer>,
        notional_exchange: Option<&'a dyn NotionalExchangePricer>,
    ) -> Self {
        Self {
            rate_period,
            notional_exchange,
        }
    }

    /// Returns the router wired with the discounting pricer functions for
    /// every variant.
    pub fn default_pricers() -> DispatchingCashFlowPricer<'static> {
        DispatchingCashFlowPricer {
            rate_period: Some(&DEFAULT_RATE_PERIOD),
            notional_exchange: Some(&DEFAULT_NOTIONAL_EXCHANGE),
        }
    }

    /// Computes the present value of the component via its variant's
    /// pricer function.
    ///
    /// # Errors
    ///
    /// - [`PricerError::UnsupportedComponent`] if no handler is registered
    ///   for the component's variant
    /// - any error returned by the handler, unchanged
    pub fn present_value(
        &self,
        env: &dyn PricingEnvironment,
        component: &CashFlowComponent,
    ) -> Result<f64, PricerError> {
        match component {
            CashFlowComponent::RatePeriod(period) => match self.rate_period {
                Some(pricer) => pricer.present_value(env, period),
                None => Err(self.unsupported(component)),
            },
            CashFlowComponent::NotionalExchange(exchange) => match self.notional_exchange {
                Some(pricer) => pricer.present_value(env, exchange),
                None => Err(self.unsupported(component)),
            },
        }
    }

    /// Computes the future value of the component via its variant's
    /// pricer function.
    ///
    /// Uses the same handler table as
    /// [`DispatchingCashFlowPricer::present_value`].
    ///
    /// # Errors
    ///
    /// - [`PricerError::UnsupportedComponent`] if no handler is registered
    ///   for the component's variant
    /// - any error returned by the handler, unchanged
    pub fn future_value(
        &self,
        env: &dyn PricingEnvironment,
        component: &CashFlowComponent,
    ) -> Result<f64, PricerError> {
        match component {
            CashFlowComponent::RatePeriod(period) => match self.rate_period {
                Some(pricer) => pricer.future_value(env, period),
                None => Err(self.unsupported(component)),
            },
            CashFlowComponent::NotionalExchange(exchange) => match self.notional_exchange {
                Some(pricer) => pricer.future_value(env, exchange),
                None => Err(self.unsupported(component)),
            },
        }
    }

    fn unsupported(&self, component: &CashFlowComponent) -> PricerError {
        PricerError::UnsupportedComponent {
            variant: component.variant_name(),
        }
    }
}

impl Default for DispatchingCashFlowPricer<'static> {
    fn default() -> Self {
        Self::default_pricers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxval_core::types::{Currency, CurrencyAmount, Date, DayCount};
    use fxval_product::{NotionalExchange, Payment, RatePeriod};

    use crate::environment::FlatPricingEnvironment;

    // Handlers returning a fixed value, to prove routing and pass-through
    struct FixedRatePeriodPricer(f64);

    impl RatePeriodPricer for FixedRatePeriodPricer {
        fn present_value(
            &self,
            _env: &dyn PricingEnvironment,
            _period: &RatePeriod,
        ) -> Result<f64, PricerError> {
            Ok(self.0)
        }

        fn future_value(
            &self,
            _env: &dyn PricingEnvironment,
            _period: &RatePeriod,
        ) -> Result<f64, PricerError> {
            Ok(self.0)
        }
    }

    struct FixedNotionalExchangePricer(f64);

    impl NotionalExchangePricer for FixedNotionalExchangePricer {
        fn present_value(
            &self,
            _env: &dyn PricingEnvironment,
            _exchange: &NotionalExchange,
        ) -> Result<f64, PricerError> {
            Ok(self.0)
        }

        fn future_value(
            &self,
            _env: &dyn PricingEnvironment,
            _exchange: &NotionalExchange,
        ) -> Result<f64, PricerError> {
            Ok(self.0)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn env() -> FlatPricingEnvironment {
        FlatPricingEnvironment::new(date(2024, 1, 15), 0.05)
    }

    fn rate_period_component() -> CashFlowComponent {
        CashFlowComponent::from(
            RatePeriod::new(
                Currency::USD,
                1_000_000.0,
                0.05,
                date(2024, 1, 15),
                date(2024, 7, 15),
                date(2024, 7, 17),
                DayCount::Act365Fixed,
            )
            .unwrap(),
        )
    }

    fn notional_exchange_component() -> CashFlowComponent {
        CashFlowComponent::from(NotionalExchange::of(Payment::of(
            CurrencyAmount::of(Currency::USD, 1_000_000.0),
            date(2024, 7, 17),
        )))
    }

    #[test]
    fn test_routes_rate_period_to_registered_handler() {
        let handler = FixedRatePeriodPricer(0.0123);
        let pricer = DispatchingCashFlowPricer::new(Some(&handler), None);
        let pv = pricer.present_value(&env(), &rate_period_component()).unwrap();
        assert_eq!(pv, 0.0123);
        let fv = pricer.future_value(&env(), &rate_period_component()).unwrap();
        assert_eq!(fv, 0.0123);
    }

    #[test]
    fn test_routes_notional_exchange_to_registered_handler() {
        let handler = FixedNotionalExchangePricer(0.0123);
        let pricer = DispatchingCashFlowPricer::new(None, Some(&handler));
        let pv = pricer
            .present_value(&env(), &notional_exchange_component())
            .unwrap();
        assert_eq!(pv, 0.0123);
    }

    #[test]
    fn test_unregistered_variant_fails_despite_other_handlers() {
        let handler = FixedRatePeriodPricer(0.0123);
        let pricer = DispatchingCashFlowPricer::new(Some(&handler), None);
        let err = pricer
            .present_value(&env(), &notional_exchange_component())
            .unwrap_err();
        assert_eq!(
            err,
            PricerError::UnsupportedComponent {
                variant: "NotionalExchange"
            }
        );
        let err = pricer
            .future_value(&env(), &notional_exchange_component())
            .unwrap_err();
        assert_eq!(
            err,
            PricerError::UnsupportedComponent {
                variant: "NotionalExchange"
            }
        );
    }

    #[test]
    fn test_empty_router_rejects_everything() {
        let pricer = DispatchingCashFlowPricer::new(None, None);
        assert!(pricer.present_value(&env(), &rate_period_component()).is_err());
        assert!(pricer
            .present_value(&env(), &notional_exchange_component())
            .is_err());
    }

    #[test]
    fn test_handler_errors_pass_through_unchanged() {
        struct FailingRatePeriodPricer;
        impl RatePeriodPricer for FailingRatePeriodPricer {
            fn present_value(
                &self,
                _env: &dyn PricingEnvironment,
                _period: &RatePeriod,
            ) -> Result<f64, PricerError> {
                Err(PricerError::MissingMarketData {
                    description: "USD discount curve".to_string(),
                })
            }
            fn future_value(
                &self,
                _env: &dyn PricingEnvironment,
                _period: &RatePeriod,
            ) -> Result<f64, PricerError> {
                Err(PricerError::MissingMarketData {
                    description: "USD discount curve".to_string(),
                })
            }
        }

        let handler = FailingRatePeriodPricer;
        let pricer = DispatchingCashFlowPricer::new(Some(&handler), None);
        let err = pricer.present_value(&env(), &rate_period_component()).unwrap_err();
        assert_eq!(
            err,
            PricerError::MissingMarketData {
                description: "USD discount curve".to_string()
            }
        );
    }

    #[test]
    fn test_default_pricers_match_discounting_handlers() {
        let env = env();
        let dispatching = DispatchingCashFlowPricer::default_pricers();
        let component = rate_period_component();
        let direct = match component {
            CashFlowComponent::RatePeriod(period) => {
                DiscountingRatePeriodPricer.present_value(&env, &period).unwrap()
            }
            _ => unreachable!(),
        };
        let routed = dispatching.present_value(&env, &component).unwrap();
        assert_eq!(routed, direct);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Dispatch returns the handler result bit-for-bit, including
            // negative, zero, and large magnitudes
            #[test]
            fn dispatch_passes_values_through_exactly(
                value in prop_oneof![
                    Just(0.0),
                    -1e12f64..1e12,
                    Just(f64::MIN),
                    Just(f64::MAX),
                ],
            ) {
                let rate_handler = FixedRatePeriodPricer(value);
                let exchange_handler = FixedNotionalExchangePricer(value);
                let pricer =
                    DispatchingCashFlowPricer::new(Some(&rate_handler), Some(&exchange_handler));
                let pv = pricer.present_value(&env(), &rate_period_component()).unwrap();
                prop_assert_eq!(pv.to_bits(), value.to_bits());
                let pv = pricer
                    .present_value(&env(), &notional_exchange_component())
                    .unwrap();
                prop_assert_eq!(pv.to_bits(), value.to_bits());
            }
        }
    }
}
