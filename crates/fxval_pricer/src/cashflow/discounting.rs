//! Reference pricer functions using plain discounting.

use fxval_product::{NotionalExchange, RatePeriod};

use crate::cashflow::{NotionalExchangePricer, RatePeriodPricer};
use crate::environment::PricingEnvironment;
use crate::error::PricerError;

/// Prices a rate period by accruing the fixed rate and discounting.
///
/// Future value is `notional * fixed_rate * accrual_factor`; present value
/// multiplies by the discount factor at the payment date. The sign follows
/// the notional: a negative notional produces negative values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountingRatePeriodPricer;

impl RatePeriodPricer for DiscountingRatePeriodPricer {
    fn present_value(
        &self,
        env: &dyn PricingEnvironment,
        period: &RatePeriod,
    ) -> Result<f64, PricerError> {
        let fv = self.future_value(env, period)?;
        let df = env.discount_factor(period.currency(), period.payment_date())?;
        Ok(fv * df)
    }

    fn future_value(
        &self,
        _env: &dyn PricingEnvironment,
        period: &RatePeriod,
    ) -> Result<f64, PricerError> {
        Ok(period.notional() * period.fixed_rate() * period.accrual_factor())
    }
}

/// Prices a notional exchange by discounting its payment amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountingNotionalExchangePricer;

impl NotionalExchangePricer for DiscountingNotionalExchangePricer {
    fn present_value(
        &self,
        env: &dyn PricingEnvironment,
        exchange: &NotionalExchange,
    ) -> Result<f64, PricerError> {
        let fv = self.future_value(env, exchange)?;
        let df = env.discount_factor(exchange.currency(), exchange.payment_date())?;
        Ok(fv * df)
    }

    fn future_value(
        &self,
        _env: &dyn PricingEnvironment,
        exchange: &NotionalExchange,
    ) -> Result<f64, PricerError> {
        Ok(exchange.payment().amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fxval_core::types::{Currency, CurrencyAmount, Date, DayCount};
    use fxval_product::Payment;

    use crate::environment::FlatPricingEnvironment;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn env() -> FlatPricingEnvironment {
        FlatPricingEnvironment::new(date(2024, 1, 15), 0.05)
    }

    fn period(notional: f64) -> RatePeriod {
        RatePeriod::new(
            Currency::USD,
            notional,
            0.05,
            date(2024, 1, 15),
            date(2024, 7, 15),
            date(2024, 7, 17),
            DayCount::Act365Fixed,
        )
        .unwrap()
    }

    #[test]
    fn test_rate_period_future_value() {
        let pricer = DiscountingRatePeriodPricer;
        let fv = pricer.future_value(&env(), &period(1_000_000.0)).unwrap();
        assert_relative_eq!(fv, 1_000_000.0 * 0.05 * 182.0 / 365.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rate_period_present_value_discounts_to_payment_date() {
        let env = env();
        let pricer = DiscountingRatePeriodPricer;
        let period = period(1_000_000.0);
        let fv = pricer.future_value(&env, &period).unwrap();
        let pv = pricer.present_value(&env, &period).unwrap();
        // 184 days from valuation to payment
        let df = (-0.05 * 184.0 / 365.0_f64).exp();
        assert_relative_eq!(pv, fv * df, epsilon = 1e-9);
        assert!(pv < fv);
    }

    #[test]
    fn test_rate_period_sign_follows_notional() {
        let pricer = DiscountingRatePeriodPricer;
        let pv = pricer.present_value(&env(), &period(-1_000_000.0)).unwrap();
        assert!(pv < 0.0);
    }

    #[test]
    fn test_notional_exchange_values() {
        let env = env();
        let pricer = DiscountingNotionalExchangePricer;
        let exchange = NotionalExchange::of(Payment::of(
            CurrencyAmount::of(Currency::EUR, -2_000_000.0),
            date(2024, 7, 17),
        ));
        let fv = pricer.future_value(&env, &exchange).unwrap();
        assert_eq!(fv, -2_000_000.0);
        let pv = pricer.present_value(&env, &exchange).unwrap();
        let df = (-0.05 * 184.0 / 365.0_f64).exp();
        assert_relative_eq!(pv, -2_000_000.0 * df, epsilon = 1e-9);
    }
}
