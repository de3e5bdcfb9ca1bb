//! Cash-flow components of a resolved swap leg.
//!
//! A leg decomposes into a sequence of [`CashFlowComponent`] values, a
//! closed set of variants that pricers match on exhaustively.

use fxval_core::types::{Currency, Date, DayCount, ValidationError};

use crate::payment::Payment;

/// An accrual period paying a fixed rate on a notional.
///
/// The period accrues between `start_date` and `end_date` and settles on
/// `payment_date`, which may fall after the accrual end.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRatePeriod"))]
pub struct RatePeriod {
    currency: Currency,
    notional: f64,
    fixed_rate: f64,
    start_date: Date,
    end_date: Date,
    payment_date: Date,
    day_count: DayCount,
}

// Deserialization re-enters through `new`, so serialized data is subject
// to the same date-ordering validation as any other construction.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRatePeriod {
    currency: Currency,
    notional: f64,
    fixed_rate: f64,
    start_date: Date,
    end_date: Date,
    payment_date: Date,
    day_count: DayCount,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRatePeriod> for RatePeriod {
    type Error = ValidationError;

    fn try_from(raw: RawRatePeriod) -> Result<Self, Self::Error> {
        RatePeriod::new(
            raw.currency,
            raw.notional,
            raw.fixed_rate,
            raw.start_date,
            raw.end_date,
            raw.payment_date,
            raw.day_count,
        )
    }
}

impl RatePeriod {
    /// Creates a rate period, validating date ordering.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DateOrder` unless
    /// `start_date <= end_date <= payment_date`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        currency: Currency,
        notional: f64,
        fixed_rate: f64,
        start_date: Date,
        end_date: Date,
        payment_date: Date,
        day_count: DayCount,
    ) -> Result<Self, ValidationError> {
        if start_date > end_date {
            return Err(ValidationError::DateOrder {
                first: "start_date",
                first_date: start_date,
                second: "end_date",
                second_date: end_date,
            });
        }
        if end_date > payment_date {
            return Err(ValidationError::DateOrder {
                first: "end_date",
                first_date: end_date,
                second: "payment_date",
                second_date: payment_date,
            });
        }
        Ok(Self {
            currency,
            notional,
            fixed_rate,
            start_date,
            end_date,
            payment_date,
            day_count,
        })
    }

    /// Returns the payment currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the notional amount.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the fixed rate, as a decimal (5% is 0.05).
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Returns the accrual start date.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the accrual end date.
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the settlement date of the accrued amount.
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Returns the day count convention.
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    /// Returns the accrual year fraction between start and end.
    pub fn accrual_factor(&self) -> f64 {
        self.day_count.year_fraction(self.start_date, self.end_date)
    }
}

/// An exchange of notional, a single known payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotionalExchange {
    payment: Payment,
}

impl NotionalExchange {
    /// Creates a notional exchange from its payment.
    pub fn of(payment: Payment) -> Self {
        Self { payment }
    }

    /// Returns the payment.
    pub fn payment(&self) -> Payment {
        self.payment
    }

    /// Returns the payment currency.
    pub fn currency(&self) -> Currency {
        self.payment.currency()
    }

    /// Returns the payment date.
    pub fn payment_date(&self) -> Date {
        self.payment.date()
    }
}

/// A cash-flow component of a resolved leg.
///
/// The set of variants is closed; pricers match on it exhaustively, so
/// adding a variant is a compile-checked change at every dispatch site.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CashFlowComponent {
    /// A fixed-rate accrual period
    RatePeriod(RatePeriod),
    /// An exchange of notional
    NotionalExchange(NotionalExchange),
}

impl CashFlowComponent {
    /// Returns the payment currency of the component.
    pub fn currency(&self) -> Currency {
        match self {
            CashFlowComponent::RatePeriod(period) => period.currency(),
            CashFlowComponent::NotionalExchange(exchange) => exchange.currency(),
        }
    }

    /// Returns the date the component settles on.
    pub fn payment_date(&self) -> Date {
        match self {
            CashFlowComponent::RatePeriod(period) => period.payment_date(),
            CashFlowComponent::NotionalExchange(exchange) => exchange.payment_date(),
        }
    }

    /// Returns the variant name, for diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            CashFlowComponent::RatePeriod(_) => "RatePeriod",
            CashFlowComponent::NotionalExchange(_) => "NotionalExchange",
        }
    }
}

impl From<RatePeriod> for CashFlowComponent {
    fn from(period: RatePeriod) -> Self {
        CashFlowComponent::RatePeriod(period)
    }
}

impl From<NotionalExchange> for CashFlowComponent {
    fn from(exchange: NotionalExchange) -> Self {
        CashFlowComponent::NotionalExchange(exchange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fxval_core::types::CurrencyAmount;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn period() -> RatePeriod {
        RatePeriod::new(
            Currency::USD,
            1_000_000.0,
            0.05,
            date(2024, 1, 15),
            date(2024, 7, 15),
            date(2024, 7, 17),
            DayCount::Act365Fixed,
        )
        .unwrap()
    }

    #[test]
    fn test_rate_period_accessors() {
        let period = period();
        assert_eq!(period.currency(), Currency::USD);
        assert_eq!(period.notional(), 1_000_000.0);
        assert_eq!(period.fixed_rate(), 0.05);
        assert_eq!(period.payment_date(), date(2024, 7, 17));
    }

    #[test]
    fn test_rate_period_accrual_factor() {
        // 182 days over Act/365F
        assert_relative_eq!(period().accrual_factor(), 182.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_rate_period_date_order_validated() {
        let err = RatePeriod::new(
            Currency::USD,
            1_000_000.0,
            0.05,
            date(2024, 7, 15),
            date(2024, 1, 15),
            date(2024, 7, 17),
            DayCount::Act365Fixed,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::DateOrder { first: "start_date", .. }));

        let err = RatePeriod::new(
            Currency::USD,
            1_000_000.0,
            0.05,
            date(2024, 1, 15),
            date(2024, 7, 15),
            date(2024, 7, 14),
            DayCount::Act365Fixed,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::DateOrder { first: "end_date", .. }));
    }

    #[test]
    fn test_rate_period_payment_on_accrual_end_allowed() {
        let result = RatePeriod::new(
            Currency::USD,
            1_000_000.0,
            0.05,
            date(2024, 1, 15),
            date(2024, 7, 15),
            date(2024, 7, 15),
            DayCount::Act365Fixed,
        );
        assert!(result.is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_rate_period_deserialization_revalidates() {
        let json = serde_json::to_string(&period()).unwrap();
        let parsed: RatePeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, period());

        // Move the payment date before the accrual end
        let tampered = json.replace("2024-07-17", "2024-03-17");
        assert!(serde_json::from_str::<RatePeriod>(&tampered).is_err());
    }

    #[test]
    fn test_notional_exchange() {
        let payment = Payment::of(
            CurrencyAmount::of(Currency::EUR, -1_000_000.0),
            date(2024, 7, 17),
        );
        let exchange = NotionalExchange::of(payment);
        assert_eq!(exchange.payment(), payment);
        assert_eq!(exchange.currency(), Currency::EUR);
        assert_eq!(exchange.payment_date(), date(2024, 7, 17));
    }

    #[test]
    fn test_component_delegation() {
        let component = CashFlowComponent::from(period());
        assert_eq!(component.currency(), Currency::USD);
        assert_eq!(component.payment_date(), date(2024, 7, 17));
        assert_eq!(component.variant_name(), "RatePeriod");

        let exchange = NotionalExchange::of(Payment::of(
            CurrencyAmount::of(Currency::EUR, 5.0),
            date(2024, 7, 17),
        ));
        let component = CashFlowComponent::from(exchange);
        assert_eq!(component.currency(), Currency::EUR);
        assert_eq!(component.variant_name(), "NotionalExchange");
    }
}
