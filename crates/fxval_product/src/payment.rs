//! Dated payments.

use std::fmt;

use fxval_core::types::{Currency, CurrencyAmount, Date};

/// A single payment: an amount and the date it settles.
///
/// The sign of the amount carries direction: positive is received,
/// negative is paid.
///
/// # Examples
///
/// ```
/// use fxval_product::Payment;
/// use fxval_core::types::{Currency, CurrencyAmount, Date};
///
/// let payment = Payment::of(
///     CurrencyAmount::of(Currency::USD, -1_100_000.0),
///     Date::from_ymd(2024, 6, 18).unwrap(),
/// );
/// assert_eq!(payment.currency(), Currency::USD);
/// assert!(payment.value().is_negative());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Payment {
    /// The signed amount of the payment
    value: CurrencyAmount,
    /// The date the payment settles
    date: Date,
}

impl Payment {
    /// Creates a payment from an amount and settlement date.
    pub fn of(value: CurrencyAmount, date: Date) -> Self {
        Self { value, date }
    }

    /// Returns the signed amount.
    pub fn value(&self) -> CurrencyAmount {
        self.value
    }

    /// Returns the currency of the payment.
    pub fn currency(&self) -> Currency {
        self.value.currency()
    }

    /// Returns the signed numeric amount.
    pub fn amount(&self) -> f64 {
        self.value.amount()
    }

    /// Returns the settlement date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the payment with direction reversed.
    pub fn negated(&self) -> Self {
        Self {
            value: self.value.negated(),
            date: self.date,
        }
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.value, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let date = Date::from_ymd(2024, 6, 18).unwrap();
        let payment = Payment::of(CurrencyAmount::of(Currency::EUR, 1_000_000.0), date);
        assert_eq!(payment.currency(), Currency::EUR);
        assert_eq!(payment.amount(), 1_000_000.0);
        assert_eq!(payment.date(), date);
    }

    #[test]
    fn test_negated_keeps_date() {
        let date = Date::from_ymd(2024, 6, 18).unwrap();
        let payment = Payment::of(CurrencyAmount::of(Currency::EUR, 1_000_000.0), date);
        let negated = payment.negated();
        assert_eq!(negated.amount(), -1_000_000.0);
        assert_eq!(negated.date(), date);
        assert_eq!(negated.negated(), payment);
    }

    #[test]
    fn test_display() {
        let payment = Payment::of(
            CurrencyAmount::of(Currency::USD, -5.0),
            Date::from_ymd(2024, 1, 2).unwrap(),
        );
        assert_eq!(format!("{}", payment), "USD -5.00 on 2024-01-02");
    }
}
