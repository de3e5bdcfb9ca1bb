//! Signed monetary amounts.
//!
//! A [`CurrencyAmount`] pairs an `f64` amount with its [`Currency`]. The
//! sign carries direction: positive amounts are received, negative amounts
//! are paid. The amount is treated as an opaque numeric; no rounding or
//! minor-unit arithmetic is applied.

use std::fmt;

use super::currency::Currency;

/// An amount of a single currency, signed by direction.
///
/// Positive means receive, negative means pay.
///
/// Equality and hashing are bit-exact over the amount: amounts in
/// identity-bearing positions are constructed values, never the result of
/// arithmetic, so bitwise comparison is well defined.
///
/// # Examples
///
/// ```
/// use fxval_core::types::{Currency, CurrencyAmount};
///
/// let receive = CurrencyAmount::of(Currency::USD, 1_100_000.0);
/// assert!(receive.is_positive());
///
/// let pay = receive.negated();
/// assert_eq!(pay.amount(), -1_100_000.0);
/// assert_eq!(pay.currency(), Currency::USD);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyAmount {
    /// The currency of the amount
    currency: Currency,
    /// The signed amount; positive = receive, negative = pay
    amount: f64,
}

impl CurrencyAmount {
    /// Creates an amount of the given currency.
    pub fn of(currency: Currency, amount: f64) -> Self {
        Self { currency, amount }
    }

    /// Returns the currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the signed amount.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the amount with the sign flipped.
    pub fn negated(&self) -> Self {
        Self {
            currency: self.currency,
            amount: -self.amount,
        }
    }

    /// Returns true if the amount is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.amount > 0.0
    }

    /// Returns true if the amount is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns the sign of the amount: -1, 0 or 1.
    #[inline]
    pub fn signum(&self) -> f64 {
        if self.amount == 0.0 {
            0.0
        } else {
            self.amount.signum()
        }
    }
}

impl PartialEq for CurrencyAmount {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.amount.to_bits() == other.amount.to_bits()
    }
}

impl Eq for CurrencyAmount {}

impl std::hash::Hash for CurrencyAmount {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.currency.hash(state);
        self.amount.to_bits().hash(state);
    }
}

impl fmt::Display for CurrencyAmount {
    /// Formats as "CCY amount" with the currency's standard decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.*}",
            self.currency.code(),
            self.currency.decimal_places() as usize,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_and_accessors() {
        let amount = CurrencyAmount::of(Currency::EUR, -250.5);
        assert_eq!(amount.currency(), Currency::EUR);
        assert_eq!(amount.amount(), -250.5);
    }

    #[test]
    fn test_negated_roundtrip() {
        let amount = CurrencyAmount::of(Currency::GBP, 42.0);
        assert_eq!(amount.negated().negated(), amount);
    }

    #[test]
    fn test_signs() {
        assert!(CurrencyAmount::of(Currency::USD, 1.0).is_positive());
        assert!(CurrencyAmount::of(Currency::USD, -1.0).is_negative());
        let zero = CurrencyAmount::of(Currency::USD, 0.0);
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert_eq!(zero.signum(), 0.0);
        assert_eq!(CurrencyAmount::of(Currency::USD, -3.0).signum(), -1.0);
    }

    #[test]
    fn test_equality_covers_currency_and_amount() {
        let a = CurrencyAmount::of(Currency::USD, 100.0);
        let b = CurrencyAmount::of(Currency::USD, 100.0);
        let c = CurrencyAmount::of(Currency::EUR, 100.0);
        let d = CurrencyAmount::of(Currency::USD, 100.01);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_display_uses_decimal_places() {
        assert_eq!(
            format!("{}", CurrencyAmount::of(Currency::USD, 1234.5)),
            "USD 1234.50"
        );
        assert_eq!(
            format!("{}", CurrencyAmount::of(Currency::JPY, 1500.0)),
            "JPY 1500"
        );
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(CurrencyAmount::of(Currency::USD, 100.0));
        set.insert(CurrencyAmount::of(Currency::USD, 100.0));
        set.insert(CurrencyAmount::of(Currency::USD, -100.0));
        assert_eq!(set.len(), 2);
    }
}
