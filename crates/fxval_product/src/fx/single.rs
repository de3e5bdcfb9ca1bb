//! A single resolved FX exchange.

use std::fmt;

use fxval_core::types::{CurrencyPair, Date, ValidationError};

use crate::payment::Payment;

/// A single foreign exchange transaction, resolved for valuation.
///
/// Two payments in different currencies settling on the same date, one
/// received and one paid. The payments are ordered so that the base
/// currency of the conventional pair comes first, whichever order they
/// were supplied in.
///
/// # Examples
///
/// ```
/// use fxval_product::{Payment, ResolvedFxSingle};
/// use fxval_core::types::{Currency, CurrencyAmount, Date};
///
/// let date = Date::from_ymd(2024, 6, 18).unwrap();
/// // Receive 1M EUR, pay 1.1M USD
/// let fx = ResolvedFxSingle::of(
///     Payment::of(CurrencyAmount::of(Currency::EUR, 1_000_000.0), date),
///     Payment::of(CurrencyAmount::of(Currency::USD, -1_100_000.0), date),
/// ).unwrap();
///
/// assert_eq!(fx.currency_pair().code(), "EUR/USD");
/// assert_eq!(fx.payment_date(), date);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawResolvedFxSingle"))]
pub struct ResolvedFxSingle {
    /// Payment in the base currency of the conventional pair
    base_currency_payment: Payment,
    /// Payment in the counter currency of the conventional pair
    counter_currency_payment: Payment,
}

// Deserialization re-enters through `of`, so serialized data cannot
// smuggle in payments that violate the construction invariants.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawResolvedFxSingle {
    base_currency_payment: Payment,
    counter_currency_payment: Payment,
}

#[cfg(feature = "serde")]
impl TryFrom<RawResolvedFxSingle> for ResolvedFxSingle {
    type Error = ValidationError;

    fn try_from(raw: RawResolvedFxSingle) -> Result<Self, Self::Error> {
        ResolvedFxSingle::of(raw.base_currency_payment, raw.counter_currency_payment)
    }
}

impl ResolvedFxSingle {
    /// Creates an FX exchange from its two payments.
    ///
    /// The payments may be supplied in either order; they are stored in
    /// conventional pair order.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the payments share a currency, have
    /// different settlement dates, or have the same (non-zero) sign.
    pub fn of(payment1: Payment, payment2: Payment) -> Result<Self, ValidationError> {
        if payment1.currency() == payment2.currency() {
            return Err(ValidationError::SamePaymentCurrency {
                currency: payment1.currency().code(),
            });
        }
        if payment1.date() != payment2.date() {
            return Err(ValidationError::PaymentDateMismatch(
                payment1.date(),
                payment2.date(),
            ));
        }
        if payment1.value().signum() * payment2.value().signum() > 0.0 {
            return Err(ValidationError::SameSignPayments);
        }
        // Order by FX market convention; a zero-amount pair cannot clash
        // because the currencies are distinct.
        let conventional =
            payment1.currency().fx_precedence() < payment2.currency().fx_precedence();
        let (base, counter) = if conventional {
            (payment1, payment2)
        } else {
            (payment2, payment1)
        };
        Ok(Self {
            base_currency_payment: base,
            counter_currency_payment: counter,
        })
    }

    /// Returns the payment in the base currency.
    pub fn base_currency_payment(&self) -> Payment {
        self.base_currency_payment
    }

    /// Returns the payment in the counter currency.
    pub fn counter_currency_payment(&self) -> Payment {
        self.counter_currency_payment
    }

    /// Returns the date both payments settle.
    pub fn payment_date(&self) -> Date {
        self.base_currency_payment.date()
    }

    /// Returns the conventional currency pair of the exchange.
    pub fn currency_pair(&self) -> CurrencyPair {
        // Construction guarantees distinct currencies in conventional order.
        match CurrencyPair::of(
            self.base_currency_payment.currency(),
            self.counter_currency_payment.currency(),
        ) {
            Ok(pair) => pair,
            Err(_) => unreachable!("payments validated to differ in currency"),
        }
    }

    /// Returns the inverse transaction: both payment directions flipped.
    pub fn inverse(&self) -> Self {
        Self {
            base_currency_payment: self.base_currency_payment.negated(),
            counter_currency_payment: self.counter_currency_payment.negated(),
        }
    }
}

impl fmt::Display for ResolvedFxSingle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ResolvedFxSingle[{} vs {}]",
            self.base_currency_payment, self.counter_currency_payment
        )
    }
}
