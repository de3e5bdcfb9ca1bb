//! A resolved FX digital option.

use chrono::{DateTime, Utc};
use std::fmt;

use fxval_core::types::{Currency, CurrencyPair, Date, ValidationError};

use crate::common::{LongShort, PutCall};
use crate::fx::ResolvedFxSingle;

/// A digital FX option, resolved for valuation.
///
/// A European option that, if in the money at expiry, triggers the
/// underlying foreign exchange. Construction goes through
/// [`ResolvedFxDigitalOption::builder`], which validates the cross-field
/// invariant that the expiry date cannot come after the underlying's
/// payment date; every construction path, including copy-reconstruction
/// via [`ResolvedFxDigitalOption::to_builder`] and serde deserialization,
/// re-runs that validation.
///
/// The strike, put/call flag, currency pair, and settlement currency are
/// derived from the stored fields on demand, never stored.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fxval_product::{LongShort, Payment, PutCall, ResolvedFxDigitalOption, ResolvedFxSingle};
/// use fxval_core::types::{Currency, CurrencyAmount, Date};
///
/// let payment_date = Date::from_ymd(2024, 6, 18).unwrap();
/// let underlying = ResolvedFxSingle::of(
///     Payment::of(CurrencyAmount::of(Currency::EUR, -1_000_000.0), payment_date),
///     Payment::of(CurrencyAmount::of(Currency::USD, 1_120_000.0), payment_date),
/// ).unwrap();
///
/// let option = ResolvedFxDigitalOption::builder()
///     .long_short(LongShort::Long)
///     .expiry(Utc.with_ymd_and_hms(2024, 6, 14, 15, 0, 0).unwrap())
///     .underlying(underlying)
///     .build()
///     .unwrap();
///
/// assert_eq!(option.strike(), 1.12);
/// assert_eq!(option.put_call(), PutCall::Call);
/// assert_eq!(option.counter_currency(), Currency::USD);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawResolvedFxDigitalOption"))]
pub struct ResolvedFxDigitalOption {
    /// Whether the option is long or short
    long_short: LongShort,
    /// The expiry date-time of the option (European exercise)
    expiry: DateTime<Utc>,
    /// The foreign exchange that occurs if the option is in the money
    underlying: ResolvedFxSingle,
}

// Deserialization re-enters through the builder, so serialized data is
// subject to the same cross-field validation as any other construction.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawResolvedFxDigitalOption {
    long_short: LongShort,
    expiry: DateTime<Utc>,
    underlying: ResolvedFxSingle,
}

#[cfg(feature = "serde")]
impl TryFrom<RawResolvedFxDigitalOption> for ResolvedFxDigitalOption {
    type Error = ValidationError;

    fn try_from(raw: RawResolvedFxDigitalOption) -> Result<Self, Self::Error> {
        ResolvedFxDigitalOption::builder()
            .long_short(raw.long_short)
            .expiry(raw.expiry)
            .underlying(raw.underlying)
            .build()
    }
}

impl ResolvedFxDigitalOption {
    /// Returns a builder for constructing an option.
    pub fn builder() -> ResolvedFxDigitalOptionBuilder {
        ResolvedFxDigitalOptionBuilder::default()
    }

    /// Returns a builder pre-populated with this option's fields.
    ///
    /// Building from the returned builder re-runs validation in full.
    pub fn to_builder(&self) -> ResolvedFxDigitalOptionBuilder {
        ResolvedFxDigitalOptionBuilder {
            long_short: Some(self.long_short),
            expiry: Some(self.expiry),
            underlying: Some(self.underlying.clone()),
        }
    }

    /// Returns whether the option is long or short.
    pub fn long_short(&self) -> LongShort {
        self.long_short
    }

    /// Returns the expiry date-time.
    pub fn expiry(&self) -> DateTime<Utc> {
        self.expiry
    }

    /// Returns the underlying foreign exchange transaction.
    pub fn underlying(&self) -> &ResolvedFxSingle {
        &self.underlying
    }

    /// Returns the expiry date (the date part of the expiry date-time).
    pub fn expiry_date(&self) -> Date {
        Date::from(self.expiry.date_naive())
    }

    /// Returns the conventional currency pair of the underlying.
    pub fn currency_pair(&self) -> CurrencyPair {
        self.underlying.currency_pair()
    }

    /// Returns the strike rate.
    ///
    /// The absolute ratio of the counter-currency payment amount to the
    /// base-currency payment amount. If the base-currency amount is zero
    /// the result is non-finite (infinity or NaN per IEEE division); the
    /// caller must guard against that degenerate underlying.
    pub fn strike(&self) -> f64 {
        (self.underlying.counter_currency_payment().amount()
            / self.underlying.base_currency_payment().amount())
        .abs()
    }

    /// Returns the put/call flag.
    ///
    /// A strictly positive counter-currency amount means the holder
    /// receives the counter currency in exchange for the base currency,
    /// which classifies as a call; otherwise the option is a put. The
    /// comparison is strict, so an exactly-zero counter amount
    /// classifies as put; no tolerance is applied.
    pub fn put_call(&self) -> PutCall {
        if self.underlying.counter_currency_payment().amount() > 0.0 {
            PutCall::Call
        } else {
            PutCall::Put
        }
    }

    /// Returns the counter currency of the underlying, in which the
    /// option settles.
    pub fn counter_currency(&self) -> Currency {
        self.underlying.counter_currency_payment().currency()
    }
}

impl fmt::Display for ResolvedFxDigitalOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ResolvedFxDigitalOption[{} {} {} expiring {}]",
            self.long_short,
            self.currency_pair(),
            self.put_call(),
            self.expiry_date()
        )
    }
}

/// Builder for [`ResolvedFxDigitalOption`].
///
/// All three fields are required; [`ResolvedFxDigitalOptionBuilder::build`]
/// is the single validation point and never exposes a half-constructed
/// option.
#[derive(Debug, Clone, Default)]
pub struct ResolvedFxDigitalOptionBuilder {
    long_short: Option<LongShort>,
    expiry: Option<DateTime<Utc>>,
    underlying: Option<ResolvedFxSingle>,
}

impl ResolvedFxDigitalOptionBuilder {
    /// Sets whether the option is long or short.
    pub fn long_short(mut self, long_short: LongShort) -> Self {
        self.long_short = Some(long_short);
        self
    }

    /// Sets the expiry date-time.
    pub fn expiry(mut self, expiry: DateTime<Utc>) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Sets the underlying foreign exchange transaction.
    pub fn underlying(mut self, underlying: ResolvedFxSingle) -> Self {
        self.underlying = Some(underlying);
        self
    }

    /// Builds the option, validating all invariants.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingField` if any field is unset
    /// - `ValidationError::DateOrder` if the expiry date is after the
    ///   underlying's payment date, carrying both compared dates
    pub fn build(self) -> Result<ResolvedFxDigitalOption, ValidationError> {
        let long_short = self
            .long_short
            .ok_or(ValidationError::MissingField { field: "long_short" })?;
        let expiry = self
            .expiry
            .ok_or(ValidationError::MissingField { field: "expiry" })?;
        let underlying = self
            .underlying
            .ok_or(ValidationError::MissingField { field: "underlying" })?;

        let expiry_date = Date::from(expiry.date_naive());
        let payment_date = underlying.payment_date();
        if expiry_date > payment_date {
            return Err(ValidationError::DateOrder {
                first: "expiry.date",
                first_date: expiry_date,
                second: "underlying.payment_date",
                second_date: payment_date,
            });
        }

        Ok(ResolvedFxDigitalOption {
            long_short,
            expiry,
            underlying,
        })
    }
}
