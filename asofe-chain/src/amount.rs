//! Zatoshi amounts charged as relay fees.
//!
//! An [`Amount`] can only hold values that its [`Constraint`] allows, so a
//! fee can never be negative or larger than [`MAX_MONEY`].

use std::{cmp::Ordering, fmt, marker::PhantomData, ops::RangeInclusive};

mod fee_rate;

pub use fee_rate::{fee_for_size, rate_from_paid, FeeRate};

#[cfg(test)]
mod tests;

/// The result of an amount operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The number of zatoshis in one coin.
pub const COIN: i64 = 100_000_000;

/// The maximum zatoshi amount.
pub const MAX_MONEY: i64 = 21_000_000 * COIN;

/// The currency unit used when displaying amounts.
pub const CURRENCY_UNIT: &str = "ASF";

/// A number of zatoshis, checked against the range of `C`.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
#[serde(bound = "C: Constraint + Clone")]
pub struct Amount<C = NonNegative>(i64, #[serde(skip)] PhantomData<C>);

impl<C> fmt::Display for Amount<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<C> fmt::Debug for Amount<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Amount").field(&self.0).finish()
    }
}

impl<C> Amount<C>
where
    C: Constraint,
{
    /// Returns the number of zatoshis in this amount.
    pub fn zatoshis(&self) -> i64 {
        self.0
    }

    /// Returns an amount of zero zatoshis.
    pub fn zero() -> Amount<C> {
        Amount(0, PhantomData)
    }

    /// Returns the largest amount `C` allows.
    pub fn max() -> Amount<C> {
        Amount(*C::valid_range().end(), PhantomData)
    }
}

impl<C> TryFrom<i64> for Amount<C>
where
    C: Constraint,
{
    type Error = Error;

    fn try_from(zatoshis: i64) -> Result<Self> {
        C::validate(zatoshis).map(|zatoshis| Amount(zatoshis, PhantomData))
    }
}

impl<C> From<Amount<C>> for i64 {
    fn from(amount: Amount<C>) -> Self {
        amount.0
    }
}

impl From<Amount<NonNegative>> for u64 {
    fn from(amount: Amount<NonNegative>) -> Self {
        amount.0.unsigned_abs()
    }
}

impl<C> PartialEq for Amount<C> {
    fn eq(&self, other: &Amount<C>) -> bool {
        self.0 == other.0
    }
}

impl<C> Eq for Amount<C> {}

impl<C> PartialEq<i64> for Amount<C> {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl<C> PartialEq<Amount<C>> for i64 {
    fn eq(&self, other: &Amount<C>) -> bool {
        *self == other.0
    }
}

impl<C> PartialOrd for Amount<C> {
    fn partial_cmp(&self, other: &Amount<C>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> Ord for Amount<C> {
    fn cmp(&self, other: &Amount<C>) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Errors from checking [`Amount`]s.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value is outside the range the constraint allows.
    #[error("{value} zatoshis is outside the valid amount range {range:?}")]
    Constraint {
        /// The rejected value.
        value: i64,
        /// The allowed range.
        range: RangeInclusive<i64>,
    },
}

/// The range of values an [`Amount`] can hold.
pub trait Constraint {
    /// Returns the allowed values.
    fn valid_range() -> RangeInclusive<i64>;

    /// Returns `value` if it is in [`Constraint::valid_range`].
    fn validate(value: i64) -> Result<i64> {
        let range = Self::valid_range();

        if range.contains(&value) {
            Ok(value)
        } else {
            Err(Error::Constraint { value, range })
        }
    }
}

/// Amounts from zero to [`MAX_MONEY`], inclusive.
///
/// ```
/// # use asofe_chain::amount::{Constraint, MAX_MONEY, NonNegative};
/// assert_eq!(NonNegative::valid_range(), 0..=MAX_MONEY);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub struct NonNegative;

impl Constraint for NonNegative {
    fn valid_range() -> RangeInclusive<i64> {
        0..=MAX_MONEY
    }
}
