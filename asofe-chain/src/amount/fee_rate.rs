//! Relay fee rates, priced per kilobyte.

use std::fmt;

use super::{Amount, NonNegative, COIN, CURRENCY_UNIT, MAX_MONEY};

/// The divisor applied to `rate * size` when converting a [`FeeRate`] into a fee.
///
/// This is larger than the 1000 bytes in a kilobyte, so a fee computed from a
/// rate is one hundredth of the rate recovered by [`FeeRate::from_paid`].
pub const FEE_DIVISOR: f64 = 100_000.0;

/// A fee rate in zatoshis per kilobyte.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(proptest_derive::Arbitrary))]
pub struct FeeRate {
    zatoshis_per_kilobyte: u64,
}

impl FeeRate {
    /// Returns a fee rate of `zatoshis_per_kilobyte`.
    pub const fn new(zatoshis_per_kilobyte: u64) -> FeeRate {
        FeeRate {
            zatoshis_per_kilobyte,
        }
    }

    /// Returns the rate implied by paying `fee_paid` for a transaction of `size` bytes.
    ///
    /// A zero `size` gives a zero rate.
    pub fn from_paid(fee_paid: Amount<NonNegative>, size: usize) -> FeeRate {
        if size == 0 {
            return FeeRate::new(0);
        }

        // MAX_MONEY * 1000 fits in a u64, but the size doesn't have to.
        let rate = u128::from(u64::from(fee_paid)) * 1000 / size as u128;

        FeeRate::new(u64::try_from(rate).unwrap_or(u64::MAX))
    }

    /// Returns the rate in zatoshis per kilobyte.
    pub fn zatoshis_per_kilobyte(&self) -> u64 {
        self.zatoshis_per_kilobyte
    }

    /// Returns the fee for a transaction of `size` bytes.
    ///
    /// The fee is computed with a double-precision intermediate, then truncated.
    /// Any non-zero rate charges at least one zatoshi for a non-empty transaction,
    /// and an empty transaction is always free.
    ///
    /// Fees larger than [`MAX_MONEY`] are clamped to it, so every fee is a valid
    /// [`Amount`]. This deliberately differs from zcashd's `CFeeRate::GetFee`,
    /// which returns the unclamped product.
    ///
    /// ```
    /// # use asofe_chain::amount::FeeRate;
    /// assert_eq!(FeeRate::new(1000).fee(500), 5);
    /// assert_eq!(FeeRate::new(1).fee(1), 1);
    /// assert_eq!(FeeRate::new(1000).fee(0), 0);
    /// ```
    pub fn fee(&self, size: usize) -> Amount<NonNegative> {
        if size == 0 || self.zatoshis_per_kilobyte == 0 {
            return Amount::zero();
        }

        let raw = self.zatoshis_per_kilobyte as f64 * size as f64 / FEE_DIVISOR;

        // `raw` is positive here, so a truncated zero fee can't happen,
        // and charging the full rate as a fallback is never needed.
        let fee = if raw < 1.0 {
            1
        } else if raw >= MAX_MONEY as f64 {
            MAX_MONEY
        } else {
            raw as i64
        };

        Amount::try_from(fee).unwrap_or_else(|_| Amount::max())
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coin = COIN as u64;

        write!(
            f,
            "{}.{:02} {}/kB",
            self.zatoshis_per_kilobyte / coin,
            self.zatoshis_per_kilobyte % coin,
            CURRENCY_UNIT,
        )
    }
}

impl From<u64> for FeeRate {
    fn from(zatoshis_per_kilobyte: u64) -> Self {
        FeeRate::new(zatoshis_per_kilobyte)
    }
}

/// Returns the fee charged at `rate` zatoshis per kilobyte for `size` bytes.
///
/// See [`FeeRate::fee`].
pub fn fee_for_size(rate: u64, size: usize) -> Amount<NonNegative> {
    FeeRate::new(rate).fee(size)
}

/// Returns the rate in zatoshis per kilobyte implied by `fee_paid` for `size` bytes.
///
/// See [`FeeRate::from_paid`].
pub fn rate_from_paid(fee_paid: Amount<NonNegative>, size: usize) -> u64 {
    FeeRate::from_paid(fee_paid, size).zatoshis_per_kilobyte()
}
