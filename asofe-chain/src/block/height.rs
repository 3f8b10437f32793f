//! Block height.

use std::ops::{Add, Sub};

use thiserror::Error;

/// The length of the chain back to the genesis block.
///
/// Two [`Height`]s can't be added, but they can be *subtracted* to get their difference,
/// represented as an [`HeightDiff`]. This difference can then be added to or subtracted from a
/// [`Height`]. Note the similarity with `chrono::DateTime` and `chrono::Duration`.
///
/// # Invariants
///
/// Users should not construct block heights greater than `Height::MAX`.
///
/// # Consensus
///
/// Blocks and transactions serialize heights in several different formats,
/// so this type only has a serde representation, as a plain integer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Height(pub u32);

/// Errors from [`Height`] arithmetic that leaves the valid height range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeightError {
    /// The height would be larger than [`Height::MAX`].
    #[error("the next height after {0:?} is above the maximum height")]
    Overflow(Height),

    /// The height would be below [`Height::MIN`].
    #[error("the previous height before {0:?} is below the minimum height")]
    Underflow(Height),

    /// A string did not contain a valid height.
    #[error("could not parse a block height from {0:?}")]
    Parse(String),
}

impl std::str::FromStr for Height {
    type Err = HeightError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse() {
            Ok(h) if (Height(h) <= Height::MAX) => Ok(Height(h)),
            _ => Err(HeightError::Parse(s.to_owned())),
        }
    }
}

impl std::fmt::Display for Height {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Height {
    /// The minimum [`Height`].
    ///
    /// Due to the underlying type, it is impossible to construct block heights
    /// less than [`Height::MIN`].
    ///
    /// Style note: Sometimes, [`Height::MIN`] is less readable than
    /// `Height(0)`. Use whichever makes sense in context.
    pub const MIN: Height = Height(0);

    /// The maximum [`Height`].
    ///
    /// Users should not construct block heights greater than [`Height::MAX`].
    pub const MAX: Height = Height(499_999_999);

    /// The maximum [`Height`] as a [`u32`], for range patterns.
    ///
    /// `Height::MAX.0` can't be used in match range patterns, use this
    /// alias instead.
    pub const MAX_AS_U32: u32 = Self::MAX.0;

    /// Returns the next [`Height`].
    pub fn next(self) -> Result<Self, HeightError> {
        (self + 1).ok_or(HeightError::Overflow(self))
    }

    /// Returns the previous [`Height`].
    pub fn previous(self) -> Result<Self, HeightError> {
        (self - 1).ok_or(HeightError::Underflow(self))
    }

    /// Returns `true` if the [`Height`] is at its minimum, the genesis height.
    pub fn is_min(self) -> bool {
        self == Self::MIN
    }
}

/// A difference between two [`Height`]s, possibly negative.
///
/// This can represent the difference between any height values,
/// even if they are outside the valid height range (for example, in buggy RPC code).
pub type HeightDiff = i64;

impl TryFrom<u32> for Height {
    type Error = &'static str;

    /// Checks that the `height` is within the valid [`Height`] range.
    fn try_from(height: u32) -> Result<Self, Self::Error> {
        let height = Self(height);

        if height <= Self::MAX {
            Ok(height)
        } else {
            Err("heights must be less than or equal to Height::MAX")
        }
    }
}

impl From<Height> for u32 {
    fn from(height: Height) -> Self {
        height.0
    }
}

impl From<Height> for HeightDiff {
    fn from(height: Height) -> Self {
        height.0.into()
    }
}

// We don't implement Add<u32> or Sub<u32>, because they cause type inference issues for integer constants.

impl Sub<Height> for Height {
    type Output = HeightDiff;

    /// Subtract two heights, returning the result, which can be negative.
    /// Since [`HeightDiff`] is `i64` and [`Height`] is `u32`, the result is always correct.
    fn sub(self, rhs: Height) -> Self::Output {
        // All these conversions are exact, and the subtraction can't overflow or underflow.
        let lhs = HeightDiff::from(self.0);
        let rhs = HeightDiff::from(rhs.0);

        lhs - rhs
    }
}

impl Sub<HeightDiff> for Height {
    type Output = Option<Self>;

    /// Subtract a height difference from a height, returning `None` if the resulting height is
    /// outside the valid `Height` range (this also checks the result is non-negative).
    fn sub(self, rhs: HeightDiff) -> Option<Self> {
        // We need to convert the height to [`i64`] so we can subtract negative [`HeightDiff`]s.
        let lhs = HeightDiff::from(self.0);
        let res = lhs.checked_sub(rhs)?;

        // Check the bounds.
        let res = u32::try_from(res).ok()?;
        Height::try_from(res).ok()
    }
}

impl Add<HeightDiff> for Height {
    type Output = Option<Height>;

    /// Add a height difference to a height, returning `None` if the resulting height is
    /// outside the valid `Height` range (this also checks the result is non-negative).
    fn add(self, rhs: HeightDiff) -> Option<Height> {
        // We need to convert the height to [`i64`] so we can add negative [`HeightDiff`]s.
        let lhs = i64::from(self.0);
        let res = lhs.checked_add(rhs)?;

        // Check the bounds.
        let res = u32::try_from(res).ok()?;
        Height::try_from(res).ok()
    }
}

#[cfg(any(test, feature = "proptest-impl"))]
use proptest::prelude::*;

#[cfg(any(test, feature = "proptest-impl"))]
impl Arbitrary for Height {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (Height::MIN.0..=Height::MAX.0).prop_map(Height).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_tests() {
        asofe_test::init();

        // Elementary checks.
        assert_eq!(Some(Height(2)), Height(1) + 1);
        assert_eq!(None, Height::MAX + 1);

        let height = Height(Height::MAX_AS_U32 - 1);
        assert!(height < Height::MAX);

        let max_height = (height + 1).expect("this addition should produce the max height");
        assert!(height < max_height);
        assert!(max_height <= Height::MAX);
        assert_eq!(Height::MAX, max_height);
        assert_eq!(None, max_height + 1);

        // Bad heights aren't caught at compile-time or runtime, until we add or subtract
        assert_eq!(None, Height(Height::MAX_AS_U32 + 1) + 0);
        assert_eq!(None, Height(i32::MAX as u32) + 1);
        assert_eq!(None, Height(u32::MAX) + 0);

        // Adding negative numbers
        assert_eq!(Some(Height(1)), Height(2) + -1);
        assert_eq!(Some(Height(0)), Height(1) + -1);
        assert_eq!(None, Height(0) + -1);

        // Sub<HeightDiff> for Height
        assert_eq!(Some(Height(1)), Height(2) - 1);
        assert_eq!(Some(Height(0)), Height(1) - 1);
        assert_eq!(None, Height(0) - 1);
        assert_eq!(None, Height::MAX - -1);

        // Sub<Height> for Height
        assert_eq!(1, Height(2) - Height(1));
        assert_eq!(0, Height(1) - Height(1));
        assert_eq!(-1, Height(0) - Height(1));
        assert_eq!(-5, Height(2) - Height(7));
        assert_eq!(Height::MAX.0 as HeightDiff, Height::MAX - Height(0));
        assert_eq!(-(Height::MAX.0 as HeightDiff), Height(0) - Height::MAX);
    }

    #[test]
    fn next_and_previous() {
        asofe_test::init();

        assert_eq!(Height(0).next(), Ok(Height(1)));
        assert_eq!(Height(1).previous(), Ok(Height(0)));
        assert_eq!(Height(0).previous(), Err(HeightError::Underflow(Height(0))));
        assert_eq!(Height::MAX.next(), Err(HeightError::Overflow(Height::MAX)));
        assert!(Height::MIN.is_min());
        assert!(!Height(1).is_min());
    }

    #[test]
    fn parse_heights() {
        asofe_test::init();

        assert_eq!("850000".parse::<Height>(), Ok(Height(850_000)));
        assert!("500000000".parse::<Height>().is_err());
        assert!("-1".parse::<Height>().is_err());
        assert!("tip".parse::<Height>().is_err());

        let error = "500000000".parse::<Height>().expect_err("above the maximum height");
        assert_eq!(error.clone(), HeightError::Parse("500000000".to_string()));
        assert_eq!(
            error.to_string(),
            "could not parse a block height from \"500000000\""
        );
    }
}
