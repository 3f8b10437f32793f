//! Halving and founders' reward calculations.
//!
//! This module contains the interval arithmetic needed to decide which
//! halving a height is in, and which founders' reward address a block pays.
//! The block subsidy amounts are calculated by the block reward code.
//!
//! Heights after Blossom activation are scaled by
//! [`BLOSSOM_POW_TARGET_SPACING_RATIO`] before any interval arithmetic, because
//! blocks are produced twice as often after Blossom.

pub mod constants;

use std::fmt;

use crate::{
    block::{Height, HeightDiff},
    parameters::{
        constants::BLOSSOM_POW_TARGET_SPACING_RATIO, network::consensus::ConsensusParams,
    },
};

/// A founders' reward address, in its encoded form.
///
/// Addresses are decoded into scripts by the block reward code.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FounderAddress(String);

impl FounderAddress {
    /// Returns the encoded address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FounderAddress {
    fn from(address: &str) -> Self {
        FounderAddress(address.to_owned())
    }
}

impl From<String> for FounderAddress {
    fn from(address: String) -> Self {
        FounderAddress(address)
    }
}

impl fmt::Display for FounderAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Halving and founders' reward errors.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum SubsidyError {
    /// The genesis block has no block reward.
    #[error("height {0:?} has no block reward")]
    InvalidHeight(Height),

    /// The height doesn't pay a founders' reward.
    #[error("height {height:?} is outside the founders' reward heights 1..={last:?}")]
    FoundersRewardHeightOutOfRange {
        /// The requested height.
        height: Height,
        /// The last founders' reward height.
        last: Height,
    },

    /// There is no founders' reward address at the index.
    #[error("founders' reward address index {index} is out of range for {len} addresses")]
    FoundersRewardIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of addresses.
        len: usize,
    },
}

/// Returns `height` as if blocks had kept their pre-Blossom spacing.
///
/// Heights before the Blossom activation height `B` are unchanged,
/// later heights are `B + (height - B) / BLOSSOM_POW_TARGET_SPACING_RATIO`.
pub fn blossom_adjusted_height(height: Height, params: &ConsensusParams) -> Height {
    blossom_adjusted_height_for_activation(height, params.blossom_activation_height())
}

fn blossom_adjusted_height_for_activation(
    height: Height,
    blossom_activation: Option<Height>,
) -> Height {
    match blossom_activation {
        Some(blossom_height) if height >= blossom_height => {
            let post_blossom_blocks =
                (height.0 - blossom_height.0) / BLOSSOM_POW_TARGET_SPACING_RATIO;

            Height(blossom_height.0 + post_blossom_blocks)
        }
        _ => height,
    }
}

/// The halving index for a block height.
///
/// `Halving(height)`, as described in [protocol specification §7.8][7.8],
/// shifted by the slow start interval.
///
/// Returns an error for the genesis height, which has no block reward.
///
/// [7.8]: https://zips.z.cash/protocol/protocol.pdf#subsidies
pub fn num_halvings(height: Height, params: &ConsensusParams) -> Result<u32, SubsidyError> {
    if height.is_min() {
        return Err(SubsidyError::InvalidHeight(height));
    }

    let adjusted_height = HeightDiff::from(blossom_adjusted_height(height, params));
    let slow_start_shift = HeightDiff::from(params.slow_start_shift());

    if adjusted_height < slow_start_shift {
        return Ok(0);
    }

    let halving_index =
        (adjusted_height - slow_start_shift) / params.pre_blossom_halving_interval();

    // Bounded by the input height, because the interval is positive.
    Ok(u32::try_from(halving_index).unwrap_or(u32::MAX))
}

/// The first block height of the halving at the provided halving index.
///
/// Returns `None` if the height would be above [`Height::MAX`].
pub fn height_for_halving(halving: u32, params: &ConsensusParams) -> Option<Height> {
    height_for_halving_with_blossom(halving, params.blossom_activation_height(), params)
}

fn height_for_halving_with_blossom(
    halving: u32,
    blossom_activation: Option<Height>,
    params: &ConsensusParams,
) -> Option<Height> {
    if halving == 0 {
        return Some(Height(0));
    }

    let slow_start_shift = HeightDiff::from(params.slow_start_shift());
    let unscaled_height = HeightDiff::from(halving)
        .checked_mul(params.pre_blossom_halving_interval())?
        .checked_add(slow_start_shift)?;

    let height = match blossom_activation.map(HeightDiff::from) {
        Some(blossom_height) if unscaled_height >= blossom_height => (unscaled_height
            - blossom_height)
            .checked_mul(HeightDiff::from(BLOSSOM_POW_TARGET_SPACING_RATIO))?
            .checked_add(blossom_height)?,
        _ => unscaled_height,
    };

    let height = u32::try_from(height).ok()?;
    height.try_into().ok()
}

/// Returns the last height that pays a founders' reward, if Blossom
/// activates at `blossom_activation`.
///
/// This is the height before the first halving. Blossom activations after
/// the first halving don't change it.
pub fn last_founders_reward_height(
    blossom_activation: Option<Height>,
    params: &ConsensusParams,
) -> Height {
    height_for_halving_with_blossom(1, blossom_activation, params)
        .and_then(|first_halving| first_halving.previous().ok())
        .unwrap_or(Height::MAX)
}

/// Returns the index of the founders' reward address for `height`.
///
/// Each address is used for an equal number of pre-Blossom heights,
/// so addresses are used for twice as many blocks after Blossom.
pub fn founders_reward_address_index(
    height: Height,
    params: &ConsensusParams,
) -> Result<usize, SubsidyError> {
    let last = params.last_founders_reward_height();
    if height.is_min() || height > last {
        return Err(SubsidyError::FoundersRewardHeightOutOfRange { height, last });
    }

    let addresses = params.founders_reward_addresses().len();

    // The address change interval doesn't depend on Blossom.
    let pre_blossom_last = last_founders_reward_height(None, params);
    let address_change_interval = (pre_blossom_last.0 as usize + addresses)
        .checked_div(addresses)
        .ok_or(SubsidyError::FoundersRewardIndexOutOfRange {
            index: 0,
            len: addresses,
        })?;

    let index = blossom_adjusted_height(height, params).0 as usize / address_change_interval;

    if index >= addresses {
        return Err(SubsidyError::FoundersRewardIndexOutOfRange {
            index,
            len: addresses,
        });
    }

    Ok(index)
}

/// Returns the founders' reward address for `height`.
///
/// Only heights from 1 to the last founders' reward height pay a
/// founders' reward.
pub fn founders_reward_address(
    height: Height,
    params: &ConsensusParams,
) -> Result<&FounderAddress, SubsidyError> {
    let index = founders_reward_address_index(height, params)?;

    founders_reward_address_at_index(index, params)
}

/// Returns the founders' reward address at `index`.
pub fn founders_reward_address_at_index(
    index: usize,
    params: &ConsensusParams,
) -> Result<&FounderAddress, SubsidyError> {
    let addresses = params.founders_reward_addresses();

    addresses
        .get(index)
        .ok_or(SubsidyError::FoundersRewardIndexOutOfRange {
            index,
            len: addresses.len(),
        })
}
