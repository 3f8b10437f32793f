//! Error types for chain parameters

use thiserror::Error;

use crate::{
    block::{Height, HeightDiff},
    parameters::{Network, NetworkUpgrade},
    work::equihash,
};

/// A set of consensus parameters that breaks a startup invariant.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParameterError {
    /// An Equihash epoch uses unacceptable `(N, K)` parameters.
    #[error("unacceptable Equihash parameters: {0}")]
    Equihash(#[from] equihash::EquihashParametersError),

    /// The second Equihash epoch starts after the first has already ended.
    #[error(
        "Equihash epoch 2 starts at {epoch_2_start_height:?}, \
         leaving a gap after epoch 1 ends at {epoch_1_end_height:?}"
    )]
    EquihashEpochGap {
        /// The last height of the first epoch.
        epoch_1_end_height: Height,
        /// The first height of the second epoch.
        epoch_2_start_height: Height,
    },

    /// A network upgrade activates before an upgrade that precedes it.
    #[error("{upgrade} activates at {height:?}, before {previous} at {previous_height:?}")]
    UpgradeOrder {
        /// The upgrade that activates too early.
        upgrade: NetworkUpgrade,
        /// Its activation height.
        height: Height,
        /// The earlier upgrade in the activation order.
        previous: NetworkUpgrade,
        /// The earlier upgrade's activation height.
        previous_height: Height,
    },

    /// The base rules must apply at every height.
    #[error("the Base network upgrade must always be active")]
    BaseUpgradeNotAlwaysActive,

    /// Halving intervals must be positive and related by the Blossom spacing ratio.
    #[error("invalid halving intervals: pre-Blossom {pre_blossom}, post-Blossom {post_blossom}")]
    InvalidHalvingInterval {
        /// The pre-Blossom halving interval.
        pre_blossom: HeightDiff,
        /// The post-Blossom halving interval.
        post_blossom: HeightDiff,
    },

    /// Target spacings must be positive and related by the Blossom spacing ratio.
    #[error("invalid target spacings: pre-Blossom {pre_blossom}s, post-Blossom {post_blossom}s")]
    InvalidTargetSpacing {
        /// The pre-Blossom target spacing.
        pre_blossom: i64,
        /// The post-Blossom target spacing.
        post_blossom: i64,
    },

    /// The founders' reward needs at least one address.
    #[error("no founders' reward addresses on {0}")]
    NoFoundersRewardAddresses(Network),

    /// Each founders' reward address must only appear once.
    #[error("founders' reward address {0} is listed more than once")]
    DuplicateFoundersRewardAddress(String),

    /// Every founders' reward address must be used by at least one height.
    #[error("{count} founders' reward addresses, but the founders' reward ends at {last:?}")]
    TooManyFoundersRewardAddresses {
        /// The number of addresses.
        count: usize,
        /// The last founders' reward height.
        last: Height,
    },

    /// Activation heights can only be configured on Regtest.
    #[error("activation heights can only be configured on Regtest, not {0}")]
    ConfiguredActivationHeightsNotAllowed(Network),
}

/// An error from the process-wide network registry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry was used before it was initialized.
    #[error("the network registry has not been initialized")]
    NotInitialized,

    /// The registry was already initialized with a different network.
    #[error("the network registry was already initialized for {selected}")]
    AlreadyInitialized {
        /// The network that was selected first.
        selected: Network,
    },

    /// The configured parameters are invalid.
    #[error(transparent)]
    Parameters(#[from] ParameterError),
}
