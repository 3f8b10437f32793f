//! Constants for the founders' reward.

pub(crate) mod mainnet;
pub(crate) mod testnet;

/// The founders' reward address on Regtest.
pub(crate) const REGTEST_FOUNDERS_REWARD_ADDRESSES: [&str; 1] =
    ["t2FwcEhFdNXuFMv1tcYwaBJtYVtMj8b1uTg"];
