//! Arbitrary implementations for network parameters

use proptest::prelude::*;

use crate::block::Height;

use super::{Network, NetworkUpgrade};

impl NetworkUpgrade {
    /// Generates network upgrades that have a consensus branch id.
    pub fn branch_id_strategy() -> BoxedStrategy<NetworkUpgrade> {
        prop_oneof![
            Just(NetworkUpgrade::TestDummy),
            Just(NetworkUpgrade::Overwinter),
            Just(NetworkUpgrade::Sapling),
            Just(NetworkUpgrade::Blossom),
        ]
        .boxed()
    }
}

impl Network {
    /// Generates heights that can pay a founders' reward on this network.
    pub fn founders_reward_height_strategy(self) -> BoxedStrategy<Height> {
        let last = self.consensus_params().last_founders_reward_height();

        (1..=last.0).prop_map(Height).boxed()
    }
}
