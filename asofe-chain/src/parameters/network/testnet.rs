//! Builders for test variants of the network parameters.
//!
//! Production code only reads the immutable parameters of each network.
//! Tests, and Regtest nodes with configured activation heights, derive a new
//! value with a [`ParametersBuilder`] before anything reads it.

use crate::{
    block::{Height, HeightDiff},
    parameters::{
        constants::BLOSSOM_POW_TARGET_SPACING_RATIO,
        network::{consensus::ConsensusParams, subsidy::FounderAddress},
        Activation, Network, NetworkUpgrade, ParameterError,
    },
    work::equihash::EquihashEpochs,
};

/// Configurable activation heights for Regtest.
///
/// Upgrades without a configured height keep their default activation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ConfiguredActivationHeights {
    /// Activation height for the `TestDummy` network upgrade.
    pub test_dummy: Option<Height>,
    /// Activation height for the `Overwinter` network upgrade.
    pub overwinter: Option<Height>,
    /// Activation height for the `Sapling` network upgrade.
    pub sapling: Option<Height>,
    /// Activation height for the `Blossom` network upgrade.
    pub blossom: Option<Height>,
}

impl ConfiguredActivationHeights {
    /// Returns `true` if no heights are configured.
    pub fn is_empty(&self) -> bool {
        *self == ConfiguredActivationHeights::default()
    }
}

/// Builder for variants of a network's [`ConsensusParams`].
///
/// Built parameters are checked by [`ConsensusParams::validate`], so a
/// variant can't break the invariants of the default parameters.
#[derive(Clone, Debug)]
pub struct ParametersBuilder {
    params: ConsensusParams,
}

impl ConsensusParams {
    /// Returns a builder that starts from the default parameters of `network`.
    pub fn build(network: Network) -> ParametersBuilder {
        ParametersBuilder {
            params: ConsensusParams::for_network(network),
        }
    }
}

impl ParametersBuilder {
    /// Sets the configured network upgrade activation heights.
    ///
    /// Activation order is checked by [`ParametersBuilder::finish`].
    pub fn with_activation_heights(
        mut self,
        ConfiguredActivationHeights {
            test_dummy,
            overwinter,
            sapling,
            blossom,
        }: ConfiguredActivationHeights,
    ) -> Self {
        use NetworkUpgrade::*;

        let configured = [
            (TestDummy, test_dummy),
            (Overwinter, overwinter),
            (Sapling, sapling),
            (Blossom, blossom),
        ];

        for (nu, height) in configured {
            if let Some(height) = height {
                self.params.upgrades.set_activation(nu, Activation::At(height));
            }
        }

        self
    }

    /// Sets the Blossom activation height, or disables Blossom if it is `None`.
    pub fn with_blossom_activation(mut self, height: Option<Height>) -> Self {
        let activation = height.map_or(Activation::NotActivated, Activation::At);
        self.params
            .upgrades
            .set_activation(NetworkUpgrade::Blossom, activation);

        self
    }

    /// Sets whether coinbase outputs must be shielded before they are spent.
    pub fn with_coinbase_must_be_protected(mut self, must_be_protected: bool) -> Self {
        self.params.coinbase_must_be_protected = must_be_protected;
        self
    }

    /// Sets the Equihash epochs.
    pub fn with_equihash_epochs(mut self, epochs: EquihashEpochs) -> Self {
        self.params.equihash = epochs;
        self
    }

    /// Sets the founders' reward addresses, in payout order.
    pub fn with_founders_reward_addresses<A>(mut self, addresses: impl IntoIterator<Item = A>) -> Self
    where
        A: Into<FounderAddress>,
    {
        self.params.founders_reward_addresses = addresses.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the pre-Blossom halving interval, and the matching post-Blossom interval.
    pub fn with_halving_interval(mut self, pre_blossom: HeightDiff) -> Self {
        self.params.pre_blossom_halving_interval = pre_blossom;
        // An overflow is rejected by `finish`, because the intervals don't match.
        self.params.post_blossom_halving_interval = pre_blossom
            .saturating_mul(HeightDiff::from(BLOSSOM_POW_TARGET_SPACING_RATIO));

        self
    }

    /// Sets the slow start interval.
    pub fn with_slow_start_interval(mut self, interval: Height) -> Self {
        self.params.subsidy_slow_start_interval = interval;
        self
    }

    /// Checks the parameters, and returns them if they are valid.
    pub fn finish(self) -> Result<ConsensusParams, ParameterError> {
        let ParametersBuilder { params } = self;

        params.validate()?;

        debug!(
            network = %params.network,
            upgrades = ?params.upgrades,
            "built consensus parameters"
        );

        Ok(params)
    }
}
