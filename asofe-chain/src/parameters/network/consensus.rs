//! The consensus rules of each network, as one immutable value per network.

use std::{collections::HashSet, sync::Arc};

use lazy_static::lazy_static;

use crate::{
    block::{self, Height, HeightDiff},
    parameters::{
        constants::{
            activation_heights, protocol_versions, BLOSSOM_POW_TARGET_SPACING_RATIO,
            POST_BLOSSOM_POW_TARGET_SPACING, POW_AVERAGING_WINDOW, PRE_BLOSSOM_HALVING_INTERVAL,
            PRE_BLOSSOM_POW_TARGET_SPACING, REGTEST_PRE_BLOSSOM_HALVING_INTERVAL,
            REGTEST_SLOW_START_INTERVAL, SLOW_START_INTERVAL,
        },
        network::subsidy::{self, constants as subsidy_constants, FounderAddress, SubsidyError},
        Activation, Network, NetworkUpgrade, ParameterError, UpgradeParams, UpgradeTable,
        NETWORK_UPGRADES_IN_ORDER,
    },
    work::equihash::{ActiveParameters, EquihashEpochs, Parameters},
};

lazy_static! {
    static ref MAINNET: Arc<ConsensusParams> = Arc::new(ConsensusParams::mainnet());
    static ref TESTNET: Arc<ConsensusParams> = Arc::new(ConsensusParams::testnet());
    static ref REGTEST: Arc<ConsensusParams> = Arc::new(ConsensusParams::regtest());
}

/// Returns the shared default parameters for `network`.
pub(crate) fn default_params(network: Network) -> Arc<ConsensusParams> {
    match network {
        Network::Mainnet => MAINNET.clone(),
        Network::Testnet => TESTNET.clone(),
        Network::Regtest => REGTEST.clone(),
    }
}

/// The Testnet height where the second Equihash epoch starts.
pub const TESTNET_EQUIHASH_EPOCH_2_START_HEIGHT: Height = Height(300_000);

/// The last Testnet height where the first Equihash epoch is valid.
pub const TESTNET_EQUIHASH_EPOCH_1_END_HEIGHT: Height = Height(300_010);

/// The consensus parameters of a network.
///
/// Each network has one value, built by [`ConsensusParams::mainnet`],
/// [`ConsensusParams::testnet`], or [`ConsensusParams::regtest`].
/// Variants for tests are built with [`ConsensusParams::build`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsensusParams {
    pub(crate) network: Network,

    /// The initial period where the block subsidy ramps up.
    pub(crate) subsidy_slow_start_interval: Height,
    pub(crate) pre_blossom_halving_interval: HeightDiff,
    pub(crate) post_blossom_halving_interval: HeightDiff,

    pub(crate) pre_blossom_pow_target_spacing: i64,
    pub(crate) post_blossom_pow_target_spacing: i64,

    pub(crate) upgrades: UpgradeTable,
    pub(crate) equihash: EquihashEpochs,

    /// In payout order.
    pub(crate) founders_reward_addresses: Vec<FounderAddress>,
    pub(crate) coinbase_must_be_protected: bool,

    pub(crate) majority_enforce_block_upgrade: u32,
    pub(crate) majority_reject_block_outdated: u32,
    pub(crate) majority_window: u32,

    /// The easiest allowed target, in the same byte order as block hashes.
    pub(crate) pow_limit: block::Hash,
    pub(crate) pow_averaging_window: i64,
    /// As a percentage.
    pub(crate) pow_max_adjust_down: i64,
    /// As a percentage.
    pub(crate) pow_max_adjust_up: i64,

    pub(crate) hash_genesis_block: block::Hash,
}

/// Parses a big-endian hex hash that is hard-coded in this module.
fn hard_coded_hash(hex: &str) -> block::Hash {
    hex.parse().expect("hard-coded hash parses")
}

impl ConsensusParams {
    /// Returns the Mainnet consensus parameters.
    pub fn mainnet() -> ConsensusParams {
        ConsensusParams {
            network: Network::Mainnet,
            subsidy_slow_start_interval: SLOW_START_INTERVAL,
            pre_blossom_halving_interval: PRE_BLOSSOM_HALVING_INTERVAL,
            post_blossom_halving_interval: PRE_BLOSSOM_HALVING_INTERVAL
                * HeightDiff::from(BLOSSOM_POW_TARGET_SPACING_RATIO),
            pre_blossom_pow_target_spacing: PRE_BLOSSOM_POW_TARGET_SPACING,
            post_blossom_pow_target_spacing: POST_BLOSSOM_POW_TARGET_SPACING,
            upgrades: UpgradeTable::new([
                UpgradeParams::new(protocol_versions::BASE, Activation::AlwaysActive),
                UpgradeParams::new(protocol_versions::TEST_DUMMY, Activation::NotActivated),
                UpgradeParams::new(
                    protocol_versions::mainnet::OVERWINTER,
                    Activation::At(activation_heights::mainnet::OVERWINTER),
                ),
                UpgradeParams::new(
                    protocol_versions::mainnet::SAPLING,
                    Activation::At(activation_heights::mainnet::SAPLING),
                ),
                UpgradeParams::new(
                    protocol_versions::mainnet::BLOSSOM,
                    Activation::At(activation_heights::mainnet::BLOSSOM),
                ),
            ]),
            equihash: EquihashEpochs::single(Parameters::N200_K9),
            founders_reward_addresses: subsidy_constants::mainnet::FOUNDERS_REWARD_ADDRESSES
                .iter()
                .map(|address| FounderAddress::from(*address))
                .collect(),
            coinbase_must_be_protected: true,
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 4000,
            pow_limit: hard_coded_hash(
                "0007ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            ),
            pow_averaging_window: POW_AVERAGING_WINDOW,
            pow_max_adjust_down: 32,
            pow_max_adjust_up: 16,
            hash_genesis_block: hard_coded_hash(
                "0000363adb70e2cee5171918dc4ced36fa712abbb057b4807fff56d598b74be4",
            ),
        }
    }

    /// Returns the Testnet consensus parameters.
    pub fn testnet() -> ConsensusParams {
        ConsensusParams {
            network: Network::Testnet,
            subsidy_slow_start_interval: SLOW_START_INTERVAL,
            pre_blossom_halving_interval: PRE_BLOSSOM_HALVING_INTERVAL,
            post_blossom_halving_interval: PRE_BLOSSOM_HALVING_INTERVAL
                * HeightDiff::from(BLOSSOM_POW_TARGET_SPACING_RATIO),
            pre_blossom_pow_target_spacing: PRE_BLOSSOM_POW_TARGET_SPACING,
            post_blossom_pow_target_spacing: POST_BLOSSOM_POW_TARGET_SPACING,
            upgrades: UpgradeTable::new([
                UpgradeParams::new(protocol_versions::BASE, Activation::AlwaysActive),
                UpgradeParams::new(protocol_versions::TEST_DUMMY, Activation::NotActivated),
                UpgradeParams::new(
                    protocol_versions::testnet::OVERWINTER,
                    Activation::At(activation_heights::testnet::OVERWINTER),
                ),
                UpgradeParams::new(
                    protocol_versions::testnet::SAPLING,
                    Activation::At(activation_heights::testnet::SAPLING),
                ),
                UpgradeParams::new(
                    protocol_versions::testnet::BLOSSOM,
                    Activation::At(activation_heights::testnet::BLOSSOM),
                ),
            ]),
            equihash: EquihashEpochs {
                epoch_1: Parameters::N200_K9,
                epoch_1_end_height: TESTNET_EQUIHASH_EPOCH_1_END_HEIGHT,
                epoch_2: Parameters::N144_K5,
                epoch_2_start_height: TESTNET_EQUIHASH_EPOCH_2_START_HEIGHT,
            },
            founders_reward_addresses: subsidy_constants::testnet::FOUNDERS_REWARD_ADDRESSES
                .iter()
                .map(|address| FounderAddress::from(*address))
                .collect(),
            coinbase_must_be_protected: true,
            majority_enforce_block_upgrade: 51,
            majority_reject_block_outdated: 75,
            majority_window: 400,
            pow_limit: hard_coded_hash(
                "07ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            ),
            pow_averaging_window: POW_AVERAGING_WINDOW,
            pow_max_adjust_down: 32,
            pow_max_adjust_up: 16,
            hash_genesis_block: hard_coded_hash(
                "4a1f23fdbbeac87b8ef8b5eb983e512fd3296308df018e168e64726ff94487a0",
            ),
        }
    }

    /// Returns the Regtest consensus parameters.
    ///
    /// No network upgrades are activated on Regtest unless they are configured.
    pub fn regtest() -> ConsensusParams {
        ConsensusParams {
            network: Network::Regtest,
            subsidy_slow_start_interval: REGTEST_SLOW_START_INTERVAL,
            pre_blossom_halving_interval: REGTEST_PRE_BLOSSOM_HALVING_INTERVAL,
            post_blossom_halving_interval: REGTEST_PRE_BLOSSOM_HALVING_INTERVAL
                * HeightDiff::from(BLOSSOM_POW_TARGET_SPACING_RATIO),
            pre_blossom_pow_target_spacing: PRE_BLOSSOM_POW_TARGET_SPACING,
            post_blossom_pow_target_spacing: POST_BLOSSOM_POW_TARGET_SPACING,
            upgrades: UpgradeTable::new([
                UpgradeParams::new(protocol_versions::BASE, Activation::AlwaysActive),
                UpgradeParams::new(protocol_versions::TEST_DUMMY, Activation::NotActivated),
                UpgradeParams::new(
                    protocol_versions::regtest::OVERWINTER,
                    Activation::NotActivated,
                ),
                UpgradeParams::new(protocol_versions::regtest::SAPLING, Activation::NotActivated),
                UpgradeParams::new(protocol_versions::regtest::BLOSSOM, Activation::NotActivated),
            ]),
            equihash: EquihashEpochs::single(Parameters::N48_K5),
            founders_reward_addresses: subsidy_constants::REGTEST_FOUNDERS_REWARD_ADDRESSES
                .iter()
                .map(|address| FounderAddress::from(*address))
                .collect(),
            coinbase_must_be_protected: false,
            majority_enforce_block_upgrade: 750,
            majority_reject_block_outdated: 950,
            majority_window: 1000,
            pow_limit: hard_coded_hash(
                "0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f0f",
            ),
            pow_averaging_window: POW_AVERAGING_WINDOW,
            pow_max_adjust_down: 0,
            pow_max_adjust_up: 0,
            hash_genesis_block: hard_coded_hash(
                "733004c9c3731f0f4ccf19d77544ee624b9664c334ae787280bbad84cf9bf873",
            ),
        }
    }

    /// Returns the consensus parameters for `network`.
    pub fn for_network(network: Network) -> ConsensusParams {
        match network {
            Network::Mainnet => ConsensusParams::mainnet(),
            Network::Testnet => ConsensusParams::testnet(),
            Network::Regtest => ConsensusParams::regtest(),
        }
    }

    /// Checks the invariants that every set of consensus parameters must hold.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let ratio = HeightDiff::from(BLOSSOM_POW_TARGET_SPACING_RATIO);

        if self.pre_blossom_halving_interval <= 0
            || self.pre_blossom_halving_interval.checked_mul(ratio)
                != Some(self.post_blossom_halving_interval)
        {
            return Err(ParameterError::InvalidHalvingInterval {
                pre_blossom: self.pre_blossom_halving_interval,
                post_blossom: self.post_blossom_halving_interval,
            });
        }

        if self.post_blossom_pow_target_spacing <= 0
            || self.post_blossom_pow_target_spacing.checked_mul(ratio)
                != Some(self.pre_blossom_pow_target_spacing)
        {
            return Err(ParameterError::InvalidTargetSpacing {
                pre_blossom: self.pre_blossom_pow_target_spacing,
                post_blossom: self.post_blossom_pow_target_spacing,
            });
        }

        self.equihash.epoch_1.validate()?;
        self.equihash.epoch_2.validate()?;

        if !self.equihash.is_contiguous() {
            return Err(ParameterError::EquihashEpochGap {
                epoch_1_end_height: self.equihash.epoch_1_end_height,
                epoch_2_start_height: self.equihash.epoch_2_start_height,
            });
        }

        self.validate_upgrades()?;
        self.validate_founders_reward_addresses()?;

        debug!(network = %self.network, "validated consensus parameters");

        Ok(())
    }

    /// Checks that the base rules are always active, and that activated
    /// upgrades are in height order.
    fn validate_upgrades(&self) -> Result<(), ParameterError> {
        if self.upgrades.get(NetworkUpgrade::Base).activation != Activation::AlwaysActive {
            return Err(ParameterError::BaseUpgradeNotAlwaysActive);
        }

        let mut previous: Option<(NetworkUpgrade, Height)> = None;

        for upgrade in NETWORK_UPGRADES_IN_ORDER {
            let height = match self.upgrades.get(upgrade).activation {
                Activation::AlwaysActive => Height::MIN,
                Activation::At(height) => height,
                Activation::NotActivated => continue,
            };

            if let Some((previous, previous_height)) = previous {
                if height < previous_height {
                    return Err(ParameterError::UpgradeOrder {
                        upgrade,
                        height,
                        previous,
                        previous_height,
                    });
                }
            }

            previous = Some((upgrade, height));
        }

        Ok(())
    }

    /// Checks that every founders' reward address is distinct, and is used by
    /// at least one height.
    fn validate_founders_reward_addresses(&self) -> Result<(), ParameterError> {
        if self.founders_reward_addresses.is_empty() {
            return Err(ParameterError::NoFoundersRewardAddresses(self.network));
        }

        let mut seen = HashSet::new();
        for address in &self.founders_reward_addresses {
            if !seen.insert(address) {
                return Err(ParameterError::DuplicateFoundersRewardAddress(
                    address.to_string(),
                ));
            }
        }

        let last = self.last_founders_reward_height();
        let count = self.founders_reward_addresses.len();

        if u32::try_from(count).map_or(true, |count| count > last.0) {
            return Err(ParameterError::TooManyFoundersRewardAddresses { count, last });
        }

        Ok(())
    }

    /// Returns the network these parameters are for.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Returns the network upgrade activation table.
    pub fn upgrades(&self) -> &UpgradeTable {
        &self.upgrades
    }

    /// Returns the Equihash epochs.
    pub fn equihash_epochs(&self) -> &EquihashEpochs {
        &self.equihash
    }

    /// Returns the Equihash parameters that are valid at `height`.
    pub fn equihash_parameters(&self, height: Height) -> ActiveParameters {
        self.equihash.active_parameters(height)
    }

    /// Returns `true` if coinbase outputs must be shielded before they are spent.
    pub fn coinbase_must_be_protected(&self) -> bool {
        self.coinbase_must_be_protected
    }

    /// Returns the slow start interval.
    pub fn slow_start_interval(&self) -> Height {
        self.subsidy_slow_start_interval
    }

    /// Returns the slow start shift, half of the slow start interval.
    pub fn slow_start_shift(&self) -> Height {
        Height(self.subsidy_slow_start_interval.0 / 2)
    }

    /// Returns the halving interval before Blossom.
    pub fn pre_blossom_halving_interval(&self) -> HeightDiff {
        self.pre_blossom_halving_interval
    }

    /// Returns the halving interval after Blossom.
    pub fn post_blossom_halving_interval(&self) -> HeightDiff {
        self.post_blossom_halving_interval
    }

    /// Returns the target block spacing before Blossom, in seconds.
    pub fn pre_blossom_pow_target_spacing(&self) -> i64 {
        self.pre_blossom_pow_target_spacing
    }

    /// Returns the target block spacing after Blossom, in seconds.
    pub fn post_blossom_pow_target_spacing(&self) -> i64 {
        self.post_blossom_pow_target_spacing
    }

    /// Returns the Blossom activation height, if Blossom is scheduled.
    ///
    /// An always active Blossom activates at genesis.
    pub fn blossom_activation_height(&self) -> Option<Height> {
        match self.upgrades.get(NetworkUpgrade::Blossom).activation {
            Activation::AlwaysActive => Some(Height::MIN),
            Activation::At(height) => Some(height),
            Activation::NotActivated => None,
        }
    }

    /// Returns the target block spacing at `height`, in seconds.
    pub fn pow_target_spacing(&self, height: Height) -> i64 {
        if self.upgrades.is_active(height, NetworkUpgrade::Blossom) {
            self.post_blossom_pow_target_spacing
        } else {
            self.pre_blossom_pow_target_spacing
        }
    }

    /// Returns the difficulty averaging window timespan at `height`, in seconds.
    pub fn averaging_window_timespan(&self, height: Height) -> i64 {
        self.pow_averaging_window * self.pow_target_spacing(height)
    }

    /// Returns the shortest timespan the difficulty adjustment accepts at `height`, in seconds.
    pub fn min_actual_timespan(&self, height: Height) -> i64 {
        (self.averaging_window_timespan(height) * (100 - self.pow_max_adjust_up)) / 100
    }

    /// Returns the longest timespan the difficulty adjustment accepts at `height`, in seconds.
    pub fn max_actual_timespan(&self, height: Height) -> i64 {
        (self.averaging_window_timespan(height) * (100 + self.pow_max_adjust_down)) / 100
    }

    /// Returns the difficulty averaging window, in blocks.
    pub fn pow_averaging_window(&self) -> i64 {
        self.pow_averaging_window
    }

    /// Returns the easiest allowed target.
    pub fn pow_limit(&self) -> block::Hash {
        self.pow_limit
    }

    /// Returns the number of blocks in the window that enforces new block versions.
    pub fn majority_enforce_block_upgrade(&self) -> u32 {
        self.majority_enforce_block_upgrade
    }

    /// Returns the number of blocks in the window that rejects outdated block versions.
    pub fn majority_reject_block_outdated(&self) -> u32 {
        self.majority_reject_block_outdated
    }

    /// Returns the size of the block version majority window.
    pub fn majority_window(&self) -> u32 {
        self.majority_window
    }

    /// Returns the expected genesis block hash.
    pub fn hash_genesis_block(&self) -> block::Hash {
        self.hash_genesis_block
    }

    /// Returns the founders' reward addresses, in payout order.
    pub fn founders_reward_addresses(&self) -> &[FounderAddress] {
        &self.founders_reward_addresses
    }

    /// Returns the last height that pays a founders' reward, using the
    /// configured Blossom activation.
    pub fn last_founders_reward_height(&self) -> Height {
        subsidy::last_founders_reward_height(self.blossom_activation_height(), self)
    }

    /// Returns the founders' reward address for `height`.
    pub fn founders_reward_address(&self, height: Height) -> Result<&FounderAddress, SubsidyError> {
        subsidy::founders_reward_address(height, self)
    }

    /// Returns the founders' reward address at `index`.
    pub fn founders_reward_address_at_index(
        &self,
        index: usize,
    ) -> Result<&FounderAddress, SubsidyError> {
        subsidy::founders_reward_address_at_index(index, self)
    }
}
