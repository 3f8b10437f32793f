//! Network upgrade consensus parameters.

use NetworkUpgrade::*;

use crate::block;

use std::fmt;

use hex::{FromHex, ToHex};

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

/// A network upgrade.
///
/// Network upgrades can change the network protocol or consensus rules in
/// incompatible ways.
#[derive(
    Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum NetworkUpgrade {
    /// The rules the chain started with.
    ///
    /// This sentinel upgrade is always active, and has no activation height
    /// and no consensus branch id.
    Base,
    /// An upgrade that is only activated in tests of the upgrade machinery.
    TestDummy,
    /// The Overwinter upgrade.
    Overwinter,
    /// The Sapling upgrade.
    Sapling,
    /// The Blossom upgrade, which halves the target block spacing.
    Blossom,
}

/// The number of network upgrades, including [`NetworkUpgrade::Base`].
pub const NETWORK_UPGRADE_COUNT: usize = 5;

/// All the network upgrades, in the order they must activate.
pub const NETWORK_UPGRADES_IN_ORDER: [NetworkUpgrade; NETWORK_UPGRADE_COUNT] =
    [Base, TestDummy, Overwinter, Sapling, Blossom];

impl fmt::Display for NetworkUpgrade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Same as the debug representation for now
        fmt::Debug::fmt(self, f)
    }
}

/// The Consensus Branch Id, used to bind transactions and blocks to a
/// particular network upgrade.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct ConsensusBranchId(u32);

impl ConsensusBranchId {
    /// Return the branch id bytes in big-endian byte-order suitable for printing out byte by byte.
    ///
    /// Branch ids are displayed in big-endian byte-order, following the
    /// convention set by zcashd.
    fn bytes_in_display_order(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl From<ConsensusBranchId> for u32 {
    fn from(branch: ConsensusBranchId) -> u32 {
        branch.0
    }
}

impl ToHex for &ConsensusBranchId {
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        self.bytes_in_display_order().encode_hex()
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        self.bytes_in_display_order().encode_hex_upper()
    }
}

impl ToHex for ConsensusBranchId {
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        (&self).encode_hex()
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        (&self).encode_hex_upper()
    }
}

impl FromHex for ConsensusBranchId {
    type Error = <[u8; 4] as FromHex>::Error;

    fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Self, Self::Error> {
        let branch = <[u8; 4]>::from_hex(hex)?;
        Ok(ConsensusBranchId(u32::from_be_bytes(branch)))
    }
}

impl fmt::Display for ConsensusBranchId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.encode_hex::<String>())
    }
}

/// Network Upgrade Consensus Branch Ids.
///
/// Branch ids are the same on every network.
///
/// This is actually a bijective map, but it is const, so we use a vector, and
/// do the uniqueness check in the unit tests.
pub(crate) const CONSENSUS_BRANCH_IDS: &[(NetworkUpgrade, ConsensusBranchId)] = &[
    (TestDummy, ConsensusBranchId(0x74736554)),
    (Overwinter, ConsensusBranchId(0x5ba81b19)),
    (Sapling, ConsensusBranchId(0x76b809bb)),
    (Blossom, ConsensusBranchId(0x2bb40e60)),
];

impl NetworkUpgrade {
    /// Returns the position of this upgrade in [`NETWORK_UPGRADES_IN_ORDER`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the consensus branch id for this network upgrade.
    ///
    /// Returns None if this network upgrade has no consensus branch id.
    pub fn branch_id(&self) -> Option<ConsensusBranchId> {
        CONSENSUS_BRANCH_IDS
            .iter()
            .find(|(nu, _)| nu == self)
            .map(|(_, branch_id)| *branch_id)
    }

    /// Returns the NetworkUpgrade given an u32 as ConsensusBranchId
    pub fn from_branch_id(branch_id: u32) -> Option<NetworkUpgrade> {
        CONSENSUS_BRANCH_IDS
            .iter()
            .find(|id| id.1 == ConsensusBranchId(branch_id))
            .map(|nu| nu.0)
    }
}

/// When a network upgrade activates.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Activation {
    /// Active at every height, including genesis.
    AlwaysActive,
    /// Active at this height and above.
    At(block::Height),
    /// Never active.
    NotActivated,
}

/// The state of a network upgrade at a particular height.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum UpgradeState {
    /// The upgrade is not scheduled.
    Disabled,
    /// The upgrade is scheduled at a later height.
    Pending,
    /// The upgrade's rules apply.
    Active,
}

/// The protocol version and activation of one network upgrade.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct UpgradeParams {
    /// The minimum peer protocol version that supports this upgrade.
    pub protocol_version: u32,
    /// When this upgrade activates.
    pub activation: Activation,
}

impl UpgradeParams {
    /// Returns upgrade parameters with `protocol_version` and `activation`.
    pub const fn new(protocol_version: u32, activation: Activation) -> UpgradeParams {
        UpgradeParams {
            protocol_version,
            activation,
        }
    }
}

/// The activation table for every network upgrade on a network.
///
/// All lookups are pure height comparisons.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct UpgradeTable {
    /// Upgrade parameters, indexed by [`NetworkUpgrade::index`].
    upgrades: [UpgradeParams; NETWORK_UPGRADE_COUNT],
}

impl UpgradeTable {
    /// Returns a table from `upgrades`, listed in [`NETWORK_UPGRADES_IN_ORDER`].
    pub const fn new(upgrades: [UpgradeParams; NETWORK_UPGRADE_COUNT]) -> UpgradeTable {
        UpgradeTable { upgrades }
    }

    /// Returns the parameters for `nu`.
    pub fn get(&self, nu: NetworkUpgrade) -> &UpgradeParams {
        &self.upgrades[nu.index()]
    }

    /// Sets the activation of `nu`.
    pub(crate) fn set_activation(&mut self, nu: NetworkUpgrade, activation: Activation) {
        self.upgrades[nu.index()].activation = activation;
    }

    /// Returns an iterator over every network upgrade and its parameters, in order.
    pub fn iter(&self) -> impl Iterator<Item = (NetworkUpgrade, &UpgradeParams)> {
        NETWORK_UPGRADES_IN_ORDER.into_iter().zip(self.upgrades.iter())
    }

    /// Returns the state of `nu` at `height`.
    pub fn state(&self, height: block::Height, nu: NetworkUpgrade) -> UpgradeState {
        match self.get(nu).activation {
            Activation::AlwaysActive => UpgradeState::Active,
            Activation::NotActivated => UpgradeState::Disabled,
            Activation::At(activation_height) if height >= activation_height => {
                UpgradeState::Active
            }
            Activation::At(_) => UpgradeState::Pending,
        }
    }

    /// Returns `true` if the rules of `nu` apply at `height`.
    pub fn is_active(&self, height: block::Height, nu: NetworkUpgrade) -> bool {
        self.state(height, nu) == UpgradeState::Active
    }

    /// Returns the latest network upgrade that is active at `height`.
    pub fn current(&self, height: block::Height) -> NetworkUpgrade {
        NETWORK_UPGRADES_IN_ORDER
            .into_iter()
            .rev()
            .find(|nu| self.is_active(height, *nu))
            .unwrap_or(Base)
    }

    /// Returns the first network upgrade that is still pending at `height`.
    ///
    /// Returns None if no later upgrade is scheduled.
    pub fn next(&self, height: block::Height) -> Option<NetworkUpgrade> {
        NETWORK_UPGRADES_IN_ORDER
            .into_iter()
            .skip(1)
            .find(|nu| self.state(height, *nu) == UpgradeState::Pending)
    }

    /// Returns the activation height of the next pending network upgrade at `height`.
    pub fn next_activation_height(&self, height: block::Height) -> Option<block::Height> {
        self.next(height).and_then(|nu| self.activation_height(nu))
    }

    /// Returns the activation height for `nu`.
    ///
    /// Returns None if `nu` is never activated, or if it is always active.
    pub fn activation_height(&self, nu: NetworkUpgrade) -> Option<block::Height> {
        match self.get(nu).activation {
            Activation::At(height) => Some(height),
            Activation::AlwaysActive | Activation::NotActivated => None,
        }
    }

    /// Returns `true` if `height` is the activation height of `nu`.
    ///
    /// Always false for [`NetworkUpgrade::Base`].
    pub fn is_activation_height(&self, height: block::Height, nu: NetworkUpgrade) -> bool {
        nu != Base && self.activation_height(nu) == Some(height)
    }

    /// Returns `true` if `height` is the activation height of any network upgrade.
    pub fn is_activation_height_for_any_upgrade(&self, height: block::Height) -> bool {
        NETWORK_UPGRADES_IN_ORDER
            .into_iter()
            .any(|nu| self.is_activation_height(height, nu))
    }

    /// Returns the protocol version of `nu`.
    pub fn protocol_version(&self, nu: NetworkUpgrade) -> u32 {
        self.get(nu).protocol_version
    }

    /// Returns the consensus branch id at `height`.
    ///
    /// Returns None if the current upgrade has no branch id.
    pub fn current_branch_id(&self, height: block::Height) -> Option<ConsensusBranchId> {
        self.current(height).branch_id()
    }
}
