//! Chain parameters that the consensus rules don't interpret.
//!
//! Peer-to-peer, wallet, and RPC code reads these values, but no consensus
//! query depends on them. They are kept next to the [`ConsensusParams`] of
//! the same network so a node only needs one handle.

use std::{collections::BTreeMap, fmt, sync::Arc};

use crate::{
    block::{self, Height},
    parameters::{
        constants::{magics, MAX_TIP_AGE},
        genesis::{Genesis, GENESIS_BLOCK_VERSION, GENESIS_MERKLE_ROOT},
        network::{
            consensus::{self, ConsensusParams},
            subsidy::{FounderAddress, SubsidyError},
        },
        Network,
    },
};

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

/// A magic number identifying the network.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub struct Magic(pub [u8; 4]);

impl fmt::Debug for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Magic").field(&hex::encode(self.0)).finish()
    }
}

/// A DNS seed, used to find peers at startup.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DnsSeed {
    /// A human-readable name for the seeder.
    pub name: String,
    /// The seeder's host name.
    pub host: String,
}

impl DnsSeed {
    fn new(name: &str, host: &str) -> DnsSeed {
        DnsSeed {
            name: name.to_owned(),
            host: host.to_owned(),
        }
    }
}

/// The Base58Check version prefixes for encoded keys and addresses.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Base58Prefixes {
    /// Transparent pay-to-public-key-hash addresses.
    pub pubkey_address: Vec<u8>,
    /// Transparent pay-to-script-hash addresses.
    pub script_address: Vec<u8>,
    /// Transparent secret keys.
    pub secret_key: Vec<u8>,
    /// BIP32 extended public keys.
    pub ext_public_key: Vec<u8>,
    /// BIP32 extended secret keys.
    pub ext_secret_key: Vec<u8>,
    /// Sprout payment addresses.
    pub zc_payment_address: Vec<u8>,
    /// Sprout viewing keys.
    pub zc_viewing_key: Vec<u8>,
    /// Sprout spending keys.
    pub zc_spending_key: Vec<u8>,
}

impl Base58Prefixes {
    fn mainnet() -> Base58Prefixes {
        Base58Prefixes {
            pubkey_address: vec![0x1C, 0xB8],
            script_address: vec![0x1C, 0xBD],
            secret_key: vec![0x80],
            ext_public_key: vec![0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: vec![0x04, 0x88, 0xAD, 0xE4],
            zc_payment_address: vec![0x16, 0x9A],
            zc_viewing_key: vec![0xA8, 0xAB, 0xD3],
            zc_spending_key: vec![0xAB, 0x36],
        }
    }

    /// Testnet and Regtest share these prefixes.
    fn testnet() -> Base58Prefixes {
        Base58Prefixes {
            pubkey_address: vec![0x1D, 0x25],
            script_address: vec![0x1C, 0xBA],
            secret_key: vec![0xEF],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
            zc_payment_address: vec![0x16, 0xB6],
            zc_viewing_key: vec![0xA8, 0xAC, 0x0C],
            zc_spending_key: vec![0xAC, 0x08],
        }
    }
}

/// Hard-coded checkpoints, and the transaction statistics at the last one.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CheckpointData {
    /// Checkpointed block hashes, by height.
    pub checkpoints: BTreeMap<Height, block::Hash>,
    /// The block time of the last checkpoint, in seconds since the Unix epoch.
    pub time_last_checkpoint: u32,
    /// The number of transactions from genesis to the last checkpoint.
    pub transactions_last_checkpoint: u64,
    /// The estimated number of transactions per day after the last checkpoint.
    pub transactions_per_day: u64,
}

impl CheckpointData {
    /// Returns checkpoint data that only contains the genesis block.
    fn genesis_only(genesis: &Genesis) -> CheckpointData {
        CheckpointData {
            checkpoints: [(Height::MIN, genesis.hash)].into_iter().collect(),
            time_last_checkpoint: genesis.time,
            transactions_last_checkpoint: 0,
            transactions_per_day: 0,
        }
    }

    /// Returns the highest checkpoint height.
    pub fn max_height(&self) -> Option<Height> {
        self.checkpoints.keys().next_back().copied()
    }
}

const MAINNET_ALERT_PUBLIC_KEY: &str = "04b7ecf0baa90495ceb4e4090f6b2fd37eec1e9c85fac68a487f3ce11589692e4a317479316ee814e066638e1db54e37a10689b70286e6315b1087b6615d179264";
const TESTNET_ALERT_PUBLIC_KEY: &str = "044e7a1553392325c871c5ace5d6ad73501c66f4c185d6b0453cf45dec5a1322e705c672ac1a27ef7cdaf588c10effdf50ed5f95f85f2f54a5f6159fca394ed0c6";

/// The full set of parameters for a network.
///
/// Consensus queries go through [`ChainParams::consensus`], the other fields
/// are carried for the rest of the node.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChainParams {
    consensus: Arc<ConsensusParams>,

    network_id: &'static str,
    currency_units: &'static str,
    magic: Magic,
    alert_public_key: &'static str,
    default_port: u16,
    /// In seconds.
    max_tip_age: i64,
    prune_after_height: Height,

    genesis: Genesis,
    dns_seeds: Vec<DnsSeed>,
    base58_prefixes: Base58Prefixes,
    checkpoints: CheckpointData,

    mining_requires_peers: bool,
    default_consistency_checks: bool,
    require_standard: bool,
    mine_blocks_on_demand: bool,
    testnet_to_be_deprecated_field_rpc: bool,
}

impl ChainParams {
    /// Returns the default parameters for `network`.
    pub fn for_network(network: Network) -> ChainParams {
        ChainParams::with_consensus(consensus::default_params(network))
    }

    /// Returns the Mainnet parameters.
    pub fn mainnet() -> ChainParams {
        ChainParams::for_network(Network::Mainnet)
    }

    /// Returns the Testnet parameters.
    pub fn testnet() -> ChainParams {
        ChainParams::for_network(Network::Testnet)
    }

    /// Returns the Regtest parameters.
    pub fn regtest() -> ChainParams {
        ChainParams::for_network(Network::Regtest)
    }

    /// Returns the parameters of the network of `consensus`, using those
    /// consensus parameters.
    pub fn with_consensus(consensus: Arc<ConsensusParams>) -> ChainParams {
        let genesis_hash = consensus.hash_genesis_block();
        let merkle_root = GENESIS_MERKLE_ROOT
            .parse()
            .expect("hard-coded merkle root parses");

        match consensus.network() {
            Network::Mainnet => {
                let genesis = Genesis {
                    version: GENESIS_BLOCK_VERSION,
                    time: 1_515_781_463,
                    bits: 0x1f07ffff,
                    nonce: 0x58f,
                    hash: genesis_hash,
                    merkle_root,
                };

                ChainParams {
                    consensus,
                    network_id: "main",
                    currency_units: "ASF",
                    magic: magics::MAINNET,
                    alert_public_key: MAINNET_ALERT_PUBLIC_KEY,
                    default_port: 8585,
                    max_tip_age: MAX_TIP_AGE,
                    prune_after_height: Height(100_000),
                    checkpoints: CheckpointData::genesis_only(&genesis),
                    genesis,
                    dns_seeds: vec![DnsSeed::new("asofe.org", "dnsseed.asofe.org")],
                    base58_prefixes: Base58Prefixes::mainnet(),
                    mining_requires_peers: true,
                    default_consistency_checks: false,
                    require_standard: true,
                    mine_blocks_on_demand: false,
                    testnet_to_be_deprecated_field_rpc: false,
                }
            }
            Network::Testnet => {
                let genesis = Genesis {
                    version: GENESIS_BLOCK_VERSION,
                    time: 1_515_732_992,
                    bits: 0x2007ffff,
                    nonce: 6,
                    hash: genesis_hash,
                    merkle_root,
                };

                ChainParams {
                    consensus,
                    network_id: "test",
                    currency_units: "TAS",
                    magic: magics::TESTNET,
                    alert_public_key: TESTNET_ALERT_PUBLIC_KEY,
                    default_port: 18086,
                    max_tip_age: MAX_TIP_AGE,
                    prune_after_height: Height(1000),
                    checkpoints: CheckpointData::genesis_only(&genesis),
                    genesis,
                    dns_seeds: Vec::new(),
                    base58_prefixes: Base58Prefixes::testnet(),
                    mining_requires_peers: true,
                    default_consistency_checks: false,
                    require_standard: true,
                    mine_blocks_on_demand: false,
                    testnet_to_be_deprecated_field_rpc: true,
                }
            }
            Network::Regtest => {
                let genesis = Genesis {
                    version: GENESIS_BLOCK_VERSION,
                    time: 1_296_688_602,
                    bits: 0x200f0f0f,
                    nonce: 9,
                    hash: genesis_hash,
                    merkle_root,
                };

                // Regtest has no seeders, and reuses the Testnet keys and prefixes.
                ChainParams {
                    consensus,
                    network_id: "regtest",
                    currency_units: "REG",
                    magic: magics::REGTEST,
                    alert_public_key: TESTNET_ALERT_PUBLIC_KEY,
                    default_port: 18344,
                    max_tip_age: MAX_TIP_AGE,
                    prune_after_height: Height(1000),
                    checkpoints: CheckpointData::genesis_only(&genesis),
                    genesis,
                    dns_seeds: Vec::new(),
                    base58_prefixes: Base58Prefixes::testnet(),
                    mining_requires_peers: false,
                    default_consistency_checks: true,
                    require_standard: false,
                    mine_blocks_on_demand: true,
                    testnet_to_be_deprecated_field_rpc: false,
                }
            }
        }
    }

    /// Returns the consensus parameters.
    pub fn consensus(&self) -> &Arc<ConsensusParams> {
        &self.consensus
    }

    /// Returns the network.
    pub fn network(&self) -> Network {
        self.consensus.network()
    }

    /// Returns the short network id: `main`, `test`, or `regtest`.
    pub fn network_id(&self) -> &'static str {
        self.network_id
    }

    /// Returns the currency unit shown to users.
    pub fn currency_units(&self) -> &'static str {
        self.currency_units
    }

    /// Returns the network magic.
    pub fn magic(&self) -> Magic {
        self.magic
    }

    /// Returns the alert public key, as hex.
    pub fn alert_public_key(&self) -> &'static str {
        self.alert_public_key
    }

    /// Returns the alert public key bytes.
    pub fn alert_public_key_bytes(&self) -> Result<Vec<u8>, hex::FromHexError> {
        hex::decode(self.alert_public_key)
    }

    /// Returns the default peer-to-peer port.
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Returns the maximum chain tip age before the node is out of sync, in seconds.
    pub fn max_tip_age(&self) -> i64 {
        self.max_tip_age
    }

    /// Returns the height below which blocks can't be pruned.
    pub fn prune_after_height(&self) -> Height {
        self.prune_after_height
    }

    /// Returns the genesis block parameters.
    pub fn genesis(&self) -> &Genesis {
        &self.genesis
    }

    /// Returns the DNS seeders.
    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    /// Returns the Base58Check prefixes.
    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    /// Returns the hard-coded checkpoints.
    pub fn checkpoints(&self) -> &CheckpointData {
        &self.checkpoints
    }

    /// Returns `true` if mining waits for peers.
    pub fn mining_requires_peers(&self) -> bool {
        self.mining_requires_peers
    }

    /// Returns `true` if expensive consistency checks run by default.
    pub fn default_consistency_checks(&self) -> bool {
        self.default_consistency_checks
    }

    /// Returns `true` if only standard transactions are relayed.
    pub fn require_standard(&self) -> bool {
        self.require_standard
    }

    /// Returns `true` if blocks are only mined on request.
    pub fn mine_blocks_on_demand(&self) -> bool {
        self.mine_blocks_on_demand
    }

    /// Returns `true` if RPC responses include the deprecated `testnet` field.
    pub fn testnet_to_be_deprecated_field_rpc(&self) -> bool {
        self.testnet_to_be_deprecated_field_rpc
    }

    /// Returns the founders' reward address for `height`.
    pub fn founders_reward_address(&self, height: Height) -> Result<&FounderAddress, SubsidyError> {
        self.consensus.founders_reward_address(height)
    }

    /// Returns the founders' reward address at `index`.
    pub fn founders_reward_address_at_index(
        &self,
        index: usize,
    ) -> Result<&FounderAddress, SubsidyError> {
        self.consensus.founders_reward_address_at_index(index)
    }

    /// Returns every founders' reward address, in payout order.
    pub fn founders_reward_addresses(&self) -> &[FounderAddress] {
        self.consensus.founders_reward_addresses()
    }
}
