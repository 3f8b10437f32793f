//! Genesis block parameters for each Asofe network.

use crate::block;

/// The previous block hash for the genesis block.
///
/// All networks use the Bitcoin `null` value for the parent of the
/// genesis block. (In Bitcoin, `null` is `[0; 32]`.)
pub const GENESIS_PREVIOUS_BLOCK_HASH: block::Hash = block::Hash([0; 32]);

/// The block version of every genesis block.
pub const GENESIS_BLOCK_VERSION: u32 = 4;

/// The genesis merkle root, which is the same on every network.
pub(crate) const GENESIS_MERKLE_ROOT: &str =
    "df6fc210ea76d364af851fd7ce5479f717cb8f4a1a4e577f15722933b532875b";

/// The header fields of a network's genesis block, and the hashes it must have.
///
/// The genesis block is built and hashed by the block crates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Genesis {
    /// The block version.
    pub version: u32,
    /// The block time, in seconds since the Unix epoch.
    pub time: u32,
    /// The compact difficulty target.
    pub bits: u32,
    /// The nonce, which fits in the low bytes of the 256-bit header field.
    pub nonce: u64,
    /// The expected genesis block hash.
    pub hash: block::Hash,
    /// The expected merkle root of the genesis transactions.
    pub merkle_root: block::Hash,
}

impl Genesis {
    /// Returns the parent hash of every genesis block.
    pub fn previous_block_hash(&self) -> block::Hash {
        GENESIS_PREVIOUS_BLOCK_HASH
    }
}
