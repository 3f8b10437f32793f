//! Definitions of chain constants, including:
//! - target spacing and the Blossom spacing ratio,
//! - halving and slow start intervals,
//! - network upgrade activation heights and protocol versions,
//! - network magic bytes.

use crate::block::{Height, HeightDiff};

/// The ratio between the pre-Blossom and post-Blossom target block spacing.
pub const BLOSSOM_POW_TARGET_SPACING_RATIO: u32 = 2;

/// The target block spacing before Blossom, in seconds.
pub const PRE_BLOSSOM_POW_TARGET_SPACING: i64 = 150;

/// The target block spacing after Blossom activation, in seconds.
pub const POST_BLOSSOM_POW_TARGET_SPACING: i64 =
    PRE_BLOSSOM_POW_TARGET_SPACING / BLOSSOM_POW_TARGET_SPACING_RATIO as i64;

/// The averaging window for difficulty threshold arithmetic mean calculations.
pub const POW_AVERAGING_WINDOW: i64 = 17;

/// The halving interval before Blossom on Mainnet and Testnet.
pub const PRE_BLOSSOM_HALVING_INTERVAL: HeightDiff = 840_000;

/// The halving interval before Blossom on Regtest.
pub const REGTEST_PRE_BLOSSOM_HALVING_INTERVAL: HeightDiff = 150;

/// An initial period from Genesis to this Height where the block subsidy is gradually incremented.
pub const SLOW_START_INTERVAL: Height = Height(20_000);

/// Regtest has no slow start.
pub const REGTEST_SLOW_START_INTERVAL: Height = Height(0);

/// The maximum age of the chain tip before the node considers itself out of sync, in seconds.
pub const MAX_TIP_AGE: i64 = 24 * 60 * 60;

/// Magic numbers used to identify different networks.
pub mod magics {
    use crate::parameters::network::chain::Magic;

    /// The production mainnet.
    pub const MAINNET: Magic = Magic([0x24, 0xe9, 0x27, 0x64]);
    /// The testnet.
    pub const TESTNET: Magic = Magic([0xfa, 0x1a, 0xf9, 0xbf]);
    /// The regtest.
    pub const REGTEST: Magic = Magic([0xaa, 0xe8, 0x3f, 0x5f]);
}

/// The block heights at which network upgrades activate.
pub mod activation_heights {
    /// Network upgrade activation heights for Testnet.
    pub mod testnet {
        use crate::block::Height;

        /// The block height at which `Overwinter` activates on Testnet.
        pub const OVERWINTER: Height = Height(207_500);
        /// The block height at which `Sapling` activates on Testnet.
        pub const SAPLING: Height = Height(280_000);
        /// The block height at which `Blossom` activates on Testnet.
        pub const BLOSSOM: Height = Height(584_000);
    }

    /// Network upgrade activation heights for Mainnet.
    pub mod mainnet {
        use crate::block::Height;

        /// The block height at which `Overwinter` activates on Mainnet.
        pub const OVERWINTER: Height = Height(347_500);
        /// The block height at which `Sapling` activates on Mainnet.
        pub const SAPLING: Height = Height(419_200);
        /// The block height at which `Blossom` activates on Mainnet.
        pub const BLOSSOM: Height = Height(653_600);
    }
}

/// The minimum peer protocol versions for each network upgrade.
pub mod protocol_versions {
    /// The protocol version of the chain's original rules.
    pub const BASE: u32 = 170_002;
    /// The protocol version of the test-only upgrade.
    pub const TEST_DUMMY: u32 = 170_002;

    /// Protocol versions for Mainnet.
    pub mod mainnet {
        /// `Overwinter` on Mainnet.
        pub const OVERWINTER: u32 = 170_005;
        /// `Sapling` on Mainnet.
        pub const SAPLING: u32 = 170_007;
        /// `Blossom` on Mainnet.
        pub const BLOSSOM: u32 = 170_009;
    }

    /// Protocol versions for Testnet.
    pub mod testnet {
        /// `Overwinter` on Testnet.
        pub const OVERWINTER: u32 = 170_003;
        /// `Sapling` on Testnet.
        pub const SAPLING: u32 = 170_007;
        /// `Blossom` on Testnet.
        pub const BLOSSOM: u32 = 170_008;
    }

    /// Protocol versions for Regtest.
    pub mod regtest {
        /// `Overwinter` on Regtest.
        pub const OVERWINTER: u32 = 170_003;
        /// `Sapling` on Regtest.
        pub const SAPLING: u32 = 170_006;
        /// `Blossom` on Regtest.
        pub const BLOSSOM: u32 = 170_008;
    }
}
