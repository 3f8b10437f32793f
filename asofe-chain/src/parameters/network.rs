//! Consensus parameters for each network.

use std::{fmt, str::FromStr, sync::Arc};

use thiserror::Error;

pub mod chain;
pub mod consensus;
pub mod subsidy;
pub mod testnet;

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

#[cfg(test)]
mod tests;

use consensus::ConsensusParams;

/// An enum describing the possible network choices.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum Network {
    /// The production mainnet.
    #[default]
    Mainnet,

    /// The public test network.
    Testnet,

    /// A local regression test network.
    Regtest,
}

impl From<Network> for &'static str {
    fn from(network: Network) -> &'static str {
        match network {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
            Network::Regtest => "Regtest",
        }
    }
}

impl From<&Network> for &'static str {
    fn from(network: &Network) -> &'static str {
        (*network).into()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into())
    }
}

impl Network {
    /// Returns an iterator over [`Network`] variants.
    pub fn iter() -> impl Iterator<Item = Self> {
        [Self::Mainnet, Self::Testnet, Self::Regtest].into_iter()
    }

    /// Return the network name as defined in
    /// [BIP70](https://github.com/bitcoin/bips/blob/master/bip-0070.mediawiki#paymentdetailspaymentrequest)
    pub fn bip70_network_name(&self) -> String {
        match self {
            Network::Mainnet => "main".to_string(),
            Network::Testnet => "test".to_string(),
            Network::Regtest => "regtest".to_string(),
        }
    }

    /// Return the lowercase network name.
    pub fn lowercase_name(&self) -> String {
        self.to_string().to_ascii_lowercase()
    }

    /// Returns `true` if this network is a testing network.
    pub fn is_a_test_network(&self) -> bool {
        *self != Network::Mainnet
    }

    /// Returns `true` if this network is Regtest.
    pub fn is_regtest(&self) -> bool {
        *self == Network::Regtest
    }

    /// Returns the default consensus parameters for this network.
    ///
    /// These parameters never change. Use the [`NetworkRegistry`](crate::parameters::NetworkRegistry)
    /// to get the parameters selected at startup, including any Regtest overrides.
    pub fn consensus_params(&self) -> Arc<ConsensusParams> {
        consensus::default_params(*self)
    }
}

impl FromStr for Network {
    type Err = InvalidNetworkError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Mainnet),
            "test" | "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            _ => Err(InvalidNetworkError(string.to_owned())),
        }
    }
}

/// A string that doesn't name a network.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Invalid network: {0}")]
pub struct InvalidNetworkError(String);
