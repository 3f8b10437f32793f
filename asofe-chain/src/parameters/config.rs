//! Network selection and Regtest overrides, loaded at startup.

use crate::parameters::{network::testnet::ConfiguredActivationHeights, Network};

/// Configuration for the network parameters.
///
/// Callers load this from TOML, or any other serde format, and pass it to
/// [`NetworkRegistry::new`](crate::parameters::NetworkRegistry::new).
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// The network to use.
    ///
    /// Set to `Mainnet` by default.
    pub network: Network,

    /// Whether coinbase outputs must be shielded before they are spent on Regtest.
    ///
    /// Mainnet and Testnet always protect coinbase outputs, so this is
    /// ignored on those networks.
    pub regtest_protect_coinbase: bool,

    /// Network upgrade activation heights for Regtest.
    ///
    /// Only allowed when `network` is Regtest.
    pub regtest_activation_heights: Option<ConfiguredActivationHeights>,
}
