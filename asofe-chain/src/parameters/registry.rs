//! The parameters of every network, and the network this process uses.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::parameters::{
    config::Config,
    error::{ParameterError, RegistryError},
    network::{chain::ChainParams, consensus::ConsensusParams},
    Network,
};

/// The process-wide registry, set once at startup.
static GLOBAL_REGISTRY: OnceCell<NetworkRegistry> = OnceCell::new();

/// The chain parameters of every network, and the selected network.
///
/// Regtest overrides from the [`Config`] are applied when the registry is
/// created, so the parameters never change after that.
#[derive(Clone, Debug)]
pub struct NetworkRegistry {
    mainnet: Arc<ChainParams>,
    testnet: Arc<ChainParams>,
    regtest: Arc<ChainParams>,

    selected: Network,
}

impl NetworkRegistry {
    /// Builds and checks the parameters of every network, using `config`.
    pub fn new(config: &Config) -> Result<NetworkRegistry, ParameterError> {
        let selected = config.network;

        if let Some(heights) = config.regtest_activation_heights {
            if selected != Network::Regtest && !heights.is_empty() {
                return Err(ParameterError::ConfiguredActivationHeightsNotAllowed(
                    selected,
                ));
            }
        }

        if config.regtest_protect_coinbase && selected != Network::Regtest {
            warn!(
                network = %selected,
                "regtest_protect_coinbase only applies to Regtest, which is not the selected network"
            );
        }

        let mut builder = ConsensusParams::build(Network::Regtest)
            .with_coinbase_must_be_protected(config.regtest_protect_coinbase);
        if let Some(heights) = config.regtest_activation_heights {
            builder = builder.with_activation_heights(heights);
        }
        let regtest = builder.finish()?;

        let mainnet = Network::Mainnet.consensus_params();
        let testnet = Network::Testnet.consensus_params();
        mainnet.validate()?;
        testnet.validate()?;

        let registry = NetworkRegistry {
            mainnet: Arc::new(ChainParams::with_consensus(mainnet)),
            testnet: Arc::new(ChainParams::with_consensus(testnet)),
            regtest: Arc::new(ChainParams::with_consensus(Arc::new(regtest))),
            selected,
        };

        info!(
            network = %selected,
            upgrades = ?registry.selected().consensus().upgrades(),
            "selected network parameters"
        );

        Ok(registry)
    }

    /// Returns the parameters for `network`.
    pub fn params(&self, network: Network) -> &Arc<ChainParams> {
        match network {
            Network::Mainnet => &self.mainnet,
            Network::Testnet => &self.testnet,
            Network::Regtest => &self.regtest,
        }
    }

    /// Returns the parameters of the selected network.
    pub fn selected(&self) -> &Arc<ChainParams> {
        self.params(self.selected)
    }

    /// Returns the selected network.
    pub fn selected_network(&self) -> Network {
        self.selected
    }
}

/// Sets the process-wide registry from `config`, and returns it.
///
/// Calling this again for the same network returns the existing registry,
/// and the new `config` is ignored. Selecting a different network fails.
pub fn init_global(config: &Config) -> Result<&'static NetworkRegistry, RegistryError> {
    let registry = GLOBAL_REGISTRY.get_or_try_init(|| NetworkRegistry::new(config))?;

    if registry.selected_network() != config.network {
        return Err(RegistryError::AlreadyInitialized {
            selected: registry.selected_network(),
        });
    }

    Ok(registry)
}

/// Returns the process-wide registry.
pub fn global() -> Result<&'static NetworkRegistry, RegistryError> {
    GLOBAL_REGISTRY.get().ok_or(RegistryError::NotInitialized)
}
