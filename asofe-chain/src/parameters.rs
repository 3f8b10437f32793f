//! Consensus parameters for each Asofe network.
//!
//! This module contains the consensus parameters which are required for
//! parsing and validation.
//!
//! Each network has one immutable [`ConsensusParams`] value. Startup code
//! builds a [`NetworkRegistry`] from a [`Config`], which applies any Regtest
//! overrides before the parameters are shared.

mod error;
mod network_upgrade;
mod registry;

pub mod config;
pub mod constants;
pub mod genesis;
pub mod network;

#[cfg(any(test, feature = "proptest-impl"))]
pub mod arbitrary;

pub use config::Config;
pub use error::{ParameterError, RegistryError};
pub use network::{
    chain::{Base58Prefixes, ChainParams, CheckpointData, DnsSeed, Magic},
    consensus::ConsensusParams,
    subsidy::{FounderAddress, SubsidyError},
    testnet::{ConfiguredActivationHeights, ParametersBuilder},
    InvalidNetworkError, Network,
};
pub use network_upgrade::*;
pub use registry::{global, init_global, NetworkRegistry};
