//! Consensus parameters for the Asofe chain.
//!
//! This crate resolves, for a block height and a network, the consensus
//! rules that govern block validity: network upgrade activation, halving
//! arithmetic, founders' reward address rotation, Equihash parameter
//! epochs, and relay fee rates.
//!
//! Everything here is a pure function of immutable parameters, so it can be
//! called from any number of threads without locking.

// Standard lints
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// Tests can panic on purpose, but consensus code returns errors instead.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

#[macro_use]
extern crate serde;

#[macro_use]
extern crate tracing;

pub mod amount;
pub mod block;
pub mod parameters;
pub mod work;
