//! Proof-of-work parameters.
//!
//! Solving and verifying Equihash solutions is done by the block crates,
//! this module only decides which `(N, K)` parameters are valid at a height.

pub mod equihash;
