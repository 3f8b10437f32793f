//! Block heights and hashes.
//!
//! Block serialization and hashing are done by other crates, this module only
//! has the types that consensus parameters are keyed by.

mod hash;
mod height;

pub use hash::Hash;
pub use height::{Height, HeightDiff, HeightError};
