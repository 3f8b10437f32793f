//! Equihash parameters and epoch selection.

use std::fmt;

use thiserror::Error;

use crate::block::Height;

/// The size of a serialized block header without its Equihash solution, in bytes.
pub const HEADER_SIZE: u64 = 140;

/// The maximum number of headers in a `headers` message.
pub const MAX_HEADERS_RESULTS: u64 = 160;

/// The maximum size of a network protocol message, in bytes.
pub const MAX_PROTOCOL_MESSAGE_LENGTH: u64 = 2 * 1024 * 1024;

/// The number of bits available for each index in a solution.
const MAX_INDEX_BITS: u32 = 32;

/// An Equihash `(N, K)` parameter pair that is acceptable for a chain.
///
/// The only way to construct new parameters is [`Parameters::new`], which
/// checks that the pair is acceptable.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct Parameters {
    n: u32,
    k: u32,
}

/// Unchecked parameters, used to validate deserialized pairs.
#[derive(Deserialize)]
struct RawParameters {
    n: u32,
    k: u32,
}

impl TryFrom<RawParameters> for Parameters {
    type Error = EquihashParametersError;

    fn try_from(RawParameters { n, k }: RawParameters) -> Result<Self, Self::Error> {
        Parameters::new(n, k)
    }
}

/// An Equihash `(N, K)` pair that can't be used by a chain.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum EquihashParametersError {
    /// `K` must be at least 1.
    #[error("Equihash K must be at least 1: ({n}, {k})")]
    KTooSmall {
        /// The `N` parameter.
        n: u32,
        /// The `K` parameter.
        k: u32,
    },

    /// `K` must be less than `N`.
    #[error("Equihash K must be less than N: ({n}, {k})")]
    KNotLessThanN {
        /// The `N` parameter.
        n: u32,
        /// The `K` parameter.
        k: u32,
    },

    /// `N` must be a whole number of bytes.
    #[error("Equihash N must be a multiple of 8: ({n}, {k})")]
    NNotMultipleOf8 {
        /// The `N` parameter.
        n: u32,
        /// The `K` parameter.
        k: u32,
    },

    /// `N` must split evenly into `K + 1` collision steps.
    #[error("Equihash N must be a multiple of K + 1: ({n}, {k})")]
    NNotMultipleOfKPlusOne {
        /// The `N` parameter.
        n: u32,
        /// The `K` parameter.
        k: u32,
    },

    /// Solution indexes must fit in 32 bits.
    #[error("Equihash indexes need {index_bits} bits, which is too many: ({n}, {k})")]
    TooManyIndexBits {
        /// The `N` parameter.
        n: u32,
        /// The `K` parameter.
        k: u32,
        /// The number of bits in each solution index.
        index_bits: u32,
    },

    /// A full `headers` message must fit in a protocol message.
    #[error(
        "Equihash solutions of {solution_size} bytes make headers messages too large: ({n}, {k})"
    )]
    SolutionTooLarge {
        /// The `N` parameter.
        n: u32,
        /// The `K` parameter.
        k: u32,
        /// The size of each solution, in bytes.
        solution_size: u64,
    },
}

impl Parameters {
    /// The parameters used by Mainnet and Testnet at launch.
    pub const N200_K9: Parameters = Parameters { n: 200, k: 9 };

    /// The parameters that replace [`Parameters::N200_K9`] on Testnet.
    pub const N144_K5: Parameters = Parameters { n: 144, k: 5 };

    /// The fast parameters used by Regtest.
    pub const N48_K5: Parameters = Parameters { n: 48, k: 5 };

    /// Returns the parameters `(n, k)` if they are acceptable.
    ///
    /// ```
    /// # use asofe_chain::work::equihash::Parameters;
    /// assert_eq!(Parameters::new(200, 9), Ok(Parameters::N200_K9));
    /// assert!(Parameters::new(200, 8).is_err());
    /// ```
    pub fn new(n: u32, k: u32) -> Result<Parameters, EquihashParametersError> {
        use EquihashParametersError::*;

        if k < 1 {
            return Err(KTooSmall { n, k });
        }
        if k >= n {
            return Err(KNotLessThanN { n, k });
        }
        if n % 8 != 0 {
            return Err(NNotMultipleOf8 { n, k });
        }
        if n % (k + 1) != 0 {
            return Err(NNotMultipleOfKPlusOne { n, k });
        }

        let index_bits = n / (k + 1) + 1;
        if index_bits >= MAX_INDEX_BITS {
            return Err(TooManyIndexBits { n, k, index_bits });
        }

        let parameters = Parameters { n, k };
        let solution_size = parameters.solution_size();

        let headers_size = HEADER_SIZE
            .saturating_add(solution_size)
            .saturating_mul(MAX_HEADERS_RESULTS);

        if headers_size >= MAX_PROTOCOL_MESSAGE_LENGTH - 1000 {
            return Err(SolutionTooLarge {
                n,
                k,
                solution_size,
            });
        }

        Ok(parameters)
    }

    /// Returns the `N` parameter.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Returns the `K` parameter.
    pub fn k(&self) -> u32 {
        self.k
    }

    /// Returns the size of a compressed solution for these parameters, in bytes.
    ///
    /// `2^K` indexes of `N / (K + 1) + 1` bits each.
    pub fn solution_size(&self) -> u64 {
        let index_bits = u64::from(self.n / (self.k + 1) + 1);

        // Saturates for huge `K`, which is always rejected as too large.
        1u64.checked_shl(self.k)
            .unwrap_or(u64::MAX)
            .saturating_mul(index_bits)
            / 8
    }

    /// Checks that these parameters are still acceptable.
    pub(crate) fn validate(&self) -> Result<(), EquihashParametersError> {
        Parameters::new(self.n, self.k).map(|_| ())
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.n, self.k)
    }
}

/// The two Equihash epochs of a network.
///
/// During the transition window, from `epoch_2_start_height` to
/// `epoch_1_end_height` inclusive, solutions for either epoch are valid.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct EquihashEpochs {
    /// The parameters before the transition.
    pub epoch_1: Parameters,
    /// The last height where `epoch_1` is valid.
    pub epoch_1_end_height: Height,
    /// The parameters after the transition.
    pub epoch_2: Parameters,
    /// The first height where `epoch_2` is valid.
    pub epoch_2_start_height: Height,
}

impl EquihashEpochs {
    /// Returns epochs that use `parameters` at every height.
    pub const fn single(parameters: Parameters) -> EquihashEpochs {
        EquihashEpochs {
            epoch_1: parameters,
            epoch_1_end_height: Height::MAX,
            epoch_2: parameters,
            epoch_2_start_height: Height::MAX,
        }
    }

    /// Returns the parameters that are valid at `height`.
    pub fn active_parameters(&self, height: Height) -> ActiveParameters {
        active_parameters(height, self)
    }

    /// Returns `true` if the second epoch starts before the first one ends,
    /// or immediately after it.
    pub fn is_contiguous(&self) -> bool {
        i64::from(self.epoch_2_start_height.0) <= i64::from(self.epoch_1_end_height.0) + 1
    }
}

/// The Equihash parameters that are valid at a height.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum ActiveParameters {
    /// Exactly one parameter set is valid.
    Single(Parameters),
    /// Both epochs are valid, during the transition window.
    Overlap {
        /// The second epoch, which miners should prefer.
        newer: Parameters,
        /// The first epoch, which is still accepted.
        older: Parameters,
    },
}

impl ActiveParameters {
    /// Returns an iterator over the valid parameters, newest first.
    pub fn iter(&self) -> impl Iterator<Item = Parameters> {
        let (first, second) = match *self {
            ActiveParameters::Single(parameters) => (parameters, None),
            ActiveParameters::Overlap { newer, older } => (newer, Some(older)),
        };

        std::iter::once(first).chain(second)
    }

    /// Returns the number of valid parameter sets, 1 or 2.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            ActiveParameters::Single(_) => 1,
            ActiveParameters::Overlap { .. } => 2,
        }
    }

    /// Returns `true` if `parameters` are valid.
    pub fn contains(&self, parameters: &Parameters) -> bool {
        self.iter().any(|active| &active == parameters)
    }

    /// Returns the parameters that new blocks should use.
    pub fn preferred(&self) -> Parameters {
        match *self {
            ActiveParameters::Single(parameters) => parameters,
            ActiveParameters::Overlap { newer, .. } => newer,
        }
    }
}

/// Returns the Equihash parameters that are valid at `height`.
///
/// Before `epoch_2_start_height` only the first epoch is valid, after
/// `epoch_1_end_height` only the second. In between, both are valid.
/// Epochs with the same parameters never overlap.
pub fn active_parameters(height: Height, epochs: &EquihashEpochs) -> ActiveParameters {
    if height < epochs.epoch_2_start_height {
        ActiveParameters::Single(epochs.epoch_1)
    } else if height > epochs.epoch_1_end_height || epochs.epoch_1 == epochs.epoch_2 {
        ActiveParameters::Single(epochs.epoch_2)
    } else {
        ActiveParameters::Overlap {
            newer: epochs.epoch_2,
            older: epochs.epoch_1,
        }
    }
}
