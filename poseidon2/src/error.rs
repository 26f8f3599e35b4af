use num_bigint::BigUint;
use pt8_bn254::ParseBn254Error;
use thiserror::Error;

use crate::RoundKind;

/// Problems with a Poseidon2 parameter set, detected once when it is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Full rounds are split evenly around the partial rounds.
    #[error("the number of full rounds must be even, got {0}")]
    OddFullRounds(usize),

    #[error("expected constants for {expected} rounds, found {found}")]
    RoundCount { expected: usize, found: usize },

    #[error("round {round} is scheduled as {expected:?} but its constants describe a {found:?} round")]
    RoundKind {
        round: usize,
        expected: RoundKind,
        found: RoundKind,
    },

    #[error("round constant at round {round}, lane {lane} is malformed")]
    MalformedConstant {
        round: usize,
        lane: usize,
        source: ParseBn254Error,
    },

    #[error("diffusion vector entry {lane} is malformed")]
    MalformedDiffusion {
        lane: usize,
        source: ParseBn254Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Poseidon2Error {
    /// An input integer is not smaller than the field modulus. Inputs are never reduced.
    #[error("input {index} is not a canonical field element: {value} is not below the modulus")]
    InvalidInput { index: usize, value: BigUint },

    #[error("invalid Poseidon2 parameters")]
    Configuration(#[from] ConfigurationError),
}

pub type Poseidon2Result<T> = Result<T, Poseidon2Error>;
