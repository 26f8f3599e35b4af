//! The Poseidon2 permutation over the BN254 scalar field, and the width-8 hash built on it.
//!
//! This implementation was based upon the following resources:
//! - https://github.com/HorizenLabs/poseidon2/blob/main/plain_implementations/src/poseidon2/poseidon2.rs
//! - https://eprint.iacr.org/2023/323.pdf

extern crate alloc;

mod bn254_t8;
mod error;
mod external;
mod hash;
mod internal;
mod permutation;
mod poseidon2;
mod round_constants;
mod sbox;

pub use bn254_t8::*;
pub use error::*;
pub use external::*;
pub use hash::*;
pub use internal::*;
pub use permutation::*;
pub use poseidon2::*;
pub use round_constants::*;
pub use sbox::*;
