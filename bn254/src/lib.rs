//! The BN254 scalar field, `F_P` where
//! `P = 21888242871839275222246405745257275088548364400416034343698204186575808495617`.
//!
//! Elements are kept in Montgomery form with respect to `R = 2^256`.

#![no_std]

extern crate alloc;

mod bn254;
mod helpers;

pub use bn254::*;
