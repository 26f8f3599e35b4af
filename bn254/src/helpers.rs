//! Fixed-width limb arithmetic backing the Montgomery representation of [`Bn254`](crate::Bn254).
//!
//! All big-nums here are little-endian arrays of `u64` limbs.

use alloc::vec::Vec;
use core::cmp::Ordering;

use num_bigint::BigUint;

use crate::bn254::{BN254_MONTY_MU, BN254_PRIME};

/// Convert a fixed-size array of u64s to a BigUint.
#[inline]
pub(crate) fn to_biguint<const N: usize>(value: [u64; N]) -> BigUint {
    let bytes: Vec<u8> = value.iter().flat_map(|x| x.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

/// Compare two big-nums starting from the most significant limb.
#[inline]
pub(crate) fn cmp_limbs<const N: usize>(lhs: &[u64; N], rhs: &[u64; N]) -> Ordering {
    lhs.iter().rev().cmp(rhs.iter().rev())
}

/// Returns true if `value` lies in `[0, P)`.
#[inline]
pub(crate) fn is_canonical(value: &[u64; 4]) -> bool {
    cmp_limbs(value, &BN254_PRIME) == Ordering::Less
}

/// Read a 32-byte big-endian word into little-endian limbs.
#[inline]
pub(crate) fn limbs_from_be_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    core::array::from_fn(|i| {
        // Limb `i` is the `i`-th 8 byte group counted from the end of the word.
        let start = 32 - 8 * (i + 1);
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&bytes[start..start + 8]);
        u64::from_be_bytes(chunk)
    })
}

/// Write little-endian limbs out as a 32-byte big-endian word.
#[inline]
pub(crate) fn limbs_to_be_bytes(limbs: [u64; 4]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let start = 32 - 8 * (i + 1);
        out[start..start + 8].copy_from_slice(&limb.to_be_bytes());
    }
    out
}

/// Add with carry in and carry out. Mirrors the unstable `u64::carrying_add`.
#[inline]
const fn carrying_add(lhs: u64, rhs: u64, carry: bool) -> (u64, bool) {
    let (a, c1) = lhs.overflowing_add(rhs);
    let (b, c2) = a.overflowing_add(carry as u64);
    (b, c1 | c2)
}

/// Compute `lhs + rhs`, returning a bool if overflow occurred.
#[inline]
pub(crate) fn wrapping_add<const N: usize>(lhs: [u64; N], rhs: [u64; N]) -> ([u64; N], bool) {
    let mut carry = false;
    let mut output = [0; N];

    for i in 0..N {
        (output[i], carry) = carrying_add(lhs[i], rhs[i], carry);
    }

    (output, carry)
}

/// Subtract with borrow in and borrow out. Mirrors the unstable `u64::borrowing_sub`.
#[inline]
const fn borrowing_sub(lhs: u64, rhs: u64, borrow: bool) -> (u64, bool) {
    let (a, c1) = lhs.overflowing_sub(rhs);
    let (b, c2) = a.overflowing_sub(borrow as u64);
    (b, c1 | c2)
}

/// Compute `lhs - rhs`, returning a bool if underflow occurred.
#[inline]
pub(crate) fn wrapping_sub<const N: usize>(lhs: [u64; N], rhs: [u64; N]) -> ([u64; N], bool) {
    let mut borrow = false;
    let mut output = [0; N];

    for i in 0..N {
        (output[i], borrow) = borrowing_sub(lhs[i], rhs[i], borrow);
    }

    (output, borrow)
}

/// Schoolbook `4 x 4 -> 8` limb multiplication.
#[inline]
pub(crate) fn widening_mul(lhs: [u64; 4], rhs: [u64; 4]) -> [u64; 8] {
    let mut output = [0_u64; 8];
    let mut overflow;

    for i in 0..4 {
        let mut carry = 0_u128;
        for j in 0..4 {
            // prod <= (2^64 - 1)^2 = 2^128 - 2^65 + 1 and carry < 2^64, so the sum fits.
            carry += lhs[i] as u128 * rhs[j] as u128;

            let lo = carry as u64;
            (output[i + j], overflow) = output[i + j].overflowing_add(lo);

            carry >>= 64;
            carry += overflow as u128;
        }
        // output[i + 4] has not been written to yet.
        output[i + 4] = carry as u64;
    }
    output
}

/// Multiplication of big-nums mod `2^256`.
///
/// Only the limbs that survive the truncation are computed.
#[inline]
fn mul_mod_2_exp_256(lhs: [u64; 4], rhs: [u64; 4]) -> [u64; 4] {
    let mut output = [0_u64; 4];

    let limb0 = (lhs[0] as u128) * (rhs[0] as u128);
    output[0] = limb0 as u64;

    // (limb0 >> 64) < 2^64 so the first add cannot wrap; the second may and its carry is kept.
    let (limb1, carry) = (limb0 >> 64)
        .wrapping_add((lhs[0] as u128) * (rhs[1] as u128))
        .overflowing_add((lhs[1] as u128) * (rhs[0] as u128));
    output[1] = limb1 as u64;

    // Anything that wraps here is a multiple of 2^256.
    let limb2 = ((limb1 >> 64) + ((carry as u128) << 64))
        .wrapping_add((lhs[0] as u128) * (rhs[2] as u128))
        .wrapping_add((lhs[1] as u128) * (rhs[1] as u128))
        .wrapping_add((lhs[2] as u128) * (rhs[0] as u128));
    output[2] = limb2 as u64;

    output[3] = ((limb2 >> 64) as u64)
        .wrapping_add(lhs[0].wrapping_mul(rhs[3]))
        .wrapping_add(lhs[1].wrapping_mul(rhs[2]))
        .wrapping_add(lhs[2].wrapping_mul(rhs[1]))
        .wrapping_add(lhs[3].wrapping_mul(rhs[0]));

    output
}

/// Montgomery reduction: maps `x < P * 2^256` to `x * 2^{-256} mod P`, canonical.
///
/// With `t = x_lo * P^{-1} mod 2^256`, the low halves of `x` and `t * P` agree exactly,
/// so `(x - t * P) / 2^256 = x_hi - (t * P)_hi` which lies in `(-P, P)`.
#[inline]
pub(crate) fn monty_reduce(prod: [u64; 8]) -> [u64; 4] {
    let prod_lo = [prod[0], prod[1], prod[2], prod[3]];
    let prod_hi = [prod[4], prod[5], prod[6], prod[7]];

    let t = mul_mod_2_exp_256(prod_lo, BN254_MONTY_MU);
    let u = widening_mul(t, BN254_PRIME);
    let u_hi = [u[4], u[5], u[6], u[7]];

    let (sub, underflow) = wrapping_sub(prod_hi, u_hi);
    if underflow {
        wrapping_add(sub, BN254_PRIME).0
    } else {
        sub
    }
}

/// Montgomery multiplication for BN254 with `R = 2^256`.
#[inline]
pub(crate) fn monty_mul(lhs: [u64; 4], rhs: [u64; 4]) -> [u64; 4] {
    monty_reduce(widening_mul(lhs, rhs))
}
