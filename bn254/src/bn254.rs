use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter, LowerHex};
use core::hash::{Hash, Hasher};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use num_bigint::BigUint;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::helpers::{
    cmp_limbs, is_canonical, limbs_from_be_bytes, limbs_to_be_bytes, monty_mul, to_biguint,
    wrapping_add, wrapping_sub,
};

/// The BN254 prime represented as a little-endian array of 4-u64s.
///
/// Equal to: `21888242871839275222246405745257275088548364400416034343698204186575808495617`
pub(crate) const BN254_PRIME: [u64; 4] = [
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

// We use the Montgomery representation of the BN254 prime, with respect to the
// constant 2^256.

/// The value `P^{-1} mod 2^256` where P is the BN254 prime.
pub(crate) const BN254_MONTY_MU: [u64; 4] = [
    0x3d1e0a6c10000001,
    0x9a7979b4b396ee4c,
    0x1c6567d766f9dc6e,
    0x8c07d0e2f27cbe4d,
];

/// The square of the Montgomery constant `R = 2^256 mod P` for the BN254 field.
///
/// Elements are stored as `aR mod P`; multiplying a canonical `a` by `R^2` and reducing once
/// gives its Montgomery form.
///
/// Equal to: `944936681149208446651664254269745548490766851729442924617792859073125903783`
pub(crate) const BN254_MONTY_R_SQ: [u64; 4] = [
    0x1bb8e645ae216da7,
    0x53fe3ab1e35c59e3,
    0x8c49833d53bb8085,
    0x0216d0b17f4e44a5,
];

/// An element of the BN254 scalar field `F_P`, where
/// `P = 21888242871839275222246405745257275088548364400416034343698204186575808495617`.
///
/// Always canonical: the stored Montgomery form corresponds to a unique integer in `[0, P)`,
/// and every constructor that accepts external integers either checks this or says it reduces.
#[derive(Copy, Clone, Default, Eq, PartialEq)]
#[must_use]
pub struct Bn254 {
    /// The Montgomery form of the element, a 254-bit integer less than `P` in little-endian limbs.
    pub(crate) value: [u64; 4],
}

/// A monomial map `x -> x^N` which is a bijection on the field.
///
/// Only implemented for exponents `N` with `gcd(N, P - 1) = 1`.
pub trait InjectiveMonomial<const N: u64>: Copy {
    fn injective_exp_n(&self) -> Self;
}

/// Failure to read a [`Bn254`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBn254Error {
    /// Not a decimal or `0x`-prefixed hexadecimal integer.
    #[error("`{0}` is not a decimal or 0x-prefixed hexadecimal integer")]
    Malformed(String),
    /// A well formed integer that is not smaller than the field modulus.
    #[error("`{0}` is not smaller than the BN254 scalar field modulus")]
    NonCanonical(String),
}

/// Parse a non-negative integer written in decimal or as `0x`-prefixed hexadecimal.
///
/// No range check is made; see [`Bn254::from_canonical_biguint`].
pub fn parse_biguint(s: &str) -> Result<BigUint, ParseBn254Error> {
    let trimmed = s.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => BigUint::parse_bytes(hex.as_bytes(), 16),
        None => BigUint::parse_bytes(trimmed.as_bytes(), 10),
    };
    parsed.ok_or_else(|| ParseBn254Error::Malformed(s.to_string()))
}

impl Bn254 {
    pub const ZERO: Self = Self::new_monty([0, 0, 0, 0]);

    /// The Montgomery form of 1.
    ///
    /// Equal to `2^256 mod P = 6350874878119819312338956282401532410528162663560392320966563075034087161851`
    pub const ONE: Self = Self::new_monty([
        0xac96341c4ffffffb,
        0x36fc76959f60cd29,
        0x666ea36f7879462e,
        0x0e0a77c19a07df2f,
    ]);

    /// The Montgomery form of 2.
    ///
    /// Equal to `2^257 mod P = 12701749756239638624677912564803064821056325327120784641933126150068174323702`
    pub const TWO: Self = Self::new_monty([
        0x592c68389ffffff6,
        0x6df8ed2b3ec19a53,
        0xccdd46def0f28c5c,
        0x1c14ef83340fbe5e,
    ]);

    /// The Montgomery form of -1.
    ///
    /// Equal to `-2^256 mod P = 15537367993719455909907449462855742678020201736855642022731641111541721333766`
    pub const NEG_ONE: Self = Self::new_monty([
        0x974bc177a0000006,
        0xf13771b2da58a367,
        0x51e1a2470908122e,
        0x2259d6b14729c0fa,
    ]);

    /// The value is assumed to already be a Montgomery form less than `P`.
    #[inline]
    pub(crate) const fn new_monty(value: [u64; 4]) -> Self {
        Self { value }
    }

    /// Convert canonical limbs to Montgomery form. `limbs` must be less than `2^256`, which it
    /// trivially is, and the result is `< P` as the left operand `R^2` is.
    #[inline]
    fn from_limbs_unchecked(limbs: [u64; 4]) -> Self {
        Self::new_monty(monty_mul(BN254_MONTY_R_SQ, limbs))
    }

    /// The field modulus `P`.
    pub fn order() -> BigUint {
        to_biguint(BN254_PRIME)
    }

    #[inline]
    pub fn from_u64(n: u64) -> Self {
        Self::from_limbs_unchecked([n, 0, 0, 0])
    }

    /// Every `u128` is smaller than `P`, so this never reduces.
    #[inline]
    pub fn from_u128(n: u128) -> Self {
        Self::from_limbs_unchecked([n as u64, (n >> 64) as u64, 0, 0])
    }

    /// Build an element from little-endian limbs, returning `None` unless `limbs < P`.
    #[inline]
    pub fn from_canonical_limbs(limbs: [u64; 4]) -> Option<Self> {
        is_canonical(&limbs).then(|| Self::from_limbs_unchecked(limbs))
    }

    /// Build an element from a big integer, returning `None` unless `value < P`.
    pub fn from_canonical_biguint(value: &BigUint) -> Option<Self> {
        let digits = value.to_u64_digits();
        if digits.len() > 4 {
            return None;
        }
        let mut limbs = [0u64; 4];
        limbs[..digits.len()].copy_from_slice(&digits);
        Self::from_canonical_limbs(limbs)
    }

    /// Build an element from a big integer of any size, reducing it modulo `P`.
    pub fn from_biguint_reduced(value: &BigUint) -> Self {
        let reduced = value % Self::order();
        let digits = reduced.to_u64_digits();
        let mut limbs = [0u64; 4];
        limbs[..digits.len()].copy_from_slice(&digits);
        Self::from_limbs_unchecked(limbs)
    }

    /// Read a 32-byte big-endian word (the `uint256` layout), returning `None` unless it is `< P`.
    #[inline]
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        Self::from_canonical_limbs(limbs_from_be_bytes(bytes))
    }

    /// The canonical integer in `[0, P)` as little-endian limbs.
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        // Reducing once strips the factor of R.
        monty_mul(self.value, [1, 0, 0, 0])
    }

    #[inline]
    pub fn as_canonical_biguint(&self) -> BigUint {
        to_biguint(self.to_canonical_limbs())
    }

    /// The canonical integer as a 32-byte big-endian word.
    #[inline]
    pub fn to_be_bytes(&self) -> [u8; 32] {
        limbs_to_be_bytes(self.to_canonical_limbs())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.iter().all(|&x| x == 0)
    }

    #[inline]
    pub fn double(&self) -> Self {
        *self + *self
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Square and multiply, most significant bit first.
    pub fn exp_u64(&self, power: u64) -> Self {
        let mut acc = Self::ONE;
        for i in (0..u64::BITS - power.leading_zeros()).rev() {
            acc = acc.square();
            if (power >> i) & 1 == 1 {
                acc *= *self;
            }
        }
        acc
    }
}

/// As `P - 1 = 2^28 * 3^2 * 13 * 29 * ...`, five is the smallest valid degree.
impl InjectiveMonomial<5> for Bn254 {
    #[inline(always)]
    fn injective_exp_n(&self) -> Self {
        let x2 = self.square();
        let x4 = x2.square();
        x4 * *self
    }
}

/// Three multiplications along the chain `x^2, x^4, x^6, x^7`.
impl InjectiveMonomial<7> for Bn254 {
    #[inline(always)]
    fn injective_exp_n(&self) -> Self {
        let x2 = self.square();
        let x4 = x2.square();
        let x6 = x4 * x2;
        x6 * *self
    }
}

impl FromStr for Bn254 {
    type Err = ParseBn254Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_biguint(s)?;
        Self::from_canonical_biguint(&value)
            .ok_or_else(|| ParseBn254Error::NonCanonical(s.to_string()))
    }
}

impl Serialize for Bn254 {
    /// Serializes to the canonical 32-byte big-endian encoding.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_be_bytes())
    }
}

impl<'de> Deserialize<'de> for Bn254 {
    /// Deserializes from the canonical 32-byte big-endian encoding, rejecting anything `>= P`.
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let bytes: Vec<u8> = Deserialize::deserialize(d)?;
        let word: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| serde::de::Error::invalid_length(bytes.len(), &"32 bytes"))?;

        Self::from_be_bytes(&word).ok_or_else(|| serde::de::Error::custom("Invalid field element"))
    }
}

impl Hash for Bn254 {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        for limb in self.value {
            state.write_u64(limb);
        }
    }
}

impl Ord for Bn254 {
    /// Orders by canonical value, not by Montgomery form.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_limbs(&self.to_canonical_limbs(), &other.to_canonical_limbs())
    }
}

impl PartialOrd for Bn254 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Bn254 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_canonical_biguint(), f)
    }
}

impl Debug for Bn254 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.as_canonical_biguint(), f)
    }
}

impl LowerHex for Bn254 {
    /// Zero padded to 64 digits; `{:#x}` adds the `0x` prefix.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{:0>64}", self.as_canonical_biguint().to_str_radix(16))
    }
}

impl Add for Bn254 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        // Both inputs are < 2^254 so the sum cannot carry out of 256 bits.
        let (sum, _) = wrapping_add(self.value, rhs.value);

        let (sum_corr, underflow) = wrapping_sub(sum, BN254_PRIME);
        if underflow {
            Self::new_monty(sum)
        } else {
            Self::new_monty(sum_corr)
        }
    }
}

impl AddAssign for Bn254 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Bn254 {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Sub for Bn254 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (mut sub, underflow) = wrapping_sub(self.value, rhs.value);

        // if lhs < rhs, we need to add BN254_PRIME to the result.
        if underflow {
            (sub, _) = wrapping_add(sub, BN254_PRIME);
        }

        Self::new_monty(sub)
    }
}

impl SubAssign for Bn254 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Bn254 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::ZERO - self
    }
}

impl Mul for Bn254 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new_monty(monty_mul(self.value, rhs.value))
    }
}

impl MulAssign for Bn254 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Product for Bn254 {
    #[inline]
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl Distribution<Bn254> for StandardUniform {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Bn254 {
        // Rejection sampling over 254-bit words.
        loop {
            let mut trial_element: [u8; 32] = rng.random();

            // Big-endian, so the two unused top bits live in byte 0.
            trial_element[0] &= (1_u8 << 6) - 1;

            if let Some(val) = Bn254::from_be_bytes(&trial_element) {
                return val;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    type F = Bn254;

    const P_DECIMAL: &str =
        "21888242871839275222246405745257275088548364400416034343698204186575808495617";

    #[test]
    fn test_bn254_constants() {
        assert_eq!(F::order().to_str_radix(10), P_DECIMAL);
        assert_eq!(F::ZERO.as_canonical_biguint(), BigUint::from(0u32));
        assert_eq!(F::ONE.as_canonical_biguint(), BigUint::from(1u32));
        assert_eq!(F::TWO.as_canonical_biguint(), BigUint::from(2u32));
        assert_eq!(F::NEG_ONE.as_canonical_biguint(), F::order() - 1u32);
        assert_eq!(F::ONE + F::ONE, F::TWO);
        assert_eq!(F::NEG_ONE + F::ONE, F::ZERO);
    }

    #[test]
    fn test_canonical_constructors() {
        let p = F::order();
        let f_100 = F::from_canonical_biguint(&BigUint::from(100u32)).unwrap();
        assert_eq!(f_100, F::from_u64(100));
        assert_eq!(f_100.as_canonical_biguint(), BigUint::from(100u32));

        assert_eq!(F::from_canonical_biguint(&BigUint::from(0u32)), Some(F::ZERO));
        assert_eq!(F::from_canonical_biguint(&p), None);
        assert_eq!(F::from_canonical_biguint(&(p.clone() + 100u32)), None);
        assert_eq!(F::from_canonical_biguint(&(BigUint::from(1u32) << 300)), None);
        assert_eq!(
            F::from_canonical_biguint(&(p.clone() - 1u32)),
            Some(F::NEG_ONE)
        );

        // The reducing constructor wraps instead.
        assert_eq!(F::from_biguint_reduced(&(p.clone() + 100u32)), f_100);
        assert_eq!(F::from_biguint_reduced(&(p * 6u32)), F::ZERO);

        assert_eq!(F::from_u128(u128::MAX).as_canonical_biguint(), BigUint::from(u128::MAX));
    }

    #[test]
    fn test_be_bytes() {
        let x = F::from_u128(0x0102_0304_0506_0708_090a_0b0c_0d0e_0f10);
        let bytes = x.to_be_bytes();
        assert_eq!(&bytes[..16], &[0u8; 16]);
        assert_eq!(bytes[16], 0x01);
        assert_eq!(bytes[31], 0x10);
        assert_eq!(F::from_be_bytes(&bytes), Some(x));

        assert_eq!(F::from_be_bytes(&[0xff; 32]), None);
        assert_eq!(F::from_be_bytes(&F::NEG_ONE.to_be_bytes()), Some(F::NEG_ONE));

        let mut p_bytes = [0u8; 32];
        let p_be = F::order().to_bytes_be();
        p_bytes[32 - p_be.len()..].copy_from_slice(&p_be);
        assert_eq!(F::from_be_bytes(&p_bytes), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("7".parse::<F>(), Ok(F::from_u64(7)));
        assert_eq!("0x1f".parse::<F>(), Ok(F::from_u64(31)));
        assert_eq!(" 42 ".parse::<F>(), Ok(F::from_u64(42)));
        assert_eq!(
            P_DECIMAL.parse::<F>(),
            Err(ParseBn254Error::NonCanonical(P_DECIMAL.into()))
        );
        assert_eq!(
            "seven".parse::<F>(),
            Err(ParseBn254Error::Malformed("seven".into()))
        );
        assert!("".parse::<F>().is_err());
        assert!("0x".parse::<F>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let mut rng = SmallRng::seed_from_u64(1);
        let p = F::order();
        for _ in 0..100 {
            let a: F = rng.random();
            let b: F = rng.random();
            let (ab, bb) = (a.as_canonical_biguint(), b.as_canonical_biguint());

            assert_eq!((a + b).as_canonical_biguint(), (&ab + &bb) % &p);
            assert_eq!((a * b).as_canonical_biguint(), (&ab * &bb) % &p);
            assert_eq!((a - b).as_canonical_biguint(), (&ab + &p - &bb) % &p);
            assert_eq!((-a).as_canonical_biguint(), (&p - &ab) % &p);
            assert_eq!(a.double(), a + a);
            assert_eq!(a.square(), a * a);
            assert_eq!(a - a, F::ZERO);
        }
    }

    #[test]
    fn test_sum_and_product() {
        let xs: Vec<F> = (1..=5).map(F::from_u64).collect();
        assert_eq!(xs.iter().copied().sum::<F>(), F::from_u64(15));
        assert_eq!(xs.iter().copied().product::<F>(), F::from_u64(120));
        assert_eq!(core::iter::empty::<F>().sum::<F>(), F::ZERO);
        assert_eq!(core::iter::empty::<F>().product::<F>(), F::ONE);
    }

    #[test]
    fn test_exponentiation() {
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..20 {
            let x: F = rng.random();
            let x7 = <F as InjectiveMonomial<7>>::injective_exp_n(&x);
            let x5 = <F as InjectiveMonomial<5>>::injective_exp_n(&x);
            assert_eq!(x7, x.exp_u64(7));
            assert_eq!(x5, x.exp_u64(5));
            assert_eq!(x7, x * x * x * x * x * x * x);
            assert_eq!(x.exp_u64(0), F::ONE);
            assert_eq!(x.exp_u64(1), x);
        }
        assert_eq!(F::TWO.exp_u64(10), F::from_u64(1024));
        let x = F::from_u64(5);
        assert_eq!(
            x.exp_u64(7).as_canonical_biguint(),
            BigUint::from(5u32).modpow(&BigUint::from(7u32), &F::order())
        );
    }

    #[test]
    fn test_sampling_is_canonical() {
        let mut rng = SmallRng::seed_from_u64(3);
        let p = F::order();
        for _ in 0..1000 {
            let x: F = rng.random();
            assert!(x.as_canonical_biguint() < p);
        }
    }

    #[test]
    fn test_ordering_uses_canonical_value() {
        let mut values = [F::from_u64(3), F::NEG_ONE, F::ZERO, F::from_u64(1 << 40)];
        values.sort();
        assert_eq!(
            values,
            [F::ZERO, F::from_u64(3), F::from_u64(1 << 40), F::NEG_ONE]
        );
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format!("{}", F::from_u64(255)), "255");
        assert_eq!(format!("{:?}", F::from_u64(255)), "255");
        assert_eq!(
            format!("{:#x}", F::from_u64(255)),
            "0x00000000000000000000000000000000000000000000000000000000000000ff"
        );
        assert_eq!(format!("{}", F::NEG_ONE), "21888242871839275222246405745257275088548364400416034343698204186575808495616");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut rng = SmallRng::seed_from_u64(4);
        for f in [F::ZERO, F::ONE, F::TWO, F::NEG_ONE, F::NEG_ONE + F::NEG_ONE, rng.random()] {
            let serialized = serde_json::to_string(&f).unwrap();
            let deserialized: F = serde_json::from_str(&serialized).unwrap();
            assert_eq!(f, deserialized);
        }

        let too_big = serde_json::to_string(&[0xffu8; 32].to_vec()).unwrap();
        assert!(serde_json::from_str::<F>(&too_big).is_err());

        let too_short = serde_json::to_string(&[1u8; 31].to_vec()).unwrap();
        assert!(serde_json::from_str::<F>(&too_short).is_err());
    }
}
