use alloc::vec::Vec;

use num_bigint::BigUint;
use pt8_bn254::Bn254;
use tracing::instrument;

use crate::{
    BN254_T8_RATE, BN254_T8_WIDTH, Permutation, Poseidon2Bn254T8, Poseidon2Error,
    Poseidon2Result, bn254_t8_domain_tag, default_poseidon2_bn254_t8,
};

/// The fixed-arity hash: seven field elements in, one field element out.
///
/// The inputs fill lanes `0..7`, lane 7 holds the domain tag, and the digest is lane 0 of the
/// permuted state.
#[derive(Clone, Copy, Debug)]
pub struct Poseidon2HashT8<'a> {
    permutation: &'a Poseidon2Bn254T8,
}

impl<'a> Poseidon2HashT8<'a> {
    pub const fn new(permutation: &'a Poseidon2Bn254T8) -> Self {
        Self { permutation }
    }

    /// A hasher over the process-wide parameter set.
    pub fn from_default() -> Poseidon2Result<Poseidon2HashT8<'static>> {
        default_poseidon2_bn254_t8().map(Poseidon2HashT8::new)
    }

    pub fn hash_elements(&self, inputs: [Bn254; BN254_T8_RATE]) -> Bn254 {
        let mut state = [Bn254::ZERO; BN254_T8_WIDTH];
        state[..BN254_T8_RATE].copy_from_slice(&inputs);
        state[BN254_T8_RATE] = bn254_t8_domain_tag();
        self.permutation.permute_mut(&mut state);
        state[0]
    }

    /// Hash raw integers. Fails on the first input that is not below the field modulus.
    pub fn hash_biguints(&self, inputs: &[BigUint; BN254_T8_RATE]) -> Poseidon2Result<Bn254> {
        let mut elements = [Bn254::ZERO; BN254_T8_RATE];
        for (index, (dst, value)) in elements.iter_mut().zip(inputs).enumerate() {
            *dst = Bn254::from_canonical_biguint(value).ok_or_else(|| {
                Poseidon2Error::InvalidInput {
                    index,
                    value: value.clone(),
                }
            })?;
        }
        Ok(self.hash_elements(elements))
    }

    /// Hash 32-byte big-endian words, the `uint256[7]` calling convention.
    pub fn hash_words(&self, inputs: &[[u8; 32]; BN254_T8_RATE]) -> Poseidon2Result<Bn254> {
        let mut elements = [Bn254::ZERO; BN254_T8_RATE];
        for (index, (dst, word)) in elements.iter_mut().zip(inputs).enumerate() {
            *dst = Bn254::from_be_bytes(word).ok_or_else(|| Poseidon2Error::InvalidInput {
                index,
                value: BigUint::from_bytes_be(word),
            })?;
        }
        Ok(self.hash_elements(elements))
    }

    /// Hash many independent inputs. Results are in input order.
    #[instrument(name = "hash many", level = "debug", skip_all, fields(count = inputs.len()))]
    pub fn hash_many(&self, inputs: &[[Bn254; BN254_T8_RATE]]) -> Vec<Bn254> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            inputs
                .par_iter()
                .map(|&input| self.hash_elements(input))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            inputs
                .iter()
                .map(|&input| self.hash_elements(input))
                .collect()
        }
    }
}

/// Hash seven integers with the default parameter set, rejecting any input `>= P`.
pub fn hash(inputs: &[BigUint; BN254_T8_RATE]) -> Poseidon2Result<Bn254> {
    Poseidon2HashT8::from_default()?.hash_biguints(inputs)
}

/// Hash seven 32-byte big-endian words with the default parameter set, rejecting any input `>= P`.
pub fn hash_words(inputs: &[[u8; 32]; BN254_T8_RATE]) -> Poseidon2Result<Bn254> {
    Poseidon2HashT8::from_default()?.hash_words(inputs)
}

pub fn hash_elements(inputs: [Bn254; BN254_T8_RATE]) -> Poseidon2Result<Bn254> {
    Ok(Poseidon2HashT8::from_default()?.hash_elements(inputs))
}

/// Run the default permutation on a full state, without the domain tag.
pub fn permute(state: [Bn254; BN254_T8_WIDTH]) -> Poseidon2Result<[Bn254; BN254_T8_WIDTH]> {
    Ok(default_poseidon2_bn254_t8()?.permute(state))
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::RoundConstants;

    type F = Bn254;

    fn biguints(values: [u64; 7]) -> [BigUint; 7] {
        values.map(BigUint::from)
    }

    fn modulus() -> BigUint {
        F::order()
    }

    #[test]
    fn hash_one_to_seven() {
        let expected: F =
            "2342626640711004800072464283087584226468921574389341022781098297014107368267"
                .parse()
                .unwrap();
        assert_eq!(hash(&biguints([1, 2, 3, 4, 5, 6, 7])), Ok(expected));
        assert_eq!(
            hash_elements([1, 2, 3, 4, 5, 6, 7].map(F::from_u64)),
            Ok(expected)
        );
    }

    #[test]
    fn hash_zeros_and_max() {
        let zeros: F =
            "19788999157282688869084215974717184723876675274097522046679889145247396111922"
                .parse()
                .unwrap();
        assert_eq!(hash_elements([F::ZERO; 7]), Ok(zeros));

        let max: F =
            "7080137942415522151203728649297620591327508013427548098307365553137907891573"
                .parse()
                .unwrap();
        let p_minus_one: [BigUint; 7] = core::array::from_fn(|_| modulus() - 1u32);
        assert_eq!(hash(&p_minus_one), Ok(max));
    }

    #[test]
    fn digest_is_lane_zero_of_tagged_state() {
        let inputs = [9, 8, 7, 6, 5, 4, 3].map(F::from_u64);
        let mut state = [F::ZERO; 8];
        state[..7].copy_from_slice(&inputs);
        state[7] = bn254_t8_domain_tag();
        assert_eq!(hash_elements(inputs), Ok(permute(state).unwrap()[0]));
    }

    #[test]
    fn rejects_non_canonical_inputs() {
        let mut inputs = biguints([1, 2, 3, 4, 5, 6, 7]);
        inputs[3] = modulus();
        assert_eq!(
            hash(&inputs),
            Err(Poseidon2Error::InvalidInput {
                index: 3,
                value: modulus()
            })
        );

        // The first offending index is reported.
        inputs[1] = modulus() + 5u32;
        assert_eq!(
            hash(&inputs),
            Err(Poseidon2Error::InvalidInput {
                index: 1,
                value: modulus() + 5u32
            })
        );

        let mut words = [[0u8; 32]; 7];
        words[6] = [0xff; 32];
        assert!(matches!(
            hash_words(&words),
            Err(Poseidon2Error::InvalidInput { index: 6, .. })
        ));
    }

    #[test]
    fn words_agree_with_elements() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..10 {
            let inputs: [F; 7] = rng.random();
            let words = inputs.map(|x| x.to_be_bytes());
            let ints = inputs.map(|x| x.as_canonical_biguint());
            let digest = hash_elements(inputs).unwrap();
            assert_eq!(hash_words(&words), Ok(digest));
            assert_eq!(hash(&ints), Ok(digest));
        }
    }

    #[test]
    fn deterministic_and_sensitive_to_every_lane() {
        let mut rng = SmallRng::seed_from_u64(2);
        let inputs: [F; 7] = rng.random();
        let digest = hash_elements(inputs).unwrap();
        assert_eq!(hash_elements(inputs).unwrap(), digest);
        assert!(digest.as_canonical_biguint() < modulus());

        for lane in 0..7 {
            let mut tweaked = inputs;
            tweaked[lane] += F::ONE;
            assert_ne!(hash_elements(tweaked).unwrap(), digest);
        }
    }

    #[test]
    fn hash_many_matches_single_calls() {
        let mut rng = SmallRng::seed_from_u64(3);
        let hasher = Poseidon2HashT8::from_default().unwrap();
        let inputs: Vec<[F; 7]> = (0..33).map(|_| rng.random()).collect();
        let expected: Vec<F> = inputs.iter().map(|&x| hasher.hash_elements(x)).collect();
        assert_eq!(hasher.hash_many(&inputs), expected);
        assert_eq!(hasher.hash_many(&[]), vec![]);
    }

    #[test]
    fn padding_values_do_not_matter() {
        // Filling the padding lanes of every partial row with junk leaves the permutation unchanged.
        let mut table = crate::BN254_T8_ROUND_CONSTANTS;
        for row in &mut table[4..52] {
            for entry in &mut row[1..] {
                *entry = "0x1234";
            }
        }
        let constants = RoundConstants::from_published_table(crate::BN254_T8_SCHEDULE, &table).unwrap();
        let default = default_poseidon2_bn254_t8().unwrap();
        let perm = Poseidon2Bn254T8::new(constants, *default.internal_diag());
        let hasher = Poseidon2HashT8::new(&perm);

        let inputs = [1, 2, 3, 4, 5, 6, 7].map(F::from_u64);
        assert_eq!(Ok(hasher.hash_elements(inputs)), hash_elements(inputs));
    }
}
