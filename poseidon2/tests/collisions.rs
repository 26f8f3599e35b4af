use std::collections::HashSet;

use pt8_bn254::Bn254;
use pt8_poseidon2::{Permutation, default_poseidon2_bn254_t8};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 100_000;

#[test]
fn no_collisions_over_random_states() {
    let perm = default_poseidon2_bn254_t8().unwrap();
    let mut rng = SmallRng::seed_from_u64(0x5eed);

    let mut inputs = HashSet::with_capacity(SAMPLES);
    let mut outputs = HashSet::with_capacity(SAMPLES);
    while inputs.len() < SAMPLES {
        let state: [Bn254; 8] = rng.random();
        if !inputs.insert(state) {
            continue;
        }
        let image = perm.permute(state);
        assert!(outputs.insert(image), "collision on input {state:?}");
    }
    assert_eq!(outputs.len(), SAMPLES);
}

#[test]
fn no_collisions_between_neighbouring_states() {
    let perm = default_poseidon2_bn254_t8().unwrap();
    let mut outputs = HashSet::new();
    for lane in 0..8 {
        for value in 0..64u64 {
            let mut state = [Bn254::ZERO; 8];
            state[lane] = Bn254::from_u64(value);
            outputs.insert(perm.permute(state));
        }
    }
    // The all-zero state appears once per lane.
    assert_eq!(outputs.len(), 8 * 63 + 1);
}
