use alloc::vec::Vec;

use pt8_bn254::{Bn254, InjectiveMonomial};
use rand::Rng;
use rand::distr::StandardUniform;

use crate::{
    ConfigurationError, CryptographicPermutation, HLMDSMat4, Permutation, RoundConstants,
    RoundSchedule, RoundSpec, full_round, mds_light_permutation, partial_round,
};

/// The Poseidon2 permutation over BN254 with state width `WIDTH` and S-box `x -> x^D`.
///
/// Rounds run in the order given by the schedule: half of the full rounds, every partial round,
/// then the other half of the full rounds. The external layer is also applied once before the
/// first round.
#[derive(Clone, Debug)]
pub struct Poseidon2<const WIDTH: usize, const D: u64> {
    round_constants: RoundConstants<WIDTH>,

    /// The diagonal `D` of the internal matrix `1 + diag(D)`.
    internal_diag: [Bn254; WIDTH],
}

impl<const WIDTH: usize, const D: u64> Poseidon2<WIDTH, D>
where
    Bn254: InjectiveMonomial<D>,
{
    pub const fn new(round_constants: RoundConstants<WIDTH>, internal_diag: [Bn254; WIDTH]) -> Self {
        const { assert!(WIDTH > 0 && WIDTH % 4 == 0) };
        Self {
            round_constants,
            internal_diag,
        }
    }

    /// Create a new Poseidon2 configuration with random parameters.
    pub fn new_from_rng<R: Rng + ?Sized>(
        schedule: RoundSchedule,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        let round_constants = RoundConstants::new_from_rng(schedule, rng)?;
        let internal_diag = rng.sample(StandardUniform);
        Ok(Self::new(round_constants, internal_diag))
    }

    #[inline]
    pub const fn schedule(&self) -> RoundSchedule {
        self.round_constants.schedule()
    }

    #[inline]
    pub const fn round_constants(&self) -> &RoundConstants<WIDTH> {
        &self.round_constants
    }

    #[inline]
    pub const fn internal_diag(&self) -> &[Bn254; WIDTH] {
        &self.internal_diag
    }

    #[inline]
    fn apply_round(&self, state: &mut [Bn254; WIDTH], round: &RoundSpec<WIDTH>) {
        match round {
            RoundSpec::Full(rc) => full_round::<WIDTH, D>(state, rc),
            RoundSpec::Partial(rc) => partial_round::<WIDTH, D>(state, *rc, &self.internal_diag),
        }
    }

    /// Run the permutation and keep every intermediate state.
    ///
    /// Entry 0 is the state after the initial external layer and entry `r + 1` the state after
    /// round `r`, so the last entry equals [`Permutation::permute`] of the input.
    pub fn permute_with_trace(&self, mut state: [Bn254; WIDTH]) -> Vec<[Bn254; WIDTH]> {
        let rounds = self.round_constants.rounds();
        let mut trace = Vec::with_capacity(rounds.len() + 1);

        mds_light_permutation(&mut state, &HLMDSMat4);
        trace.push(state);
        for round in rounds {
            self.apply_round(&mut state, round);
            trace.push(state);
        }
        trace
    }
}

impl<const WIDTH: usize, const D: u64> Permutation<[Bn254; WIDTH]> for Poseidon2<WIDTH, D>
where
    Bn254: InjectiveMonomial<D>,
{
    fn permute_mut(&self, state: &mut [Bn254; WIDTH]) {
        mds_light_permutation(state, &HLMDSMat4);
        for round in self.round_constants.rounds() {
            self.apply_round(state, round);
        }
    }
}

impl<const WIDTH: usize, const D: u64> CryptographicPermutation<[Bn254; WIDTH]>
    for Poseidon2<WIDTH, D>
where
    Bn254: InjectiveMonomial<D>,
{
}
