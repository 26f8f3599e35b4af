//! The external linear layer, used by every full round and once before the first round.

use pt8_bn254::{Bn254, InjectiveMonomial};

use crate::{Permutation, add_rc_and_sbox};

/// Multiply a 4-element vector x by
/// [ 5 7 1 3 ]
/// [ 4 6 1 1 ]
/// [ 1 3 5 7 ]
/// [ 1 1 4 6 ].
/// This uses the formula from the start of Appendix B in the Poseidon2 paper, with multiplications unrolled into additions.
/// It is also the matrix used by the Horizon Labs implementation.
#[inline(always)]
pub fn apply_hl_mat4(x: &mut [Bn254; 4]) {
    let t0 = x[0] + x[1];
    let t1 = x[2] + x[3];
    let t2 = x[1].double() + t1;
    let t3 = x[3].double() + t0;
    let t4 = t1.double().double() + t3;
    let t5 = t0.double().double() + t2;
    x[0] = t3 + t5;
    x[1] = t5;
    x[2] = t2 + t4;
    x[3] = t4;
}

/// The 4x4 MDS matrix used by the Horizon Labs implementation of Poseidon2.
///
/// This requires 10 additions and 4 doubles to compute.
#[derive(Clone, Copy, Debug, Default)]
pub struct HLMDSMat4;

impl Permutation<[Bn254; 4]> for HLMDSMat4 {
    #[inline(always)]
    fn permute_mut(&self, input: &mut [Bn254; 4]) {
        apply_hl_mat4(input)
    }
}

/// Implement the matrix multiplication used by the external layer.
///
/// Given a 4x4 MDS matrix M, we multiply by the `4N x 4N` matrix
/// `[[2M M  ... M], [M  2M ... M], ..., [M  M ... 2M]]`.
#[inline(always)]
pub fn mds_light_permutation<MdsPerm4: Permutation<[Bn254; 4]>, const WIDTH: usize>(
    state: &mut [Bn254; WIDTH],
    mdsmat: &MdsPerm4,
) {
    const { assert!(WIDTH > 0 && WIDTH % 4 == 0) };

    // First, we apply M_4 to each consecutive four elements of the state.
    // In Appendix B's terminology, this replaces each x_i with x_i'.
    for start in (0..WIDTH).step_by(4) {
        let mut block = [
            state[start],
            state[start + 1],
            state[start + 2],
            state[start + 3],
        ];
        mdsmat.permute_mut(&mut block);
        state[start..start + 4].copy_from_slice(&block);
    }

    // Now, we apply the outer circulant matrix (to compute the y_i values).
    // The four column sums are taken over the x_i' before any lane is updated.
    let sums: [Bn254; 4] =
        core::array::from_fn(|k| (0..WIDTH).step_by(4).map(|j| state[j + k]).sum());

    // The formula for each y_i involves 2x_i' term and x_j' terms for each j that equals i mod 4.
    // In other words, we can add a single copy of x_i' to the appropriate one of our precomputed sums
    state
        .iter_mut()
        .enumerate()
        .for_each(|(i, elem)| *elem += sums[i % 4]);
}

/// One full round: round constants and the S-box on every lane, then the external layer.
#[inline]
pub fn full_round<const WIDTH: usize, const D: u64>(
    state: &mut [Bn254; WIDTH],
    round_constants: &[Bn254; WIDTH],
) where
    Bn254: InjectiveMonomial<D>,
{
    state
        .iter_mut()
        .zip(round_constants)
        .for_each(|(s, &rc)| add_rc_and_sbox::<D>(s, rc));
    mds_light_permutation(state, &HLMDSMat4);
}
