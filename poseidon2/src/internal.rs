//! The internal linear layer, used by the partial rounds.
//!
//! The Poseidon2 paper drops the MDS requirement here:
//!
//! > For the partial rounds, the MDS property is not required anymore, and
//! > we can set up the matrix MI focusing only on providing full diffusion, breaking
//! > arbitrarily long subspace trails, and ensuring that the polynomial representation
//! > of the scheme is dense. (Section 5.2)
//!
//! The matrix is `1 + diag(D)` with `1` the all-ones matrix, so a multiplication costs one sum
//! of the state plus one product per lane.

use pt8_bn254::{Bn254, InjectiveMonomial};

use crate::add_rc_and_sbox;

/// Given a vector v compute the matrix vector product (1 + diag(v))state with 1 denoting the constant matrix of ones.
#[inline]
pub fn matmul_internal<const WIDTH: usize>(
    state: &mut [Bn254; WIDTH],
    mat_internal_diag_m_1: &[Bn254; WIDTH],
) {
    // The sum is taken before any lane changes.
    let sum: Bn254 = state.iter().copied().sum();
    for (s, &d) in state.iter_mut().zip(mat_internal_diag_m_1) {
        *s = *s * d + sum;
    }
}

/// One partial round: round constant and S-box on lane 0 only, then the internal layer.
#[inline]
pub fn partial_round<const WIDTH: usize, const D: u64>(
    state: &mut [Bn254; WIDTH],
    round_constant: Bn254,
    mat_internal_diag_m_1: &[Bn254; WIDTH],
) where
    Bn254: InjectiveMonomial<D>,
{
    const { assert!(WIDTH > 0) };
    add_rc_and_sbox::<D>(&mut state[0], round_constant);
    matmul_internal(state, mat_internal_diag_m_1);
}
