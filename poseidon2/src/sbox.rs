use pt8_bn254::{Bn254, InjectiveMonomial};

/// The Poseidon2 S-box `x -> x^D`.
#[inline(always)]
pub fn sbox<const D: u64>(x: Bn254) -> Bn254
where
    Bn254: InjectiveMonomial<D>,
{
    x.injective_exp_n()
}

/// Add a round constant to a single lane and apply the S-box to the result.
#[inline(always)]
pub fn add_rc_and_sbox<const D: u64>(val: &mut Bn254, rc: Bn254)
where
    Bn254: InjectiveMonomial<D>,
{
    *val = sbox::<D>(*val + rc);
}
