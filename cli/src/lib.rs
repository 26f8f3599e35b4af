//! Command line front end for the BN254 width-8 Poseidon2 hash.

pub mod parsers;

use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use pt8_bn254::{Bn254, parse_biguint};
use pt8_poseidon2::{
    BN254_T8_DOMAIN_TAG, BN254_T8_RATE, BN254_T8_SBOX_DEGREE, BN254_T8_SCHEDULE, BN254_T8_WIDTH,
    Poseidon2Error, default_poseidon2_bn254_t8,
};
use thiserror::Error;
use tracing::debug;

use crate::parsers::OutputFormat;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// How to print field elements.
    #[arg(short, long, ignore_case = true, value_enum, default_value_t = OutputFormat::Decimal)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Hash exactly seven integers, each decimal or 0x-prefixed hexadecimal.
    Hash {
        #[arg(num_args = BN254_T8_RATE, required = true, value_parser = parse_biguint)]
        inputs: Vec<BigUint>,
    },
    /// Apply the permutation to a full state of eight field elements.
    Permute {
        #[arg(num_args = BN254_T8_WIDTH, required = true)]
        state: Vec<Bn254>,
    },
    /// Print the parameter set.
    Params,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("expected {expected} values, got {found}")]
    Arity { expected: usize, found: usize },

    #[error(transparent)]
    Poseidon2(#[from] Poseidon2Error),
}

fn exact<T, const N: usize>(values: Vec<T>) -> Result<[T; N], CliError> {
    let found = values.len();
    values
        .try_into()
        .map_err(|_| CliError::Arity { expected: N, found })
}

/// Execute a parsed command, returning the lines to print.
pub fn run(args: &Args) -> Result<Vec<String>, CliError> {
    debug!(?args.command, "running");
    let output = args.output;
    match &args.command {
        Command::Hash { inputs } => {
            let inputs: [BigUint; BN254_T8_RATE] = exact(inputs.clone())?;
            let digest = pt8_poseidon2::hash(&inputs)?;
            Ok(vec![output.render(&digest)])
        }
        Command::Permute { state } => {
            let state: [Bn254; BN254_T8_WIDTH] = exact(state.clone())?;
            let permuted = pt8_poseidon2::permute(state)?;
            Ok(permuted.iter().map(|x| output.render(x)).collect())
        }
        Command::Params => {
            let perm = default_poseidon2_bn254_t8()?;
            Ok(vec![
                format!("modulus: {}", Bn254::order()),
                format!("width: {BN254_T8_WIDTH}"),
                format!("rate: {BN254_T8_RATE}"),
                format!("sbox degree: {BN254_T8_SBOX_DEGREE}"),
                format!("full rounds: {}", BN254_T8_SCHEDULE.full_rounds),
                format!("partial rounds: {}", BN254_T8_SCHEDULE.partial_rounds),
                format!(
                    "domain tag: {}",
                    output.render(&Bn254::from_u128(BN254_T8_DOMAIN_TAG))
                ),
                format!(
                    "internal diagonal: [{}]",
                    perm.internal_diag()
                        .iter()
                        .map(|d| output.render(d))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ])
        }
    }
}
