//! Value enums for the command line.
//!
//! Each variant accepts its full name, any prefix of it which fully determines the choice, and a
//! few short aliases.

use clap::ValueEnum;
use clap::builder::PossibleValue;
use pt8_bn254::Bn254;

/// How field elements are written out.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Decimal,
    Hexadecimal,
}

impl OutputFormat {
    pub fn render(&self, value: &Bn254) -> String {
        match self {
            Self::Decimal => value.to_string(),
            Self::Hexadecimal => format!("{value:#x}"),
        }
    }
}

/// Produce a PossibleValue accepting every prefix of `base` from `min_unique_base_prefix`
/// characters on, plus each alias in full.
fn get_aliases(
    base: &'static str,
    min_unique_base_prefix: usize,
    aliases: &[&'static str],
) -> PossibleValue {
    PossibleValue::new(base).aliases(
        (min_unique_base_prefix..base.len())
            .map(|i| &base[..i])
            .chain(aliases.iter().copied()),
    )
}

impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Decimal, Self::Hexadecimal]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Decimal => get_aliases("decimal", 1, &["dec"]),
            Self::Hexadecimal => get_aliases("hexadecimal", 1, &["hex", "0x"]),
        })
    }
}
