//! Round schedules and the constants attached to each round.
//!
//! Published parameter sets store round constants as a flat `rounds x WIDTH` table where partial
//! rows carry a single meaningful entry followed by padding. Here each round is instead tagged by
//! kind, so a partial round can only ever touch lane 0.

use alloc::vec::Vec;

use pt8_bn254::Bn254;
use rand::Rng;
use rand::distr::StandardUniform;

use crate::ConfigurationError;

/// Number of full and partial rounds. Half of the full rounds run before the partial rounds and
/// half after.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoundSchedule {
    pub full_rounds: usize,
    pub partial_rounds: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundKind {
    Full,
    Partial,
}

impl RoundSchedule {
    pub const fn new(full_rounds: usize, partial_rounds: usize) -> Self {
        Self {
            full_rounds,
            partial_rounds,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.full_rounds % 2 != 0 {
            return Err(ConfigurationError::OddFullRounds(self.full_rounds));
        }
        Ok(())
    }

    #[inline]
    pub const fn half_full_rounds(&self) -> usize {
        self.full_rounds / 2
    }

    #[inline]
    pub const fn total_rounds(&self) -> usize {
        self.full_rounds + self.partial_rounds
    }

    /// The kind of the round at position `round`, or `None` past the end of the schedule.
    pub const fn kind_of(&self, round: usize) -> Option<RoundKind> {
        let half = self.half_full_rounds();
        if round >= self.total_rounds() {
            None
        } else if round < half || round >= half + self.partial_rounds {
            Some(RoundKind::Full)
        } else {
            Some(RoundKind::Partial)
        }
    }

    /// The kind of every round, in execution order.
    pub fn kinds(&self) -> impl Iterator<Item = RoundKind> + '_ {
        (0..self.total_rounds()).filter_map(|round| self.kind_of(round))
    }
}

/// The constants of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundSpec<const WIDTH: usize> {
    /// One constant per lane.
    Full([Bn254; WIDTH]),
    /// The constant added to lane 0.
    Partial(Bn254),
}

impl<const WIDTH: usize> RoundSpec<WIDTH> {
    #[inline]
    pub const fn kind(&self) -> RoundKind {
        match self {
            Self::Full(_) => RoundKind::Full,
            Self::Partial(_) => RoundKind::Partial,
        }
    }
}

/// The ordered round constants of a permutation, checked against its schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundConstants<const WIDTH: usize> {
    // Once initialised, these constants should be immutable.
    schedule: RoundSchedule,
    rounds: Vec<RoundSpec<WIDTH>>,
}

impl<const WIDTH: usize> RoundConstants<WIDTH> {
    pub fn new(
        schedule: RoundSchedule,
        rounds: Vec<RoundSpec<WIDTH>>,
    ) -> Result<Self, ConfigurationError> {
        schedule.validate()?;
        if rounds.len() != schedule.total_rounds() {
            return Err(ConfigurationError::RoundCount {
                expected: schedule.total_rounds(),
                found: rounds.len(),
            });
        }
        for (round, (spec, expected)) in rounds.iter().zip(schedule.kinds()).enumerate() {
            if spec.kind() != expected {
                return Err(ConfigurationError::RoundKind {
                    round,
                    expected,
                    found: spec.kind(),
                });
            }
        }
        Ok(Self { schedule, rounds })
    }

    /// Load a flat, padded table of decimal or `0x` hexadecimal strings.
    ///
    /// Full rows use every lane. Partial rows use lane 0 and the other lanes are not read.
    pub fn from_published_table<S: AsRef<str>>(
        schedule: RoundSchedule,
        table: &[[S; WIDTH]],
    ) -> Result<Self, ConfigurationError> {
        schedule.validate()?;
        if table.len() != schedule.total_rounds() {
            return Err(ConfigurationError::RoundCount {
                expected: schedule.total_rounds(),
                found: table.len(),
            });
        }

        let mut rounds = Vec::with_capacity(table.len());
        for (round, (row, kind)) in table.iter().zip(schedule.kinds()).enumerate() {
            let spec = match kind {
                RoundKind::Full => {
                    let mut lanes = [Bn254::ZERO; WIDTH];
                    for (lane, (dst, src)) in lanes.iter_mut().zip(row).enumerate() {
                        *dst = parse_constant(round, lane, src.as_ref())?;
                    }
                    RoundSpec::Full(lanes)
                }
                RoundKind::Partial => {
                    const { assert!(WIDTH > 0) };
                    RoundSpec::Partial(parse_constant(round, 0, row[0].as_ref())?)
                }
            };
            rounds.push(spec);
        }
        Self::new(schedule, rounds)
    }

    /// Random constants for the given schedule.
    pub fn new_from_rng<R: Rng + ?Sized>(
        schedule: RoundSchedule,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        schedule.validate()?;
        let rounds = schedule
            .kinds()
            .map(|kind| match kind {
                RoundKind::Full => RoundSpec::Full(rng.sample(StandardUniform)),
                RoundKind::Partial => RoundSpec::Partial(rng.sample(StandardUniform)),
            })
            .collect();
        Self::new(schedule, rounds)
    }

    #[inline]
    pub const fn schedule(&self) -> RoundSchedule {
        self.schedule
    }

    #[inline]
    pub fn rounds(&self) -> &[RoundSpec<WIDTH>] {
        &self.rounds
    }
}

fn parse_constant(round: usize, lane: usize, src: &str) -> Result<Bn254, ConfigurationError> {
    src.parse()
        .map_err(|source| ConfigurationError::MalformedConstant {
            round,
            lane,
            source,
        })
}

/// Parse the diagonal `D` of the internal matrix `1 + diag(D)`.
pub fn parse_diffusion_vector<S: AsRef<str>, const WIDTH: usize>(
    entries: &[S; WIDTH],
) -> Result<[Bn254; WIDTH], ConfigurationError> {
    let mut diag = [Bn254::ZERO; WIDTH];
    for (lane, (dst, src)) in diag.iter_mut().zip(entries).enumerate() {
        *dst = src
            .as_ref()
            .parse()
            .map_err(|source| ConfigurationError::MalformedDiffusion { lane, source })?;
    }
    Ok(diag)
}
