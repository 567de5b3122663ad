use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Move;

/// Supplies the house's moves to a [`GameSession`](crate::GameSession).
pub trait MoveSource {
    /// Returns the next opponent move.
    fn next_move(&mut self) -> Move;
}

/// Uniform random opponent.
///
/// Each call to [`generate_move`](Self::generate_move) returns Rock, Paper or
/// Scissors with probability 1/3. The generator is seeded, so the same
/// [`MoveSeed`] always reproduces the same sequence of moves.
///
/// # Example
///
/// ```
/// use rps_engine::{MoveGenerator, MoveSeed};
/// use rand::Rng as _;
///
/// let seed: MoveSeed = rand::rng().random();
/// let mut a = MoveGenerator::with_seed(seed);
/// let mut b = MoveGenerator::with_seed(seed);
///
/// assert_eq!(a.generate_move(), b.generate_move());
/// ```
#[derive(Debug, Clone)]
pub struct MoveGenerator {
    rng: Pcg32,
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGenerator {
    /// Creates a generator with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for a deterministic house.
    #[must_use]
    pub fn with_seed(seed: MoveSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Draws the next opponent move.
    pub fn generate_move(&mut self) -> Move {
        self.rng.random()
    }
}

impl MoveSource for MoveGenerator {
    fn next_move(&mut self) -> Move {
        self.generate_move()
    }
}

/// 128-bit seed for [`MoveGenerator`].
///
/// Written as a 32-character hex string, both in serialized form and on the
/// command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSeed([u8; 16]);

impl MoveSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseMoveSeedError {
    #[display("invalid hex: expected 32 characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("invalid hex: {_0}")]
    InvalidDigit(#[error(not(source))] String),
}

impl fmt::Display for MoveSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for MoveSeed {
    type Err = ParseMoveSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseMoveSeedError::InvalidLength(s.len()));
        }
        // `from_str_radix` tolerates a leading sign, which is not a hex digit.
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseMoveSeedError::InvalidDigit(s.to_owned()));
        }
        let num = u128::from_str_radix(s, 16)
            .map_err(|_| ParseMoveSeedError::InvalidDigit(s.to_owned()))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for MoveSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MoveSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<MoveSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MoveSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        MoveSeed(seed)
    }
}
