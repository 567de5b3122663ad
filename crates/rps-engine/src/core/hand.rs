use std::str::FromStr;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// A hand the player or the house can throw.
///
/// The set is closed: every value is one of the three hands, so evaluating
/// a pair of moves never falls through to an undefined case.
///
/// # Example
///
/// ```
/// use rps_engine::{Move, Outcome};
///
/// assert!(Move::Rock.beats(Move::Scissors));
/// assert_eq!(Move::Rock.evaluate(Move::Paper), Outcome::Lose);
/// assert_eq!("paper".parse::<Move>(), Ok(Move::Paper));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, derive_more::Display)]
#[repr(u8)]
pub enum Move {
    /// Beats scissors.
    Rock = 0,
    /// Beats rock.
    Paper = 1,
    /// Beats paper.
    Scissors = 2,
}

impl Distribution<Move> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        match rng.random_range(0..3) {
            0 => Move::Rock,
            1 => Move::Paper,
            _ => Move::Scissors,
        }
    }
}

impl Move {
    /// Number of moves (3).
    pub const LEN: usize = 3;

    /// All moves, in selection order.
    pub const ALL: [Move; Self::LEN] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Returns the display name of this move.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// Returns the move this one defeats.
    #[must_use]
    pub const fn victim(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Returns the move that defeats this one.
    #[must_use]
    pub const fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Returns `true` if `self` defeats `other`.
    #[must_use]
    pub const fn beats(self, other: Move) -> bool {
        self.victim() as u8 == other as u8
    }

    /// Evaluates this move against the opponent's, from this move's side.
    #[must_use]
    pub const fn evaluate(self, opponent: Move) -> Outcome {
        if self as u8 == opponent as u8 {
            Outcome::Draw
        } else if self.beats(opponent) {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    /// Maps a single keypress to a move.
    ///
    /// Accepts the initials (`r`, `p`, `s`) and the selection order digits
    /// (`1`, `2`, `3`), case-insensitively.
    ///
    /// ```
    /// use rps_engine::Move;
    ///
    /// assert_eq!(Move::from_key('S'), Some(Move::Scissors));
    /// assert_eq!(Move::from_key('2'), Some(Move::Paper));
    /// assert_eq!(Move::from_key('x'), None);
    /// ```
    #[must_use]
    pub const fn from_key(key: char) -> Option<Move> {
        match key.to_ascii_lowercase() {
            'r' | '1' => Some(Move::Rock),
            'p' | '2' => Some(Move::Paper),
            's' | '3' => Some(Move::Scissors),
            _ => None,
        }
    }
}

/// Evaluates `player` against `opponent`, from the player's side.
///
/// Free-function form of [`Move::evaluate`].
#[must_use]
pub const fn evaluate(player: Move, opponent: Move) -> Outcome {
    player.evaluate(opponent)
}

/// Result of a round from the player's perspective.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, derive_more::IsVariant,
)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Returns the same round seen from the other side.
    #[must_use]
    pub const fn inverse(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unrecognized move: {input:?}")]
pub struct ParseMoveError {
    input: String,
}

impl ParseMoveError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mv = match trimmed.to_ascii_lowercase().as_str() {
            "rock" | "r" => Move::Rock,
            "paper" | "p" => Move::Paper,
            "scissors" | "s" => Move::Scissors,
            _ => {
                return Err(ParseMoveError {
                    input: s.to_owned(),
                });
            }
        };
        Ok(mv)
    }
}
