use serde::{Deserialize, Serialize};

use super::hand::{Move, Outcome};

/// One played round: both hands and the resulting outcome.
///
/// The outcome is computed on construction, so a `Round` can never disagree
/// with the move pair it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RoundMoves", from = "RoundMoves")]
pub struct Round {
    player: Move,
    opponent: Move,
    outcome: Outcome,
}

/// Serialized form of [`Round`]; the outcome is recomputed on load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RoundMoves {
    player: Move,
    opponent: Move,
}

impl From<Round> for RoundMoves {
    fn from(round: Round) -> Self {
        Self {
            player: round.player,
            opponent: round.opponent,
        }
    }
}

impl From<RoundMoves> for Round {
    fn from(moves: RoundMoves) -> Self {
        Round::new(moves.player, moves.opponent)
    }
}

impl Round {
    #[must_use]
    pub const fn new(player: Move, opponent: Move) -> Self {
        Self {
            player,
            opponent,
            outcome: player.evaluate(opponent),
        }
    }

    #[must_use]
    pub const fn player(&self) -> Move {
        self.player
    }

    #[must_use]
    pub const fn opponent(&self) -> Move {
        self.opponent
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_follows_moves() {
        let round = Round::new(Move::Scissors, Move::Paper);
        assert_eq!(round.player(), Move::Scissors);
        assert_eq!(round.opponent(), Move::Paper);
        assert_eq!(round.outcome(), Outcome::Win);
    }

    #[test]
    fn test_deserialize_recomputes_outcome() {
        let round: Round =
            serde_json::from_str(r#"{"player":"Rock","opponent":"Paper","outcome":"Win"}"#)
                .unwrap();
        assert_eq!(round.outcome(), Outcome::Lose);

        let json = serde_json::to_string(&Round::new(Move::Paper, Move::Paper)).unwrap();
        assert_eq!(json, r#"{"player":"Paper","opponent":"Paper"}"#);
    }
}
