//! Game flow on top of the core hand rules.
//!
//! - [`MoveGenerator`] - Seeded uniform opponent ([`MoveSource`] implementation)
//! - [`MoveSeed`] - Seed for a reproducible opponent
//! - [`GameSession`] - Two-state session holding the current round and the score
//! - [`ScoreStore`] - Persistence seam for the score, with [`MemoryScoreStore`]
//!
//! # Game Flow
//!
//! 1. Build a [`GameSession`] over a [`ScoreStore`]; the score is loaded once
//! 2. The player selects a move; the house answers and the round is evaluated
//! 3. A win increments the score and saves it
//! 4. "Play again" clears the round; the score stays
//!
//! # Example
//!
//! ```
//! use rps_engine::{GameSession, MemoryScoreStore, Move, MoveGenerator, MoveSeed};
//!
//! let seed = "000102030405060708090a0b0c0d0e0f".parse::<MoveSeed>().unwrap();
//! let mut session =
//!     GameSession::with_source(MemoryScoreStore::new(), MoveGenerator::with_seed(seed));
//!
//! for _ in 0..10 {
//!     let round = session.select_move(Move::Paper).unwrap();
//!     println!("house picked {}: {:?}", round.opponent(), round.outcome());
//!     session.play_again().unwrap();
//! }
//! ```

pub use self::{game_session::*, move_generator::*, score_store::*};

mod game_session;
mod move_generator;
mod score_store;
