use crate::{
    Move, Round,
    engine::{
        move_generator::{MoveGenerator, MoveSource},
        score_store::ScoreStore,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// Waiting for the player to pick a hand.
    Selecting,
    /// A round has been played and its result is on display.
    ShowingResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    #[display("a round is already on display")]
    RoundInProgress,
    #[display("no round to clear")]
    NoRoundToClear,
}

/// A play session: the current round, the score, and where it is persisted.
///
/// The session alternates between [`SessionState::Selecting`] and
/// [`SessionState::ShowingResult`]. Selecting a move plays a round against
/// the [`MoveSource`]; a win bumps the score and saves it to the
/// [`ScoreStore`]. Playing again clears the round and keeps the score.
///
/// # Example
///
/// ```
/// use rps_engine::{GameSession, MemoryScoreStore, Move, SessionState};
///
/// let mut session = GameSession::new(MemoryScoreStore::new());
/// assert_eq!(session.score(), 0);
///
/// let round = *session.select_move(Move::Rock).unwrap();
/// assert_eq!(session.state(), SessionState::ShowingResult);
/// assert_eq!(session.score(), u64::from(round.outcome().is_win()));
///
/// session.play_again().unwrap();
/// assert!(session.round().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<S, G = MoveGenerator> {
    store: S,
    source: G,
    state: SessionState,
    round: Option<Round>,
    score: u64,
}

impl<S> GameSession<S>
where
    S: ScoreStore,
{
    /// Creates a session against a randomly seeded house.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_source(store, MoveGenerator::new())
    }
}

impl<S, G> GameSession<S, G>
where
    S: ScoreStore,
    G: MoveSource,
{
    /// Creates a session whose opponent moves come from `source`.
    ///
    /// The initial score is loaded from `store`.
    #[must_use]
    pub fn with_source(store: S, source: G) -> Self {
        let score = store.load();
        Self {
            store,
            source,
            state: SessionState::Selecting,
            round: None,
            score,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the round on display, if any.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Plays `player` against the house and shows the result.
    ///
    /// Only valid while selecting.
    pub fn select_move(&mut self, player: Move) -> Result<&Round, SessionError> {
        if self.state.is_showing_result() {
            return Err(SessionError::RoundInProgress);
        }
        let opponent = self.source.next_move();
        let round = Round::new(player, opponent);
        if round.outcome().is_win() {
            self.score = self.score.saturating_add(1);
            self.store.save(self.score);
        }
        self.state = SessionState::ShowingResult;
        Ok(self.round.insert(round))
    }

    /// Clears the round on display and returns to selecting.
    pub fn play_again(&mut self) -> Result<(), SessionError> {
        if self.state.is_selecting() {
            return Err(SessionError::NoRoundToClear);
        }
        self.round = None;
        self.state = SessionState::Selecting;
        Ok(())
    }

    /// Consumes the session and returns its store.
    pub fn into_store(self) -> S {
        self.store
    }
}
