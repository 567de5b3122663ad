use crossterm::event::KeyCode;
use rps_engine::{Move, SessionState};

/// What a keypress asks the play screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pick(Move),
    CursorPrev,
    CursorNext,
    PickHighlighted,
    PlayAgain,
    Quit,
}

impl Action {
    /// Translates a key into an action valid in `state`.
    ///
    /// Keys that mean nothing in the current state yield `None`, so
    /// unrecognized input never reaches the session.
    pub fn from_key(state: SessionState, code: KeyCode) -> Option<Self> {
        match (state, code) {
            (_, KeyCode::Char('q' | 'Q') | KeyCode::Esc) => Some(Action::Quit),
            (SessionState::Selecting, KeyCode::Left | KeyCode::Up) => Some(Action::CursorPrev),
            (SessionState::Selecting, KeyCode::Right | KeyCode::Down) => Some(Action::CursorNext),
            (SessionState::Selecting, KeyCode::Enter | KeyCode::Char(' ')) => {
                Some(Action::PickHighlighted)
            }
            (SessionState::Selecting, KeyCode::Char(c)) => Move::from_key(c).map(Action::Pick),
            (
                SessionState::ShowingResult,
                KeyCode::Enter | KeyCode::Char(' ' | 'a' | 'A'),
            ) => Some(Action::PlayAgain),
            _ => None,
        }
    }
}

/// Steps `mv` through [`Move::ALL`], wrapping at both ends.
pub fn cycle(mv: Move, forward: bool) -> Move {
    let len = Move::ALL.len();
    let index = mv as usize;
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    Move::ALL[next]
}
