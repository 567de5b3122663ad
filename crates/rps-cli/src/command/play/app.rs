use crossterm::event::{Event, KeyEventKind};
use ratatui::{Frame, widgets::Block as BlockWidget};
use rps_engine::{GameSession, Move, MoveGenerator, MoveSource, ScoreStore, SessionState};

use crate::{
    command::play::input::{self, Action},
    tui::{App, RenderMode, Tui},
    view::{
        screens::{NarrowResultView, ResultLayout, SelectingView, WideResultView},
        widgets::style,
    },
};

/// Upper bound on redraws per second while the terminal is being resized.
const MAX_FPS: f64 = 30.0;

/// The game screen: a session plus the hand cursor.
pub struct PlayApp<S, G = MoveGenerator> {
    session: GameSession<S, G>,
    cursor: Move,
    is_exiting: bool,
}

impl<S, G> PlayApp<S, G>
where
    S: ScoreStore,
    G: MoveSource,
{
    pub fn new(session: GameSession<S, G>) -> Self {
        Self {
            session,
            cursor: Move::Rock,
            is_exiting: false,
        }
    }

    pub fn session(&self) -> &GameSession<S, G> {
        &self.session
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Pick(mv) => self.play(mv),
            Action::PickHighlighted => self.play(self.cursor),
            Action::CursorPrev => self.cursor = input::cycle(self.cursor, false),
            Action::CursorNext => self.cursor = input::cycle(self.cursor, true),
            Action::PlayAgain => {
                if let Err(e) = self.session.play_again() {
                    tracing::warn!("ignored play again: {e}");
                }
            }
            Action::Quit => self.is_exiting = true,
        }
    }

    fn play(&mut self, mv: Move) {
        self.cursor = mv;
        let round = match self.session.select_move(mv) {
            Ok(&round) => round,
            Err(e) => {
                tracing::warn!(%mv, "ignored pick: {e}");
                return;
            }
        };
        tracing::debug!(
            player = %round.player(),
            house = %round.opponent(),
            outcome = ?round.outcome(),
            score = self.session.score(),
            "round played"
        );
    }
}

impl<S, G> App for PlayApp<S, G>
where
    S: ScoreStore,
    G: MoveSource,
{
    fn init(&mut self, tui: &mut Tui) {
        tui.set_render_mode(RenderMode::throttled_from_rate(MAX_FPS));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = Action::from_key(self.session.state(), key.code) {
                    self.apply(action);
                }
            }
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(BlockWidget::new().style(style::BACKGROUND), area);

        let score = self.session.score();
        let round = match (self.session.state(), self.session.round()) {
            (SessionState::ShowingResult, Some(&round)) => round,
            _ => {
                frame.render_widget(SelectingView::new(score, self.cursor), area);
                return;
            }
        };
        match ResultLayout::for_width(area.width) {
            ResultLayout::Wide => frame.render_widget(WideResultView::new(round, score), area),
            ResultLayout::Narrow => frame.render_widget(NarrowResultView::new(round, score), area),
        }
    }
}
