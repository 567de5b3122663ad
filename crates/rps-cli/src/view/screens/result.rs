use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BorderType, Widget},
};
use rps_engine::{Outcome, Round};

use crate::view::widgets::{HandDisplay, KeyBinding, centered, style};

const BINDINGS: &[KeyBinding] = &[(&["Enter", "Space", "A"], "Play again"), (&["Q"], "Quit")];

const PLAYER_LABEL: &str = "YOU PICKED";
const HOUSE_LABEL: &str = "THE HOUSE PICKED";
const BUTTON_WIDTH: u16 = 16;
const BUTTON_HEIGHT: u16 = 3;

/// Text announcing the outcome of a round.
pub fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "YOU WIN",
        Outcome::Lose => "YOU LOSE",
        Outcome::Draw => "DRAW",
    }
}

/// Which result renderer fits the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLayout {
    /// Player, result and house side by side.
    Wide,
    /// Both hands on top, result below.
    Narrow,
}

impl ResultLayout {
    /// Frames wider than this many columns use the wide layout.
    pub const BREAKPOINT: u16 = 60;

    pub fn for_width(width: u16) -> Self {
        if width > Self::BREAKPOINT {
            ResultLayout::Wide
        } else {
            ResultLayout::Narrow
        }
    }
}

fn render_button(area: Rect, buf: &mut Buffer) {
    let block = BlockWidget::bordered()
        .border_type(BorderType::Rounded)
        .style(style::BUTTON);
    let inner = block.inner(area);
    block.render(area, buf);
    Line::styled("PLAY AGAIN", style::BUTTON)
        .centered()
        .render(inner, buf);
}

/// Result text with the play-again button beneath it.
fn render_verdict(area: Rect, buf: &mut Buffer, outcome: Outcome) {
    let [text_area, _, button_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
    ])
    .areas(area);
    Line::styled(outcome_text(outcome), style::TITLE)
        .centered()
        .render(text_area, buf);
    render_button(centered(button_row, BUTTON_WIDTH, BUTTON_HEIGHT), buf);
}

const VERDICT_HEIGHT: u16 = 2 + BUTTON_HEIGHT;

/// Result screen for wide terminals: three columns.
#[derive(Debug, Clone, Copy)]
pub struct WideResultView {
    round: Round,
    score: u64,
}

impl WideResultView {
    const MAX_WIDTH: u16 = 72;
    const COLUMN_HEIGHT: u16 = 2 + HandDisplay::HEIGHT;

    pub fn new(round: Round, score: u64) -> Self {
        Self { round, score }
    }
}

/// Label above a hand.
fn render_pick_over(area: Rect, buf: &mut Buffer, label: &str, hand: HandDisplay) {
    let [label_area, _, hand_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(HandDisplay::HEIGHT),
    ])
    .areas(area);
    Line::styled(label, style::LABEL)
        .centered()
        .render(label_area, buf);
    hand.render(
        centered(hand_row, HandDisplay::WIDTH, HandDisplay::HEIGHT),
        buf,
    );
}

impl Widget for WideResultView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = super::render_frame(area, buf, self.score, BINDINGS);
        let content = centered(body, Self::MAX_WIDTH, Self::COLUMN_HEIGHT);

        let [player_area, verdict_area, house_area] =
            Layout::horizontal([Constraint::Fill(1); 3]).areas(content);

        render_pick_over(
            player_area,
            buf,
            PLAYER_LABEL,
            HandDisplay::new(self.round.player()),
        );
        render_verdict(
            centered(verdict_area, verdict_area.width, VERDICT_HEIGHT),
            buf,
            self.round.outcome(),
        );
        render_pick_over(
            house_area,
            buf,
            HOUSE_LABEL,
            HandDisplay::new(self.round.opponent()),
        );
    }
}

/// Result screen for narrow terminals: hands on top, verdict below.
#[derive(Debug, Clone, Copy)]
pub struct NarrowResultView {
    round: Round,
    score: u64,
}

impl NarrowResultView {
    const PICKS_HEIGHT: u16 = HandDisplay::HEIGHT + 1;

    pub fn new(round: Round, score: u64) -> Self {
        Self { round, score }
    }
}

/// Hand with its label beneath.
fn render_pick_under(area: Rect, buf: &mut Buffer, label: &str, hand: HandDisplay) {
    let [hand_row, label_area] = Layout::vertical([
        Constraint::Length(HandDisplay::HEIGHT),
        Constraint::Length(1),
    ])
    .areas(area);
    hand.render(
        centered(hand_row, HandDisplay::WIDTH, HandDisplay::HEIGHT),
        buf,
    );
    Line::styled(label, style::LABEL)
        .centered()
        .render(label_area, buf);
}

impl Widget for NarrowResultView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = super::render_frame(area, buf, self.score, BINDINGS);

        let [picks_area, _, verdict_area] = Layout::vertical([
            Constraint::Length(Self::PICKS_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(VERDICT_HEIGHT),
        ])
        .flex(Flex::Start)
        .areas(body);

        let [player_area, house_area] =
            Layout::horizontal([Constraint::Fill(1); 2]).areas(picks_area);
        render_pick_under(
            player_area,
            buf,
            PLAYER_LABEL,
            HandDisplay::new(self.round.player()),
        );
        render_pick_under(
            house_area,
            buf,
            HOUSE_LABEL,
            HandDisplay::new(self.round.opponent()),
        );
        render_verdict(verdict_area, buf, self.round.outcome());
    }
}

#[cfg(test)]
mod tests {
    use rps_engine::Move;

    use super::*;
    use crate::view::widgets::test_util;

    #[test]
    fn test_layout_breakpoint() {
        assert_eq!(ResultLayout::for_width(120), ResultLayout::Wide);
        assert_eq!(ResultLayout::for_width(61), ResultLayout::Wide);
        assert_eq!(ResultLayout::for_width(60), ResultLayout::Narrow);
        assert_eq!(ResultLayout::for_width(20), ResultLayout::Narrow);
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(outcome_text(Outcome::Win), "YOU WIN");
        assert_eq!(outcome_text(Outcome::Lose), "YOU LOSE");
        assert_eq!(outcome_text(Outcome::Draw), "DRAW");
    }

    #[test]
    fn test_wide_puts_verdict_between_hands() {
        let round = Round::new(Move::Rock, Move::Scissors);
        let buf = test_util::render(WideResultView::new(round, 1), 80, 24);

        for text in [PLAYER_LABEL, HOUSE_LABEL, "YOU WIN", "PLAY AGAIN", "SCORE"] {
            assert!(test_util::contains(&buf, text), "{text}");
        }
        let (player_x, player_y) = test_util::position(&buf, PLAYER_LABEL).unwrap();
        let (house_x, house_y) = test_util::position(&buf, HOUSE_LABEL).unwrap();
        let (_, verdict_y) = test_util::position(&buf, "YOU WIN").unwrap();
        assert_eq!(player_y, house_y);
        assert!(player_x < house_x);
        assert!(verdict_y > player_y);
    }

    #[test]
    fn test_narrow_puts_verdict_below_hands() {
        let round = Round::new(Move::Paper, Move::Scissors);
        let buf = test_util::render(NarrowResultView::new(round, 0), 40, 30);

        for text in [PLAYER_LABEL, HOUSE_LABEL, "YOU LOSE", "PLAY AGAIN"] {
            assert!(test_util::contains(&buf, text), "{text}");
        }
        let (_, label_y) = test_util::position(&buf, HOUSE_LABEL).unwrap();
        let (_, verdict_y) = test_util::position(&buf, "YOU LOSE").unwrap();
        let (_, button_y) = test_util::position(&buf, "PLAY AGAIN").unwrap();
        assert!(verdict_y > label_y);
        assert!(button_y > verdict_y);
    }

    #[test]
    fn test_draw_shows_both_hands() {
        let round = Round::new(Move::Paper, Move::Paper);
        let buf = test_util::render(NarrowResultView::new(round, 0), 40, 30);
        let lines = test_util::lines(&buf);
        let paper_line = lines.iter().find(|line| line.matches("PAPER").count() == 2);
        assert!(paper_line.is_some(), "{lines:#?}");
        assert!(test_util::contains(&buf, "DRAW"));
    }
}
