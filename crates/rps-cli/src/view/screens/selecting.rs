use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::Widget,
};
use rps_engine::Move;

use crate::view::widgets::{HandDisplay, KeyBinding, centered, style};

const BINDINGS: &[KeyBinding] = &[
    (&["R", "P", "S"], "Pick"),
    (&["←", "→"], "Move"),
    (&["Enter"], "Throw"),
    (&["Q"], "Quit"),
];

/// The three hands laid out as a triangle, waiting for a pick.
#[derive(Debug, Clone, Copy)]
pub struct SelectingView {
    score: u64,
    cursor: Move,
}

impl SelectingView {
    const BOARD_WIDTH: u16 = 36;
    const BOARD_HEIGHT: u16 = HandDisplay::HEIGHT * 2 + 1;

    pub fn new(score: u64, cursor: Move) -> Self {
        Self { score, cursor }
    }

    fn hand(self, hand: Move) -> HandDisplay {
        HandDisplay::new(hand)
            .show_key(true)
            .highlighted(hand == self.cursor)
    }
}

impl Widget for SelectingView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = super::render_frame(area, buf, self.score, BINDINGS);
        let board = centered(body, Self::BOARD_WIDTH, Self::BOARD_HEIGHT);

        let [top_row, link_row, bottom_row] = Layout::vertical([
            Constraint::Length(HandDisplay::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(HandDisplay::HEIGHT),
        ])
        .areas(board);

        let [paper_area, gap_area, scissors_area] = Layout::horizontal([
            Constraint::Length(HandDisplay::WIDTH),
            Constraint::Fill(1),
            Constraint::Length(HandDisplay::WIDTH),
        ])
        .areas(top_row);
        self.hand(Move::Paper).render(paper_area, buf);
        self.hand(Move::Scissors).render(scissors_area, buf);

        let [_, top_link, _] = Layout::vertical([Constraint::Length(1); 3])
            .flex(Flex::Center)
            .areas(gap_area);
        Line::styled("─".repeat(usize::from(gap_area.width)), style::OUTLINE)
            .render(top_link, buf);
        Line::styled("╲            ╱", style::OUTLINE)
            .centered()
            .render(link_row, buf);

        let [rock_area] = Layout::horizontal([Constraint::Length(HandDisplay::WIDTH)])
            .flex(Flex::Center)
            .areas(bottom_row);
        self.hand(Move::Rock).render(rock_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::widgets::test_util;

    #[test]
    fn test_shows_all_hands_and_score() {
        let buf = test_util::render(SelectingView::new(3, Move::Rock), 80, 24);
        for text in ["PAPER", "SCISSORS", "ROCK", "[R]", "[P]", "[S]", "SCORE", "3"] {
            assert!(test_util::contains(&buf, text), "{text}");
        }
        assert!(test_util::contains(&buf, "Quit"));
    }

    #[test]
    fn test_triangle_layout() {
        let buf = test_util::render(SelectingView::new(0, Move::Paper), 80, 24);
        let lines = test_util::lines(&buf);
        let row_of = |text: &str| lines.iter().rposition(|line| line.contains(text)).unwrap();

        assert_eq!(row_of("[P]"), row_of("[S]"));
        assert!(row_of("[R]") > row_of("[P]"));
    }
}
