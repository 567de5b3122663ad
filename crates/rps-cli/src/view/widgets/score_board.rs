use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BorderType, Widget},
};

use crate::view::widgets::style;

/// Title banner with the current score.
#[derive(Debug, Clone, Copy)]
pub struct ScoreBoard {
    score: u64,
}

const TITLE: [&str; 3] = ["ROCK", "PAPER", "SCISSORS"];

impl ScoreBoard {
    pub const MAX_WIDTH: u16 = 60;
    pub const HEIGHT: u16 = 6;
    const SCORE_BOX_WIDTH: u16 = 12;

    pub fn new(score: u64) -> Self {
        Self { score }
    }
}

impl Widget for ScoreBoard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = super::centered_column(area, Self::MAX_WIDTH);
        let block = BlockWidget::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style::OUTLINE);
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, score_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(Self::SCORE_BOX_WIDTH),
        ])
        .spacing(1)
        .areas(inner);

        let title_rows = Layout::vertical(TITLE.map(|_| Constraint::Length(1)))
            .flex(Flex::Center)
            .split(title_area.inner(Margin::new(1, 0)));
        for (text, row) in TITLE.iter().zip(title_rows.iter()) {
            Line::styled(*text, style::TITLE).render(*row, buf);
        }

        let score_block = BlockWidget::bordered()
            .border_type(BorderType::Rounded)
            .style(style::SCORE_BOX);
        let score_inner = score_block.inner(score_area);
        score_block.render(score_area, buf);
        let [label_area, value_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(score_inner);
        Line::styled("SCORE", style::SCORE_LABEL)
            .centered()
            .render(label_area, buf);
        Line::styled(self.score.to_string(), style::SCORE_VALUE)
            .centered()
            .render(value_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::widgets::test_util;

    #[test]
    fn test_shows_title_and_score() {
        let buf = test_util::render(ScoreBoard::new(42), 80, ScoreBoard::HEIGHT);
        for text in TITLE {
            assert!(test_util::contains(&buf, text), "{text}");
        }
        assert!(test_util::contains(&buf, "SCORE"));
        assert!(test_util::contains(&buf, "42"));
    }

    #[test]
    fn test_fits_narrow_width() {
        let buf = test_util::render(ScoreBoard::new(7), 30, ScoreBoard::HEIGHT);
        assert!(test_util::contains(&buf, "SCISSORS"));
        assert!(test_util::contains(&buf, "7"));
    }
}
