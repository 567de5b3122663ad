use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block as BlockWidget, BorderType, Widget},
};
use rps_engine::Move;

use crate::view::widgets::style;

/// A hand drawn as a colored token, optionally with its key hint.
#[derive(Debug, Clone, Copy)]
pub struct HandDisplay {
    hand: Move,
    highlighted: bool,
    show_key: bool,
}

impl HandDisplay {
    pub const WIDTH: u16 = 14;
    pub const HEIGHT: u16 = 5;

    pub fn new(hand: Move) -> Self {
        Self {
            hand,
            highlighted: false,
            show_key: false,
        }
    }

    pub fn highlighted(self, highlighted: bool) -> Self {
        Self {
            highlighted,
            ..self
        }
    }

    pub fn show_key(self, show_key: bool) -> Self {
        Self { show_key, ..self }
    }
}

/// Key that selects `hand`, as shown to the player.
pub fn key_label(hand: Move) -> &'static str {
    match hand {
        Move::Rock => "[R]",
        Move::Paper => "[P]",
        Move::Scissors => "[S]",
    }
}

impl Widget for HandDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hand_style = style::hand(self.hand);
        let (border_type, border_style) = if self.highlighted {
            (
                BorderType::Thick,
                hand_style.add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
        } else {
            (BorderType::Rounded, hand_style)
        };
        let block = BlockWidget::bordered()
            .border_type(border_type)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [name_area, key_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(inner);

        let name = self.hand.name().to_ascii_uppercase();
        Line::styled(name, hand_style.add_modifier(Modifier::BOLD))
            .centered()
            .render(name_area, buf);
        if self.show_key {
            Line::styled(key_label(self.hand), style::KEY_HINT)
                .centered()
                .render(key_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::widgets::test_util;

    #[test]
    fn test_renders_name_and_key() {
        let buf = test_util::render(
            HandDisplay::new(Move::Scissors).show_key(true),
            HandDisplay::WIDTH,
            HandDisplay::HEIGHT,
        );
        assert!(test_util::contains(&buf, "SCISSORS"));
        assert!(test_util::contains(&buf, "[S]"));
    }

    #[test]
    fn test_key_hint_is_optional() {
        let buf = test_util::render(
            HandDisplay::new(Move::Rock),
            HandDisplay::WIDTH,
            HandDisplay::HEIGHT,
        );
        assert!(test_util::contains(&buf, "ROCK"));
        assert!(!test_util::contains(&buf, "[R]"));
    }

    #[test]
    fn test_uses_hand_color() {
        let buf = test_util::render(
            HandDisplay::new(Move::Paper),
            HandDisplay::WIDTH,
            HandDisplay::HEIGHT,
        );
        assert_eq!(buf[(0, 0)].fg, style::hand(Move::Paper).fg.unwrap());
    }
}
