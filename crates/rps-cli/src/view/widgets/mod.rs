use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub use self::{hand_display::*, key_binding_display::*, score_board::*};

mod hand_display;
mod key_binding_display;
mod score_board;

mod color {
    use ratatui::style::Color;

    pub const ROCK: Color = Color::Rgb(0xDC, 0x2E, 0x4E);
    pub const PAPER: Color = Color::Rgb(0x48, 0x65, 0xF4);
    pub const SCISSORS: Color = Color::Rgb(0xEC, 0x9E, 0x0E);
    pub const SCORE_LABEL: Color = Color::Rgb(0x2A, 0x46, 0xC0);
    pub const SCORE_VALUE: Color = Color::Rgb(0x3B, 0x43, 0x63);
    pub const OUTLINE: Color = Color::Rgb(0x9C, 0xA3, 0xAF);
    pub const BACKGROUND: Color = Color::Rgb(0x1F, 0x37, 0x56);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
}

pub mod style {
    use ratatui::style::{Modifier, Style};
    use rps_engine::Move;

    use crate::view::widgets::color;

    const fn fg_bg(fg: ratatui::style::Color, bg: ratatui::style::Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const BACKGROUND: Style = fg_bg(color::WHITE, color::BACKGROUND);
    pub const TITLE: Style = Style::new().fg(color::WHITE).add_modifier(Modifier::BOLD);
    pub const LABEL: Style = Style::new().fg(color::WHITE).add_modifier(Modifier::BOLD);
    pub const OUTLINE: Style = Style::new().fg(color::OUTLINE);
    pub const SCORE_BOX: Style = fg_bg(color::SCORE_VALUE, color::WHITE);
    pub const SCORE_LABEL: Style = fg_bg(color::SCORE_LABEL, color::WHITE);
    pub const SCORE_VALUE: Style =
        fg_bg(color::SCORE_VALUE, color::WHITE).add_modifier(Modifier::BOLD);
    pub const BUTTON: Style = fg_bg(color::SCORE_LABEL, color::WHITE).add_modifier(Modifier::BOLD);
    pub const KEY_HINT: Style = Style::new().fg(color::GRAY);

    #[must_use]
    pub const fn hand(mv: Move) -> Style {
        let color = match mv {
            Move::Rock => color::ROCK,
            Move::Paper => color::PAPER,
            Move::Scissors => color::SCISSORS,
        };
        Style::new().fg(color)
    }
}

/// Returns a `width`-wide column centered in `area` (clamped to `area`).
fn centered_column(area: Rect, width: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    column
}

/// Returns a `height`-tall row centered in `area` (clamped to `area`).
fn centered_row(area: Rect, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    row
}

/// Centers a `width` x `height` box in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    centered_row(centered_column(area, width), height)
}

#[cfg(test)]
pub(crate) mod test_util {
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    pub fn render<W: Widget>(widget: W, width: u16, height: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        widget.render(buf.area, &mut buf);
        buf
    }

    pub fn lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn contains(buf: &Buffer, text: &str) -> bool {
        lines(buf).iter().any(|line| line.contains(text))
    }

    /// Returns the `(x, y)` of the first occurrence of `text`.
    pub fn position(buf: &Buffer, text: &str) -> Option<(usize, usize)> {
        lines(buf)
            .iter()
            .enumerate()
            .find_map(|(y, line)| line.find(text).map(|x| (x, y)))
    }
}
