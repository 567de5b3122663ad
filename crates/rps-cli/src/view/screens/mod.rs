use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use crate::view::widgets::{KeyBinding, KeyBindingDisplay, ScoreBoard};

pub use self::{result::*, selecting::*};

mod result;
mod selecting;

/// Splits a screen into header, body and help line, and draws the header
/// and help. Returns the body area.
fn render_frame(area: Rect, buf: &mut Buffer, score: u64, bindings: &[KeyBinding]) -> Rect {
    let [_, header_area, body_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(ScoreBoard::HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);
    ScoreBoard::new(score).render(header_area, buf);
    KeyBindingDisplay::new(bindings).render(help_area, buf);
    body_area
}
