use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Rendering trigger mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Render after every terminal event.
    #[default]
    OnDirty,
    /// Render after terminal events, but with minimum interval between renders.
    ///
    /// Bursts of events (e.g. a window being dragged to a new size) are
    /// batched into one render.
    Throttled(Duration),
}

impl RenderMode {
    /// Creates `Throttled` mode from frame rate (FPS).
    #[must_use]
    pub fn throttled_from_rate(rate: f64) -> Self {
        Self::Throttled(Duration::from_secs_f64(1.0 / rate))
    }
}

/// Event loop state management.
///
/// Returns [`TuiEvent::Render`] whenever the screen is dirty and the render
/// mode allows it, and otherwise blocks on the next crossterm event.
#[derive(Debug)]
pub(super) struct EventLoop {
    render_mode: RenderMode,
    last_render: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates a new `EventLoop` in `OnDirty` mode.
    pub fn new() -> Self {
        let now = Instant::now();
        let past_time = now.checked_sub(Duration::from_secs(86400)).unwrap_or(now);
        Self {
            render_mode: RenderMode::default(),
            last_render: past_time,
            dirty: true, // Initial render is required on startup
        }
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Returns the next event.
    ///
    /// Events are returned in the order the terminal delivered them; renders
    /// are only ever inserted between them.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if self.should_render(now) {
                self.last_render = now;
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn should_render(&self, now: Instant) -> bool {
        match self.render_mode {
            RenderMode::OnDirty => self.dirty,
            RenderMode::Throttled(interval) => {
                self.dirty && now.duration_since(self.last_render) >= interval
            }
        }
    }

    /// Time to wait for input before a pending render is due.
    ///
    /// `None` means nothing is pending and the loop may block indefinitely.
    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        if !self.dirty {
            return None;
        }
        let next_render_at = match self.render_mode {
            RenderMode::OnDirty => now,
            RenderMode::Throttled(interval) => self.last_render + interval,
        };
        Some(next_render_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_dirty() {
        let events = EventLoop::new();
        assert!(events.should_render(Instant::now()));
        assert_eq!(events.render_mode, RenderMode::OnDirty);
    }

    #[test]
    fn test_clean_loop_blocks_on_input() {
        let mut events = EventLoop::new();
        events.dirty = false;
        let now = Instant::now();
        assert!(!events.should_render(now));
        assert_eq!(events.compute_timeout(now), None);
    }

    #[test]
    fn test_throttled_waits_for_interval() {
        let mut events = EventLoop::new();
        events.set_render_mode(RenderMode::Throttled(Duration::from_millis(50)));
        let now = Instant::now();
        events.last_render = now;

        assert!(!events.should_render(now));
        let timeout = events.compute_timeout(now).unwrap();
        assert!(timeout <= Duration::from_millis(50));
        assert!(timeout > Duration::ZERO);

        assert!(events.should_render(now + Duration::from_millis(50)));
    }

    #[test]
    fn test_throttled_from_rate() {
        assert_eq!(
            RenderMode::throttled_from_rate(20.0),
            RenderMode::Throttled(Duration::from_millis(50))
        );
    }
}
