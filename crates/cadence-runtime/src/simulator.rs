#![forbid(unsafe_code)]

//! Deterministic test doubles for the event loop.
//!
//! [`SimBackend`] and [`ScriptedEvents`] let tests drive the loop with
//! no terminal and no wall-clock dependence: every draw is recorded,
//! every poll outcome is scripted, and failures can be injected at a
//! chosen tick to check the resource-safety contract.
//!
//! # Example
//!
//! ```
//! use cadence_runtime::{AppState, Controllers, EventLoop, Frame, ScriptedEvents, SimBackend};
//! use cadence_core::Event;
//! use std::time::Duration;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! struct Only;
//!
//! #[derive(Default)]
//! struct Counter {
//!     ticks: usize,
//! }
//!
//! impl Controllers for Counter {
//!     type Tag = Only;
//!     fn handle(app: &mut AppState<Self>, _: Only, _: Duration, _: Option<Event>) {
//!         app.controllers.ticks += 1;
//!         if app.controllers.ticks == 3 {
//!             app.request_exit();
//!         }
//!     }
//!     fn view(_: &mut AppState<Self>, _: Only, _: &mut Frame<'_>) {}
//! }
//!
//! let app = AppState::new(Counter::default(), Only);
//! let mut event_loop = EventLoop::new(app, SimBackend::new(80, 24), ScriptedEvents::idle(10))
//!     .tick_rate(Duration::ZERO);
//! event_loop.run().unwrap();
//! assert_eq!(event_loop.app().controllers.ticks, 3);
//! assert_eq!(event_loop.backend().draw_count(), 3);
//! ```

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use cadence_core::{Event, Rect};

use crate::backend::{Backend, EventSource};
use crate::frame::{Frame, Surface};

/// One recorded `set_string` call: (x, y, content).
pub type SurfaceWrite = (u16, u16, String);

/// In-memory backend that records its lifecycle and every frame.
#[derive(Debug, Default)]
pub struct SimBackend {
    area: Rect,
    enter_count: usize,
    leave_count: usize,
    draw_count: usize,
    fail_draw_on: Option<usize>,
    frames: Vec<Vec<SurfaceWrite>>,
}

impl SimBackend {
    /// A backend pretending to be a `width` x `height` terminal.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            area: Rect::from_size(width, height),
            ..Default::default()
        }
    }

    /// Make the `nth` draw call (1-based) fail with an I/O error.
    #[must_use]
    pub fn fail_draw_on(mut self, nth: usize) -> Self {
        self.fail_draw_on = Some(nth);
        self
    }

    /// How many times `enter` was called.
    pub fn enter_count(&self) -> usize {
        self.enter_count
    }

    /// How many times `leave` was called.
    pub fn leave_count(&self) -> usize {
        self.leave_count
    }

    /// How many times `draw` was called (including a failed draw).
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    /// All successfully drawn frames, oldest first.
    pub fn frames(&self) -> &[Vec<SurfaceWrite>] {
        &self.frames
    }

    /// The most recent successfully drawn frame.
    pub fn last_frame(&self) -> Option<&[SurfaceWrite]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl Backend for SimBackend {
    fn size(&self) -> io::Result<Rect> {
        Ok(self.area)
    }

    fn enter(&mut self) -> io::Result<()> {
        self.enter_count += 1;
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        self.leave_count += 1;
        Ok(())
    }

    fn draw(&mut self, render: &mut dyn FnMut(&mut Frame<'_>)) -> io::Result<()> {
        self.draw_count += 1;
        if self.fail_draw_on == Some(self.draw_count) {
            return Err(io::Error::other("simulated draw failure"));
        }

        let mut surface = RecordingSurface::default();
        let mut frame = Frame::new(self.area, &mut surface);
        render(&mut frame);
        self.frames.push(surface.writes);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct RecordingSurface {
    writes: Vec<SurfaceWrite>,
}

impl Surface for RecordingSurface {
    fn set_string(&mut self, x: u16, y: u16, content: &str) {
        self.writes.push((x, y, content.to_owned()));
    }
}

/// Input source that replays a pre-scripted sequence of poll outcomes.
///
/// Each poll pops the next entry: `Some(event)` delivers input,
/// `None` simulates a quiet timeout. An exhausted script keeps
/// returning timeouts. Polls never consume wall-clock time, so tests
/// run the loop as fast as it can spin.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    script: VecDeque<Option<Event>>,
    poll_count: usize,
    fail_poll_on: Option<usize>,
}

impl ScriptedEvents {
    /// Script an explicit sequence of poll outcomes.
    pub fn new(script: impl IntoIterator<Item = Option<Event>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            poll_count: 0,
            fail_poll_on: None,
        }
    }

    /// A script of `ticks` quiet timeouts.
    #[must_use]
    pub fn idle(ticks: usize) -> Self {
        Self::new(std::iter::repeat_n(None, ticks))
    }

    /// Make the `nth` poll (1-based) fail with an I/O error.
    #[must_use]
    pub fn fail_poll_on(mut self, nth: usize) -> Self {
        self.fail_poll_on = Some(nth);
        self
    }

    /// How many times `poll` was called.
    pub fn poll_count(&self) -> usize {
        self.poll_count
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self, _timeout: Duration) -> io::Result<Option<Event>> {
        self.poll_count += 1;
        if self.fail_poll_on == Some(self.poll_count) {
            return Err(io::Error::other("simulated poll failure"));
        }
        Ok(self.script.pop_front().flatten())
    }
}
