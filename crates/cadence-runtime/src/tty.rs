#![forbid(unsafe_code)]

//! Crossterm-backed production implementations of the backend traits.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use cadence_core::session::{SessionOptions, TerminalSession};
use cadence_core::{Event, Rect};

use crate::backend::{Backend, EventSource};
use crate::frame::{Frame, Surface};

/// Terminal backend over crossterm and the cadence session guard.
///
/// `enter` creates a [`TerminalSession`], `leave` drops it; holding the
/// session in an `Option` makes release idempotent, and the session's
/// own `Drop` covers the panic and signal paths the loop cannot see.
///
/// Each draw repaints the whole screen and flushes once. Incremental
/// painting (diffing, damage tracking) is a concern of richer render
/// layers, not of this backend.
pub struct TtyBackend {
    options: SessionOptions,
    session: Option<TerminalSession>,
}

impl TtyBackend {
    /// A full-screen backend (alternate screen enabled).
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(SessionOptions::full_screen())
    }

    /// A backend with explicit session options.
    #[must_use]
    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            options,
            session: None,
        }
    }
}

impl Default for TtyBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for TtyBackend {
    fn size(&self) -> io::Result<Rect> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Rect::from_size(width, height))
    }

    fn enter(&mut self) -> io::Result<()> {
        if self.session.is_none() {
            self.session = Some(TerminalSession::new(self.options.clone())?);
        }
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        // Dropping the session restores the terminal; a second call
        // finds None and does nothing.
        self.session.take();
        Ok(())
    }

    fn draw(&mut self, render: &mut dyn FnMut(&mut Frame<'_>)) -> io::Result<()> {
        let area = self.size()?;

        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        queue!(out, Clear(ClearType::All))?;

        let mut surface = QueueSurface {
            out: &mut out,
            error: None,
        };
        let mut frame = Frame::new(area, &mut surface);
        render(&mut frame);

        if let Some(err) = surface.error {
            return Err(err);
        }
        out.flush()
    }
}

/// Surface that queues crossterm commands into a buffered writer.
///
/// Writes into the buffer rarely fail before the flush; the first
/// failure is kept and surfaced at the end of the draw call so a
/// widget's render path never has to handle I/O errors.
struct QueueSurface<'a, W: Write> {
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<W: Write> Surface for QueueSurface<'_, W> {
    fn set_string(&mut self, x: u16, y: u16, content: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = queue!(self.out, MoveTo(x, y), Print(content)) {
            self.error = Some(err);
        }
    }
}

/// Input source over crossterm's bounded poll.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl CrosstermEvents {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if crossterm::event::poll(timeout)? {
            let raw = crossterm::event::read()?;
            // Input cadence cannot represent maps to None; the loop
            // treats it as an idle tick rather than an error.
            Ok(Event::from_crossterm(raw))
        } else {
            Ok(None)
        }
    }
}
