#![forbid(unsafe_code)]

//! The render/input event loop.
//!
//! One iteration is one tick: draw the active controller's view, poll
//! input with a deadline derived from the tick rate, dispatch exactly
//! one handler, check for exit. The loop acquires the terminal once
//! before the first tick and releases it exactly once on every exit
//! path - normal completion, exit request, or propagated error - so
//! the user's shell is never left in raw mode.

use std::io;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::app::{AppState, Controllers};
use crate::backend::{Backend, EventSource};

/// The tick-driven event loop.
///
/// Owns the [`AppState`], the terminal backend, and the input source
/// for the lifetime of [`run`](Self::run). Single-threaded and
/// cooperative: the bounded poll is the only place the loop blocks, so
/// it can never stall more than one tick rate past the last boundary.
pub struct EventLoop<C: Controllers, B: Backend, E: EventSource> {
    app: AppState<C>,
    backend: B,
    events: E,
    tick_rate: Duration,
}

impl<C: Controllers, B: Backend, E: EventSource> EventLoop<C, B, E> {
    /// Default cadence between idle ticks.
    pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

    /// Create a loop over the given state, backend, and input source.
    pub fn new(app: AppState<C>, backend: B, events: E) -> Self {
        Self {
            app,
            backend,
            events,
            tick_rate: Self::DEFAULT_TICK_RATE,
        }
    }

    /// Set the tick rate.
    #[must_use]
    pub fn tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// The application state.
    pub fn app(&self) -> &AppState<C> {
        &self.app
    }

    /// The terminal backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run until exit is requested or an I/O failure occurs.
    ///
    /// The backend is acquired before the first tick and released
    /// exactly once on every exit path. When an iteration fails *and*
    /// the release also fails, the iteration error propagates - it is
    /// the root cause; a release failure alone is still reported.
    pub fn run(&mut self) -> io::Result<()> {
        self.backend.enter()?;
        debug!("terminal acquired");

        let outcome = self.drive();

        let released = self.backend.leave();
        debug!(clean = released.is_ok(), "terminal released");

        outcome?;
        released
    }

    fn drive(&mut self) -> io::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            self.draw()?;

            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            let event = self.events.poll(timeout)?;

            let now = Instant::now();
            let elapsed = now.duration_since(last_tick);
            if elapsed >= self.tick_rate {
                // Tick boundary crossed, whether an event arrived
                // promptly or the poll timed out.
                last_tick = now;
            }

            // Read the tag fresh: a switch requested last tick lands
            // here, so exactly one handler runs per tick and a
            // transition is never observed mid-tick.
            let tag = self.app.active();
            trace!(?tag, idle = event.is_none(), "dispatch");
            C::handle(&mut self.app, tag, elapsed, event);

            if self.app.exit_requested() {
                debug!("exit requested");
                return Ok(());
            }
        }
    }

    /// Issue exactly one draw call for this tick.
    fn draw(&mut self) -> io::Result<()> {
        let Self { app, backend, .. } = self;
        backend.draw(&mut |frame| {
            let tag = app.active();
            C::view(app, tag, frame);
        })
    }
}

/// Run an application to completion.
///
/// Convenience over [`EventLoop`] for the common case; the state is
/// consumed because it holds no meaning once the loop returns.
pub fn run<C, B, E>(
    app: AppState<C>,
    tick_rate: Duration,
    backend: B,
    events: E,
) -> io::Result<()>
where
    C: Controllers,
    B: Backend,
    E: EventSource,
{
    EventLoop::new(app, backend, events)
        .tick_rate(tick_rate)
        .run()
}
