#![forbid(unsafe_code)]

//! Capability traits over the terminal device and its input stream.
//!
//! The event loop owns the terminal only through these two traits, so
//! tests can substitute the [`simulator`](crate::simulator) doubles and
//! the loop's resource and dispatch contracts stay checkable without a
//! tty.

use std::io;
use std::time::Duration;

use cadence_core::{Event, Rect};

use crate::frame::Frame;

/// The terminal device collaborator.
///
/// Every failure is fatal to the loop and propagates as `io::Error`
/// after the device is released.
pub trait Backend {
    /// The current drawable extent.
    fn size(&self) -> io::Result<Rect>;

    /// Acquire the device: raw mode, alternate screen, whatever the
    /// implementation needs. Called exactly once before the loop runs.
    fn enter(&mut self) -> io::Result<()>;

    /// Release the device, restoring the user's terminal.
    ///
    /// Must be idempotent: a second release is a no-op, not an error.
    fn leave(&mut self) -> io::Result<()>;

    /// Invoke `render` exactly once with a frame sized to [`size`],
    /// then flush exactly once. One call per tick; there are no
    /// partial or incremental draws.
    ///
    /// [`size`]: Backend::size
    fn draw(&mut self, render: &mut dyn FnMut(&mut Frame<'_>)) -> io::Result<()>;
}

/// The input collaborator.
pub trait EventSource {
    /// Wait up to `timeout` for the next input event.
    ///
    /// `Ok(None)` means the timeout elapsed quietly; the loop still
    /// dispatches an idle tick. This is the event loop's sole blocking
    /// point.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}
