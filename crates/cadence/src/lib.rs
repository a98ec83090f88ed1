#![forbid(unsafe_code)]

//! Cadence public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage. Applications that need
//! finer-grained dependencies can depend on `cadence-core`,
//! `cadence-layout`, and `cadence-runtime` directly.

// --- Core re-exports -------------------------------------------------------

pub use cadence_core::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
    Rect, SessionOptions, Sides, TerminalSession,
};

// --- Layout re-exports -----------------------------------------------------

pub use cadence_layout::{Constraint, Direction, Layout, split};

// --- Runtime re-exports ----------------------------------------------------

pub use cadence_runtime::{
    AppState, Backend, Controllers, CrosstermEvents, EventLoop, EventSource, Frame,
    ScriptedEvents, SimBackend, Surface, TtyBackend, Widget, run,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AppState, Constraint, Controllers, Direction, Event, EventLoop, Frame, KeyCode, KeyEvent,
        Layout, Modifiers, Rect, SessionOptions, TtyBackend, Widget,
    };

    pub use crate::{core, layout, runtime};
}

pub use cadence_core as core;
pub use cadence_layout as layout;
pub use cadence_runtime as runtime;
