#![forbid(unsafe_code)]

//! Core primitives for the cadence terminal-UI runtime.
//!
//! This crate holds the pieces every other cadence crate builds on:
//!
//! - [`geometry`] - character-cell rectangles and insets
//! - [`event`] - canonical input events decoded from the terminal
//! - [`session`] - RAII terminal lifecycle (raw mode, alternate screen)
//!
//! Nothing in here knows about layout, widgets, or the event loop.

pub mod event;
pub mod geometry;
pub mod session;

pub use event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use geometry::{Rect, Sides};
pub use session::{SessionOptions, TerminalSession};
