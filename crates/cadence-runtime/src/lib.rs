#![forbid(unsafe_code)]

//! The cadence runtime.
//!
//! This crate ties the core and layout crates into a running terminal
//! application:
//!
//! - [`AppState`] / [`Controllers`] - the state-machine contract an
//!   application's interaction modes must satisfy
//! - [`EventLoop`] / [`run`] - the single-threaded render/input cadence
//! - [`Backend`] / [`EventSource`] - capability traits over the
//!   terminal device and its input stream
//! - [`Frame`] / [`Surface`] / [`Widget`] - the per-tick drawing seam
//! - [`TtyBackend`] / [`CrosstermEvents`] - the crossterm-backed
//!   production implementations
//! - [`simulator`] - deterministic test doubles for driving the loop
//!   without a terminal
//!
//! The runtime is deliberately single-threaded: the loop, the layout
//! engine, and every controller handler run sequentially, so
//! [`AppState`] has exactly one borrower at any instant and no locking
//! exists anywhere.

pub mod app;
pub mod backend;
pub mod event_loop;
pub mod frame;
pub mod simulator;
pub mod tty;

pub use app::{AppState, Controllers};
pub use backend::{Backend, EventSource};
pub use event_loop::{EventLoop, run};
pub use frame::{Frame, Surface, Widget};
pub use simulator::{ScriptedEvents, SimBackend};
pub use tty::{CrosstermEvents, TtyBackend};
