#![forbid(unsafe_code)]

//! Application state and the controller dispatch contract.
//!
//! An application is a set of mutually-exclusive interaction modes
//! ("controllers") identified by a closed tag enum. Exactly one
//! controller is active at a time; the event loop reads the active tag
//! once per tick and invokes exactly one handler with it. Because
//! dispatch is an exhaustive `match` over the caller's tag enum, the
//! tag-to-handler mapping is checked at compile time - there is no
//! runtime registry and no "missing handler" state to reach.

use std::time::Duration;

use cadence_core::Event;

use crate::frame::Frame;

/// The contract an application's controller set must satisfy.
///
/// Implement this on the container holding all per-controller data.
/// Both functions receive the whole [`AppState`] so a handler can
/// mutate its own data slice, switch the active controller, or request
/// exit; taking the state as a parameter (rather than `&mut self`)
/// keeps a single exclusive borrow per tick.
///
/// # Example
///
/// ```
/// use cadence_runtime::{AppState, Controllers, Frame};
/// use cadence_core::Event;
/// use std::time::Duration;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Mode {
///     Main,
///     Confirm,
/// }
///
/// #[derive(Default)]
/// struct App {
///     ticks: u64,
///     confirmed: bool,
/// }
///
/// impl Controllers for App {
///     type Tag = Mode;
///
///     fn handle(app: &mut AppState<Self>, tag: Mode, _elapsed: Duration, _event: Option<Event>) {
///         match tag {
///             Mode::Main => {
///                 app.controllers.ticks += 1;
///                 if app.controllers.ticks > 100 {
///                     app.set_active(Mode::Confirm);
///                 }
///             }
///             Mode::Confirm => {
///                 app.controllers.confirmed = true;
///                 app.request_exit();
///             }
///         }
///     }
///
///     fn view(_app: &mut AppState<Self>, _tag: Mode, _frame: &mut Frame<'_>) {}
/// }
/// ```
pub trait Controllers: Sized {
    /// The closed set of controller identifiers.
    type Tag: Copy + PartialEq + Eq + std::fmt::Debug;

    /// Handle one tick for the controller named by `tag`.
    ///
    /// `elapsed` is the time since the last tick boundary; `event` is
    /// the polled input, or `None` when the poll timed out (idle ticks
    /// still dispatch so controllers can animate and advance timers).
    ///
    /// Writing a new tag with [`AppState::set_active`] takes effect on
    /// the next tick, never mid-tick.
    fn handle(app: &mut AppState<Self>, tag: Self::Tag, elapsed: Duration, event: Option<Event>);

    /// Render the controller named by `tag` into the frame.
    ///
    /// Called exactly once per tick, before input is polled.
    fn view(app: &mut AppState<Self>, tag: Self::Tag, frame: &mut Frame<'_>);
}

/// Single-owner container for all cross-tick application data.
///
/// Constructed once at startup with an initial controller and default
/// per-controller data; exclusively owned by the event loop for the
/// duration of [`run`](crate::run); mutated in place each tick by the
/// one handler matching the active tag. Switching controllers does not
/// reset any other controller's data, so modes resume where they left
/// off.
#[derive(Debug)]
pub struct AppState<C: Controllers> {
    /// The caller's per-controller data. By convention each tag owns a
    /// distinct slice of this container.
    pub controllers: C,
    active: C::Tag,
    exit_requested: bool,
}

impl<C: Controllers> AppState<C> {
    /// Create application state with an initial active controller.
    pub fn new(controllers: C, initial: C::Tag) -> Self {
        Self {
            controllers,
            active: initial,
            exit_requested: false,
        }
    }

    /// The currently active controller tag.
    #[inline]
    pub fn active(&self) -> C::Tag {
        self.active
    }

    /// Switch the active controller.
    ///
    /// The event loop reads the tag fresh at the start of each tick, so
    /// the switch is observed on the next tick.
    #[inline]
    pub fn set_active(&mut self, tag: C::Tag) {
        self.active = tag;
    }

    /// Ask the event loop to stop after the current tick completes.
    ///
    /// Cooperative: handlers are never interrupted mid-invocation.
    #[inline]
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Whether an exit has been requested.
    #[inline]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
