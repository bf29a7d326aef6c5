//! Renderer - the presentation side of the coordinator.
//!
//! The coordinator never touches a page directly. Every visual change goes
//! through a [`PresentationSink`]: a browser host forwards the calls to style
//! writes, a terminal host paints them, and tests substitute a [`Recorder`].

mod recorder;
mod sink;

pub use recorder::{PresentationOp, Recorder};
pub use sink::{PresentationSink, ScrollBehavior};
