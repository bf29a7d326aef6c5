//! Coordinator Pipeline
//!
//! Notifications flow one way, from the host into the coordinator and out to
//! the presentation sink:
//!
//! ```text
//! host event → PageEvent → Coordinator::dispatch → sub-behaviors → PresentationSink
//! ```
//!
//! ## Key Design Principles
//!
//! - **Explicit time**: every entry point takes `now_ms`; deadlines fire in
//!   scheduled order on the next call at or after them
//! - **Write on change**: header and progress are only written when they change
//! - **Graceful absence**: a missing collaborator disables its behavior only

pub mod events;
pub mod mount;

pub use events::PageEvent;
pub use mount::Coordinator;
