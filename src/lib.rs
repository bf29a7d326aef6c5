//! # folio-motion
//!
//! Scroll-reactive animation and navigation coordinator for single-page sites.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for the
//! reactive surface (header mode, scroll progress).
//!
//! ## Architecture
//!
//! A host registers its page once, mounts a [`Coordinator`] onto a
//! [`PresentationSink`], and forwards notifications with a millisecond
//! timestamp. The coordinator owns all derived state and only ever writes
//! presentation changes (opacity, transform, text, a few mode flags):
//!
//! ```text
//! PageBuilder → Page → Coordinator::mount → dispatch(PageEvent, now_ms) → PresentationSink
//! ```
//!
//! Each behavior under [`state`] is a reducer or small state machine that can
//! be tested on its own against the in-memory [`Recorder`].
//!
//! ## Modules
//!
//! - [`types`] - Core types (ElementId, Bounds, Transform, ModeFlags, etc.)
//! - [`config`] - TOML-loadable configuration with defaults
//! - [`engine`] - Page registration
//! - [`layout`] - Taffy page geometry
//! - [`renderer`] - Presentation sink and recorder
//! - [`state`] - Scroll, header, anchor, reveal, parallax, typewriter, hover, rate limiting
//! - [`pipeline`] - The coordinator and its event enum
//! - [`input`] - Crossterm terminal adapter

pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::CoordinatorConfig;
pub use engine::{Page, PageBuilder};
pub use error::{Error, Result};
pub use layout::{Block, PageBlueprint, PageGeometry, compute_page_geometry};
pub use pipeline::{Coordinator, PageEvent};
pub use renderer::{PresentationOp, PresentationSink, Recorder, ScrollBehavior};
pub use state::{
    HeaderMode, Navigation, ScrollState, TypewriterPhase, debounce, reduce_header, throttle,
};
