//! State Module - the coordinator's sub-behaviors
//!
//! Each behavior is a small reducer or state machine with explicit inputs and
//! outputs, testable without a page:
//!
//! - **Scroll** - position/direction tracking, progress percentage
//! - **Header** - pure reducer for the navigation bar's mode
//! - **Anchor** - in-page link resolution and scroll target
//! - **Reveal** - one-shot visibility reveals with staggered groups
//! - **Parallax** - pointer-relative drift for decorative elements
//! - **Typewriter** - grapheme-by-grapheme line typing
//! - **Hover** - card/icon hover styling
//! - **Rate limit** - debounce and throttle
//! - **Timers** - deferred single-threaded work

pub mod anchor;
pub mod header;
pub mod hover;
pub mod parallax;
pub mod rate_limit;
pub mod reveal;
pub mod scroll;
pub mod timers;
pub mod typewriter;

pub use anchor::{Navigation, parse_anchor, resolve_navigation, target_offset};
pub use header::{HeaderMode, HeaderPresentation, HeaderState, header_presentation, reduce_header};
pub use hover::{HoverStyles, hover_transform};
pub use parallax::{Parallax, ParallaxLayer, parallax_offset};
pub use rate_limit::{Debounce, Debounced, Throttle, Throttled, debounce, throttle};
pub use reveal::{
    IntersectionOptions, RevealPlan, RevealRegistry, Revealer, intersection_ratio,
    is_intersecting, plan_stagger,
};
pub use scroll::{ScrollState, ScrollTracker, scroll_progress};
pub use timers::TimerQueue;
pub use typewriter::{AnimatorToken, Typewriter, TypewriterPhase};
