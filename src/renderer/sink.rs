//! Presentation sink trait.
//!
//! The output contract: opacity, transforms, text, a small set of mode flags,
//! and in-page scroll requests. Nothing here creates, removes or reparents
//! elements.

use crate::types::{ElementId, ModeFlags, Transform};

/// How a scroll request should be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animate over a platform-chosen duration.
    #[default]
    Smooth,
    /// Jump straight to the target.
    Instant,
}

/// Receiver of presentation updates.
///
/// All writes are idempotent: applying the same value twice leaves the page
/// unchanged. Only the first four methods are required; the rest default to
/// no-ops so minimal hosts can ignore effects they do not render.
pub trait PresentationSink {
    /// Write element opacity (0.0 hidden, 1.0 fully visible).
    fn set_opacity(&mut self, element: ElementId, opacity: f32);

    /// Write element translation/scale.
    fn set_transform(&mut self, element: ElementId, transform: Transform);

    /// Replace the element's text content.
    fn set_text(&mut self, element: ElementId, text: &str);

    /// Request an in-page scroll to a document offset.
    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior);

    /// Replace the element's boolean mode flags.
    fn set_flags(&mut self, _element: ElementId, _flags: ModeFlags) {}

    /// Write background alpha and backdrop blur.
    fn set_background(&mut self, _element: ElementId, _alpha: f32, _blur_px: f32) {}

    /// Write the opacity/transform transition duration.
    fn set_transition(&mut self, _element: ElementId, _duration_ms: u64) {}

    /// Write the start delay of the element's idle animation.
    fn set_animation_delay(&mut self, _element: ElementId, _delay_ms: u64) {}

    /// Write a progress indicator fill, in percent.
    fn set_progress(&mut self, _element: ElementId, _percent: f32) {}
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn set_opacity(&mut self, element: ElementId, opacity: f32) {
        (**self).set_opacity(element, opacity);
    }

    fn set_transform(&mut self, element: ElementId, transform: Transform) {
        (**self).set_transform(element, transform);
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        (**self).set_text(element, text);
    }

    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior) {
        (**self).scroll_to(offset, behavior);
    }

    fn set_flags(&mut self, element: ElementId, flags: ModeFlags) {
        (**self).set_flags(element, flags);
    }

    fn set_background(&mut self, element: ElementId, alpha: f32, blur_px: f32) {
        (**self).set_background(element, alpha, blur_px);
    }

    fn set_transition(&mut self, element: ElementId, duration_ms: u64) {
        (**self).set_transition(element, duration_ms);
    }

    fn set_animation_delay(&mut self, element: ElementId, delay_ms: u64) {
        (**self).set_animation_delay(element, delay_ms);
    }

    fn set_progress(&mut self, element: ElementId, percent: f32) {
        (**self).set_progress(element, percent);
    }
}
