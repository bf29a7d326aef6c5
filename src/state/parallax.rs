//! Pointer Parallax
//!
//! Decorative elements drift with the pointer. Element `i` moves with speed
//! `(i + 1) * speed_step`; its offset is a pure function of the latest pointer
//! sample:
//!
//! ```text
//! dx = (x / width  - 0.5) * speed * amplitude
//! dy = (y / height - 0.5) * speed * amplitude
//! ```
//!
//! The same elements also get a staggered idle-animation delay at mount.

use crate::config::ParallaxConfig;
use crate::renderer::PresentationSink;
use crate::types::{ElementId, PointerSample, Transform, Viewport};

/// One decorative element and its speed factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub element: ElementId,
    pub speed: f32,
}

/// Offset for a pointer sample, or `None` for a degenerate viewport.
pub fn parallax_offset(
    sample: PointerSample,
    viewport: Viewport,
    speed: f32,
    amplitude: f32,
) -> Option<(f32, f32)> {
    if viewport.is_degenerate() {
        return None;
    }
    let nx = sample.x / viewport.width - 0.5;
    let ny = sample.y / viewport.height - 0.5;
    Some((nx * speed * amplitude, ny * speed * amplitude))
}

/// The set of parallax layers on a page.
#[derive(Debug, Clone, Default)]
pub struct Parallax {
    layers: Vec<ParallaxLayer>,
    amplitude: f32,
    float_delay_step_ms: u64,
}

impl Parallax {
    /// Build layers for `elements` in order, assigning increasing speeds.
    pub fn new(elements: &[ElementId], config: &ParallaxConfig) -> Self {
        let layers = elements
            .iter()
            .enumerate()
            .map(|(i, &element)| ParallaxLayer {
                element,
                speed: (i as f32 + 1.0) * config.speed_step,
            })
            .collect();

        Self {
            layers,
            amplitude: config.amplitude,
            float_delay_step_ms: config.float_delay_step_ms,
        }
    }

    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Write the staggered idle-animation delays.
    pub fn apply_float_delays<S: PresentationSink + ?Sized>(&self, sink: &mut S) {
        for (i, layer) in self.layers.iter().enumerate() {
            sink.set_animation_delay(layer.element, i as u64 * self.float_delay_step_ms);
        }
    }

    /// Write every layer's translation for a pointer sample.
    ///
    /// Returns the number of layers updated.
    pub fn on_pointer_move<S: PresentationSink + ?Sized>(
        &self,
        sample: PointerSample,
        viewport: Viewport,
        sink: &mut S,
    ) -> usize {
        let mut updated = 0;
        for layer in &self.layers {
            if let Some((dx, dy)) = parallax_offset(sample, viewport, layer.speed, self.amplitude) {
                sink.set_transform(layer.element, Transform::translate(dx, dy));
                updated += 1;
            }
        }
        updated
    }
}
