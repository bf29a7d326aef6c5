//! Visibility Revealer
//!
//! One-shot reveal of registered elements the first time they intersect the
//! viewport. Each element moves `hidden -> revealed` exactly once; after its
//! first qualifying intersection it is no longer observed.
//!
//! Group containers reveal their direct children in document order, one
//! stagger step apart, starting at the container's own trigger.
//!
//! # Root box
//!
//! ```text
//! root.top    = scroll_y
//! root.bottom = scroll_y + viewport_height + root_margin_bottom
//! ratio       = overlap(element, root) / element.height
//! ```
//!
//! A negative `root_margin_bottom` shrinks the root so reveals fire slightly
//! after the element's top edge crosses the bottom of the screen.

use std::collections::{HashMap, HashSet};

use crate::config::RevealConfig;
use crate::renderer::PresentationSink;
use crate::types::{Bounds, ElementId, Transform};

// =============================================================================
// INTERSECTION
// =============================================================================

/// Threshold and root margin for one observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionOptions {
    /// Fraction of the element that must be inside the root box.
    pub threshold: f32,
    /// Adjustment of the root's bottom edge, in pixels.
    pub root_margin_bottom: f32,
}

impl IntersectionOptions {
    pub const fn new(threshold: f32, root_margin_bottom: f32) -> Self {
        Self {
            threshold,
            root_margin_bottom,
        }
    }
}

impl From<&RevealConfig> for IntersectionOptions {
    fn from(config: &RevealConfig) -> Self {
        Self::new(config.threshold, config.root_margin_bottom)
    }
}

/// Visible fraction of `bounds` inside the root box, in `0..=1`.
pub fn intersection_ratio(
    bounds: Bounds,
    scroll_y: f32,
    viewport_height: f32,
    root_margin_bottom: f32,
) -> f32 {
    let root_top = scroll_y;
    let root_bottom = scroll_y + viewport_height + root_margin_bottom;
    if root_bottom < root_top {
        return 0.0;
    }

    if bounds.height <= 0.0 {
        let inside = bounds.top >= root_top && bounds.top <= root_bottom;
        return if inside { 1.0 } else { 0.0 };
    }

    let overlap = bounds.bottom().min(root_bottom) - bounds.top.max(root_top);
    (overlap / bounds.height).clamp(0.0, 1.0)
}

/// True when `bounds` counts as intersecting under `options`.
///
/// A zero threshold accepts edge contact, matching the platform observer.
pub fn is_intersecting(
    bounds: Bounds,
    scroll_y: f32,
    viewport_height: f32,
    options: IntersectionOptions,
) -> bool {
    if options.threshold <= 0.0 {
        let root_top = scroll_y;
        let root_bottom = scroll_y + viewport_height + options.root_margin_bottom;
        return root_bottom >= root_top
            && bounds.bottom() >= root_top
            && bounds.top <= root_bottom;
    }
    intersection_ratio(bounds, scroll_y, viewport_height, options.root_margin_bottom)
        >= options.threshold
}

// =============================================================================
// REVEAL REGISTRY
// =============================================================================

/// Element -> revealed flag. A flag set to true is never cleared.
#[derive(Debug, Default, Clone)]
pub struct RevealRegistry {
    revealed: HashMap<ElementId, bool>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track an element as hidden. Already-tracked elements keep their flag.
    pub fn register(&mut self, element: ElementId) {
        self.revealed.entry(element).or_insert(false);
    }

    /// Flip an element to revealed. Returns true only on the first flip.
    pub fn reveal(&mut self, element: ElementId) -> bool {
        match self.revealed.get_mut(&element) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, element: ElementId) -> bool {
        self.revealed.get(&element).copied().unwrap_or(false)
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.revealed.contains_key(&element)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.values().filter(|r| **r).count()
    }
}

// =============================================================================
// REVEALER
// =============================================================================

/// Result of a container's first qualifying intersection.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealPlan {
    /// The element that triggered.
    pub element: ElementId,
    /// Children to reveal later, as (delay after trigger in ms, element).
    pub staggered: Vec<(u64, ElementId)>,
}

/// Delays for a group's children: `0, step, 2*step, ...` in document order.
pub fn plan_stagger(children: &[ElementId], stagger_ms: u64) -> Vec<(u64, ElementId)> {
    children
        .iter()
        .enumerate()
        .map(|(i, &child)| (i as u64 * stagger_ms, child))
        .collect()
}

/// Observer bookkeeping for reveal targets and group containers.
#[derive(Debug, Default, Clone)]
pub struct Revealer {
    registry: RevealRegistry,
    /// Elements still awaiting their first intersection, in registration order.
    observed: Vec<ElementId>,
    observed_set: HashSet<ElementId>,
    groups: HashMap<ElementId, Vec<ElementId>>,
    stagger_ms: u64,
}

impl Revealer {
    pub fn new(stagger_ms: u64) -> Self {
        Self {
            stagger_ms,
            ..Self::default()
        }
    }

    /// Start observing a plain reveal target.
    pub fn observe(&mut self, element: ElementId) {
        self.registry.register(element);
        if !self.registry.is_revealed(element) && self.observed_set.insert(element) {
            self.observed.push(element);
        }
    }

    /// Start observing a group container. Its children are tracked but not
    /// observed individually.
    pub fn observe_group(&mut self, container: ElementId, children: Vec<ElementId>) {
        for &child in &children {
            self.registry.register(child);
        }
        self.groups.insert(container, children);
        self.observe(container);
    }

    /// Elements still being watched, in registration order.
    pub fn observed(&self) -> &[ElementId] {
        &self.observed
    }

    pub fn is_observed(&self, element: ElementId) -> bool {
        self.observed_set.contains(&element)
    }

    /// Children registered for a group container.
    pub fn children(&self, container: ElementId) -> &[ElementId] {
        self.groups.get(&container).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn registry(&self) -> &RevealRegistry {
        &self.registry
    }

    pub fn is_revealed(&self, element: ElementId) -> bool {
        self.registry.is_revealed(element)
    }

    /// Handle an intersection change for an observed element.
    ///
    /// Returns a plan the first time the element qualifies; every later call
    /// (or a call for an unobserved element) returns `None`.
    pub fn on_intersection(&mut self, element: ElementId, intersecting: bool) -> Option<RevealPlan> {
        if !intersecting || !self.observed_set.remove(&element) {
            return None;
        }
        self.observed.retain(|e| *e != element);

        if !self.registry.reveal(element) {
            return None;
        }

        let staggered = self
            .groups
            .get(&element)
            .map(|children| plan_stagger(children, self.stagger_ms))
            .unwrap_or_default();

        tracing::trace!(%element, children = staggered.len(), "reveal triggered");
        Some(RevealPlan { element, staggered })
    }

    /// Reveal a tracked element directly (used for staggered children).
    ///
    /// Returns true only on the first reveal.
    pub fn reveal(&mut self, element: ElementId) -> bool {
        if self.observed_set.remove(&element) {
            self.observed.retain(|e| *e != element);
        }
        self.registry.reveal(element)
    }

    /// Drop every remaining observation.
    pub fn disconnect(&mut self) {
        self.observed.clear();
        self.observed_set.clear();
    }
}

// =============================================================================
// PRESENTATION
// =============================================================================

/// Put an element in its pre-reveal presentation.
pub fn apply_hidden<S: PresentationSink + ?Sized>(
    sink: &mut S,
    element: ElementId,
    config: &RevealConfig,
) {
    sink.set_opacity(element, 0.0);
    sink.set_transform(element, Transform::translate_y(config.hidden_offset_px));
    sink.set_transition(element, config.transition_ms);
}

/// Put an element in its final, revealed presentation.
pub fn apply_revealed<S: PresentationSink + ?Sized>(sink: &mut S, element: ElementId) {
    sink.set_opacity(element, 1.0);
    sink.set_transform(element, Transform::IDENTITY);
}
