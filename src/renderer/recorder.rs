//! In-memory presentation sink.
//!
//! Records every write in order so tests (and headless hosts) can inspect
//! exactly what the coordinator asked the page to do.

use super::sink::{PresentationSink, ScrollBehavior};
use crate::types::{ElementId, ModeFlags, Transform};

/// One recorded presentation write.
#[derive(Debug, Clone, PartialEq)]
pub enum PresentationOp {
    Opacity(ElementId, f32),
    Transform(ElementId, Transform),
    Text(ElementId, String),
    ScrollTo(f32, ScrollBehavior),
    Flags(ElementId, ModeFlags),
    Background(ElementId, f32, f32),
    Transition(ElementId, u64),
    AnimationDelay(ElementId, u64),
    Progress(ElementId, f32),
}

impl PresentationOp {
    /// The element this op targets, if any.
    pub fn element(&self) -> Option<ElementId> {
        match self {
            Self::Opacity(e, _)
            | Self::Transform(e, _)
            | Self::Text(e, _)
            | Self::Flags(e, _)
            | Self::Background(e, _, _)
            | Self::Transition(e, _)
            | Self::AnimationDelay(e, _)
            | Self::Progress(e, _) => Some(*e),
            Self::ScrollTo(..) => None,
        }
    }
}

/// Sink that appends every write to a list.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    ops: Vec<PresentationOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded ops, oldest first.
    pub fn ops(&self) -> &[PresentationOp] {
        &self.ops
    }

    /// Drain the recorded ops.
    pub fn take(&mut self) -> Vec<PresentationOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Ops targeting one element, oldest first.
    pub fn ops_for(&self, element: ElementId) -> Vec<&PresentationOp> {
        self.ops
            .iter()
            .filter(|op| op.element() == Some(element))
            .collect()
    }

    /// Every text value written to an element, in order.
    pub fn texts(&self, element: ElementId) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PresentationOp::Text(e, text) if *e == element => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Most recent opacity written to an element.
    pub fn last_opacity(&self, element: ElementId) -> Option<f32> {
        self.ops.iter().rev().find_map(|op| match op {
            PresentationOp::Opacity(e, v) if *e == element => Some(*v),
            _ => None,
        })
    }

    /// Most recent transform written to an element.
    pub fn last_transform(&self, element: ElementId) -> Option<Transform> {
        self.ops.iter().rev().find_map(|op| match op {
            PresentationOp::Transform(e, t) if *e == element => Some(*t),
            _ => None,
        })
    }

    /// Most recent flags written to an element.
    pub fn last_flags(&self, element: ElementId) -> Option<ModeFlags> {
        self.ops.iter().rev().find_map(|op| match op {
            PresentationOp::Flags(e, f) if *e == element => Some(*f),
            _ => None,
        })
    }

    /// Most recent progress written to an element.
    pub fn last_progress(&self, element: ElementId) -> Option<f32> {
        self.ops.iter().rev().find_map(|op| match op {
            PresentationOp::Progress(e, p) if *e == element => Some(*p),
            _ => None,
        })
    }

    /// Every scroll request, in order.
    pub fn scroll_requests(&self) -> Vec<(f32, ScrollBehavior)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PresentationOp::ScrollTo(offset, behavior) => Some((*offset, *behavior)),
                _ => None,
            })
            .collect()
    }
}

impl PresentationSink for Recorder {
    fn set_opacity(&mut self, element: ElementId, opacity: f32) {
        self.ops.push(PresentationOp::Opacity(element, opacity));
    }

    fn set_transform(&mut self, element: ElementId, transform: Transform) {
        self.ops.push(PresentationOp::Transform(element, transform));
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        self.ops.push(PresentationOp::Text(element, text.to_string()));
    }

    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior) {
        self.ops.push(PresentationOp::ScrollTo(offset, behavior));
    }

    fn set_flags(&mut self, element: ElementId, flags: ModeFlags) {
        self.ops.push(PresentationOp::Flags(element, flags));
    }

    fn set_background(&mut self, element: ElementId, alpha: f32, blur_px: f32) {
        self.ops.push(PresentationOp::Background(element, alpha, blur_px));
    }

    fn set_transition(&mut self, element: ElementId, duration_ms: u64) {
        self.ops.push(PresentationOp::Transition(element, duration_ms));
    }

    fn set_animation_delay(&mut self, element: ElementId, delay_ms: u64) {
        self.ops.push(PresentationOp::AnimationDelay(element, delay_ms));
    }

    fn set_progress(&mut self, element: ElementId, percent: f32) {
        self.ops.push(PresentationOp::Progress(element, percent));
    }
}
