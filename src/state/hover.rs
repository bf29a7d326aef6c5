//! Hover styling for cards and icons.

use std::collections::HashMap;

use crate::renderer::PresentationSink;
use crate::types::{ElementId, HoverKind, ModeFlags, Transform};

/// Presentation written on pointer enter/leave.
pub fn hover_transform(kind: HoverKind, hovered: bool) -> Transform {
    match (kind, hovered) {
        (HoverKind::Card, true) => Transform::translate_y(-8.0).with_scale(1.02),
        (HoverKind::Card, false) => Transform::translate_y(-5.0),
        (HoverKind::Icon, true) => Transform::IDENTITY.with_scale(1.1),
        (HoverKind::Icon, false) => Transform::IDENTITY,
    }
}

/// Registered hover targets.
#[derive(Debug, Default, Clone)]
pub struct HoverStyles {
    targets: HashMap<ElementId, HoverKind>,
}

impl HoverStyles {
    pub fn new(targets: impl IntoIterator<Item = (ElementId, HoverKind)>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
        }
    }

    pub fn kind(&self, element: ElementId) -> Option<HoverKind> {
        self.targets.get(&element).copied()
    }

    /// Apply the enter/leave style. Unregistered elements are ignored.
    pub fn set_hovered<S: PresentationSink + ?Sized>(
        &self,
        element: ElementId,
        hovered: bool,
        sink: &mut S,
    ) -> bool {
        let Some(kind) = self.kind(element) else {
            return false;
        };

        sink.set_transform(element, hover_transform(kind, hovered));
        if kind == HoverKind::Icon {
            let flags = if hovered { ModeFlags::ACCENT } else { ModeFlags::NONE };
            sink.set_flags(element, flags);
        }
        true
    }
}
