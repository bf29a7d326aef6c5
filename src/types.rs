//! Core types for folio-motion.
//!
//! These are the values that flow from host notifications through the
//! coordinator and out to the presentation sink. Everything is plain data:
//! positions and sizes are CSS pixels as `f32`, time is milliseconds as `u64`.

use std::fmt;

// =============================================================================
// Element handles
// =============================================================================

/// Opaque handle to a page element owned by the host.
///
/// The coordinator never creates or destroys elements; it only refers to the
/// ones registered at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ElementId(pub usize);

impl ElementId {
    /// Get the raw index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Distance from the top of the document.
    pub top: f32,
    /// Rendered height.
    pub height: f32,
}

impl Bounds {
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Bottom edge in document coordinates.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either axis has no usable extent.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Pointer position relative to the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Transform
// =============================================================================

/// How the vertical component of a translation is expressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Absolute pixels.
    Px(f32),
    /// Percentage of the element's own size (CSS `translateY(-100%)`).
    Percent(f32),
}

impl Default for Offset {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

/// A 2D translation plus uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f32,
    pub y: Offset,
    pub scale: f32,
}

impl Transform {
    /// No translation, scale 1.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: Offset::Px(0.0),
        scale: 1.0,
    };

    /// Translate by pixels on both axes.
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            x,
            y: Offset::Px(y),
            scale: 1.0,
        }
    }

    /// Translate vertically by pixels.
    pub const fn translate_y(y: f32) -> Self {
        Self::translate(0.0, y)
    }

    /// Translate vertically by a percentage of the element height.
    pub const fn translate_y_percent(percent: f32) -> Self {
        Self {
            x: 0.0,
            y: Offset::Percent(percent),
            scale: 1.0,
        }
    }

    /// Return a copy with the given scale.
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// Scroll direction
// =============================================================================

/// Direction of the most recent scroll step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    /// Position decreased or stayed put.
    #[default]
    Up,
    /// Position strictly increased.
    Down,
}

// =============================================================================
// Mode flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Boolean presentation flags written to an element.
    ///
    /// Combine with bitwise OR: `ModeFlags::SCROLLED | ModeFlags::HIDDEN`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct ModeFlags: u8 {
        const NONE = 0;
        /// Header is past the emphasis threshold.
        const SCROLLED = 1 << 0;
        /// Header is slid out of view.
        const HIDDEN = 1 << 1;
        /// Element is in its hover-accented state.
        const ACCENT = 1 << 2;
    }
}

// =============================================================================
// Hover kinds
// =============================================================================

/// Which hover treatment an element receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverKind {
    /// Lift and slightly enlarge (skill cards).
    Card,
    /// Enlarge and accent (contact method icons).
    Icon,
}
