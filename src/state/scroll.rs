//! Scroll State Module
//!
//! Tracks the page scroll position:
//! - Current position and direction of the last step
//! - Scroll progress percentage for the progress indicator
//! - Clamped scroll stepping for hosts that synthesize positions (wheel, keys)
//!
//! Architecture:
//! - ScrollState = single-writer value, recomputed on every applied notification
//! - previous position lives in the tracker, never in a global

use crate::types::ScrollDirection;

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Default lines per mouse wheel notch.
pub const WHEEL_LINES: u16 = 3;

/// Default scroll amount for Page Up/Down (90% of viewport).
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

// =============================================================================
// SCROLL STATE
// =============================================================================

/// Position plus direction of the most recent step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub position: f32,
    pub direction: ScrollDirection,
}

/// Derives [`ScrollState`] from successive position samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollTracker {
    last: Option<ScrollState>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a new position sample.
    ///
    /// Direction is `Down` only for a strict increase. The first sample has no
    /// predecessor and reports `Up`.
    pub fn update(&mut self, position: f32) -> ScrollState {
        let direction = match self.last {
            Some(prev) if position > prev.position => ScrollDirection::Down,
            _ => ScrollDirection::Up,
        };
        let state = ScrollState {
            position,
            direction,
        };
        self.last = Some(state);
        state
    }

    /// The most recent state, if any sample has been seen.
    pub fn current(&self) -> Option<ScrollState> {
        self.last
    }

    /// Last known position, 0 before the first sample.
    pub fn position(&self) -> f32 {
        self.last.map(|s| s.position).unwrap_or(0.0)
    }
}

// =============================================================================
// SCROLL PROGRESS
// =============================================================================

/// Percentage of the scrollable range covered, in `0..=100`.
///
/// Returns 0 when the document fits in the viewport.
pub fn scroll_progress(position: f32, document_height: f32, viewport_height: f32) -> f32 {
    let range = document_height - viewport_height;
    if range.is_nan() || range <= 0.0 || !position.is_finite() {
        return 0.0;
    }
    (position / range * 100.0).clamp(0.0, 100.0)
}

// =============================================================================
// SCROLL STEPPING
// =============================================================================

/// Largest valid scroll position for a document.
pub fn max_scroll(document_height: f32, viewport_height: f32) -> f32 {
    (document_height - viewport_height).max(0.0)
}

/// Apply a delta and clamp to `0..=max`.
///
/// Returns `None` if the position would not change (already at a boundary).
pub fn scroll_by(position: f32, delta: f32, max: f32) -> Option<f32> {
    let next = (position + delta).clamp(0.0, max.max(0.0));
    if next == position { None } else { Some(next) }
}

/// Delta for one Page Up/Down press.
pub fn page_delta(viewport_height: f32, factor: f32) -> f32 {
    viewport_height * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_is_up() {
        let mut tracker = ScrollTracker::new();
        let state = tracker.update(500.0);
        assert_eq!(state.direction, ScrollDirection::Up);
        assert_eq!(state.position, 500.0);
    }

    #[test]
    fn test_direction_follows_steps() {
        let mut tracker = ScrollTracker::new();
        tracker.update(0.0);
        assert_eq!(tracker.update(60.0).direction, ScrollDirection::Down);
        assert_eq!(tracker.update(40.0).direction, ScrollDirection::Up);
        // No movement counts as not-down
        assert_eq!(tracker.update(40.0).direction, ScrollDirection::Up);
        assert_eq!(tracker.position(), 40.0);
    }

    #[test]
    fn test_progress() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
        // Overscroll clamps
        assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-20.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_progress_document_fits() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_scroll_by_clamps() {
        assert_eq!(scroll_by(0.0, 48.0, 1000.0), Some(48.0));
        assert_eq!(scroll_by(990.0, 48.0, 1000.0), Some(1000.0));
        assert_eq!(scroll_by(1000.0, 48.0, 1000.0), None);
        assert_eq!(scroll_by(10.0, -48.0, 1000.0), Some(0.0));
        assert_eq!(scroll_by(0.0, -48.0, 1000.0), None);
    }

    #[test]
    fn test_max_scroll_never_negative() {
        assert_eq!(max_scroll(500.0, 800.0), 0.0);
        assert_eq!(max_scroll(3000.0, 800.0), 2200.0);
    }

    #[test]
    fn test_constants() {
        assert_eq!(WHEEL_LINES, 3);
        assert!((PAGE_SCROLL_FACTOR - 0.9).abs() < 0.001);
        assert!((page_delta(1000.0, PAGE_SCROLL_FACTOR) - 900.0).abs() < 0.001);
    }
}
