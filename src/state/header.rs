//! Header State Reducer
//!
//! Derives the navigation bar's mode from the scroll position. The reducer is
//! pure: it takes the prior [`HeaderState`] and a new position and returns the
//! next state. The only memory is the previous position, overwritten on every
//! call.
//!
//! - `emphasized = position > emphasis_threshold`
//! - `visible = !(position > previous && position > hide_threshold)`

use crate::config::HeaderConfig;
use crate::types::{ModeFlags, Transform};

// =============================================================================
// TYPES
// =============================================================================

/// Derived presentation mode of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMode {
    pub visible: bool,
    pub emphasized: bool,
}

impl Default for HeaderMode {
    fn default() -> Self {
        Self {
            visible: true,
            emphasized: false,
        }
    }
}

impl HeaderMode {
    /// Mode flags written to the header element.
    pub fn flags(&self) -> ModeFlags {
        let mut flags = ModeFlags::NONE;
        if self.emphasized {
            flags |= ModeFlags::SCROLLED;
        }
        if !self.visible {
            flags |= ModeFlags::HIDDEN;
        }
        flags
    }
}

/// Reducer state threaded between scroll notifications.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderState {
    /// Position seen by the previous call, `None` before the first one.
    pub previous_position: Option<f32>,
    pub mode: HeaderMode,
}

/// Style values written to the header for a given mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderPresentation {
    pub transform: Transform,
    pub background_alpha: f32,
    pub blur_px: f32,
    pub flags: ModeFlags,
}

// =============================================================================
// REDUCER
// =============================================================================

/// Compute the next header state for a scroll position.
///
/// The first call has no previous position and treats the current one as its
/// own predecessor, so the initial frame never hides the header.
pub fn reduce_header(state: HeaderState, position: f32, config: &HeaderConfig) -> HeaderState {
    let previous = state.previous_position.unwrap_or(position);
    let scrolling_down = position > previous;

    HeaderState {
        previous_position: Some(position),
        mode: HeaderMode {
            visible: !(scrolling_down && position > config.hide_threshold),
            emphasized: position > config.emphasis_threshold,
        },
    }
}

/// Map a mode to concrete style values.
pub fn header_presentation(mode: HeaderMode, config: &HeaderConfig) -> HeaderPresentation {
    HeaderPresentation {
        transform: if mode.visible {
            Transform::IDENTITY
        } else {
            Transform::translate_y_percent(-100.0)
        },
        background_alpha: if mode.emphasized {
            config.emphasized_alpha
        } else {
            config.resting_alpha
        },
        blur_px: config.blur_px,
        flags: mode.flags(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(positions: &[f32], config: &HeaderConfig) -> Vec<HeaderMode> {
        let mut state = HeaderState::default();
        positions
            .iter()
            .map(|&p| {
                state = reduce_header(state, p, config);
                state.mode
            })
            .collect()
    }

    #[test]
    fn test_emphasis_and_visibility_sequence() {
        let config = HeaderConfig::default();
        let modes = run(&[0.0, 60.0, 40.0], &config);

        let emphasized: Vec<bool> = modes.iter().map(|m| m.emphasized).collect();
        let visible: Vec<bool> = modes.iter().map(|m| m.visible).collect();
        assert_eq!(emphasized, vec![false, true, false]);
        assert_eq!(visible, vec![true, true, true]);
    }

    #[test]
    fn test_hides_scrolling_down_past_threshold() {
        let config = HeaderConfig::default();
        let modes = run(&[0.0, 150.0, 300.0], &config);
        assert!(modes[0].visible);
        assert!(!modes[1].visible);
        assert!(!modes[2].visible);
    }

    #[test]
    fn test_upward_step_always_shows() {
        let config = HeaderConfig::default();
        let modes = run(&[0.0, 500.0, 499.0], &config);
        assert!(!modes[1].visible);
        assert!(modes[2].visible);
        assert!(modes[2].emphasized);
    }

    #[test]
    fn test_first_call_never_hides() {
        let config = HeaderConfig::default();
        let state = reduce_header(HeaderState::default(), 5_000.0, &config);
        assert!(state.mode.visible);
        assert_eq!(state.previous_position, Some(5_000.0));
    }

    #[test]
    fn test_boundary_is_strict() {
        let config = HeaderConfig::default();
        let modes = run(&[0.0, 50.0, 100.0], &config);
        assert!(!modes[1].emphasized); // 50 is not > 50
        assert!(modes[2].visible); // 100 is not > 100
    }

    #[test]
    fn test_presentation_values() {
        let config = HeaderConfig::default();

        let resting = header_presentation(HeaderMode::default(), &config);
        assert_eq!(resting.transform, Transform::IDENTITY);
        assert_eq!(resting.background_alpha, 0.8);
        assert_eq!(resting.blur_px, 20.0);
        assert_eq!(resting.flags, ModeFlags::NONE);

        let hidden = header_presentation(
            HeaderMode {
                visible: false,
                emphasized: true,
            },
            &config,
        );
        assert_eq!(hidden.transform, Transform::translate_y_percent(-100.0));
        assert_eq!(hidden.background_alpha, 0.95);
        assert_eq!(hidden.flags, ModeFlags::SCROLLED | ModeFlags::HIDDEN);
    }
}
