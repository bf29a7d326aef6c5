//! Anchor Navigator
//!
//! Turns activation of an in-page link (`href="#about"`) into a smooth scroll
//! that lands the section just below the fixed header:
//!
//! ```text
//! target = section.top - header_height - margin
//! ```
//!
//! Only hrefs starting with `#` are intercepted. An unknown id suppresses the
//! default jump and scrolls nowhere.

use crate::config::AnchorConfig;
use crate::types::Bounds;

/// Outcome of a link activation.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Not an in-page link; the host should navigate normally.
    Ignored,
    /// In-page link whose target does not exist. Default navigation is
    /// suppressed and nothing scrolls.
    Unresolved { target: String },
    /// Scroll requested to `offset`.
    Scroll { section: String, offset: f32 },
}

impl Navigation {
    /// True when the host must cancel its default link handling.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Extract the section id from an in-page href.
///
/// Returns `None` for anything that is not an in-page link. `"#"` yields an
/// empty id, which never resolves.
pub fn parse_anchor(href: &str) -> Option<&str> {
    href.trim().strip_prefix('#')
}

/// Scroll offset that aligns a section top just below the header.
pub fn target_offset(section_top: f32, header_height: f32, margin: f32) -> f32 {
    section_top - header_height - margin
}

/// Resolve an activation against the registered sections.
///
/// `lookup` maps a section id to its current bounds. The resulting offset is
/// clamped to the top of the document.
pub fn resolve_navigation(
    href: &str,
    lookup: impl FnOnce(&str) -> Option<Bounds>,
    header_height: f32,
    config: &AnchorConfig,
) -> Navigation {
    let Some(id) = parse_anchor(href) else {
        return Navigation::Ignored;
    };

    match (!id.is_empty()).then(|| lookup(id)).flatten() {
        Some(bounds) => Navigation::Scroll {
            section: id.to_string(),
            offset: target_offset(bounds.top, header_height, config.margin).max(0.0),
        },
        None => Navigation::Unresolved {
            target: id.to_string(),
        },
    }
}
