//! Page Registry - the explicit registration list built once at startup.
//!
//! A [`Page`] records every collaborator the coordinator drives, by role:
//! - Navigation bar (optional; supplies the header height)
//! - Sections (named scroll targets, optionally reveal subjects)
//! - Reveal targets and staggered groups
//! - Parallax layers, typewriter lines, progress bar, hover targets
//!
//! Every role is optional. A page with nothing registered is valid and the
//! coordinator simply does nothing with it.
//!
//! # Example
//!
//! ```ignore
//! use folio_motion::engine::Page;
//! use folio_motion::types::{Bounds, ElementId};
//!
//! let page = Page::builder()
//!     .nav(ElementId(0), Bounds::new(0.0, 80.0))
//!     .section("about", ElementId(1), Bounds::new(800.0, 600.0))
//!     .reveal(ElementId(2), Bounds::new(900.0, 200.0))
//!     .build()?;
//! ```

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::layout::PageGeometry;
use crate::types::{Bounds, ElementId, HoverKind};

// =============================================================================
// Registered Collaborators
// =============================================================================

/// A named page region.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub element: ElementId,
    pub bounds: Bounds,
}

/// A container whose children reveal in sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealGroup {
    pub container: ElementId,
    pub bounds: Bounds,
    /// Children in document order.
    pub children: Vec<ElementId>,
}

/// The code-display element and its ordered lines.
#[derive(Debug, Clone, PartialEq)]
pub struct TypewriterTarget {
    pub container: ElementId,
    pub bounds: Bounds,
    pub lines: Vec<(ElementId, String)>,
}

// =============================================================================
// Page
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct Page {
    nav: Option<ElementId>,
    sections: Vec<Section>,
    section_index: HashMap<String, usize>,
    reveal_targets: Vec<ElementId>,
    groups: Vec<RevealGroup>,
    parallax: Vec<ElementId>,
    typewriter: Option<TypewriterTarget>,
    progress: Option<ElementId>,
    hover: Vec<(ElementId, HoverKind)>,
    bounds: HashMap<ElementId, Bounds>,
    document_height: f32,
}

impl Page {
    pub fn builder() -> PageBuilder {
        PageBuilder::default()
    }

    /// Navigation bar element, if the page has one.
    pub fn nav(&self) -> Option<ElementId> {
        self.nav
    }

    /// Height of the fixed header, 0 without a navigation bar.
    pub fn header_height(&self) -> f32 {
        self.nav
            .and_then(|nav| self.bounds(nav))
            .map(|b| b.height)
            .unwrap_or(0.0)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.section_index.get(id).map(|&i| &self.sections[i])
    }

    /// Current bounds of a named section.
    pub fn section_bounds(&self, id: &str) -> Option<Bounds> {
        self.section(id).map(|s| s.bounds)
    }

    /// Plain reveal targets, in registration order.
    pub fn reveal_targets(&self) -> &[ElementId] {
        &self.reveal_targets
    }

    pub fn groups(&self) -> &[RevealGroup] {
        &self.groups
    }

    pub fn parallax(&self) -> &[ElementId] {
        &self.parallax
    }

    pub fn typewriter(&self) -> Option<&TypewriterTarget> {
        self.typewriter.as_ref()
    }

    pub fn progress(&self) -> Option<ElementId> {
        self.progress
    }

    pub fn hover_targets(&self) -> &[(ElementId, HoverKind)] {
        &self.hover
    }

    /// Bounds of any element registered with a position.
    pub fn bounds(&self, element: ElementId) -> Option<Bounds> {
        self.bounds.get(&element).copied()
    }

    pub fn document_height(&self) -> f32 {
        self.document_height
    }

    /// Replace positions with freshly computed ones.
    ///
    /// Elements the geometry does not know keep their previous bounds.
    pub fn apply_geometry(&mut self, geometry: &PageGeometry) {
        for (element, bounds) in self.bounds.iter_mut() {
            if let Some(fresh) = geometry.bounds(*element) {
                *bounds = fresh;
            }
        }
        for section in &mut self.sections {
            if let Some(fresh) = geometry.bounds(section.element) {
                section.bounds = fresh;
            }
        }
        for group in &mut self.groups {
            if let Some(fresh) = geometry.bounds(group.container) {
                group.bounds = fresh;
            }
        }
        if let Some(tw) = &mut self.typewriter {
            if let Some(fresh) = geometry.bounds(tw.container) {
                tw.bounds = fresh;
            }
        }
        self.document_height = geometry.document_height;
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Collects registrations; errors are reported by [`PageBuilder::build`].
#[derive(Debug, Default)]
pub struct PageBuilder {
    page: Page,
    document_height: Option<f32>,
    geometry: Option<PageGeometry>,
    revealable: HashSet<ElementId>,
    parallax_set: HashSet<ElementId>,
    hover_set: HashSet<ElementId>,
    error: Option<Error>,
}

impl PageBuilder {
    fn fail(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn place(&mut self, element: ElementId, bounds: Bounds) {
        self.page.bounds.insert(element, bounds);
    }

    fn has_other_role(&self, element: ElementId) -> bool {
        self.page.nav == Some(element)
            || self.revealable.contains(&element)
            || self.page.sections.iter().any(|s| s.element == element)
    }

    fn claim_reveal(&mut self, element: ElementId) -> bool {
        if self.revealable.insert(element) {
            true
        } else {
            self.fail(Error::DuplicateElement(element));
            false
        }
    }

    pub fn nav(mut self, element: ElementId, bounds: Bounds) -> Self {
        self.page.nav = Some(element);
        self.place(element, bounds);
        self
    }

    /// Register a named scroll target.
    pub fn section(mut self, id: impl Into<String>, element: ElementId, bounds: Bounds) -> Self {
        let id = id.into();
        if self.page.section_index.contains_key(&id) {
            self.fail(Error::DuplicateSection(id));
            return self;
        }
        self.page.section_index.insert(id.clone(), self.page.sections.len());
        self.page.sections.push(Section { id, element, bounds });
        self.place(element, bounds);
        self
    }

    /// Register a section that is also revealed on scroll.
    pub fn reveal_section(self, id: impl Into<String>, element: ElementId, bounds: Bounds) -> Self {
        let builder = self.section(id, element, bounds);
        if builder.error.is_some() {
            return builder;
        }
        builder.reveal(element, bounds)
    }

    /// Register a one-shot reveal target.
    pub fn reveal(mut self, element: ElementId, bounds: Bounds) -> Self {
        if self.claim_reveal(element) {
            self.page.reveal_targets.push(element);
            self.place(element, bounds);
        }
        self
    }

    /// Register a staggered group: `container` is observed, `children`
    /// reveal in the given order once it qualifies.
    pub fn group(
        mut self,
        container: ElementId,
        bounds: Bounds,
        children: impl IntoIterator<Item = ElementId>,
    ) -> Self {
        if !self.claim_reveal(container) {
            return self;
        }
        let mut kept = Vec::new();
        for child in children {
            if self.claim_reveal(child) {
                kept.push(child);
            }
        }
        self.place(container, bounds);
        self.page.groups.push(RevealGroup {
            container,
            bounds,
            children: kept,
        });
        self
    }

    /// Register a parallax layer. Order determines speed.
    pub fn parallax(mut self, element: ElementId) -> Self {
        if self.parallax_set.insert(element) {
            self.page.parallax.push(element);
        } else {
            self.fail(Error::DuplicateElement(element));
        }
        self
    }

    /// Register the typewriter container and its lines. A second call
    /// replaces the first.
    pub fn typewriter(
        mut self,
        container: ElementId,
        bounds: Bounds,
        lines: impl IntoIterator<Item = (ElementId, String)>,
    ) -> Self {
        if let Some(previous) = self.page.typewriter.take() {
            if previous.container != container && !self.has_other_role(previous.container) {
                self.page.bounds.remove(&previous.container);
            }
        }
        self.place(container, bounds);
        self.page.typewriter = Some(TypewriterTarget {
            container,
            bounds,
            lines: lines.into_iter().collect(),
        });
        self
    }

    pub fn progress(mut self, element: ElementId) -> Self {
        self.page.progress = Some(element);
        self
    }

    pub fn hover(mut self, element: ElementId, kind: HoverKind) -> Self {
        if self.hover_set.insert(element) {
            self.page.hover.push((element, kind));
        } else {
            self.fail(Error::DuplicateElement(element));
        }
        self
    }

    /// Total document height. Defaults to the lowest registered bottom edge.
    pub fn document_height(mut self, height: f32) -> Self {
        self.document_height = Some(height);
        self
    }

    /// Take document height and every known position from a layout pass.
    /// Applied at build time, so it covers elements registered after this call.
    pub fn geometry(mut self, geometry: &PageGeometry) -> Self {
        self.geometry = Some(geometry.clone());
        self
    }

    pub fn build(self) -> Result<Page> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let mut page = self.page;
        if let Some(geometry) = &self.geometry {
            page.apply_geometry(geometry);
        }
        let measured = self.geometry.as_ref().map(|g| g.document_height);
        page.document_height = self.document_height.or(measured).unwrap_or_else(|| {
            page.bounds
                .values()
                .map(Bounds::bottom)
                .fold(0.0, f32::max)
        });
        tracing::debug!(
            sections = page.sections.len(),
            reveal = page.reveal_targets.len(),
            groups = page.groups.len(),
            parallax = page.parallax.len(),
            typewriter = page.typewriter.is_some(),
            "page registered"
        );
        Ok(page)
    }
}

// =============================================================================
// Tests
// =============================================================================
