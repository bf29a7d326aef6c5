//! Mount API - the scroll/visibility coordinator.
//!
//! [`Coordinator::mount`] takes a registered [`Page`], a configuration and a
//! [`PresentationSink`], puts every collaborator in its initial presentation
//! and then routes notifications to the sub-behaviors:
//!
//! ```text
//! scroll ──► header reducer
//!        ├─► throttle ──► apply_position ──► progress, visibility
//!        └─► settle debounce ─────────────┘
//! resize ──► debounce ──► viewport, progress, visibility
//! pointer ─► parallax
//! link ────► anchor navigator ──► scroll_to
//! tick ────► debounces, stagger timers, typewriter
//! ```
//!
//! Time is supplied by the host with every call. Nothing here reads a clock.
//!
//! # Example
//!
//! ```ignore
//! use folio_motion::pipeline::Coordinator;
//! use folio_motion::renderer::Recorder;
//!
//! let mut coordinator = Coordinator::mount(page, config, Recorder::new(), viewport, 0.0, 0)?;
//! coordinator.on_scroll(120.0, 16);
//! coordinator.tick(200);
//! let sink = coordinator.unmount();
//! ```

use std::collections::HashSet;

use spark_signals::{Signal, signal};

use crate::config::CoordinatorConfig;
use crate::engine::Page;
use crate::error::Result;
use crate::layout::PageGeometry;
use crate::renderer::{PresentationSink, ScrollBehavior};
use crate::state::reveal::{apply_hidden, apply_revealed};
use crate::state::scroll::scroll_progress;
use crate::state::{
    Debounce, HeaderMode, HeaderState, HoverStyles, IntersectionOptions, Navigation, Parallax,
    Revealer, ScrollState, ScrollTracker, Throttle, TimerQueue, Typewriter, TypewriterPhase,
    header_presentation, is_intersecting, reduce_header, resolve_navigation,
};
use crate::types::{ElementId, PointerSample, Viewport};

// =============================================================================
// Timers
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    RevealChild(ElementId),
}

// =============================================================================
// Coordinator
// =============================================================================

pub struct Coordinator<S: PresentationSink> {
    config: CoordinatorConfig,
    page: Page,
    sink: S,
    viewport: Viewport,

    tracker: ScrollTracker,
    applied_position: Option<f32>,
    header: HeaderState,
    written_header: Option<HeaderMode>,
    written_progress: Option<f32>,

    revealer: Revealer,
    reveal_options: IntersectionOptions,
    group_containers: HashSet<ElementId>,
    parallax: Parallax,
    typewriter: Option<Typewriter>,
    hover: HoverStyles,
    timers: TimerQueue<Timer>,

    scroll_throttle: Throttle,
    scroll_settle: Debounce<f32>,
    resize: Debounce<Viewport>,

    header_signal: Signal<HeaderMode>,
    progress_signal: Signal<f32>,
}

impl<S: PresentationSink> Coordinator<S> {
    /// Validate the configuration, write initial presentation and evaluate
    /// the page at the host's current scroll position.
    ///
    /// `initial_position` seeds the header reducer, so a page restored
    /// mid-scroll does not read its first notification as a downward jump.
    pub fn mount(
        page: Page,
        config: CoordinatorConfig,
        mut sink: S,
        viewport: Viewport,
        initial_position: f32,
        now_ms: u64,
    ) -> Result<Self> {
        config.validate()?;

        let mut revealer = Revealer::new(config.reveal.stagger_ms);
        let mut group_containers = HashSet::new();

        for &element in page.reveal_targets() {
            revealer.observe(element);
            apply_hidden(&mut sink, element, &config.reveal);
        }
        for group in page.groups() {
            revealer.observe_group(group.container, group.children.clone());
            group_containers.insert(group.container);
            for &child in &group.children {
                apply_hidden(&mut sink, child, &config.reveal);
            }
        }

        let parallax = Parallax::new(page.parallax(), &config.parallax);
        parallax.apply_float_delays(&mut sink);

        let typewriter = page.typewriter().map(|target| {
            for (line, _) in &target.lines {
                sink.set_opacity(*line, 0.0);
            }
            Typewriter::new(target.container, target.lines.iter().cloned(), &config.typewriter)
        });

        if page.nav().is_none() {
            tracing::debug!("no navigation bar, header behavior skipped");
        }
        if typewriter.is_none() {
            tracing::debug!("no typewriter target, typewriter skipped");
        }

        let hover = HoverStyles::new(page.hover_targets().iter().copied());
        let rate = &config.rate_limit;

        let mut coordinator = Self {
            reveal_options: IntersectionOptions::from(&config.reveal),
            scroll_throttle: Throttle::new(rate.scroll_throttle_ms),
            scroll_settle: Debounce::new(rate.scroll_settle_ms),
            resize: Debounce::new(rate.resize_debounce_ms),
            config,
            page,
            sink,
            viewport,
            tracker: ScrollTracker::new(),
            applied_position: None,
            header: HeaderState::default(),
            written_header: None,
            written_progress: None,
            revealer,
            group_containers,
            parallax,
            typewriter,
            hover,
            timers: TimerQueue::new(),
            header_signal: signal(HeaderMode::default()),
            progress_signal: signal(0.0),
        };

        let initial_position = if initial_position.is_finite() {
            initial_position.max(0.0)
        } else {
            0.0
        };
        coordinator.update_header(initial_position);
        coordinator.apply_position(initial_position, now_ms);
        tracing::debug!(
            position = initial_position,
            observed = coordinator.revealer.observed().len(),
            width = viewport.width,
            height = viewport.height,
            "coordinator mounted"
        );
        Ok(coordinator)
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Scroll notification. The header reducer sees every position. Progress
    /// and visibility are rate limited: the first call in each throttle
    /// window applies immediately, and the settle debounce applies the final
    /// position once scrolling stops.
    pub fn on_scroll(&mut self, position: f32, now_ms: u64) {
        self.tick(now_ms);
        if !position.is_finite() {
            tracing::trace!(position, "ignoring non-finite scroll position");
            return;
        }

        self.update_header(position);
        self.scroll_settle.call(position, now_ms);
        if self.scroll_throttle.admit(now_ms) {
            self.apply_position(position, now_ms);
        }
    }

    /// Viewport size change, debounced.
    pub fn on_resize(&mut self, viewport: Viewport, now_ms: u64) {
        self.tick(now_ms);
        self.resize.call(viewport, now_ms);
    }

    /// Pointer moved. Returns the number of parallax layers written.
    pub fn on_pointer_move(&mut self, sample: PointerSample) -> usize {
        self.parallax
            .on_pointer_move(sample, self.viewport, &mut self.sink)
    }

    /// In-page link activated. The host cancels its default navigation when
    /// [`Navigation::prevents_default`] is true.
    pub fn on_link_activated(&mut self, href: &str) -> Navigation {
        let page = &self.page;
        let navigation = resolve_navigation(
            href,
            |id| page.section_bounds(id),
            page.header_height(),
            &self.config.anchor,
        );

        match &navigation {
            Navigation::Scroll { section, offset } => {
                tracing::debug!(%section, offset, "anchor navigation");
                self.sink.scroll_to(*offset, ScrollBehavior::Smooth);
            }
            Navigation::Unresolved { target } => {
                tracing::debug!(%target, "anchor target not found");
            }
            Navigation::Ignored => {}
        }
        navigation
    }

    /// Intersection change reported by a host observer.
    ///
    /// The coordinator also computes intersections itself from registered
    /// bounds, so hosts only need this when they observe natively.
    pub fn on_intersection(&mut self, element: ElementId, intersecting: bool, now_ms: u64) {
        self.tick(now_ms);
        self.handle_intersection(element, intersecting, now_ms);

        let is_typewriter = self
            .typewriter
            .as_ref()
            .is_some_and(|tw| tw.container() == element);
        if intersecting && is_typewriter {
            self.trigger_typewriter(now_ms);
        }
    }

    pub fn on_pointer_enter(&mut self, element: ElementId) -> bool {
        self.hover.set_hovered(element, true, &mut self.sink)
    }

    pub fn on_pointer_leave(&mut self, element: ElementId) -> bool {
        self.hover.set_hovered(element, false, &mut self.sink)
    }

    /// Replace page positions after the host re-measured or re-ran layout.
    pub fn relayout(&mut self, geometry: &PageGeometry, now_ms: u64) {
        self.page.apply_geometry(geometry);
        self.refresh(now_ms);
    }

    /// Fire everything due at or before `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(viewport) = self.resize.poll(now_ms) {
            tracing::trace!(width = viewport.width, height = viewport.height, "resize applied");
            self.viewport = viewport;
            self.refresh(now_ms);
        }

        if let Some(position) = self.scroll_settle.poll(now_ms) {
            if self.applied_position != Some(position) {
                self.apply_position(position, now_ms);
            }
        }

        self.drain_timers(now_ms);
        if let Some(tw) = self.typewriter.as_mut() {
            tw.tick(now_ms, &mut self.sink);
        }
    }

    /// Earliest pending deadline, if any work is scheduled.
    pub fn next_deadline(&self) -> Option<u64> {
        [
            self.resize.deadline(),
            self.scroll_settle.deadline(),
            self.timers.next_deadline(),
            self.typewriter.as_ref().and_then(|tw| tw.token().deadline()),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Tear down: stop the typewriter, drop observations and pending timers,
    /// and hand the sink back.
    pub fn unmount(mut self) -> S {
        if let Some(tw) = self.typewriter.as_mut() {
            tw.cancel();
        }
        self.revealer.disconnect();
        self.timers.clear();
        self.scroll_settle.cancel();
        self.resize.cancel();
        tracing::debug!("coordinator unmounted");
        self.sink
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn scroll_state(&self) -> Option<ScrollState> {
        self.tracker.current()
    }

    pub fn header_mode(&self) -> HeaderMode {
        self.header.mode
    }

    /// Current scroll-progress percent.
    pub fn progress(&self) -> f32 {
        self.written_progress.unwrap_or(0.0)
    }

    pub fn is_revealed(&self, element: ElementId) -> bool {
        self.revealer.is_revealed(element)
    }

    /// Revealed flag of a named section, `None` for unknown ids.
    pub fn section_revealed(&self, id: &str) -> Option<bool> {
        self.page
            .section(id)
            .map(|section| self.revealer.is_revealed(section.element))
    }

    pub fn typewriter_phase(&self) -> Option<TypewriterPhase> {
        self.typewriter.as_ref().map(Typewriter::phase)
    }

    /// Reactive header mode. Updated only when the mode changes.
    pub fn header_signal(&self) -> Signal<HeaderMode> {
        self.header_signal.clone()
    }

    /// Reactive progress percent. Updated only when the value changes.
    pub fn progress_signal(&self) -> Signal<f32> {
        self.progress_signal.clone()
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn apply_position(&mut self, position: f32, now_ms: u64) {
        let state = self.tracker.update(position);
        self.applied_position = Some(position);
        tracing::trace!(position, direction = ?state.direction, "scroll applied");

        self.update_progress();
        self.evaluate_visibility(now_ms);
    }

    /// Re-run everything that depends on geometry or viewport.
    fn refresh(&mut self, now_ms: u64) {
        self.update_progress();
        self.evaluate_visibility(now_ms);
    }

    fn update_header(&mut self, position: f32) {
        let Some(nav) = self.page.nav() else {
            return;
        };

        self.header = reduce_header(self.header, position, &self.config.header);
        let mode = self.header.mode;
        if self.written_header == Some(mode) {
            return;
        }

        let presentation = header_presentation(mode, &self.config.header);
        self.sink.set_transform(nav, presentation.transform);
        self.sink
            .set_background(nav, presentation.background_alpha, presentation.blur_px);
        self.sink.set_flags(nav, presentation.flags);
        self.written_header = Some(mode);

        if self.header_signal.get() != mode {
            self.header_signal.set(mode);
        }
        tracing::trace!(visible = mode.visible, emphasized = mode.emphasized, "header mode");
    }

    fn update_progress(&mut self) {
        let percent = scroll_progress(
            self.tracker.position(),
            self.page.document_height(),
            self.viewport.height,
        );
        if self.written_progress == Some(percent) {
            return;
        }
        self.written_progress = Some(percent);

        if let Some(bar) = self.page.progress() {
            self.sink.set_progress(bar, percent);
        }
        if self.progress_signal.get() != percent {
            self.progress_signal.set(percent);
        }
    }

    fn evaluate_visibility(&mut self, now_ms: u64) {
        if self.viewport.is_degenerate() {
            return;
        }
        let scroll_y = self.tracker.position();
        let viewport_height = self.viewport.height;

        let due: Vec<ElementId> = self
            .revealer
            .observed()
            .iter()
            .copied()
            .filter(|&element| {
                self.page.bounds(element).is_some_and(|bounds| {
                    is_intersecting(bounds, scroll_y, viewport_height, self.reveal_options)
                })
            })
            .collect();
        for element in due {
            self.handle_intersection(element, true, now_ms);
        }

        let typewriter_visible = self
            .typewriter
            .as_ref()
            .filter(|tw| tw.phase() == TypewriterPhase::Idle)
            .and_then(|tw| self.page.bounds(tw.container()))
            .is_some_and(|bounds| {
                let options =
                    IntersectionOptions::new(self.config.typewriter.trigger_threshold, 0.0);
                is_intersecting(bounds, scroll_y, viewport_height, options)
            });
        if typewriter_visible {
            self.trigger_typewriter(now_ms);
        }
    }

    fn handle_intersection(&mut self, element: ElementId, intersecting: bool, now_ms: u64) {
        let Some(plan) = self.revealer.on_intersection(element, intersecting) else {
            return;
        };

        if !self.group_containers.contains(&plan.element) {
            apply_revealed(&mut self.sink, plan.element);
        }
        for (delay, child) in plan.staggered {
            self.timers
                .schedule(now_ms.saturating_add(delay), Timer::RevealChild(child));
        }
        self.drain_timers(now_ms);
    }

    fn drain_timers(&mut self, now_ms: u64) {
        while let Some((_, timer)) = self.timers.pop_due(now_ms) {
            match timer {
                Timer::RevealChild(child) => {
                    if self.revealer.reveal(child) {
                        apply_revealed(&mut self.sink, child);
                    }
                }
            }
        }
    }

    fn trigger_typewriter(&mut self, now_ms: u64) {
        if let Some(tw) = self.typewriter.as_mut() {
            if tw.trigger(now_ms) {
                tw.tick(now_ms, &mut self.sink);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{PresentationOp, Recorder};
    use crate::types::{Bounds, HoverKind, ModeFlags, Transform};
    use spark_signals::effect;
    use std::cell::Cell;
    use std::rc::Rc;

    const VIEWPORT: Viewport = Viewport::new(1000.0, 800.0);

    fn setup(page: Page) -> Coordinator<Recorder> {
        Coordinator::mount(page, CoordinatorConfig::default(), Recorder::new(), VIEWPORT, 0.0, 0)
            .unwrap()
    }

    fn nav_page() -> Page {
        Page::builder()
            .nav(ElementId(0), Bounds::new(0.0, 80.0))
            .section("about", ElementId(1), Bounds::new(800.0, 600.0))
            .document_height(3000.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_mount_writes_initial_header() {
        let c = setup(nav_page());
        assert_eq!(c.sink().last_transform(ElementId(0)), Some(Transform::IDENTITY));
        assert_eq!(c.sink().last_flags(ElementId(0)), Some(ModeFlags::NONE));
        assert_eq!(c.header_mode(), HeaderMode::default());
    }

    #[test]
    fn test_mount_rejects_invalid_config() {
        let mut config = CoordinatorConfig::default();
        config.reveal.threshold = 2.0;
        assert!(Coordinator::mount(nav_page(), config, Recorder::new(), VIEWPORT, 0.0, 0).is_err());
    }

    #[test]
    fn test_header_written_only_on_change() {
        let mut c = setup(nav_page());
        c.sink_mut().clear();

        c.on_scroll(10.0, 100);
        c.on_scroll(20.0, 200);
        assert!(c.sink().ops_for(ElementId(0)).is_empty());

        c.on_scroll(60.0, 300);
        assert_eq!(c.sink().last_flags(ElementId(0)), Some(ModeFlags::SCROLLED));
        assert!(c.header_mode().emphasized);
    }

    #[test]
    fn test_header_hides_scrolling_down() {
        let mut c = setup(nav_page());
        c.on_scroll(150.0, 100);
        assert!(!c.header_mode().visible);
        assert_eq!(
            c.sink().last_transform(ElementId(0)),
            Some(Transform::translate_y_percent(-100.0))
        );

        c.on_scroll(140.0, 200);
        assert!(c.header_mode().visible);
    }

    #[test]
    fn test_throttle_then_settle() {
        let mut c = setup(nav_page());

        c.on_scroll(10.0, 100);
        c.on_scroll(70.0, 105);
        assert_eq!(c.scroll_state().map(|s| s.position), Some(10.0));
        assert_eq!(c.next_deadline(), Some(205));

        c.tick(205);
        assert_eq!(c.scroll_state().map(|s| s.position), Some(70.0));
        assert!(c.header_mode().emphasized);
    }

    #[test]
    fn test_settle_skips_already_applied() {
        let mut c = setup(nav_page());
        c.on_scroll(150.0, 100);
        assert!(!c.header_mode().visible);

        // Re-applying 150 would compare 150 to 150 and re-show the header.
        c.tick(200);
        assert!(!c.header_mode().visible);
    }

    #[test]
    fn test_upward_step_dropped_by_throttle_shows_header() {
        let mut c = setup(nav_page());
        c.on_scroll(150.0, 100);
        c.on_scroll(200.0, 105);
        c.on_scroll(150.0, 110);

        // The last step was upward even though only 150 was ever applied.
        assert!(c.header_mode().visible);
        c.tick(1000);
        assert!(c.header_mode().visible);
        assert_eq!(c.sink().last_transform(ElementId(0)), Some(Transform::IDENTITY));
        assert_eq!(c.scroll_state().map(|s| s.position), Some(150.0));
    }

    #[test]
    fn test_mount_mid_page_keeps_header_visible() {
        let page = Page::builder()
            .nav(ElementId(0), Bounds::new(0.0, 80.0))
            .reveal(ElementId(1), Bounds::new(100.0, 300.0))
            .reveal(ElementId(2), Bounds::new(5200.0, 300.0))
            .document_height(8000.0)
            .build()
            .unwrap();
        let mut c =
            Coordinator::mount(page, CoordinatorConfig::default(), Recorder::new(), VIEWPORT, 5000.0, 0)
                .unwrap();

        assert!(c.header_mode().visible);
        assert!(c.header_mode().emphasized);
        assert_eq!(c.scroll_state().map(|s| s.position), Some(5000.0));
        assert!(!c.is_revealed(ElementId(1)));
        assert!(c.is_revealed(ElementId(2)));

        c.on_scroll(5000.0, 100);
        assert!(c.header_mode().visible);
        c.on_scroll(5100.0, 200);
        assert!(!c.header_mode().visible);
    }

    #[test]
    fn test_anchor_scrolls_below_header() {
        let mut c = setup(nav_page());
        let nav = c.on_link_activated("#about");
        assert!(nav.prevents_default());
        assert_eq!(
            c.sink().scroll_requests(),
            vec![(700.0, ScrollBehavior::Smooth)]
        );
    }

    #[test]
    fn test_anchor_unknown_and_external() {
        let mut c = setup(nav_page());
        assert!(c.on_link_activated("#missing").prevents_default());
        assert_eq!(c.on_link_activated("https://example.com"), Navigation::Ignored);
        assert!(c.sink().scroll_requests().is_empty());
    }

    #[test]
    fn test_reveal_on_scroll() {
        let page = Page::builder()
            .reveal(ElementId(1), Bounds::new(1500.0, 300.0))
            .document_height(3000.0)
            .build()
            .unwrap();
        let mut c = setup(page);
        assert_eq!(c.sink().last_opacity(ElementId(1)), Some(0.0));
        assert!(!c.is_revealed(ElementId(1)));

        c.on_scroll(900.0, 100);
        assert!(c.is_revealed(ElementId(1)));
        assert_eq!(c.sink().last_opacity(ElementId(1)), Some(1.0));

        c.on_scroll(0.0, 200);
        assert!(c.is_revealed(ElementId(1)));
    }

    #[test]
    fn test_visible_at_mount_revealed_immediately() {
        let page = Page::builder()
            .reveal_section("hero", ElementId(1), Bounds::new(0.0, 600.0))
            .build()
            .unwrap();
        let c = setup(page);
        assert_eq!(c.section_revealed("hero"), Some(true));
        assert_eq!(c.section_revealed("nope"), None);
    }

    #[test]
    fn test_group_stagger_via_ticks() {
        let page = Page::builder()
            .group(
                ElementId(10),
                Bounds::new(2000.0, 400.0),
                [ElementId(11), ElementId(12), ElementId(13)],
            )
            .document_height(4000.0)
            .build()
            .unwrap();
        let mut c = setup(page);

        c.on_scroll(1500.0, 1000);
        assert!(c.is_revealed(ElementId(11)));
        assert!(!c.is_revealed(ElementId(12)));
        assert_eq!(c.next_deadline(), Some(1100));

        c.tick(1100);
        assert!(c.is_revealed(ElementId(12)));
        assert!(!c.is_revealed(ElementId(13)));

        c.tick(1200);
        assert!(c.is_revealed(ElementId(13)));
    }

    #[test]
    fn test_host_reported_intersection() {
        let page = Page::builder()
            .reveal(ElementId(1), Bounds::new(5000.0, 100.0))
            .build()
            .unwrap();
        let mut c = setup(page);

        c.on_intersection(ElementId(1), false, 10);
        assert!(!c.is_revealed(ElementId(1)));
        c.on_intersection(ElementId(1), true, 20);
        assert!(c.is_revealed(ElementId(1)));
    }

    #[test]
    fn test_typewriter_starts_when_visible() {
        let page = Page::builder()
            .typewriter(
                ElementId(20),
                Bounds::new(100.0, 300.0),
                [(ElementId(21), "hi".to_string())],
            )
            .build()
            .unwrap();
        let mut c = setup(page);
        assert_eq!(c.typewriter_phase(), Some(TypewriterPhase::Armed));
        assert_eq!(c.sink().last_opacity(ElementId(21)), Some(0.0));

        c.tick(1000);
        assert_eq!(c.sink().texts(ElementId(21)), vec!["", "h"]);
        c.tick(1050);
        assert_eq!(c.typewriter_phase(), Some(TypewriterPhase::Done));
        assert_eq!(c.sink().texts(ElementId(21)).last().map(String::as_str), Some("hi"));
    }

    #[test]
    fn test_resize_debounced() {
        let page = Page::builder()
            .progress(ElementId(30))
            .document_height(1800.0)
            .build()
            .unwrap();
        let mut c = setup(page);

        c.on_scroll(500.0, 100);
        assert!((c.progress() - 50.0).abs() < 1e-3);

        c.on_resize(Viewport::new(1000.0, 1300.0), 200);
        assert_eq!(c.viewport(), VIEWPORT);

        c.tick(350);
        assert_eq!(c.viewport(), Viewport::new(1000.0, 1300.0));
        assert_eq!(c.progress(), 100.0);
        assert_eq!(c.sink().last_progress(ElementId(30)), Some(100.0));
    }

    #[test]
    fn test_pointer_and_hover() {
        let page = Page::builder()
            .parallax(ElementId(40))
            .hover(ElementId(41), HoverKind::Card)
            .build()
            .unwrap();
        let mut c = setup(page);

        assert_eq!(c.on_pointer_move(PointerSample::new(1000.0, 400.0)), 1);
        assert!(c.on_pointer_enter(ElementId(41)));
        assert!(!c.on_pointer_enter(ElementId(99)));
        assert_eq!(
            c.sink().last_transform(ElementId(41)),
            Some(Transform::translate_y(-8.0).with_scale(1.02))
        );
    }

    #[test]
    fn test_header_signal_fires_on_change_only() {
        let mut c = setup(nav_page());

        let runs = Rc::new(Cell::new(0));
        let count = runs.clone();
        let header = c.header_signal();
        let _e1 = effect(move || {
            let _ = header.get();
            count.set(count.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        c.on_scroll(10.0, 100);
        assert_eq!(runs.get(), 1);

        c.on_scroll(60.0, 200);
        assert_eq!(runs.get(), 2);
        assert!(c.header_signal().get().emphasized);
    }

    #[test]
    fn test_unmount_cancels_pending_work() {
        let page = Page::builder()
            .group(ElementId(10), Bounds::new(0.0, 100.0), [ElementId(11), ElementId(12)])
            .typewriter(ElementId(20), Bounds::new(0.0, 100.0), [(ElementId(21), "x".to_string())])
            .build()
            .unwrap();
        let mut c = setup(page);
        assert!(c.next_deadline().is_some());
        c.on_scroll(5.0, 10);

        let rec = c.unmount();
        assert!(rec.ops().iter().all(|op| !matches!(op, PresentationOp::Text(ElementId(21), _))));
    }
}
