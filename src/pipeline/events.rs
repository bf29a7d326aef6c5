//! Page events - one enum for every notification the coordinator accepts.
//!
//! Hosts with a single event loop (the terminal adapter, a test harness)
//! produce [`PageEvent`]s and hand them to [`Coordinator::dispatch`].

use crate::renderer::PresentationSink;
use crate::state::Navigation;
use crate::types::{ElementId, PointerSample, Viewport};

use super::mount::Coordinator;

/// A notification from the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// New scroll position in px.
    Scroll(f32),
    PointerMove(PointerSample),
    Resize(Viewport),
    /// A link was activated with this href.
    LinkActivated(String),
    /// A host observer reported an intersection change.
    Intersection { element: ElementId, intersecting: bool },
    PointerEnter(ElementId),
    PointerLeave(ElementId),
    /// Nothing happened; only advance time.
    Tick,
}

impl<S: PresentationSink> Coordinator<S> {
    /// Route an event to its handler.
    ///
    /// Returns the navigation outcome for link activations, `None` otherwise.
    pub fn dispatch(&mut self, event: PageEvent, now_ms: u64) -> Option<Navigation> {
        match event {
            PageEvent::Scroll(position) => self.on_scroll(position, now_ms),
            PageEvent::PointerMove(sample) => {
                self.tick(now_ms);
                self.on_pointer_move(sample);
            }
            PageEvent::Resize(viewport) => self.on_resize(viewport, now_ms),
            PageEvent::LinkActivated(href) => {
                self.tick(now_ms);
                return Some(self.on_link_activated(&href));
            }
            PageEvent::Intersection {
                element,
                intersecting,
            } => self.on_intersection(element, intersecting, now_ms),
            PageEvent::PointerEnter(element) => {
                self.tick(now_ms);
                self.on_pointer_enter(element);
            }
            PageEvent::PointerLeave(element) => {
                self.tick(now_ms);
                self.on_pointer_leave(element);
            }
            PageEvent::Tick => self.tick(now_ms),
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoordinatorConfig;
    use crate::engine::Page;
    use crate::renderer::{Recorder, ScrollBehavior};
    use crate::types::{Bounds, HoverKind, ModeFlags};

    fn setup() -> Coordinator<Recorder> {
        let page = Page::builder()
            .nav(ElementId(0), Bounds::new(0.0, 60.0))
            .section("work", ElementId(1), Bounds::new(1200.0, 800.0))
            .hover(ElementId(2), HoverKind::Icon)
            .document_height(4000.0)
            .build()
            .unwrap();
        Coordinator::mount(
            page,
            CoordinatorConfig::default(),
            Recorder::new(),
            Viewport::new(1280.0, 720.0),
            0.0,
            0,
        )
        .unwrap()
    }

    #[test]
    fn test_link_returns_navigation() {
        let mut c = setup();
        let nav = c.dispatch(PageEvent::LinkActivated("#work".into()), 50);
        assert_eq!(
            nav,
            Some(Navigation::Scroll {
                section: "work".into(),
                offset: 1120.0
            })
        );
        assert_eq!(c.sink().scroll_requests(), vec![(1120.0, ScrollBehavior::Smooth)]);
    }

    #[test]
    fn test_other_events_return_none() {
        let mut c = setup();
        assert_eq!(c.dispatch(PageEvent::Scroll(300.0), 10), None);
        assert_eq!(c.dispatch(PageEvent::PointerEnter(ElementId(2)), 20), None);
        assert_eq!(c.sink().last_flags(ElementId(2)), Some(ModeFlags::ACCENT));

        c.dispatch(PageEvent::PointerLeave(ElementId(2)), 30);
        assert_eq!(c.sink().last_flags(ElementId(2)), Some(ModeFlags::NONE));
    }

    #[test]
    fn test_tick_event_advances_time() {
        let mut c = setup();
        c.dispatch(PageEvent::Scroll(10.0), 100);
        c.dispatch(PageEvent::Scroll(80.0), 105);
        assert!(!c.header_mode().emphasized);

        c.dispatch(PageEvent::Tick, 205);
        assert!(c.header_mode().emphasized);
    }
}
