//! Terminal Input - crossterm events as page notifications
//!
//! Lets a terminal host drive a coordinator. Cell coordinates become pixels
//! through the configured cell size; the wheel and paging keys synthesize
//! clamped scroll positions, since a terminal has no native page scroll.
//!
//! # API
//!
//! - `TerminalInput::convert` - Convert a crossterm Event to a PageEvent
//! - `TerminalInput::poll_event` - Non-blocking read with timeout
//! - `TerminalInput::read_event` - Blocking read
//! - `enable_mouse` / `disable_mouse` - Control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use folio_motion::input::{TerminalInput, enable_mouse};
//! use std::time::Duration;
//!
//! enable_mouse()?;
//! let mut input = TerminalInput::new(&config.terminal, 120, 40, page.document_height());
//! loop {
//!     if let Some(event) = input.poll_event(Duration::from_millis(16))? {
//!         coordinator.dispatch(event, now_ms());
//!     }
//!     coordinator.tick(now_ms());
//! }
//! ```

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode,
    KeyEvent as CrosstermKeyEvent, KeyEventKind, MouseEvent as CrosstermMouseEvent,
    MouseEventKind, poll, read,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

use crate::config::TerminalConfig;
use crate::pipeline::PageEvent;
use crate::state::scroll::{max_scroll, page_delta, scroll_by};
use crate::types::{PointerSample, Viewport};

// =============================================================================
// TERMINAL INPUT
// =============================================================================

/// Converts terminal events and keeps the synthesized scroll position.
#[derive(Debug, Clone)]
pub struct TerminalInput {
    config: TerminalConfig,
    viewport: Viewport,
    document_height: f32,
    position: f32,
}

impl TerminalInput {
    pub fn new(config: &TerminalConfig, cols: u16, rows: u16, document_height: f32) -> Self {
        Self {
            viewport: cells_to_viewport(config, cols, rows),
            config: config.clone(),
            document_height,
            position: 0.0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Sync after the host scrolled by other means (anchor navigation).
    pub fn set_position(&mut self, position: f32) {
        self.position = position.clamp(0.0, self.max_scroll());
    }

    pub fn set_document_height(&mut self, height: f32) {
        self.document_height = height;
        self.position = self.position.min(self.max_scroll());
    }

    fn max_scroll(&self) -> f32 {
        max_scroll(self.document_height, self.viewport.height)
    }

    fn line_height(&self) -> f32 {
        self.config.cell_height_px
    }

    fn scroll(&mut self, delta: f32) -> Option<PageEvent> {
        let next = scroll_by(self.position, delta, self.max_scroll())?;
        self.position = next;
        Some(PageEvent::Scroll(next))
    }

    fn scroll_to(&mut self, target: f32) -> Option<PageEvent> {
        self.scroll(target - self.position)
    }

    // -------------------------------------------------------------------------
    // Conversion
    // -------------------------------------------------------------------------

    /// Convert one terminal event. Returns `None` for events with no page
    /// meaning or scrolls that hit a boundary.
    pub fn convert(&mut self, event: CrosstermEvent) -> Option<PageEvent> {
        match event {
            CrosstermEvent::Mouse(mouse) => self.convert_mouse(mouse),
            CrosstermEvent::Key(key) => self.convert_key(key),
            CrosstermEvent::Resize(cols, rows) => {
                self.viewport = cells_to_viewport(&self.config, cols, rows);
                self.position = self.position.min(self.max_scroll());
                Some(PageEvent::Resize(self.viewport))
            }
            _ => None,
        }
    }

    fn convert_mouse(&mut self, event: CrosstermMouseEvent) -> Option<PageEvent> {
        let wheel = self.config.wheel_lines as f32 * self.line_height();
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(PageEvent::PointerMove(
                PointerSample::new(
                    event.column as f32 * self.config.cell_width_px,
                    event.row as f32 * self.config.cell_height_px,
                ),
            )),
            MouseEventKind::ScrollDown => self.scroll(wheel),
            MouseEventKind::ScrollUp => self.scroll(-wheel),
            _ => None,
        }
    }

    fn convert_key(&mut self, event: CrosstermKeyEvent) -> Option<PageEvent> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let page = page_delta(self.viewport.height, self.config.page_factor);
        match event.code {
            KeyCode::Down => self.scroll(self.line_height()),
            KeyCode::Up => self.scroll(-self.line_height()),
            KeyCode::PageDown => self.scroll(page),
            KeyCode::PageUp => self.scroll(-page),
            KeyCode::Home => self.scroll_to(0.0),
            KeyCode::End => self.scroll_to(self.max_scroll()),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Polling
    // -------------------------------------------------------------------------

    /// Poll for an event with timeout.
    /// Returns None if nothing arrived or the event had no page meaning.
    pub fn poll_event(&mut self, timeout: Duration) -> std::io::Result<Option<PageEvent>> {
        if poll(timeout)? {
            self.read_event()
        } else {
            Ok(None)
        }
    }

    /// Read the next event (blocking).
    pub fn read_event(&mut self) -> std::io::Result<Option<PageEvent>> {
        Ok(self.convert(read()?))
    }
}

/// Terminal size in cells to a pixel viewport.
pub fn cells_to_viewport(config: &TerminalConfig, cols: u16, rows: u16) -> Viewport {
    Viewport::new(
        cols as f32 * config.cell_width_px,
        rows as f32 * config.cell_height_px,
    )
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};

    // 100x50 cells of 8x16 px = 800x800 px viewport, 3000px document.
    fn setup() -> TerminalInput {
        TerminalInput::new(&TerminalConfig::default(), 100, 50, 3000.0)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
        CrosstermEvent::Mouse(CrosstermMouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    fn key(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(CrosstermKeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_viewport_from_cells() {
        assert_eq!(setup().viewport(), Viewport::new(800.0, 800.0));
    }

    #[test]
    fn test_mouse_move_to_pixels() {
        let mut input = setup();
        assert_eq!(
            input.convert(mouse(MouseEventKind::Moved, 10, 5)),
            Some(PageEvent::PointerMove(PointerSample::new(80.0, 80.0)))
        );
        assert!(matches!(
            input.convert(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 1)),
            Some(PageEvent::PointerMove(_))
        ));
        assert_eq!(input.convert(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1)), None);
    }

    #[test]
    fn test_wheel_scrolls_three_lines() {
        let mut input = setup();
        assert_eq!(
            input.convert(mouse(MouseEventKind::ScrollDown, 0, 0)),
            Some(PageEvent::Scroll(48.0))
        );
        assert_eq!(
            input.convert(mouse(MouseEventKind::ScrollUp, 0, 0)),
            Some(PageEvent::Scroll(0.0))
        );
        // Already at the top.
        assert_eq!(input.convert(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
    }

    #[test]
    fn test_paging_keys() {
        let mut input = setup();
        assert_eq!(input.convert(key(KeyCode::PageDown)), Some(PageEvent::Scroll(720.0)));
        assert_eq!(input.convert(key(KeyCode::End)), Some(PageEvent::Scroll(2200.0)));
        assert_eq!(input.convert(key(KeyCode::PageDown)), None);
        assert_eq!(input.convert(key(KeyCode::PageUp)), Some(PageEvent::Scroll(1480.0)));
        assert_eq!(input.convert(key(KeyCode::Home)), Some(PageEvent::Scroll(0.0)));
        assert_eq!(input.convert(key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut input = setup();
        let mut release = CrosstermKeyEvent::new(KeyCode::PageDown, KeyModifiers::empty());
        release.kind = KeyEventKind::Release;
        assert_eq!(input.convert(CrosstermEvent::Key(release)), None);
    }

    #[test]
    fn test_resize_clamps_position() {
        let mut input = setup();
        input.set_position(2200.0);
        assert_eq!(
            input.convert(CrosstermEvent::Resize(100, 100)),
            Some(PageEvent::Resize(Viewport::new(800.0, 1600.0)))
        );
        assert_eq!(input.position(), 1400.0);
    }

    #[test]
    fn test_document_fits() {
        let mut input = TerminalInput::new(&TerminalConfig::default(), 100, 50, 400.0);
        assert_eq!(input.convert(key(KeyCode::PageDown)), None);
        assert_eq!(input.position(), 0.0);
    }
}
