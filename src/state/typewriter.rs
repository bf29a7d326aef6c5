//! Typewriter Reveal
//!
//! Types a short sequence of lines one grapheme at a time once its container
//! first becomes visible.
//!
//! # State machine
//!
//! ```text
//! Idle --trigger--> Armed --start delay--> Typing(0, 1) -> Typing(0, 2) -> ...
//!   ... -> LineDone(0) --pause--> Typing(1, 1) -> ... -> Done
//! ```
//!
//! - Starting a line clears its text, makes it opaque and emits the first
//!   grapheme in the same step.
//! - Each further grapheme follows `char_delay_ms` later.
//! - A line is complete one character delay after its last grapheme; the next
//!   line starts `line_pause_ms` after that.
//! - `Done` is entered as soon as the last grapheme of the last line is
//!   written. Nothing leaves `Done`, and a finished or running typewriter
//!   cannot be re-triggered.
//!
//! All timing lives in the typewriter's own [`AnimatorToken`]. Steps are
//! computed from their scheduled time, so a late tick catches up exactly.

use unicode_segmentation::UnicodeSegmentation;

use crate::config::TypewriterConfig;
use crate::renderer::PresentationSink;
use crate::types::ElementId;

// =============================================================================
// ANIMATOR TOKEN
// =============================================================================

/// Timer handle owned by a single animator.
///
/// Holds at most one pending deadline. Once released it never arms again.
#[derive(Debug, Default)]
pub struct AnimatorToken {
    deadline: Option<u64>,
    released: bool,
}

impl AnimatorToken {
    fn arm(&mut self, at_ms: u64) {
        if !self.released {
            self.deadline = Some(at_ms);
        }
    }

    fn take_due(&mut self, now_ms: u64) -> Option<u64> {
        match self.deadline {
            Some(at) if at <= now_ms => self.deadline.take(),
            _ => None,
        }
    }

    /// Pending deadline, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Drop the pending deadline for good.
    pub fn release(&mut self) {
        self.deadline = None;
        self.released = true;
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

// =============================================================================
// TYPES
// =============================================================================

/// Where the typewriter is in its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    /// Waiting for the container to become visible.
    Idle,
    /// Triggered, waiting out the start delay.
    Armed,
    /// `shown` graphemes of `line` are on screen.
    Typing { line: usize, shown: usize },
    /// `line` is complete, pausing before the next one.
    LineDone { line: usize },
    /// Every line is fully typed.
    Done,
    /// Torn down before finishing.
    Cancelled,
}

/// One line to be typed.
#[derive(Debug, Clone)]
struct Line {
    element: ElementId,
    text: String,
    /// Byte offset just past each grapheme.
    ends: Vec<usize>,
}

impl Line {
    fn new(element: ElementId, text: String) -> Self {
        let ends = text
            .grapheme_indices(true)
            .map(|(start, g)| start + g.len())
            .collect();
        Self {
            element,
            text,
            ends,
        }
    }

    fn len(&self) -> usize {
        self.ends.len()
    }

    fn prefix(&self, shown: usize) -> &str {
        match shown.checked_sub(1).and_then(|i| self.ends.get(i)) {
            Some(&end) => &self.text[..end],
            None => "",
        }
    }
}

// =============================================================================
// TYPEWRITER
// =============================================================================

pub struct Typewriter {
    container: ElementId,
    lines: Vec<Line>,
    phase: TypewriterPhase,
    token: AnimatorToken,
    char_delay_ms: u64,
    line_pause_ms: u64,
    start_delay_ms: u64,
}

impl Typewriter {
    pub fn new(
        container: ElementId,
        lines: impl IntoIterator<Item = (ElementId, String)>,
        config: &TypewriterConfig,
    ) -> Self {
        Self {
            container,
            lines: lines
                .into_iter()
                .map(|(element, text)| Line::new(element, text))
                .collect(),
            phase: TypewriterPhase::Idle,
            token: AnimatorToken::default(),
            char_delay_ms: config.char_delay_ms,
            line_pause_ms: config.line_pause_ms,
            start_delay_ms: config.start_delay_ms,
        }
    }

    /// Element whose visibility starts the sequence.
    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == TypewriterPhase::Done
    }

    pub fn token(&self) -> &AnimatorToken {
        &self.token
    }

    /// Elements of every line, in order.
    pub fn line_elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.lines.iter().map(|l| l.element)
    }

    /// Start the sequence. Only the first call from `Idle` has any effect.
    pub fn trigger(&mut self, now_ms: u64) -> bool {
        if self.phase != TypewriterPhase::Idle {
            return false;
        }
        self.phase = TypewriterPhase::Armed;
        self.token.arm(now_ms.saturating_add(self.start_delay_ms));
        tracing::debug!(container = %self.container, lines = self.lines.len(), "typewriter armed");
        true
    }

    /// Run every step due at or before `now_ms`. Returns the number of steps.
    pub fn tick<S: PresentationSink + ?Sized>(&mut self, now_ms: u64, sink: &mut S) -> usize {
        let mut steps = 0;
        while let Some(at) = self.token.take_due(now_ms) {
            self.step(at, sink);
            steps += 1;
        }
        steps
    }

    /// Stop typing where it is. Text already written stays.
    pub fn cancel(&mut self) {
        if self.phase != TypewriterPhase::Done {
            self.phase = TypewriterPhase::Cancelled;
        }
        self.token.release();
    }

    fn step<S: PresentationSink + ?Sized>(&mut self, at: u64, sink: &mut S) {
        match self.phase {
            TypewriterPhase::Armed => self.start_line(0, at, sink),
            TypewriterPhase::Typing { line, shown } => self.emit(line, shown + 1, at, sink),
            TypewriterPhase::LineDone { line } => self.start_line(line + 1, at, sink),
            TypewriterPhase::Idle | TypewriterPhase::Done | TypewriterPhase::Cancelled => {}
        }
    }

    fn start_line<S: PresentationSink + ?Sized>(&mut self, index: usize, at: u64, sink: &mut S) {
        let Some(line) = self.lines.get(index) else {
            self.finish();
            return;
        };

        sink.set_text(line.element, "");
        sink.set_opacity(line.element, 1.0);

        if line.ends.is_empty() {
            self.complete_line(index, at);
        } else {
            self.emit(index, 1, at, sink);
        }
    }

    fn emit<S: PresentationSink + ?Sized>(&mut self, index: usize, shown: usize, at: u64, sink: &mut S) {
        let line = &self.lines[index];
        sink.set_text(line.element, line.prefix(shown));

        if shown >= line.len() {
            self.complete_line(index, at.saturating_add(self.char_delay_ms));
        } else {
            self.phase = TypewriterPhase::Typing { line: index, shown };
            self.token.arm(at.saturating_add(self.char_delay_ms));
        }
    }

    fn complete_line(&mut self, index: usize, completed_at: u64) {
        if index + 1 >= self.lines.len() {
            self.finish();
        } else {
            self.phase = TypewriterPhase::LineDone { line: index };
            self.token.arm(completed_at.saturating_add(self.line_pause_ms));
        }
    }

    fn finish(&mut self) {
        self.phase = TypewriterPhase::Done;
        self.token.release();
        tracing::debug!(container = %self.container, "typewriter done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Recorder;

    fn config(start_delay_ms: u64) -> TypewriterConfig {
        TypewriterConfig {
            start_delay_ms,
            ..TypewriterConfig::default()
        }
    }

    fn two_lines() -> Typewriter {
        Typewriter::new(
            ElementId(0),
            vec![(ElementId(1), "a".to_string()), (ElementId(2), "bb".to_string())],
            &config(0),
        )
    }

    #[test]
    fn test_idle_until_triggered() {
        let mut tw = two_lines();
        let mut rec = Recorder::new();
        assert_eq!(tw.tick(10_000, &mut rec), 0);
        assert_eq!(tw.phase(), TypewriterPhase::Idle);
        assert!(rec.is_empty());
    }

    #[test]
    fn test_exact_output_sequence() {
        let mut tw = two_lines();
        let mut rec = Recorder::new();

        assert!(tw.trigger(0));
        tw.tick(0, &mut rec);
        assert_eq!(rec.texts(ElementId(1)), vec!["", "a"]);
        assert_eq!(tw.phase(), TypewriterPhase::LineDone { line: 0 });

        // Line completes at 50, pause until 550
        tw.tick(549, &mut rec);
        assert!(rec.texts(ElementId(2)).is_empty());

        tw.tick(550, &mut rec);
        assert_eq!(rec.texts(ElementId(2)), vec!["", "b"]);
        assert_eq!(tw.phase(), TypewriterPhase::Typing { line: 1, shown: 1 });

        tw.tick(600, &mut rec);
        assert_eq!(rec.texts(ElementId(2)), vec!["", "b", "bb"]);
        assert!(tw.is_done());

        // Done is terminal
        assert_eq!(tw.tick(100_000, &mut rec), 0);
        assert!(!tw.trigger(100_000));
        assert_eq!(rec.texts(ElementId(2)).last().map(String::as_str), Some("bb"));
    }

    #[test]
    fn test_late_tick_catches_up() {
        let mut stepped = two_lines();
        let mut late = two_lines();
        let mut a = Recorder::new();
        let mut b = Recorder::new();

        stepped.trigger(0);
        late.trigger(0);
        for t in (0..=600).step_by(10) {
            stepped.tick(t, &mut a);
        }
        late.tick(600, &mut b);

        assert_eq!(a.ops(), b.ops());
        assert!(late.is_done());
    }

    #[test]
    fn test_start_delay() {
        let mut tw = Typewriter::new(ElementId(0), vec![(ElementId(1), "x".to_string())], &config(1_000));
        let mut rec = Recorder::new();
        tw.trigger(200);
        assert_eq!(tw.token().deadline(), Some(1_200));
        tw.tick(1_199, &mut rec);
        assert!(rec.is_empty());
        tw.tick(1_200, &mut rec);
        assert_eq!(rec.texts(ElementId(1)), vec!["", "x"]);
        assert_eq!(rec.last_opacity(ElementId(1)), Some(1.0));
        assert!(tw.is_done());
    }

    #[test]
    fn test_graphemes_not_bytes() {
        let mut tw = Typewriter::new(ElementId(0), vec![(ElementId(1), "né🦀".to_string())], &config(0));
        let mut rec = Recorder::new();
        tw.trigger(0);
        tw.tick(1_000, &mut rec);
        assert_eq!(rec.texts(ElementId(1)), vec!["", "n", "né", "né🦀"]);
    }

    #[test]
    fn test_empty_line_pauses_without_char_delay() {
        let mut tw = Typewriter::new(
            ElementId(0),
            vec![(ElementId(1), String::new()), (ElementId(2), "z".to_string())],
            &config(0),
        );
        let mut rec = Recorder::new();
        tw.trigger(0);
        tw.tick(0, &mut rec);
        assert_eq!(tw.phase(), TypewriterPhase::LineDone { line: 0 });
        assert_eq!(tw.token().deadline(), Some(500));
        tw.tick(500, &mut rec);
        assert!(tw.is_done());
        assert_eq!(rec.texts(ElementId(2)), vec!["", "z"]);
    }

    #[test]
    fn test_no_lines_finishes_immediately() {
        let mut tw = Typewriter::new(ElementId(0), Vec::new(), &config(0));
        let mut rec = Recorder::new();
        tw.trigger(0);
        tw.tick(0, &mut rec);
        assert!(tw.is_done());
        assert!(rec.is_empty());
    }

    #[test]
    fn test_cancel_stops_mid_sequence() {
        let mut tw = two_lines();
        let mut rec = Recorder::new();
        tw.trigger(0);
        tw.tick(0, &mut rec);
        tw.cancel();

        assert_eq!(tw.phase(), TypewriterPhase::Cancelled);
        assert!(tw.token().is_released());
        assert_eq!(tw.tick(10_000, &mut rec), 0);
        assert!(rec.texts(ElementId(2)).is_empty());
    }

    #[test]
    fn test_cancel_after_done_keeps_done() {
        let mut tw = two_lines();
        let mut rec = Recorder::new();
        tw.trigger(0);
        tw.tick(10_000, &mut rec);
        tw.cancel();
        assert!(tw.is_done());
    }
}
