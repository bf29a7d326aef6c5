//! Rate limiting for high-frequency notifications.
//!
//! Two disciplines, both driven by caller-supplied millisecond timestamps:
//!
//! - **Debounce** - wait until `wait` ms pass with no further calls, then
//!   fire once with the latest arguments.
//! - **Throttle** - fire on the first call, swallow calls until `limit` ms
//!   have elapsed since that call, then let the next one through.
//!
//! # Example
//!
//! ```ignore
//! use folio_motion::state::rate_limit::{debounce, throttle};
//!
//! let mut on_resize = debounce(|(w, h): (f32, f32)| println!("{w}x{h}"), 150);
//! on_resize.call((800.0, 600.0), 0);
//! on_resize.call((1024.0, 768.0), 40);
//! on_resize.poll(190); // prints 1024x768
//!
//! let mut on_scroll = throttle(|y: f32| println!("{y}"), 16);
//! on_scroll.call(10.0, 0); // prints 10
//! on_scroll.call(20.0, 5); // swallowed
//! ```

// =============================================================================
// DEBOUNCE
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Pending<A> {
    deadline: u64,
    args: A,
}

/// Trailing-edge debounce state.
#[derive(Debug, Clone, PartialEq)]
pub struct Debounce<A> {
    wait_ms: u64,
    pending: Option<Pending<A>>,
}

impl<A> Debounce<A> {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    pub fn wait_ms(&self) -> u64 {
        self.wait_ms
    }

    /// Record a call. Replaces any pending arguments and restarts the wait.
    pub fn call(&mut self, args: A, now_ms: u64) {
        self.pending = Some(Pending {
            deadline: now_ms.saturating_add(self.wait_ms),
            args,
        });
    }

    /// Release the pending arguments if the quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<A> {
        match &self.pending {
            Some(p) if p.deadline <= now_ms => self.pending.take().map(|p| p.args),
            _ => None,
        }
    }

    /// When the pending call will fire, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Release the pending arguments immediately, ignoring the deadline.
    pub fn flush(&mut self) -> Option<A> {
        self.pending.take().map(|p| p.args)
    }

    /// Drop the pending call.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

// =============================================================================
// THROTTLE
// =============================================================================

/// Leading-edge throttle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    limit_ms: u64,
    window_start: Option<u64>,
}

impl Throttle {
    pub fn new(limit_ms: u64) -> Self {
        Self {
            limit_ms,
            window_start: None,
        }
    }

    pub fn limit_ms(&self) -> u64 {
        self.limit_ms
    }

    /// Returns true if a call at `now_ms` may pass, opening a new window.
    pub fn admit(&mut self, now_ms: u64) -> bool {
        match self.window_start {
            Some(start) if now_ms < start.saturating_add(self.limit_ms) => false,
            _ => {
                self.window_start = Some(now_ms);
                true
            }
        }
    }

    /// Pass `args` through if admitted.
    pub fn call<A>(&mut self, args: A, now_ms: u64) -> Option<A> {
        self.admit(now_ms).then_some(args)
    }

    /// Forget the current window so the next call passes.
    pub fn reset(&mut self) {
        self.window_start = None;
    }
}

// =============================================================================
// CALLBACK WRAPPERS
// =============================================================================

/// A callback behind a [`Debounce`].
pub struct Debounced<A, F: FnMut(A)> {
    state: Debounce<A>,
    f: F,
}

impl<A, F: FnMut(A)> Debounced<A, F> {
    pub fn call(&mut self, args: A, now_ms: u64) {
        self.state.call(args, now_ms);
    }

    /// Invoke the callback if the quiet period has elapsed. Returns true if it ran.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.state.poll(now_ms) {
            Some(args) => {
                (self.f)(args);
                true
            }
            None => false,
        }
    }

    pub fn deadline(&self) -> Option<u64> {
        self.state.deadline()
    }

    pub fn cancel(&mut self) {
        self.state.cancel();
    }
}

/// A callback behind a [`Throttle`].
pub struct Throttled<F> {
    state: Throttle,
    f: F,
}

impl<F> Throttled<F> {
    /// Invoke the callback if admitted. Returns true if it ran.
    pub fn call<A>(&mut self, args: A, now_ms: u64) -> bool
    where
        F: FnMut(A),
    {
        if self.state.admit(now_ms) {
            (self.f)(args);
            true
        } else {
            false
        }
    }
}

/// Wrap `f` so it runs once per quiet period of `wait_ms`.
pub fn debounce<A, F: FnMut(A)>(f: F, wait_ms: u64) -> Debounced<A, F> {
    Debounced {
        state: Debounce::new(wait_ms),
        f,
    }
}

/// Wrap `f` so it runs at most once per `limit_ms`.
pub fn throttle<F>(f: F, limit_ms: u64) -> Throttled<F> {
    Throttled {
        state: Throttle::new(limit_ms),
        f,
    }
}
