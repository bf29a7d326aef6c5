//! Timer Queue - deferred work on a single thread.
//!
//! Nothing here sleeps or spawns. Tasks are stored with a due time and the
//! host drains them by calling [`TimerQueue::pop_due`] with the current time.
//! Tasks due at the same instant come out in the order they were scheduled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so the max-heap yields the earliest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-queue of tasks keyed by due time.
pub struct TimerQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `task` to run at `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { due_ms, seq, task });
    }

    /// Remove and return the earliest task due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, T)> {
        if self.heap.peek()?.due_ms > now_ms {
            return None;
        }
        self.heap.pop().map(|e| (e.due_ms, e.task))
    }

    /// Earliest pending due time.
    pub fn next_deadline(&self) -> Option<u64> {
        self.heap.peek().map(|e| e.due_ms)
    }

    /// Drop every task for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.heap.retain(|e| keep(&e.task));
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_due_order() {
        let mut q = TimerQueue::new();
        q.schedule(300, "c");
        q.schedule(100, "a");
        q.schedule(200, "b");

        assert_eq!(q.pop_due(1_000), Some((100, "a")));
        assert_eq!(q.pop_due(1_000), Some((200, "b")));
        assert_eq!(q.pop_due(1_000), Some((300, "c")));
        assert_eq!(q.pop_due(1_000), None);
    }

    #[test]
    fn test_same_due_is_fifo() {
        let mut q = TimerQueue::new();
        q.schedule(50, 1);
        q.schedule(50, 2);
        q.schedule(50, 3);

        let order: Vec<_> = std::iter::from_fn(|| q.pop_due(50)).map(|(_, t)| t).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_not_due_yet() {
        let mut q = TimerQueue::new();
        q.schedule(100, ());
        assert_eq!(q.pop_due(99), None);
        assert_eq!(q.next_deadline(), Some(100));
        assert!(q.pop_due(100).is_some());
        assert!(q.is_empty());
    }

    #[test]
    fn test_retain() {
        let mut q = TimerQueue::new();
        q.schedule(10, 1);
        q.schedule(20, 2);
        q.schedule(30, 3);
        q.retain(|t| *t != 2);

        assert_eq!(q.len(), 2);
        assert_eq!(q.pop_due(100), Some((10, 1)));
        assert_eq!(q.pop_due(100), Some((30, 3)));
    }
}
