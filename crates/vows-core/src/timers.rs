//! Scheduling seam for timer-driven UI logic.
//!
//! State machines in this crate never touch a clock directly. They hand
//! delayed events to a [`Scheduler`] and receive them back when the delay
//! elapses. The browser implements the trait with `setTimeout` handles that
//! cancel on drop; [`TimerQueue`] is a deterministic virtual-clock
//! implementation for native hosts and tests.

use std::collections::BTreeMap;
use std::time::Duration;

/// Cancellation token for a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Something that can deliver an event after a delay.
pub trait Scheduler<E> {
    /// Deliver `event` once `after` has elapsed.
    fn schedule(&mut self, after: Duration, event: E) -> TimerToken;

    /// Cancel one pending event. Returns `false` if it already fired or was
    /// never scheduled here.
    fn cancel(&mut self, token: TimerToken) -> bool;

    /// Cancel every pending event.
    fn cancel_all(&mut self);

    /// Number of events still waiting to fire.
    fn pending(&self) -> usize;
}

/// Virtual-clock scheduler.
///
/// Events fire in deadline order; events sharing a deadline fire in the order
/// they were scheduled. Time only moves when the owner calls
/// [`TimerQueue::pop_due`] or [`TimerQueue::advance`].
#[derive(Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_token: u64,
    entries: BTreeMap<(Duration, TimerToken), E>,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_token: 0,
            entries: BTreeMap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Deadline of the earliest pending event.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pop the earliest event due at or before `until`, moving the clock to
    /// its deadline. Events scheduled in response are visible to the next
    /// call, so a driver loop sees chained timers within one window.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        let key = *self.entries.keys().next()?;
        if key.0 > until {
            return None;
        }
        self.now = self.now.max(key.0);
        self.entries.remove(&key)
    }

    /// Move the clock forward without firing anything.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Advance the clock by `by`, returning every event that fired in order.
    ///
    /// Events scheduled while the returned events are being handled are not
    /// included; use [`TimerQueue::pop_due`] when handlers chain timers.
    pub fn advance(&mut self, by: Duration) -> Vec<E> {
        let until = self.now + by;
        let mut fired = Vec::new();
        while let Some(event) = self.pop_due(until) {
            fired.push(event);
        }
        self.settle(until);
        fired
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> for TimerQueue<E> {
    fn schedule(&mut self, after: Duration, event: E) -> TimerToken {
        let token = TimerToken::new(self.next_token);
        self.next_token += 1;
        self.entries.insert((self.now + after, token), event);
        token
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        let key = self.entries.keys().find(|(_, t)| *t == token).copied();
        key.is_some_and(|k| self.entries.remove(&k).is_some())
    }

    fn cancel_all(&mut self) {
        self.entries.clear();
    }

    fn pending(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(300), "c");
        queue.schedule(ms(100), "a");
        queue.schedule(ms(200), "b");

        assert_eq!(queue.advance(ms(250)), vec!["a", "b"]);
        assert_eq!(queue.now(), ms(250));
        assert_eq!(queue.pending(), 1);
        assert_eq!(queue.advance(ms(50)), vec!["c"]);
    }

    #[test]
    fn test_equal_deadlines_fire_fifo() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(10), 1);
        queue.schedule(ms(10), 2);
        queue.schedule(ms(10), 3);

        assert_eq!(queue.advance(ms(10)), vec![1, 2, 3]);
    }

    #[test]
    fn test_not_due_before_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(2000), ());

        assert!(queue.advance(ms(1999)).is_empty());
        assert_eq!(queue.advance(ms(1)).len(), 1);
    }

    #[test]
    fn test_schedule_is_relative_to_now() {
        let mut queue = TimerQueue::new();
        queue.advance(ms(500));
        queue.schedule(ms(100), "late");

        assert_eq!(queue.next_deadline(), Some(ms(600)));
    }

    #[test]
    fn test_cancel_single() {
        let mut queue = TimerQueue::new();
        let keep = queue.schedule(ms(10), "keep");
        let dropped = queue.schedule(ms(10), "dropped");

        assert!(queue.cancel(dropped));
        assert!(!queue.cancel(dropped));
        assert_eq!(queue.advance(ms(10)), vec!["keep"]);
        assert!(!queue.cancel(keep));
    }

    #[test]
    fn test_cancel_all() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(10), 1);
        queue.schedule(ms(20), 2);
        queue.cancel_all();

        assert_eq!(queue.pending(), 0);
        assert!(queue.advance(ms(100)).is_empty());
    }

    #[test]
    fn test_pop_due_sees_chained_timers() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(100), 1);

        let until = ms(250);
        let mut seen = Vec::new();
        while let Some(n) = queue.pop_due(until) {
            seen.push(n);
            if n < 3 {
                queue.schedule(ms(100), n + 1);
            }
        }
        assert_eq!(seen, vec![1, 2]);
        assert_eq!(queue.now(), ms(200));
    }
}
