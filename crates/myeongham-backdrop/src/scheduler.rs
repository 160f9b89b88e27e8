//! Frame scheduling port for the backdrop.
//!
//! The field never talks to a clock directly: it asks a [`TickScheduler`]
//! for the next tick and cancels through the returned handle. The interval
//! implementation drives the real UI; the manual one drives tests.

use std::time::{Duration, Instant};

/// Opaque handle to a scheduled animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(u64);

/// Scheduling port for the update/draw cycle.
pub trait TickScheduler {
    /// Schedule the next tick. Returns `None` when the host cannot
    /// schedule animation frames at all.
    fn request_tick(&mut self) -> Option<TickHandle>;

    /// Cancel a pending tick so it never becomes due.
    fn cancel_tick(&mut self, handle: TickHandle);

    /// Take the pending tick if it is due to fire.
    fn poll_due(&mut self) -> Option<TickHandle>;
}

/// Wall-clock scheduler firing at a fixed frame interval.
///
/// Only one tick is pending at a time; a new request replaces the old one.
#[derive(Debug)]
pub struct IntervalScheduler {
    interval: Duration,
    next_id: u64,
    pending: Option<(TickHandle, Instant)>,
}

impl IntervalScheduler {
    /// Scheduler with the given frame interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 0,
            pending: None,
        }
    }

    /// Scheduler for a frames-per-second target (clamped to at least 1).
    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_millis(1000 / u64::from(fps.max(1))))
    }

    /// Time until the pending tick is due. `None` while nothing is
    /// pending; zero once it is due.
    pub fn until_due(&self) -> Option<Duration> {
        self.pending
            .map(|(_, due)| due.saturating_duration_since(Instant::now()))
    }
}

impl TickScheduler for IntervalScheduler {
    fn request_tick(&mut self) -> Option<TickHandle> {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some((handle, Instant::now() + self.interval));
        Some(handle)
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if self.pending.map(|(h, _)| h) == Some(handle) {
            self.pending = None;
        }
    }

    fn poll_due(&mut self) -> Option<TickHandle> {
        let (handle, due) = self.pending?;
        if Instant::now() >= due {
            self.pending = None;
            Some(handle)
        } else {
            None
        }
    }
}

/// Scheduler driven by hand.
///
/// Ticks become due only when [`ManualScheduler::fire`] is called, so tests
/// control exactly how many cycles run.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<TickHandle>,
    due: bool,
    /// Ticks requested so far.
    pub requests: usize,
    /// Ticks cancelled so far.
    pub cancellations: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the pending tick due. No-op while nothing is pending.
    pub fn fire(&mut self) {
        if self.pending.is_some() {
            self.due = true;
        }
    }

    /// The currently pending handle, if any.
    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }
}

impl TickScheduler for ManualScheduler {
    fn request_tick(&mut self) -> Option<TickHandle> {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some(handle);
        self.due = false;
        self.requests += 1;
        Some(handle)
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.due = false;
            self.cancellations += 1;
        }
    }

    fn poll_due(&mut self) -> Option<TickHandle> {
        if self.due {
            self.due = false;
            self.pending.take()
        } else {
            None
        }
    }
}

/// Scheduler for hosts without frame timing; every request is refused.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullScheduler;

impl TickScheduler for NullScheduler {
    fn request_tick(&mut self) -> Option<TickHandle> {
        None
    }

    fn cancel_tick(&mut self, _handle: TickHandle) {}

    fn poll_due(&mut self) -> Option<TickHandle> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_tick_fires_only_when_told() {
        let mut sched = ManualScheduler::new();
        let handle = sched.request_tick().unwrap();
        assert_eq!(sched.poll_due(), None);

        sched.fire();
        assert_eq!(sched.poll_due(), Some(handle));
        // Consumed: polling again yields nothing.
        assert_eq!(sched.poll_due(), None);
    }

    #[test]
    fn test_manual_cancel_prevents_due() {
        let mut sched = ManualScheduler::new();
        let handle = sched.request_tick().unwrap();
        sched.cancel_tick(handle);
        sched.fire();
        assert_eq!(sched.poll_due(), None);
        assert_eq!(sched.cancellations, 1);
    }

    #[test]
    fn test_manual_fire_without_pending_is_noop() {
        let mut sched = ManualScheduler::new();
        sched.fire();
        assert_eq!(sched.poll_due(), None);
    }

    #[test]
    fn test_interval_zero_is_due_immediately() {
        let mut sched = IntervalScheduler::new(Duration::ZERO);
        let handle = sched.request_tick().unwrap();
        assert_eq!(sched.poll_due(), Some(handle));
    }

    #[test]
    fn test_interval_cancel_clears_pending() {
        let mut sched = IntervalScheduler::new(Duration::ZERO);
        let handle = sched.request_tick().unwrap();
        sched.cancel_tick(handle);
        assert_eq!(sched.poll_due(), None);
        assert_eq!(sched.until_due(), None);
    }

    #[test]
    fn test_interval_far_future_not_due() {
        let mut sched = IntervalScheduler::new(Duration::from_secs(3600));
        sched.request_tick();
        assert_eq!(sched.poll_due(), None);
        assert!(sched.until_due().unwrap() > Duration::from_secs(3000));
    }

    #[test]
    fn test_null_scheduler_refuses() {
        let mut sched = NullScheduler;
        assert_eq!(sched.request_tick(), None);
        assert_eq!(sched.poll_due(), None);
    }
}
