use std::time::{Duration, Instant};

use crate::dom::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Deferred work the page schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Search input went quiet
    SearchSettled,
    /// Restore a pressed button's scale
    ReleasePress(ElementId),
    RemoveRipple { element: ElementId, ripple: u64 },
    /// Form submission round trip finished
    CompleteSubmit,
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    due: Instant,
    action: TimerAction,
}

/// Single-threaded timer queue driven by an explicit clock.
///
/// The host advances the clock on every tick; nothing fires on its own,
/// which keeps handlers run-to-completion and tests deterministic.
#[derive(Debug, Clone)]
pub struct TimerQueue {
    clock: Instant,
    next_id: u64,
    timers: Vec<Timer>,
}

impl TimerQueue {
    pub fn new(now: Instant) -> Self {
        Self {
            clock: now,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    pub fn now(&self) -> Instant {
        self.clock
    }

    /// Schedule `action` to fire `delay` after the current clock
    pub fn schedule(&mut self, delay: Duration, action: TimerAction) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.push(Timer {
            id,
            due: self.clock + delay,
            action,
        });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|t| t.due).min()
    }

    /// Move the clock to `now` and return every action that became due,
    /// ordered by deadline then scheduling order
    pub fn advance(&mut self, now: Instant) -> Vec<TimerAction> {
        if now > self.clock {
            self.clock = now;
        }

        let clock = self.clock;
        let (mut due, pending): (Vec<Timer>, Vec<Timer>) =
            self.timers.drain(..).partition(|t| t.due <= clock);
        self.timers = pending;

        due.sort_by_key(|t| (t.due, t.id));
        due.into_iter().map(|t| t.action).collect()
    }

    /// Drop every pending timer (page reload)
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let start = Instant::now();
        let mut timers = TimerQueue::new(start);
        timers.schedule(ms(600), TimerAction::CompleteSubmit);
        timers.schedule(ms(150), TimerAction::SearchSettled);

        assert!(timers.advance(start + ms(100)).is_empty());
        assert_eq!(
            timers.advance(start + ms(700)),
            vec![TimerAction::SearchSettled, TimerAction::CompleteSubmit]
        );
        assert!(timers.is_empty());
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timers = TimerQueue::new(start);
        let id = timers.schedule(ms(300), TimerAction::SearchSettled);

        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.advance(start + ms(1000)).is_empty());
    }

    #[test]
    fn test_schedule_is_relative_to_advanced_clock() {
        let start = Instant::now();
        let mut timers = TimerQueue::new(start);
        timers.advance(start + ms(1000));
        timers.schedule(ms(150), TimerAction::SearchSettled);

        assert_eq!(timers.next_deadline(), Some(start + ms(1150)));
        assert!(timers.advance(start + ms(1100)).is_empty());
        assert_eq!(timers.advance(start + ms(1150)).len(), 1);
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let start = Instant::now();
        let mut timers = TimerQueue::new(start + ms(500));
        timers.advance(start);
        assert_eq!(timers.now(), start + ms(500));
    }
}
