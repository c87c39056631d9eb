//! Virtual timer service: timeouts, intervals, deterministic advance.
//!
//! Widgets defer work (a dialog's focus-on-open delay, a carousel's autoplay
//! tick) by arming timers here. The host owns real time and pumps the service
//! with [`Timers::advance`]; every due timer is reported back in deadline
//! order so timer-driven behavior is reproducible in tests.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Unique identifier for an armed timer. Copy, lightweight (u64).
    pub struct TimerId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Timeout,
    Interval { period: Duration },
}

#[derive(Debug, Clone, Copy)]
struct TimerEntry {
    deadline: Duration,
    kind: TimerKind,
    /// Arming order, used to break ties between equal deadlines.
    seq: u64,
}

/// Virtual-clock timer wheel.
#[derive(Debug, Default)]
pub struct Timers {
    clock: Duration,
    entries: SlotMap<TimerId, TimerEntry>,
    next_seq: u64,
}

impl Timers {
    /// Create a timer service with the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current virtual time.
    pub fn now(&self) -> Duration {
        self.clock
    }

    /// Arm a one-shot timer due `delay` from now.
    pub fn set_timeout(&mut self, delay: Duration) -> TimerId {
        let seq = self.bump_seq();
        self.entries.insert(TimerEntry {
            deadline: self.clock + delay,
            kind: TimerKind::Timeout,
            seq,
        })
    }

    /// Arm a repeating timer firing every `period`.
    ///
    /// A zero period is normalized to one millisecond so an interval can
    /// never fire endlessly within a single advance.
    pub fn set_interval(&mut self, period: Duration) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        let seq = self.bump_seq();
        self.entries.insert(TimerEntry {
            deadline: self.clock + period,
            kind: TimerKind::Interval { period },
            seq,
        })
    }

    /// Cancel a timer.
    ///
    /// Returns `false` for ids that already fired (timeouts) or were already
    /// cancelled; cancellation is idempotent.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Whether a timer id is still armed.
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of armed timers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no timers are armed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move the clock forward by `delta`, collecting every timer that comes
    /// due along the way.
    ///
    /// Fires are ordered by deadline, with ties broken by arming order.
    /// Timeouts fire once and are dropped; intervals re-arm at
    /// `deadline + period`, so advancing by `k * period` yields `k` fires of
    /// the same interval.
    pub fn advance(&mut self, delta: Duration) -> Vec<TimerId> {
        let target = self.clock + delta;
        let mut fired = Vec::new();

        loop {
            let due = self
                .entries
                .iter()
                .filter(|(_, entry)| entry.deadline <= target)
                .min_by_key(|(_, entry)| (entry.deadline, entry.seq))
                .map(|(id, entry)| (id, *entry));
            let Some((id, entry)) = due else {
                break;
            };

            self.clock = entry.deadline;
            fired.push(id);
            match entry.kind {
                TimerKind::Timeout => {
                    self.entries.remove(id);
                }
                TimerKind::Interval { period } => {
                    let seq = self.bump_seq();
                    if let Some(live) = self.entries.get_mut(id) {
                        live.deadline = entry.deadline + period;
                        live.seq = seq;
                    }
                }
            }
        }

        self.clock = target;
        fired
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    // ── Arming and cancelling ────────────────────────────────────────

    #[test]
    fn new_service_is_empty() {
        let timers = Timers::new();
        assert!(timers.is_empty());
        assert_eq!(timers.now(), Duration::ZERO);
    }

    #[test]
    fn timeout_fires_once() {
        let mut timers = Timers::new();
        let id = timers.set_timeout(10 * MS);
        assert!(timers.is_scheduled(id));

        assert_eq!(timers.advance(10 * MS), vec![id]);
        assert!(!timers.is_scheduled(id));
        assert!(timers.advance(100 * MS).is_empty());
    }

    #[test]
    fn timeout_does_not_fire_early() {
        let mut timers = Timers::new();
        let id = timers.set_timeout(10 * MS);
        assert!(timers.advance(9 * MS).is_empty());
        assert_eq!(timers.advance(MS), vec![id]);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut timers = Timers::new();
        let id = timers.set_timeout(10 * MS);
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.advance(20 * MS).is_empty());
    }

    #[test]
    fn cancelled_interval_never_fires() {
        let mut timers = Timers::new();
        let id = timers.set_interval(5 * MS);
        timers.cancel(id);
        assert!(timers.advance(50 * MS).is_empty());
    }

    // ── Advance semantics ────────────────────────────────────────────

    #[test]
    fn advance_moves_clock() {
        let mut timers = Timers::new();
        timers.advance(30 * MS);
        assert_eq!(timers.now(), 30 * MS);
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut timers = Timers::new();
        let late = timers.set_timeout(20 * MS);
        let early = timers.set_timeout(5 * MS);
        let mid = timers.set_timeout(10 * MS);
        assert_eq!(timers.advance(20 * MS), vec![early, mid, late]);
    }

    #[test]
    fn equal_deadlines_fire_in_arming_order() {
        let mut timers = Timers::new();
        let first = timers.set_timeout(10 * MS);
        let second = timers.set_timeout(10 * MS);
        assert_eq!(timers.advance(10 * MS), vec![first, second]);
    }

    #[test]
    fn interval_fires_k_times_for_k_periods() {
        let mut timers = Timers::new();
        let id = timers.set_interval(5 * MS);
        assert_eq!(timers.advance(15 * MS), vec![id, id, id]);
        // Still armed for the next period.
        assert!(timers.is_scheduled(id));
        assert_eq!(timers.advance(5 * MS), vec![id]);
    }

    #[test]
    fn interval_and_timeout_interleave_by_deadline() {
        let mut timers = Timers::new();
        let interval = timers.set_interval(4 * MS); // due 4, 8, 12
        let timeout = timers.set_timeout(6 * MS); // due 6
        assert_eq!(
            timers.advance(12 * MS),
            vec![interval, timeout, interval, interval]
        );
    }

    #[test]
    fn zero_interval_is_normalized() {
        let mut timers = Timers::new();
        let id = timers.set_interval(Duration::ZERO);
        // One fire per millisecond, not an infinite loop.
        assert_eq!(timers.advance(3 * MS).len(), 3);
        assert!(timers.is_scheduled(id));
    }

    #[test]
    fn zero_delay_timeout_fires_on_next_advance() {
        let mut timers = Timers::new();
        let id = timers.set_timeout(Duration::ZERO);
        assert_eq!(timers.advance(Duration::ZERO), vec![id]);
    }

    #[test]
    fn timers_armed_after_advance_use_new_clock() {
        let mut timers = Timers::new();
        timers.advance(100 * MS);
        let id = timers.set_timeout(10 * MS);
        assert!(timers.advance(9 * MS).is_empty());
        assert_eq!(timers.advance(MS), vec![id]);
        assert_eq!(timers.now(), 110 * MS);
    }
}
