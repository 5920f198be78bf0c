// Session timers - explicit, host-driven deadlines
//
// The session never sleeps. It arms deadlines here; the host asks for the
// earliest one and calls back with the current instant once it passes.

use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Re-read the cursor line after input settles
    Debounce,
    /// Write a pending template after the clear-line sequence
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct Timer {
    kind: TimerKind,
    deadline: Instant,
    id: TimerId,
}

/// At most one armed timer per kind
#[derive(Debug, Default)]
pub struct Timers {
    armed: Vec<Timer>,
    next_id: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `kind` at `deadline`, replacing any timer of the same kind
    pub fn arm(&mut self, kind: TimerKind, deadline: Instant) -> TimerId {
        self.cancel(kind);
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.armed.push(Timer { kind, deadline, id });
        id
    }

    /// Returns true if a timer was armed
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let before = self.armed.len();
        self.armed.retain(|t| t.kind != kind);
        self.armed.len() != before
    }

    pub fn clear(&mut self) {
        self.armed.clear();
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.armed.iter().any(|t| t.kind == kind)
    }

    pub fn deadline(&self, kind: TimerKind) -> Option<Instant> {
        self.armed.iter().find(|t| t.kind == kind).map(|t| t.deadline)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.armed.iter().map(|t| t.deadline).min()
    }

    /// Remove and return every timer due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<(TimerKind, TimerId)> {
        let mut due: Vec<Timer> = self
            .armed
            .iter()
            .filter(|t| t.deadline <= now)
            .copied()
            .collect();
        self.armed.retain(|t| t.deadline > now);
        due.sort_by_key(|t| (t.deadline, t.id));
        due.into_iter().map(|t| (t.kind, t.id)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.armed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_rearm_replaces_same_kind() {
        let start = Instant::now();
        let mut timers = Timers::new();
        let first = timers.arm(TimerKind::Debounce, start + Duration::from_millis(30));
        let second = timers.arm(TimerKind::Debounce, start + Duration::from_millis(60));

        assert_ne!(first, second);
        assert_eq!(
            timers.deadline(TimerKind::Debounce),
            Some(start + Duration::from_millis(60))
        );
        assert!(timers
            .take_due(start + Duration::from_millis(40))
            .is_empty());
    }

    #[test]
    fn test_take_due_orders_by_deadline() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.arm(TimerKind::Insert, start + Duration::from_millis(50));
        timers.arm(TimerKind::Debounce, start + Duration::from_millis(30));

        assert_eq!(timers.next_deadline(), Some(start + Duration::from_millis(30)));
        let due: Vec<_> = timers
            .take_due(start + Duration::from_millis(100))
            .into_iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(due, vec![TimerKind::Debounce, TimerKind::Insert]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_cancel_and_clear() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.arm(TimerKind::Debounce, start);
        timers.arm(TimerKind::Insert, start);

        assert!(timers.cancel(TimerKind::Debounce));
        assert!(!timers.cancel(TimerKind::Debounce));
        assert!(timers.is_armed(TimerKind::Insert));

        timers.clear();
        assert_eq!(timers.next_deadline(), None);
    }
}
