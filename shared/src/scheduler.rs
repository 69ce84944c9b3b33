use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Timeout,
    Interval(u64),
}

#[derive(Debug, Clone)]
struct Timer<E> {
    id: TimerId,
    due: u64,
    kind: TimerKind,
    event: E,
}

/// A virtual millisecond clock with a queue of pending timers.
///
/// Nothing runs on its own: the owner advances the clock with `pop_due`, and
/// each fired timer hands back its event for the owner to dispatch. Timers due
/// at the same instant fire in the order they were scheduled.
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now: u64,
    next_id: u64,
    timers: Vec<Timer<E>>,
}

impl<E: Copy> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Copy> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    #[cfg(test)]
    pub(crate) fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    #[cfg(test)]
    pub(crate) fn next_due(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.due).min()
    }

    pub fn set_timeout(&mut self, delay: u64, event: E) -> TimerId {
        self.push(delay, TimerKind::Timeout, event)
    }

    pub fn set_interval(&mut self, period: u64, event: E) -> TimerId {
        let period = period.max(1);
        self.push(period, TimerKind::Interval(period), event)
    }

    fn push(&mut self, delay: u64, kind: TimerKind, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due: self.now.saturating_add(delay),
            kind,
            event,
        });
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Fires the earliest timer due at or before `until`, moving the clock to
    /// its due time. Intervals are rescheduled one period later.
    pub fn pop_due(&mut self, until: u64) -> Option<(TimerId, E)> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)?;

        let Timer { id, due, kind, event } = self.timers[index].clone();
        self.now = self.now.max(due);
        match kind {
            TimerKind::Interval(period) => self.timers[index].due = due + period,
            TimerKind::Timeout => {
                self.timers.remove(index);
            }
        }
        Some((id, event))
    }

    pub fn advance_to(&mut self, until: u64) {
        self.now = self.now.max(until);
    }
}
