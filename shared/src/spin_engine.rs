use crate::constants::SLOT_COUNT;
use crate::scheduler::{Scheduler, TimerId};
use crate::shared_roulette_game::RouletteEvent;

/// Per-slot flicker timers, one cancellable handle per slot.
///
/// The engine only owns the handles. Each tick reaches the game as
/// `RouletteEvent::SpinTick(slot)` and the game draws the displayed character
/// from whatever the eligible pool is at that moment.
#[derive(Debug, Clone, Default)]
pub struct SpinEngine {
    timers: [Option<TimerId>; SLOT_COUNT],
}

impl SpinEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) the flicker for `slot`. A running timer is
    /// cancelled first so a slot never has two.
    pub fn start_spin(&mut self, slot: usize, period_ms: u64, scheduler: &mut Scheduler<RouletteEvent>) {
        if slot >= SLOT_COUNT {
            return;
        }
        self.stop_spin(slot, scheduler);
        self.timers[slot] = Some(scheduler.set_interval(period_ms, RouletteEvent::SpinTick(slot)));
    }

    pub fn stop_spin(&mut self, slot: usize, scheduler: &mut Scheduler<RouletteEvent>) -> bool {
        match self.timers.get_mut(slot).and_then(Option::take) {
            Some(id) => scheduler.cancel(id),
            None => false,
        }
    }

    pub fn stop_all(&mut self, scheduler: &mut Scheduler<RouletteEvent>) {
        for slot in 0..SLOT_COUNT {
            self.stop_spin(slot, scheduler);
        }
    }

    pub fn timer(&self, slot: usize) -> Option<TimerId> {
        self.timers.get(slot).copied().flatten()
    }

    #[cfg(test)]
    pub(crate) fn active_slots(&self) -> usize {
        self.timers.iter().filter(|t| t.is_some()).count()
    }
}
