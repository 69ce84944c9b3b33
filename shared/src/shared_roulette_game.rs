use std::collections::{BTreeMap, BTreeSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::RouletteConfig;
use crate::constants::{RESTART_LABEL, SLOT_COUNT, SPINNING_LABEL, START_LABEL};
use crate::error::RouletteError;
use crate::roster::{eligible_pool, Character, CharacterType, Player, PlayerColor, UnlockedTypes, INITIAL_PLAYERS};
use crate::sampler::{pick_one, select_results};
use crate::scheduler::{Scheduler, TimerId};
use crate::spin_engine::SpinEngine;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Spinning,
    Stopping,
}

/// Timer payloads. Slot indices are carried by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouletteEvent {
    SpinTick(usize),
    Commit(usize),
    AutoStop,
}

/// User-facing options for the next round.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RouletteSettings {
    pub allow_duplicates: bool,
    pub exclude_previous: bool,
    pub unlocked_types: UnlockedTypes,
}

/// Read-only snapshot for rendering.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundState {
    pub phase: Phase,
    pub players: [Player; SLOT_COUNT],
    pub spinning_display: [Option<Character>; SLOT_COUNT],
    pub settings: RouletteSettings,
    pub has_results: bool,
}

impl RoundState {
    pub fn button_label(&self) -> &'static str {
        match self.phase {
            Phase::Spinning | Phase::Stopping => SPINNING_LABEL,
            Phase::Idle if self.has_results => RESTART_LABEL,
            Phase::Idle => START_LABEL,
        }
    }

    /// A slot flickers until its character is committed.
    pub fn is_slot_spinning(&self, slot: usize) -> bool {
        self.phase != Phase::Idle
            && self.players.get(slot).map_or(false, |p| p.character.is_none())
    }

    /// Committed character ids mapped to the colors of the players holding them.
    pub fn selected_characters(&self) -> BTreeMap<&'static str, Vec<PlayerColor>> {
        let mut selected: BTreeMap<&'static str, Vec<PlayerColor>> = BTreeMap::new();
        for player in &self.players {
            if let Some(character) = player.character {
                selected.entry(character.id).or_default().push(player.color);
            }
        }
        selected
    }

    pub fn spinning_ids(&self) -> BTreeSet<&'static str> {
        self.spinning_display.iter().flatten().map(|c| c.id).collect()
    }
}

/// The selection state machine.
///
/// Owns the three player slots, the per-slot flicker, and every timer of a
/// round. Time only moves through `advance`, so a host drives it from real
/// timers and tests drive it directly.
pub struct RouletteGame<R = StdRng> {
    config: RouletteConfig,
    settings: RouletteSettings,
    phase: Phase,
    players: [Player; SLOT_COUNT],
    spinning_display: [Option<Character>; SLOT_COUNT],
    previous_results: BTreeSet<&'static str>,
    pending_results: Vec<Character>,
    commit_timers: [Option<TimerId>; SLOT_COUNT],
    auto_stop_timer: Option<TimerId>,
    spin_engine: SpinEngine,
    scheduler: Scheduler<RouletteEvent>,
    rng: R,
    has_results: bool,
    rounds_completed: u32,
    torn_down: bool,
}

impl RouletteGame<StdRng> {
    pub fn new(config: RouletteConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> RouletteGame<R> {
    pub fn with_rng(config: RouletteConfig, rng: R) -> Self {
        Self {
            config,
            settings: RouletteSettings::default(),
            phase: Phase::Idle,
            players: INITIAL_PLAYERS,
            spinning_display: [None; SLOT_COUNT],
            previous_results: BTreeSet::new(),
            pending_results: Vec::new(),
            commit_timers: [None; SLOT_COUNT],
            auto_stop_timer: None,
            spin_engine: SpinEngine::new(),
            scheduler: Scheduler::new(),
            rng,
            has_results: false,
            rounds_completed: 0,
            torn_down: false,
        }
    }

    pub fn config(&self) -> &RouletteConfig {
        &self.config
    }

    pub fn settings(&self) -> RouletteSettings {
        self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn players(&self) -> &[Player; SLOT_COUNT] {
        &self.players
    }

    pub fn previous_results(&self) -> &BTreeSet<&'static str> {
        &self.previous_results
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn eligible_pool(&self) -> Vec<Character> {
        eligible_pool(&self.settings.unlocked_types)
    }

    pub fn round_state(&self) -> RoundState {
        RoundState {
            phase: self.phase,
            players: self.players,
            spinning_display: self.spinning_display,
            settings: self.settings,
            has_results: self.has_results,
        }
    }

    /// Idle -> Spinning. Ignored unless idle with a non-empty pool.
    pub fn start(&mut self) -> bool {
        if self.torn_down || self.phase != Phase::Idle {
            log::debug!("Ignoring start while {:?}", self.phase);
            return false;
        }
        if self.eligible_pool().is_empty() {
            log::info!("No eligible characters, ignoring start");
            return false;
        }

        self.phase = Phase::Spinning;
        for player in self.players.iter_mut() {
            player.character = None;
        }
        for slot in 0..SLOT_COUNT {
            self.spin_engine.start_spin(slot, self.config.spin_tick_ms, &mut self.scheduler);
        }
        if let Some(after) = self.config.auto_stop_after_ms {
            self.auto_stop_timer = Some(self.scheduler.set_timeout(after, RouletteEvent::AutoStop));
        }
        log::info!("Roulette spinning at t={}", self.scheduler.now());
        true
    }

    /// Spinning -> Stopping. Draws this round's results once and schedules
    /// the staggered per-slot commits.
    pub fn stop(&mut self) -> bool {
        if self.torn_down || self.phase != Phase::Spinning {
            log::debug!("Ignoring stop while {:?}", self.phase);
            return false;
        }
        if let Some(id) = self.auto_stop_timer.take() {
            self.scheduler.cancel(id);
        }

        let pool = self.eligible_pool();
        let exclude = if self.settings.exclude_previous {
            self.previous_results.clone()
        } else {
            BTreeSet::new()
        };
        self.pending_results = select_results(&pool, self.settings.allow_duplicates, &exclude, &mut self.rng);
        log::info!(
            "Roulette stopping at t={} with results {:?}",
            self.scheduler.now(),
            self.pending_results.iter().map(|c| c.id).collect::<Vec<_>>()
        );

        self.phase = Phase::Stopping;
        for (slot, timer) in self.commit_timers.iter_mut().enumerate() {
            let delay = self.config.commit_delay_for(slot);
            *timer = Some(self.scheduler.set_timeout(delay, RouletteEvent::Commit(slot)));
        }
        true
    }

    /// Clears players and the exclusion history. Idle only.
    pub fn reset(&mut self) -> bool {
        if self.torn_down || self.phase != Phase::Idle {
            log::debug!("Ignoring reset while {:?}", self.phase);
            return false;
        }
        for player in self.players.iter_mut() {
            player.character = None;
        }
        self.previous_results.clear();
        self.has_results = false;
        true
    }

    /// Moves the virtual clock forward, firing every timer that falls due.
    pub fn advance(&mut self, elapsed_ms: u64) {
        if self.torn_down {
            return;
        }
        let until = self.scheduler.now().saturating_add(elapsed_ms);
        while let Some((id, event)) = self.scheduler.pop_due(until) {
            self.dispatch(id, event);
        }
        self.scheduler.advance_to(until);
    }

    /// Cancels every timer. The game ignores all commands afterwards.
    pub fn teardown(&mut self) {
        self.spin_engine.stop_all(&mut self.scheduler);
        for timer in self.commit_timers.iter_mut() {
            if let Some(id) = timer.take() {
                self.scheduler.cancel(id);
            }
        }
        if let Some(id) = self.auto_stop_timer.take() {
            self.scheduler.cancel(id);
        }
        self.scheduler.cancel_all();
        self.torn_down = true;
        log::debug!("Roulette torn down");
    }

    pub fn set_allow_duplicates(&mut self, allow: bool) -> Result<(), RouletteError> {
        self.ensure_settings_unlocked()?;
        self.settings.allow_duplicates = allow;
        Ok(())
    }

    pub fn set_exclude_previous(&mut self, exclude: bool) -> Result<(), RouletteError> {
        self.ensure_settings_unlocked()?;
        self.settings.exclude_previous = exclude;
        Ok(())
    }

    pub fn set_unlocked_types(&mut self, unlocked: UnlockedTypes) -> Result<(), RouletteError> {
        self.ensure_settings_unlocked()?;
        self.settings.unlocked_types = unlocked;
        Ok(())
    }

    pub fn set_type_unlocked(&mut self, character_type: CharacterType, unlocked: bool) -> Result<(), RouletteError> {
        self.ensure_settings_unlocked()?;
        self.settings.unlocked_types.set(character_type, unlocked);
        Ok(())
    }

    /// Stopping is always locked: results were drawn at `stop()` against the current settings.
    fn ensure_settings_unlocked(&self) -> Result<(), RouletteError> {
        let locked = match self.phase {
            Phase::Idle => false,
            Phase::Spinning => self.config.lock_settings_while_active,
            Phase::Stopping => true,
        };
        if locked {
            return Err(RouletteError::SettingsLocked { phase: self.phase });
        }
        Ok(())
    }

    fn dispatch(&mut self, id: TimerId, event: RouletteEvent) {
        match event {
            RouletteEvent::SpinTick(slot) => {
                if self.spin_engine.timer(slot) == Some(id) {
                    let pool = self.eligible_pool();
                    self.spinning_display[slot] = pick_one(&pool, &mut self.rng);
                }
            }
            RouletteEvent::Commit(slot) => {
                if self.commit_timers.get(slot).copied().flatten() == Some(id) {
                    self.commit(slot);
                }
            }
            RouletteEvent::AutoStop => {
                if self.auto_stop_timer == Some(id) {
                    self.auto_stop_timer = None;
                    self.stop();
                }
            }
        }
    }

    fn commit(&mut self, slot: usize) {
        self.commit_timers[slot] = None;
        self.spin_engine.stop_spin(slot, &mut self.scheduler);
        self.spinning_display[slot] = None;
        self.players[slot].character = self.pending_results.get(slot).copied();
        log::debug!(
            "Slot {} committed {:?} at t={}",
            slot,
            self.players[slot].character.map(|c| c.id),
            self.scheduler.now()
        );

        if self.commit_timers.iter().all(Option::is_none) {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        self.phase = Phase::Idle;
        self.previous_results = if self.settings.exclude_previous {
            self.players.iter().filter_map(|p| p.character).map(|c| c.id).collect()
        } else {
            BTreeSet::new()
        };
        self.pending_results.clear();
        self.has_results = true;
        self.rounds_completed += 1;
        log::info!("Round {} complete at t={}", self.rounds_completed, self.scheduler.now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::CHARACTERS;
    use std::collections::HashSet;

    fn game(seed: u64) -> RouletteGame<StdRng> {
        RouletteGame::with_rng(RouletteConfig::default(), StdRng::seed_from_u64(seed))
    }

    fn game_with(config: RouletteConfig, seed: u64) -> RouletteGame<StdRng> {
        RouletteGame::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn run_round(game: &mut RouletteGame<StdRng>) {
        assert!(game.start());
        game.advance(400);
        assert!(game.stop());
        let settle = game.config().settle_time(SLOT_COUNT);
        game.advance(settle);
        assert_eq!(game.phase(), Phase::Idle);
    }

    fn committed_ids(game: &RouletteGame<StdRng>) -> Vec<Option<&'static str>> {
        game.players().iter().map(|p| p.character.map(|c| c.id)).collect()
    }

    #[test]
    fn test_full_round_with_all_characters() {
        let mut game = game(1);
        assert!(game.start());
        assert_eq!(game.phase(), Phase::Spinning);

        game.advance(2000);
        assert!(game.stop());
        game.advance(1300);

        assert_eq!(game.phase(), Phase::Idle);
        let ids: HashSet<_> = game
            .players()
            .iter()
            .map(|p| p.character.expect("committed").id)
            .collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| CHARACTERS.iter().any(|c| c.id == *id)));
        assert_eq!(game.rounds_completed(), 1);
        assert_eq!(game.pending_timers(), 0);
    }

    #[test]
    fn test_entropy_seeded_game_runs() {
        let mut game = RouletteGame::new(RouletteConfig::default());
        assert!(game.start());
        assert!(game.stop());
        game.advance(1300);
        assert!(game.players().iter().all(|p| p.character.is_some()));
    }

    #[test]
    fn test_start_clears_players_and_spins_every_slot() {
        let mut game = game(2);
        run_round(&mut game);
        assert!(game.players().iter().all(|p| p.character.is_some()));

        assert!(game.start());
        assert!(game.players().iter().all(|p| p.character.is_none()));
        let state = game.round_state();
        assert!(state.spinning_display.iter().all(Option::is_none));
        assert!((0..SLOT_COUNT).all(|slot| state.is_slot_spinning(slot)));

        game.advance(80);
        let state = game.round_state();
        assert!(state.spinning_display.iter().all(Option::is_some));
    }

    #[test]
    fn test_start_with_empty_pool_is_ignored() {
        let mut game = game(3);
        game.set_unlocked_types(UnlockedTypes::none()).unwrap();
        assert!(!game.start());
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.pending_timers(), 0);
    }

    #[test]
    fn test_commits_are_staggered_in_slot_order() {
        let mut game = game(4);
        game.start();
        game.advance(1000);
        game.stop();
        let stopped_at = game.now();

        game.advance(299);
        assert_eq!(game.phase(), Phase::Stopping);
        assert_eq!(committed_ids(&game), vec![None, None, None]);

        game.advance(1);
        assert_eq!(game.now() - stopped_at, 300);
        let state = game.round_state();
        assert!(state.players[0].character.is_some());
        assert!(state.spinning_display[0].is_none());
        assert!(state.players[1].character.is_none());
        assert!(state.spinning_display[1].is_some());
        assert!(!state.is_slot_spinning(0));
        assert!(state.is_slot_spinning(1));

        game.advance(499);
        assert!(game.players()[1].character.is_none());
        game.advance(1);
        assert!(game.players()[1].character.is_some());
        assert!(game.players()[2].character.is_none());
        assert_eq!(game.phase(), Phase::Stopping);

        game.advance(500);
        assert!(game.players()[2].character.is_some());
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.round_state().spinning_display.iter().all(Option::is_none));
    }

    #[test]
    fn test_invalid_commands_are_noops() {
        let mut game = game(5);
        assert!(!game.stop());
        assert_eq!(game.phase(), Phase::Idle);

        assert!(game.start());
        assert!(!game.start());
        let pending = game.pending_timers();

        assert!(game.stop());
        assert!(!game.stop());
        assert!(!game.start());
        assert_eq!(game.pending_timers(), pending + SLOT_COUNT);
    }

    #[test]
    fn test_reset_only_applies_when_idle() {
        let mut game = game(6);
        game.set_exclude_previous(true).unwrap();
        run_round(&mut game);
        assert_eq!(game.previous_results().len(), 3);

        game.start();
        let spinning = game.round_state();
        assert!(!game.reset());
        assert_eq!(game.round_state(), spinning);

        game.stop();
        game.advance(300);
        let stopping = game.round_state();
        assert!(!game.reset());
        assert_eq!(game.round_state(), stopping);

        game.advance(1000);
        assert!(game.reset());
        assert!(game.players().iter().all(|p| p.character.is_none()));
        assert!(game.previous_results().is_empty());
        assert_eq!(game.round_state().button_label(), START_LABEL);
    }

    #[test]
    fn test_exclude_previous_across_rounds() {
        for seed in 0..20 {
            let mut game = game(seed);
            game.set_exclude_previous(true).unwrap();
            run_round(&mut game);
            let first: HashSet<_> = game.previous_results().iter().copied().collect();
            assert_eq!(first.len(), 3);

            run_round(&mut game);
            for id in committed_ids(&game).into_iter().flatten() {
                assert!(!first.contains(id), "seed {} repeated {}", seed, id);
            }
        }
    }

    #[test]
    fn test_exclusion_with_small_pool() {
        let mut game = game(7);
        game.set_exclude_previous(true).unwrap();
        game.set_unlocked_types(UnlockedTypes { base: false, unlock: true, dlc: true }).unwrap();

        run_round(&mut game);
        let first = game.previous_results().clone();
        assert_eq!(first.len(), 3);

        // One candidate left, so only the first slot is filled.
        run_round(&mut game);
        let second = committed_ids(&game);
        assert!(second[0].is_some());
        assert!(!first.contains(second[0].unwrap()));
        assert_eq!(&second[1..], &[None, None]);
        assert_eq!(game.previous_results().len(), 1);

        run_round(&mut game);
        let third = committed_ids(&game);
        assert!(third.iter().all(Option::is_some));
        assert!(!third.contains(&second[0]));
    }

    #[test]
    fn test_previous_results_empty_without_exclusion() {
        let mut game = game(8);
        run_round(&mut game);
        assert!(game.previous_results().is_empty());
    }

    #[test]
    fn test_pool_smaller_than_slots_leaves_last_slot_empty() {
        let mut game = game(9);
        game.set_unlocked_types(UnlockedTypes { base: false, unlock: true, dlc: false }).unwrap();
        run_round(&mut game);
        let ids = committed_ids(&game);
        assert!(ids[0].is_some() && ids[1].is_some());
        assert_ne!(ids[0], ids[1]);
        assert_eq!(ids[2], None);
    }

    #[test]
    fn test_duplicates_fill_every_slot_from_small_pool() {
        let mut game = game(10);
        game.set_allow_duplicates(true).unwrap();
        game.set_unlocked_types(UnlockedTypes { base: false, unlock: false, dlc: true }).unwrap();
        run_round(&mut game);
        for id in committed_ids(&game) {
            assert!(matches!(id, Some("scholar") | Some("undertaker")));
        }
    }

    #[test]
    fn test_settings_locked_while_active() {
        let mut game = game(11);
        game.start();
        assert_eq!(
            game.set_allow_duplicates(true),
            Err(RouletteError::SettingsLocked { phase: Phase::Spinning })
        );
        game.stop();
        assert_eq!(
            game.set_type_unlocked(CharacterType::Dlc, false),
            Err(RouletteError::SettingsLocked { phase: Phase::Stopping })
        );
        assert_eq!(game.settings(), RouletteSettings::default());

        game.advance(1300);
        game.set_type_unlocked(CharacterType::Dlc, false).unwrap();
        assert_eq!(game.eligible_pool().len(), 8);
    }

    #[test]
    fn test_flicker_reads_pool_at_tick_time() {
        let config = RouletteConfig { lock_settings_while_active: false, ..RouletteConfig::default() };
        let mut game = game_with(config, 12);
        game.start();
        game.advance(160);
        game.set_unlocked_types(UnlockedTypes { base: false, unlock: false, dlc: true }).unwrap();

        for _ in 0..10 {
            game.advance(80);
            let state = game.round_state();
            for character in state.spinning_display.iter().flatten() {
                assert_eq!(character.character_type, CharacterType::Dlc);
            }
        }
    }

    #[test]
    fn test_stopping_keeps_settings_locked_without_guard() {
        let config = RouletteConfig { lock_settings_while_active: false, ..RouletteConfig::default() };
        let mut game = game_with(config, 21);
        game.start();
        game.advance(200);
        game.set_unlocked_types(UnlockedTypes { base: true, unlock: false, dlc: false }).unwrap();
        let pool = game.eligible_pool();
        assert!(game.stop());

        let dlc_only = UnlockedTypes { base: false, unlock: false, dlc: true };
        assert_eq!(
            game.set_unlocked_types(dlc_only),
            Err(RouletteError::SettingsLocked { phase: Phase::Stopping })
        );
        assert_eq!(
            game.set_allow_duplicates(true),
            Err(RouletteError::SettingsLocked { phase: Phase::Stopping })
        );
        game.advance(1300);

        assert_eq!(game.phase(), Phase::Idle);
        for player in game.players() {
            let character = player.character.expect("committed");
            assert!(pool.contains(&character));
        }
        game.set_unlocked_types(dlc_only).unwrap();
    }

    #[test]
    fn test_auto_stop() {
        let config = RouletteConfig { auto_stop_after_ms: Some(1500), ..RouletteConfig::default() };
        let mut game = game_with(config, 13);
        game.start();
        game.advance(1499);
        assert_eq!(game.phase(), Phase::Spinning);
        game.advance(1);
        assert_eq!(game.phase(), Phase::Stopping);
        game.advance(1300);
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.players().iter().all(|p| p.character.is_some()));
    }

    #[test]
    fn test_manual_stop_cancels_auto_stop() {
        let config = RouletteConfig { auto_stop_after_ms: Some(5000), ..RouletteConfig::default() };
        let mut game = game_with(config, 14);
        game.start();
        game.advance(100);
        game.stop();
        game.advance(1300);
        assert_eq!(game.phase(), Phase::Idle);

        game.start();
        game.advance(3700);
        assert_eq!(game.phase(), Phase::Spinning);
    }

    #[test]
    fn test_teardown_cancels_everything() {
        let mut game = game(15);
        game.start();
        game.advance(200);
        game.stop();
        game.teardown();
        assert_eq!(game.pending_timers(), 0);

        let before = game.round_state();
        game.advance(5000);
        assert_eq!(game.round_state(), before);
        assert!(!game.start());
        assert!(!game.stop());
        assert!(!game.reset());
        assert!(game.is_torn_down());
    }

    #[test]
    fn test_button_labels_and_selected_characters() {
        let mut game = game(16);
        assert_eq!(game.round_state().button_label(), START_LABEL);
        game.set_allow_duplicates(true).unwrap();
        game.set_unlocked_types(UnlockedTypes { base: false, unlock: true, dlc: false }).unwrap();

        game.start();
        assert_eq!(game.round_state().button_label(), SPINNING_LABEL);
        game.stop();
        assert_eq!(game.round_state().button_label(), SPINNING_LABEL);
        game.advance(1300);

        let state = game.round_state();
        assert_eq!(state.button_label(), RESTART_LABEL);
        let selected = state.selected_characters();
        let colors: usize = selected.values().map(Vec::len).sum();
        assert_eq!(colors, 3);
        assert!(selected.len() <= 2);
        assert!(state.spinning_ids().is_empty());
    }

    #[test]
    fn test_round_state_serializes_for_the_view() {
        let mut game = game(17);
        game.start();
        game.advance(80);
        let json = serde_json::to_value(game.round_state()).unwrap();
        assert_eq!(json["phase"], "Spinning");
        assert_eq!(json["spinningDisplay"].as_array().unwrap().len(), 3);
        assert_eq!(json["players"][2]["color"], "green");
        assert_eq!(json["settings"]["unlockedTypes"]["dlc"], true);
    }
}
