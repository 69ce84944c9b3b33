use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{COMMIT_BASE_DELAY_MS, COMMIT_STAGGER_MS, SPIN_TICK_MS};
use crate::error::RouletteError;
use crate::validation::*;

/// Timing and guard settings for a roulette.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Validate)]
#[serde(default)]
pub struct RouletteConfig {
    /// Period of the per-slot flicker while spinning.
    #[validate(custom = "validate_tick_ms")]
    pub spin_tick_ms: u64,
    /// Delay from `stop()` to the first slot's commit.
    #[validate(custom = "validate_base_delay_ms")]
    pub commit_base_delay_ms: u64,
    /// Extra delay added per slot index. Must be positive so slots lock in order.
    #[validate(custom = "validate_stagger_ms")]
    pub commit_stagger_ms: u64,
    /// Stop automatically this long after `start()`.
    #[validate(custom = "validate_auto_stop_ms")]
    pub auto_stop_after_ms: Option<u64>,
    pub lock_settings_while_active: bool,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            spin_tick_ms: SPIN_TICK_MS,
            commit_base_delay_ms: COMMIT_BASE_DELAY_MS,
            commit_stagger_ms: COMMIT_STAGGER_MS,
            auto_stop_after_ms: None,
            lock_settings_while_active: true,
        }
    }
}

impl RouletteConfig {
    pub fn from_json(json: &str) -> Result<Self, RouletteError> {
        let config: RouletteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn commit_delay_for(&self, slot: usize) -> u64 {
        self.commit_stagger_ms
            .saturating_mul(slot as u64)
            .saturating_add(self.commit_base_delay_ms)
    }

    /// Time from `stop()` until the last slot commits.
    #[cfg(test)]
    pub(crate) fn settle_time(&self, slots: usize) -> u64 {
        self.commit_delay_for(slots.saturating_sub(1))
    }
}
