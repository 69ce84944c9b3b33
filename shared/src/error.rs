use thiserror::Error;

use crate::shared_roulette_game::Phase;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouletteError {
    #[error("settings cannot change while the roulette is {phase:?}")]
    SettingsLocked { phase: Phase },
    #[error("invalid roulette config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for RouletteError {
    fn from(err: serde_json::Error) -> Self {
        RouletteError::InvalidConfig(err.to_string())
    }
}

impl From<validator::ValidationErrors> for RouletteError {
    fn from(err: validator::ValidationErrors) -> Self {
        RouletteError::InvalidConfig(err.to_string())
    }
}
