pub mod config;
pub mod constants;
pub mod error;
pub mod roster;
pub mod sampler;
pub mod scheduler;
pub mod shared_roulette_game;
pub mod spin_engine;
pub mod validation;

pub use config::RouletteConfig;
pub use error::RouletteError;
pub use roster::{Character, CharacterType, Locale, Player, PlayerColor, UnlockedTypes, CHARACTERS, INITIAL_PLAYERS};
pub use shared_roulette_game::{Phase, RoundState, RouletteGame, RouletteSettings};
