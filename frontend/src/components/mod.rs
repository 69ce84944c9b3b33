pub mod character_select;
pub mod player_slot;
pub mod roulette;

pub use character_select::CharacterSelect;
pub use player_slot::PlayerSlot;
pub use roulette::Roulette;
