pub mod use_roulette;

pub use use_roulette::*;
