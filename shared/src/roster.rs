use serde::{Deserialize, Serialize};

/// Eligibility tier of a character.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum CharacterType {
    Base,
    Unlock,
    Dlc,
}

impl CharacterType {
    pub const ALL: [CharacterType; 3] = [CharacterType::Base, CharacterType::Unlock, CharacterType::Dlc];
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: &'static str,
    pub name: &'static str,
    pub name_en: &'static str,
    #[serde(rename = "type")]
    pub character_type: CharacterType,
    pub color: &'static str,
}

impl Character {
    const fn new(
        id: &'static str,
        name: &'static str,
        name_en: &'static str,
        character_type: CharacterType,
        color: &'static str,
    ) -> Self {
        Self { id, name, name_en, character_type, color }
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ja => self.name,
            Locale::En => self.name_en,
        }
    }
}

pub const CHARACTERS: [Character; 10] = [
    Character::new("seeker", "追跡者", "Seeker", CharacterType::Base, "#4a90a4"),
    Character::new("guardian", "守護者", "Guardian", CharacterType::Base, "#8b7355"),
    Character::new("iron-eye", "鉄の目", "Iron Eye", CharacterType::Base, "#4a7c59"),
    Character::new("lady", "レディ", "Lady", CharacterType::Unlock, "#9370db"),
    Character::new("raider", "無頼漢", "Raider", CharacterType::Base, "#8b4513"),
    Character::new("avenger", "復讐者", "Avenger", CharacterType::Unlock, "#2f4f4f"),
    Character::new("hermit", "隠者", "Hermit", CharacterType::Base, "#6b5b95"),
    Character::new("executor", "執行者", "Executor", CharacterType::Base, "#c41e3a"),
    Character::new("scholar", "学者", "Scholar", CharacterType::Dlc, "#daa520"),
    Character::new("undertaker", "葬儀屋", "Undertaker", CharacterType::Dlc, "#1a1a2e"),
];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Blue,
    Red,
    Green,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub id: u8,
    pub color: PlayerColor,
    pub name: &'static str,
    pub character: Option<Character>,
}

impl Player {
    const fn new(id: u8, color: PlayerColor, name: &'static str) -> Self {
        Self { id, color, name, character: None }
    }
}

pub const INITIAL_PLAYERS: [Player; 3] = [
    Player::new(1, PlayerColor::Blue, "Player 1"),
    Player::new(2, PlayerColor::Red, "Player 2"),
    Player::new(3, PlayerColor::Green, "Player 3"),
];

/// Which character tiers may be drawn.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct UnlockedTypes {
    pub base: bool,
    pub unlock: bool,
    pub dlc: bool,
}

impl Default for UnlockedTypes {
    fn default() -> Self {
        Self { base: true, unlock: true, dlc: true }
    }
}

impl UnlockedTypes {
    pub fn none() -> Self {
        Self { base: false, unlock: false, dlc: false }
    }

    pub fn allows(&self, character_type: CharacterType) -> bool {
        match character_type {
            CharacterType::Base => self.base,
            CharacterType::Unlock => self.unlock,
            CharacterType::Dlc => self.dlc,
        }
    }

    pub fn set(&mut self, character_type: CharacterType, unlocked: bool) {
        match character_type {
            CharacterType::Base => self.base = unlocked,
            CharacterType::Unlock => self.unlock = unlocked,
            CharacterType::Dlc => self.dlc = unlocked,
        }
    }
}

/// Roster filtered by tier, in roster order.
pub fn eligible_pool(unlocked: &UnlockedTypes) -> Vec<Character> {
    CHARACTERS
        .iter()
        .filter(|c| unlocked.allows(c.character_type))
        .copied()
        .collect()
}
