use std::collections::{BTreeMap, BTreeSet};

use roulette_shared::{PlayerColor, UnlockedTypes, CHARACTERS};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CharacterSelectProps {
    pub selected: BTreeMap<&'static str, Vec<PlayerColor>>,
    pub spinning: BTreeSet<&'static str>,
    pub unlocked: UnlockedTypes,
}

/// Roster grid. Committed characters get their players' rings, flicker
/// targets are brightened, and locked tiers are dimmed.
#[function_component(CharacterSelect)]
pub fn character_select(props: &CharacterSelectProps) -> Html {
    html! {
        <div class="flex justify-center mb-4">
            <div class={styles::GRID}>
                { for CHARACTERS.iter().map(|character| {
                    let colors = props.selected.get(character.id).cloned().unwrap_or_default();
                    let mut class = classes!(styles::ICON);
                    if let Some(&first) = colors.first() {
                        class.push(styles::ring(first));
                    }
                    if props.spinning.contains(character.id) {
                        class.push("scale-110 brightness-150");
                    }
                    if !props.unlocked.allows(character.character_type) {
                        class.push("opacity-30");
                    }
                    html! {
                        <div
                            key={character.id}
                            class={class}
                            style={format!("background-color: {}", character.color)}
                            title={character.name_en}
                        >
                            { character.name }
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
