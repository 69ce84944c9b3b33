use roulette_shared::{Character, Locale, Player};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PlayerSlotProps {
    pub player: Player,
    pub is_spinning: bool,
    pub spinning_character: Option<Character>,
}

fn portrait(character: &Character) -> Html {
    html! {
        <>
            <div
                class={styles::PORTRAIT}
                style={format!("background: linear-gradient(160deg, {0}20 0%, {0}50 50%, {0}30 100%)", character.color)}
            >
                { character.display_name(Locale::En) }
            </div>
            <div class="mt-1 text-center text-sm font-bold">{ character.display_name(Locale::Ja) }</div>
        </>
    }
}

#[function_component(PlayerSlot)]
pub fn player_slot(props: &PlayerSlotProps) -> Html {
    let player = &props.player;

    let body = match (props.is_spinning, props.spinning_character, player.character) {
        (true, Some(flicker), _) => portrait(&flicker),
        (false, _, Some(character)) => portrait(&character),
        (true, None, _) => html! { <div class="text-gray-500">{ "…" }</div> },
        (false, _, None) => html! { <div class="text-gray-600 text-2xl">{ "?" }</div> },
    };

    html! {
        <div class={classes!(styles::SLOT, styles::slot_border(player.color))}>
            <div class="absolute top-1.5 left-1/2 -translate-x-1/2 flex items-center gap-1.5">
                <div class={styles::marker(player.color)} />
                <span class="text-xs font-bold">{ player.name }</span>
            </div>
            <div class="flex flex-col items-center justify-center flex-1">
                { body }
            </div>
        </div>
    }
}
