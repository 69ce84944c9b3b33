use roulette_shared::constants::{ALLOW_DUPLICATES_LABEL, EXCLUDE_PREVIOUS_LABEL, RESET_LABEL, STOP_LABEL};
use roulette_shared::{CharacterType, Phase};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{CharacterSelect, PlayerSlot};
use crate::hooks::use_roulette;
use crate::styles;

fn checkbox(label: &'static str, checked: bool, disabled: bool, on_toggle: Callback<bool>) -> Html {
    let onchange = Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_toggle.emit(input.checked());
    });
    html! {
        <label class="flex items-center gap-2 cursor-pointer select-none">
            <input type="checkbox" class={styles::CHECKBOX} {checked} {disabled} {onchange} />
            <span>{ label }</span>
        </label>
    }
}

fn tier_label(character_type: CharacterType) -> &'static str {
    match character_type {
        CharacterType::Base => "初期キャラ",
        CharacterType::Unlock => "解放キャラ",
        CharacterType::Dlc => "DLC",
    }
}

#[function_component(Roulette)]
pub fn roulette() -> Html {
    let roulette = use_roulette();
    let state = &roulette.state;
    let idle = state.phase == Phase::Idle;
    let settings = state.settings;

    let (primary_label, on_primary) = match state.phase {
        Phase::Spinning => (STOP_LABEL, roulette.stop.reform(|_: MouseEvent| ())),
        _ => (state.button_label(), roulette.start.reform(|_: MouseEvent| ())),
    };
    let on_reset = roulette.reset.reform(|_: MouseEvent| ());

    html! {
        <div class="flex flex-col gap-4">
            <CharacterSelect
                selected={state.selected_characters()}
                spinning={state.spinning_ids()}
                unlocked={settings.unlocked_types}
            />

            <div>
                <div class={styles::SLOTS}>
                    { for state.players.iter().enumerate().map(|(slot, player)| html! {
                        <PlayerSlot
                            key={player.id}
                            player={*player}
                            is_spinning={state.is_slot_spinning(slot)}
                            spinning_character={state.spinning_display[slot]}
                        />
                    }) }
                </div>

                <div class={styles::OPTIONS}>
                    { checkbox(ALLOW_DUPLICATES_LABEL, settings.allow_duplicates, !idle, roulette.set_allow_duplicates.clone()) }
                    { checkbox(EXCLUDE_PREVIOUS_LABEL, settings.exclude_previous, !idle, roulette.set_exclude_previous.clone()) }
                    { for CharacterType::ALL.into_iter().map(|character_type| {
                        let toggle = roulette.set_type_unlocked.reform(move |unlocked: bool| (character_type, unlocked));
                        checkbox(
                            tier_label(character_type),
                            settings.unlocked_types.allows(character_type),
                            !idle,
                            toggle,
                        )
                    }) }
                </div>

                <div class="flex items-center justify-center gap-4">
                    <button
                        class={styles::BUTTON_PRIMARY}
                        onclick={on_primary}
                        disabled={state.phase == Phase::Stopping}
                    >
                        { primary_label }
                    </button>
                    <button class={styles::BUTTON_SECONDARY} onclick={on_reset} disabled={!idle}>
                        { RESET_LABEL }
                    </button>
                </div>
            </div>
        </div>
    }
}
