use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use roulette_shared::{CharacterType, RoundState, RouletteError, RouletteGame};
use yew::prelude::*;

use crate::config::load_roulette_config;

/// How often the browser pushes real elapsed time into the game clock.
const HOST_TICK_MS: u32 = 16;

type SharedGame = Rc<RefCell<RouletteGame<SmallRng>>>;

#[derive(Clone)]
pub struct RouletteHandle {
    pub state: RoundState,
    pub start: Callback<()>,
    pub stop: Callback<()>,
    pub reset: Callback<()>,
    pub set_allow_duplicates: Callback<bool>,
    pub set_exclude_previous: Callback<bool>,
    pub set_type_unlocked: Callback<(CharacterType, bool)>,
}

fn command<T: 'static>(
    game: &SharedGame,
    state: &UseStateHandle<RoundState>,
    f: impl Fn(&mut RouletteGame<SmallRng>, T) + 'static,
) -> Callback<T> {
    let game = game.clone();
    let state = state.clone();
    Callback::from(move |arg: T| {
        let snapshot = {
            let mut game = game.borrow_mut();
            f(&mut *game, arg);
            game.round_state()
        };
        state.set(snapshot);
    })
}

fn log_rejected(result: Result<(), RouletteError>) {
    if let Err(e) = result {
        log::warn!("{}", e);
    }
}

#[hook]
pub fn use_roulette() -> RouletteHandle {
    let game: SharedGame = use_mut_ref(|| {
        RouletteGame::with_rng(load_roulette_config(), SmallRng::from_entropy())
    });
    let state = use_state_eq(|| game.borrow().round_state());

    // Drive the game clock while mounted and cancel every timer on unmount
    {
        let game = game.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let mut last = js_sys::Date::now();
            let ticking = game.clone();
            let interval = Interval::new(HOST_TICK_MS, move || {
                let elapsed = (js_sys::Date::now() - last).max(0.0).floor();
                last += elapsed;
                let snapshot = {
                    let mut game = ticking.borrow_mut();
                    game.advance(elapsed as u64);
                    game.round_state()
                };
                state.set(snapshot);
            });

            move || {
                drop(interval);
                game.borrow_mut().teardown();
            }
        });
    }

    RouletteHandle {
        state: (*state).clone(),
        start: command(&game, &state, |game, _: ()| {
            game.start();
        }),
        stop: command(&game, &state, |game, _: ()| {
            game.stop();
        }),
        reset: command(&game, &state, |game, _: ()| {
            game.reset();
        }),
        set_allow_duplicates: command(&game, &state, |game, allow: bool| {
            log_rejected(game.set_allow_duplicates(allow));
        }),
        set_exclude_previous: command(&game, &state, |game, exclude: bool| {
            log_rejected(game.set_exclude_previous(exclude));
        }),
        set_type_unlocked: command(&game, &state, |game, (character_type, unlocked): (CharacterType, bool)| {
            log_rejected(game.set_type_unlocked(character_type, unlocked));
        }),
    }
}
