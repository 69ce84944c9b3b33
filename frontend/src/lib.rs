pub mod components;
pub mod config;
pub mod hooks;
pub mod styles;

use yew::prelude::*;
use crate::components::Roulette;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class={styles::PAGE}>
            <header class={styles::HEADER}>
                <h1 class={styles::TITLE}>{ "夜渡りルーレット" }</h1>
                <p class={styles::SUBTITLE}>{ "ELDEN RING NIGHTREIGN" }</p>
            </header>
            <main class={styles::MAIN}>
                <Roulette />
            </main>
        </div>
    }
}
