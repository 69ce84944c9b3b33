use roulette_shared::constants::CONFIG_STORAGE_KEY;
use roulette_shared::RouletteConfig;
use web_sys::window;

/// Reads an optional JSON override of the roulette timings from local storage.
pub fn load_roulette_config() -> RouletteConfig {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    match stored {
        Some(json) => RouletteConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring stored roulette config: {}", e);
            RouletteConfig::default()
        }),
        None => RouletteConfig::default(),
    }
}
