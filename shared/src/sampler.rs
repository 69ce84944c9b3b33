use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::SLOT_COUNT;
use crate::roster::Character;

/// Draws the results of one round.
///
/// Characters whose id is in `exclude` are dropped from `pool` first, unless
/// that would leave nothing to draw from, in which case the whole pool is used.
/// With duplicates allowed every slot is an independent uniform draw; without,
/// the candidates are shuffled and the first `min(3, len)` are taken, so a small
/// pool yields fewer than three results. An empty pool yields an empty result.
pub fn select_results<R: Rng + ?Sized>(
    pool: &[Character],
    allow_duplicates: bool,
    exclude: &BTreeSet<&str>,
    rng: &mut R,
) -> Vec<Character> {
    if pool.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<Character> = pool
        .iter()
        .filter(|c| !exclude.contains(c.id))
        .copied()
        .collect();
    if candidates.is_empty() {
        log::debug!("Exclusion covers the whole pool, drawing from all {} characters", pool.len());
        candidates = pool.to_vec();
    }

    if allow_duplicates {
        (0..SLOT_COUNT)
            .filter_map(|_| candidates.choose(rng).copied())
            .collect()
    } else {
        candidates.shuffle(rng);
        candidates.truncate(SLOT_COUNT);
        candidates
    }
}

/// A single uniform draw, used for the spin flicker.
pub fn pick_one<R: Rng + ?Sized>(pool: &[Character], rng: &mut R) -> Option<Character> {
    pool.choose(rng).copied()
}
