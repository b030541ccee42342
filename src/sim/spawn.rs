//! Periodic power-up spawning
//!
//! Every spawn window the seeded RNG decides whether an item drops at all,
//! then which effect it carries. Support-ship items are withheld while
//! that side already has a live ship; the shield is always eligible.

use rand::Rng;

use super::entity::{ItemEffect, Side};
use super::state::GameState;
use crate::consts::*;

/// Effects eligible for the next drop given which supports are alive
pub fn spawn_pool(left_alive: bool, right_alive: bool) -> Vec<ItemEffect> {
    let mut pool = vec![ItemEffect::Shield];
    if !left_alive {
        pool.push(ItemEffect::LeftSupport);
    }
    if !right_alive {
        pool.push(ItemEffect::RightSupport);
    }
    pool
}

/// One spawn attempt. Called by the tick on the spawn interval; rolls the
/// drop chance, picks an effect uniformly and places the item at a random
/// horizontal position above the field.
pub fn try_spawn_item(state: &mut GameState) {
    // No hero, no drops
    if state.hero().is_none() {
        return;
    }
    if !state.rng.random_bool(ITEM_SPAWN_CHANCE) {
        return;
    }

    let pool = spawn_pool(
        state.support_alive(Side::Left),
        state.support_alive(Side::Right),
    );
    if pool.is_empty() {
        return;
    }

    let effect = pool[state.rng.random_range(0..pool.len())];
    let x = state.rng.random_range(0.0..(FIELD_WIDTH - ITEM_SIZE));
    state.spawn_item(effect, x);
    log::debug!("item spawned: {effect:?} at x={x:.0}");
}
