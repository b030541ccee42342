//! Fixed timestep simulation tick
//!
//! One call advances the session by a single 60 Hz step: movement, the
//! per-entity behavior cadences, the power-up spawn window, collision
//! detection, event dispatch and finally dead-entity compaction. Every
//! behavior cadence is an interval on the shared tick counter rather
//! than a timer of its own, so the whole sim stays deterministic and
//! single-threaded.

use glam::Vec2;

use super::entity::{EntityId, EntityKind};
use super::events::GameEvent;
use super::rect::{Rect, intersects};
use super::spawn::try_spawn_item;
use super::state::{GamePhase, GameState, Outcome};
use super::weapons;
use crate::consts::*;
use crate::{ms_to_ticks, ticks_to_ms};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held directional state
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire key went down this tick (begins charging)
    pub fire_pressed: bool,
    /// Fire key came up this tick (resolves to a normal or charged shot)
    pub fire_released: bool,
    /// Confirm/restart key went down this tick
    pub confirm: bool,
}

impl TickInput {
    /// Clear the edge-triggered flags once a tick has consumed them
    pub fn clear_edges(&mut self) {
        self.fire_pressed = false;
        self.fire_released = false;
        self.confirm = false;
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Frozen => {
            // Only the restart trigger is observed
            if input.confirm {
                state.events.emit(GameEvent::RestartRequested);
                drain_events(state);
            }
            return;
        }
        GamePhase::Ending => {
            state.ending_ticks = state.ending_ticks.saturating_sub(1);
            if state.ending_ticks == 0 {
                state.phase = GamePhase::Frozen;
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    handle_movement(state, input);
    handle_weapons(state, input);
    step_behaviors(state);

    if state.time_ticks % ms_to_ticks(ITEM_SPAWN_INTERVAL_MS) == 0 {
        try_spawn_item(state);
    }

    detect_collisions(state);
    drain_events(state);
    state.entities.compact();
}

/// Smooth hero movement from the held-direction snapshot, clamped to the
/// playfield. Only the hero is clamped; everything else leaves the field
/// and dies on its own terms.
fn handle_movement(state: &mut GameState, input: &TickInput) {
    let Some(hero) = state.hero_mut() else { return };
    let mut pos = hero.pos;
    if input.up {
        pos.y -= HERO_SPEED;
    }
    if input.down {
        pos.y += HERO_SPEED;
    }
    if input.left {
        pos.x -= HERO_SPEED;
    }
    if input.right {
        pos.x += HERO_SPEED;
    }
    pos.x = pos.x.clamp(0.0, FIELD_WIDTH - hero.size.x);
    pos.y = pos.y.clamp(0.0, FIELD_HEIGHT - hero.size.y);
    hero.pos = pos;
}

/// Fire-key edges: press begins a charge, release resolves it into either
/// a cooldown-gated normal shot (short press) or a charged shot
fn handle_weapons(state: &mut GameState, input: &TickInput) {
    if !input.fire_pressed && !input.fire_released {
        return;
    }
    let now = state.time_ticks;
    // Dropped inputs with no live hero are no-ops, not faults
    let Some(hero) = state.hero() else { return };
    let (hero_pos, hero_size) = (hero.pos, hero.size);

    if input.fire_pressed {
        if let Some(data) = state.hero_data_mut() {
            if data.charging_since.is_none() {
                data.charging_since = Some(now);
            }
        }
    }

    if input.fire_released {
        let Some(data) = state.hero_data_mut() else { return };
        let Some(start) = data.charging_since.take() else {
            return;
        };
        let held_ms = ticks_to_ms(now.saturating_sub(start));

        if weapons::is_normal_press(held_ms) {
            if weapons::can_fire_normal(data.last_fire_tick, now) {
                data.last_fire_tick = Some(now);
                state.spawn_laser(hero_pos, hero_size, 1, 1.0);
            }
        } else {
            let profile = weapons::charge_profile(held_ms);
            data.last_fire_tick = Some(now);
            state.spawn_laser(hero_pos, hero_size, profile.pierce, profile.scale);
            log::debug!(
                "charge shot released: pierce {}, scale {:.2}",
                profile.pierce,
                profile.scale
            );
        }
    }
}

/// The per-entity behaviors, each on its own cadence. Dead entities are
/// skipped, so a behavior silently stops once its owner is gone.
fn step_behaviors(state: &mut GameState) {
    let now = state.time_ticks;

    sync_support_positions(state);

    // Enemies descend until they reach the floor, then hold
    if now % ms_to_ticks(ENEMY_STEP_MS) == 0 {
        for e in state.entities.iter_mut() {
            if e.is_live() && e.is_enemy() && e.pos.y < FIELD_HEIGHT - e.size.y {
                e.pos.y += ENEMY_STEP;
            }
        }
    }

    // Lasers ascend and die past the top bound
    if now % ms_to_ticks(LASER_STEP_MS) == 0 {
        for e in state.entities.iter_mut() {
            if e.is_live() && matches!(e.kind, EntityKind::Laser { .. }) {
                if e.pos.y > 0.0 {
                    e.pos.y -= LASER_STEP;
                } else {
                    e.dead = true;
                }
            }
        }
    }

    // Items fall and die past the bottom bound
    if now % ms_to_ticks(ITEM_STEP_MS) == 0 {
        for e in state.entities.iter_mut() {
            if e.is_live() && matches!(e.kind, EntityKind::Item { .. }) {
                e.pos.y += ITEM_STEP;
                if e.pos.y > FIELD_HEIGHT {
                    e.dead = true;
                }
            }
        }
    }

    // Explosions expire
    for e in state.entities.iter_mut() {
        if let EntityKind::Explosion { expires_at_tick } = e.kind {
            if e.is_live() && now >= expires_at_tick {
                e.dead = true;
            }
        }
    }

    // Support ships fire automatically
    if now % ms_to_ticks(SUPPORT_FIRE_MS) == 0 {
        let shooters: Vec<(Vec2, Vec2)> = state
            .entities
            .iter_live()
            .filter(|e| matches!(e.kind, EntityKind::SupportShip { .. }))
            .map(|e| (e.pos, e.size))
            .collect();
        for (pos, size) in shooters {
            state.spawn_laser(pos, size, 1, 1.0);
        }
    }
}

/// Support ships never own their coordinates; every tick they are placed
/// relative to the hero's current position
fn sync_support_positions(state: &mut GameState) {
    let Some(hero) = state.hero() else { return };
    let (hero_pos, hero_size) = (hero.pos, hero.size);
    for e in state.entities.iter_mut() {
        if let EntityKind::SupportShip { side } = e.kind {
            if e.is_live() {
                e.pos = GameState::support_anchor(hero_pos, hero_size, side, e.size);
            }
        }
    }
}

/// Detection phase: read-only over a snapshot of the live registry, all
/// outcomes published as events (item pickups excepted; their effects
/// apply synchronously)
fn detect_collisions(state: &mut GameState) {
    let snapshot = |pred: fn(&EntityKind) -> bool| -> Vec<(EntityId, Rect)> {
        state
            .entities
            .iter_live()
            .filter(|e| pred(&e.kind))
            .map(|e| (e.id, e.rect()))
            .collect()
    };

    let lasers = snapshot(|k| matches!(k, EntityKind::Laser { .. }));
    let enemies = snapshot(|k| matches!(k, EntityKind::Enemy));
    let supports = snapshot(|k| matches!(k, EntityKind::SupportShip { .. }));
    let items = snapshot(|k| matches!(k, EntityKind::Item { .. }));
    let hero = state.hero().map(|e| (e.id, e.rect()));

    // 1. Laser x Enemy - every overlapping pair is its own hit
    for (laser, laser_rect) in &lasers {
        for (enemy, enemy_rect) in &enemies {
            if intersects(laser_rect, enemy_rect) {
                state.events.emit(GameEvent::LaserHitEnemy {
                    laser: *laser,
                    enemy: *enemy,
                });
            }
        }
    }

    // 2. Hero x Enemy
    if let Some((_, hero_rect)) = &hero {
        for (enemy, enemy_rect) in &enemies {
            if intersects(hero_rect, enemy_rect) {
                state.events.emit(GameEvent::EnemyHitHero { enemy: *enemy });
            }
        }
    }

    // 3. Support x Enemy
    for (support, support_rect) in &supports {
        for (enemy, enemy_rect) in &enemies {
            if intersects(support_rect, enemy_rect) {
                state.events.emit(GameEvent::SupportHitEnemy {
                    support: *support,
                    enemy: *enemy,
                });
            }
        }
    }

    // 4. Hero x Item - applied synchronously, item consumed
    if let Some((_, hero_rect)) = &hero {
        let touched: Vec<_> = items
            .iter()
            .filter(|(_, item_rect)| intersects(hero_rect, item_rect))
            .map(|(id, _)| *id)
            .collect();
        for id in touched {
            apply_item_effect(state, id);
        }
    }
}

/// Consume an item and grant its effect. Shield re-acquisition is a
/// no-op; a support side already occupied swallows the pickup.
fn apply_item_effect(state: &mut GameState, item_id: EntityId) {
    let Some(item) = state.entities.get_live(item_id) else {
        return;
    };
    let EntityKind::Item { effect } = item.kind else {
        return;
    };
    state.entities.kill(item_id);

    match effect.support_side() {
        None => {
            if let Some(data) = state.hero_data_mut() {
                data.shield = true;
            }
        }
        Some(side) => {
            if !state.support_alive(side) {
                state.spawn_support(side);
                log::debug!("support ship joined: {side:?}");
            }
        }
    }
}

/// Resolve queued events in emit order. Handlers may emit further events
/// (a kill can clear the wave); those are drained in the same pass.
fn drain_events(state: &mut GameState) {
    while let Some(event) = state.events.pop() {
        handle_event(state, event);
    }
}

fn handle_event(state: &mut GameState, event: GameEvent) {
    match event {
        GameEvent::LaserHitEnemy { laser, enemy } => on_laser_hit_enemy(state, laser, enemy),
        GameEvent::EnemyHitHero { enemy } => on_enemy_hit_hero(state, enemy),
        GameEvent::SupportHitEnemy { support, enemy } => {
            on_support_hit_enemy(state, support, enemy)
        }
        GameEvent::Win => end_session(state, Outcome::Win),
        GameEvent::Loss => end_session(state, Outcome::Loss),
        GameEvent::RestartRequested => state.reset(),
    }
}

fn on_laser_hit_enemy(
    state: &mut GameState,
    laser: EntityId,
    enemy: EntityId,
) {
    if state.phase != GamePhase::Playing {
        return;
    }
    // Stale hits from earlier in this drain are no-ops: the enemy may
    // already be down, or the laser's pierce already spent
    let Some(enemy_entity) = state.entities.get_live(enemy) else {
        return;
    };
    let blast_pos = enemy_entity.pos;
    if state.entities.get_live(laser).is_none() {
        return;
    }

    state.entities.kill(enemy);
    if let Some(data) = state.hero_data_mut() {
        data.score += POINTS_PER_KILL;
    }
    state.spawn_explosion(blast_pos);

    if let Some(e) = state.entities.get_mut(laser) {
        if let EntityKind::Laser {
            pierce_remaining, ..
        } = &mut e.kind
        {
            *pierce_remaining = pierce_remaining.saturating_sub(1);
            if *pierce_remaining == 0 {
                e.dead = true;
            }
        }
    }

    if state.enemies_cleared() {
        state.events.emit(GameEvent::Win);
    }
}

fn on_enemy_hit_hero(state: &mut GameState, enemy: EntityId) {
    if state.phase != GamePhase::Playing {
        return;
    }
    if state.entities.get_live(enemy).is_none() {
        return;
    }
    if state.hero().is_none() {
        return;
    }
    state.entities.kill(enemy);

    let hero_died = {
        let Some(data) = state.hero_data_mut() else {
            return;
        };
        if data.shield {
            // One-hit absorption
            data.shield = false;
            false
        } else {
            data.lives = data.lives.saturating_sub(1);
            data.lives == 0
        }
    };

    if hero_died {
        if let Some(hero) = state.hero_mut() {
            hero.dead = true;
        }
        state.events.emit(GameEvent::Loss);
        return;
    }
    if state.enemies_cleared() {
        state.events.emit(GameEvent::Win);
    }
}

fn on_support_hit_enemy(
    state: &mut GameState,
    support: EntityId,
    enemy: EntityId,
) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let Some(enemy_entity) = state.entities.get_live(enemy) else {
        return;
    };
    let blast_pos = enemy_entity.pos;
    if state.entities.get_live(support).is_none() {
        return;
    }

    state.entities.kill(support);
    state.entities.kill(enemy);
    if let Some(data) = state.hero_data_mut() {
        data.score += POINTS_PER_KILL;
    }
    state.spawn_explosion(blast_pos);

    if state.enemies_cleared() {
        state.events.emit(GameEvent::Win);
    }
}

/// `Playing -> Ending`. Guarded so however many kill events resolve in
/// the final tick, the transition happens exactly once.
fn end_session(state: &mut GameState, outcome: Outcome) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.phase = GamePhase::Ending;
    state.ending_ticks = ms_to_ticks(ENDING_DELAY_MS);
    state.outcome = Some(outcome);

    let score = state
        .entities
        .iter()
        .find_map(|e| match &e.kind {
            EntityKind::Hero(h) => Some(h.score),
            _ => None,
        })
        .unwrap_or(0);
    log::info!("session over: {outcome:?}, score {score}");
}
