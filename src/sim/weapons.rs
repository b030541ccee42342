//! Weapon timing and charge-shot math
//!
//! Pure functions only; spawning the actual laser entities is the tick's
//! job. Two firing branches exist: a cooldown-gated normal shot, and a
//! charge shot whose pierce count and size scale with how long the fire
//! key was held before release.

use glam::Vec2;

use crate::consts::*;
use crate::ms_to_ticks;

/// Resolved charge release: how many enemies the laser can destroy and
/// how much its sprite is scaled up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeProfile {
    pub pierce: u32,
    pub scale: f32,
}

/// Map a held duration to pierce and scale.
///
/// The duration is clamped to `[CHARGE_THRESHOLD_MS, MAX_CHARGE_MS]`;
/// pierce interpolates `MIN_PIERCE..=MAX_PIERCE` (rounded) and scale
/// interpolates `MIN_CHARGE_SCALE..=MAX_CHARGE_SCALE` linearly.
pub fn charge_profile(held_ms: f32) -> ChargeProfile {
    let threshold = CHARGE_THRESHOLD_MS as f32;
    let max = MAX_CHARGE_MS as f32;
    let clamped = held_ms.clamp(threshold, max);
    let ratio = (clamped - threshold) / (max - threshold);

    let pierce_span = (MAX_PIERCE - MIN_PIERCE) as f32;
    let pierce = MIN_PIERCE + (ratio * pierce_span).round() as u32;
    let pierce = pierce.clamp(MIN_PIERCE, MAX_PIERCE);

    let scale = MIN_CHARGE_SCALE + ratio * (MAX_CHARGE_SCALE - MIN_CHARGE_SCALE);

    ChargeProfile { pierce, scale }
}

/// Whether a short press lands in the normal-fire branch rather than the
/// charged one
#[inline]
pub fn is_normal_press(held_ms: f32) -> bool {
    held_ms < CHARGE_THRESHOLD_MS as f32
}

/// Cooldown gate for normal shots
pub fn can_fire_normal(last_fire_tick: Option<u64>, now_tick: u64) -> bool {
    match last_fire_tick {
        None => true,
        Some(t) => now_tick.saturating_sub(t) >= ms_to_ticks(FIRE_COOLDOWN_MS),
    }
}

/// Top-left spawn position for a laser of the given scale, centered on the
/// owner's horizontal midpoint and just above its top edge
pub fn muzzle_pos(owner_pos: Vec2, owner_size: Vec2, scale: f32) -> Vec2 {
    let x = owner_pos.x + owner_size.x / 2.0 - (LASER_WIDTH * scale) / 2.0;
    let y = owner_pos.y - MUZZLE_OFFSET;
    Vec2::new(x, y)
}

/// Charge progress in `[0, 1]`, for the rendering feedback only
pub fn charge_ratio(elapsed_ms: f32) -> f32 {
    (elapsed_ms / MAX_CHARGE_MS as f32).clamp(0.0, 1.0)
}
