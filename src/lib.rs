//! Star Salvo - a charge-shot space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `platform`: Host-implemented traits (render surface, assets, input)
//! - `render`: Frame drawing over the live entity set
//! - `runner`: Fixed-tick session driver
//! - `settings`: Persisted preferences

pub mod platform;
pub mod render;
pub mod runner;
pub mod settings;
pub mod sim;

pub use runner::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (one tick per ~16 ms frame)
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions (the render surface reports the same)
    pub const FIELD_WIDTH: f32 = 1024.0;
    pub const FIELD_HEIGHT: f32 = 768.0;

    /// Hero defaults
    pub const HERO_WIDTH: f32 = 99.0;
    pub const HERO_HEIGHT: f32 = 75.0;
    /// Pixels moved per tick per held direction
    pub const HERO_SPEED: f32 = 3.0;
    pub const HERO_START_LIVES: u32 = 3;
    pub const POINTS_PER_KILL: u32 = 100;

    /// Normal-shot cooldown
    pub const FIRE_COOLDOWN_MS: u64 = 300;

    /// Charge shot - hold past the threshold, release to fire
    pub const CHARGE_THRESHOLD_MS: u64 = 300;
    pub const MAX_CHARGE_MS: u64 = 2000;
    pub const MIN_PIERCE: u32 = 2;
    pub const MAX_PIERCE: u32 = 6;
    pub const MIN_CHARGE_SCALE: f32 = 1.0;
    pub const MAX_CHARGE_SCALE: f32 = 2.5;

    /// Laser defaults (unit scale)
    pub const LASER_WIDTH: f32 = 9.0;
    pub const LASER_HEIGHT: f32 = 33.0;
    /// Ascent step in pixels, applied every `LASER_STEP_MS`
    pub const LASER_STEP: f32 = 15.0;
    pub const LASER_STEP_MS: u64 = 100;
    /// Lasers leave the muzzle this far above the owner's top edge
    pub const MUZZLE_OFFSET: f32 = 10.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 98.0;
    pub const ENEMY_HEIGHT: f32 = 50.0;
    /// Descent step in pixels, applied every `ENEMY_STEP_MS`
    pub const ENEMY_STEP: f32 = 5.0;
    pub const ENEMY_STEP_MS: u64 = 300;
    /// Wave grid
    pub const WAVE_COLS: u32 = 5;
    pub const WAVE_ROWS: u32 = 5;

    /// Support ships are this fraction of the hero's size
    pub const SUPPORT_SCALE: f32 = 0.7;
    /// Horizontal gap between hero and support ship
    pub const SUPPORT_GAP: f32 = 20.0;
    /// Support ships sit this far below the hero's top edge
    pub const SUPPORT_DROP: f32 = 20.0;
    pub const SUPPORT_FIRE_MS: u64 = 700;

    /// Item defaults
    pub const ITEM_SIZE: f32 = 40.0;
    /// Fall step in pixels, applied every `ITEM_STEP_MS` (faster than enemies)
    pub const ITEM_STEP: f32 = 8.0;
    pub const ITEM_STEP_MS: u64 = 80;
    pub const ITEM_SPAWN_INTERVAL_MS: u64 = 2000;
    /// Chance that a spawn window actually produces an item
    pub const ITEM_SPAWN_CHANCE: f64 = 0.5;

    /// Explosion defaults (cosmetic)
    pub const EXPLOSION_SIZE: f32 = 98.0;
    pub const EXPLOSION_TTL_MS: u64 = 300;

    /// Delay between the end of play and the terminal banner
    pub const ENDING_DELAY_MS: u64 = 200;
}

/// Convert a millisecond period to whole ticks (rounded up, never zero)
#[inline]
pub const fn ms_to_ticks(ms: u64) -> u64 {
    let ticks = (ms * consts::TICK_HZ as u64).div_ceil(1000);
    if ticks == 0 { 1 } else { ticks }
}

/// Elapsed milliseconds represented by a tick count
#[inline]
pub fn ticks_to_ms(ticks: u64) -> f32 {
    ticks as f32 * 1000.0 / consts::TICK_HZ as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_to_ticks_known_cadences() {
        assert_eq!(ms_to_ticks(consts::FIRE_COOLDOWN_MS), 18);
        assert_eq!(ms_to_ticks(consts::LASER_STEP_MS), 6);
        assert_eq!(ms_to_ticks(consts::ENEMY_STEP_MS), 18);
        assert_eq!(ms_to_ticks(consts::SUPPORT_FIRE_MS), 42);
        assert_eq!(ms_to_ticks(consts::ITEM_SPAWN_INTERVAL_MS), 120);
        assert_eq!(ms_to_ticks(consts::ENDING_DELAY_MS), 12);
        // 80 ms is not a whole number of 60 Hz ticks; rounds up to 5
        assert_eq!(ms_to_ticks(consts::ITEM_STEP_MS), 5);
    }

    #[test]
    fn test_ticks_to_ms_round_trip() {
        let ticks = ms_to_ticks(consts::CHARGE_THRESHOLD_MS);
        assert!((ticks_to_ms(ticks) - 300.0).abs() < 0.001);
    }
}
