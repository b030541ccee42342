//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order of the entity registry)
//! - No rendering or platform dependencies

pub mod entity;
pub mod events;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod weapons;

pub use entity::{
    Entities, Entity, EntityId, EntityKind, Hero, ItemEffect, Side, SpriteCatalog, SpriteHandle,
};
pub use events::{EventQueue, GameEvent};
pub use rect::{Rect, intersects};
pub use state::{GamePhase, GameState, Outcome};
pub use tick::{TickInput, tick};
pub use weapons::{ChargeProfile, charge_profile, charge_ratio};
