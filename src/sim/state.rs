//! Game state and session lifecycle
//!
//! A session is one attempt at the wave: hero plus enemy grid, running
//! until a win or loss freezes the field, then rebuilt on restart. All
//! state the tick mutates lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{
    Entities, Entity, EntityId, EntityKind, Hero, ItemEffect, Side, SpriteCatalog,
};
use super::events::EventQueue;
use super::weapons;
use crate::consts::*;
use crate::ms_to_ticks;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ticking: movement, collisions and spawn timers active
    Playing,
    /// Win or Loss fired; gameplay stopped, banner pending
    Ending,
    /// Banner shown; only the restart input is observed
    Frozen,
}

/// How the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only source of randomness in the sim
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Ticks remaining in the `Ending` phase
    pub ending_ticks: u64,
    /// Set when the session ends; drives the terminal banner
    pub outcome: Option<Outcome>,
    pub entities: Entities,
    pub events: EventQueue,
    /// Sprite handles stamped onto spawned entities
    pub catalog: SpriteCatalog,
    hero_id: Option<EntityId>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, catalog: SpriteCatalog) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Playing,
            ending_ticks: 0,
            outcome: None,
            entities: Entities::new(),
            events: EventQueue::new(),
            catalog,
            hero_id: None,
        };
        state.build_session();
        log::info!("session started, seed {seed}");
        state
    }

    /// Tear the session down and rebuild it: fresh hero, fresh wave,
    /// score and lives back to their initial values. The RNG stream
    /// continues so a full run stays a function of seed plus inputs.
    pub fn reset(&mut self) {
        self.entities.clear();
        self.events.clear();
        self.time_ticks = 0;
        self.ending_ticks = 0;
        self.outcome = None;
        self.phase = GamePhase::Playing;
        self.build_session();
        log::info!("session restarted");
    }

    fn build_session(&mut self) {
        self.create_wave();
        self.create_hero();
    }

    /// The full enemy grid, columns centered, rows stacked from the top
    fn create_wave(&mut self) {
        let grid_width = WAVE_COLS as f32 * ENEMY_WIDTH;
        let start_x = (FIELD_WIDTH - grid_width) / 2.0;
        for col in 0..WAVE_COLS {
            for row in 0..WAVE_ROWS {
                let pos = Vec2::new(
                    start_x + col as f32 * ENEMY_WIDTH,
                    row as f32 * ENEMY_HEIGHT,
                );
                self.entities.spawn(
                    EntityKind::Enemy,
                    pos,
                    Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
                    self.catalog.enemy,
                );
            }
        }
    }

    fn create_hero(&mut self) {
        let pos = Vec2::new(
            (FIELD_WIDTH - HERO_WIDTH) / 2.0,
            FIELD_HEIGHT - FIELD_HEIGHT / 4.0,
        );
        let id = self.entities.spawn(
            EntityKind::Hero(Hero::new(HERO_START_LIVES)),
            pos,
            Vec2::new(HERO_WIDTH, HERO_HEIGHT),
            self.catalog.hero,
        );
        self.hero_id = Some(id);
    }

    /// The live hero, if the session still has one
    pub fn hero(&self) -> Option<&Entity> {
        self.hero_id.and_then(|id| self.entities.get_live(id))
    }

    pub fn hero_mut(&mut self) -> Option<&mut Entity> {
        let id = self.hero_id?;
        self.entities.get_mut(id).filter(|e| e.is_live())
    }

    /// Hero stats (lives, score, shield, weapon timing)
    pub fn hero_data(&self) -> Option<&Hero> {
        match self.hero()?.kind {
            EntityKind::Hero(ref h) => Some(h),
            _ => None,
        }
    }

    pub fn hero_data_mut(&mut self) -> Option<&mut Hero> {
        match self.hero_mut()?.kind {
            EntityKind::Hero(ref mut h) => Some(h),
            _ => None,
        }
    }

    pub fn live_enemy_count(&self) -> usize {
        self.entities.iter_live().filter(|e| e.is_enemy()).count()
    }

    /// Win condition: no live enemy remains
    pub fn enemies_cleared(&self) -> bool {
        self.live_enemy_count() == 0
    }

    /// Whether a support ship is alive on the given side
    pub fn support_alive(&self, side: Side) -> bool {
        self.entities
            .iter_live()
            .any(|e| matches!(e.kind, EntityKind::SupportShip { side: s } if s == side))
    }

    /// Derived position of a support ship: never owns its own coordinates,
    /// always an offset from the hero
    pub fn support_anchor(hero_pos: Vec2, hero_size: Vec2, side: Side, size: Vec2) -> Vec2 {
        let x = match side {
            Side::Left => hero_pos.x - size.x - SUPPORT_GAP,
            Side::Right => hero_pos.x + hero_size.x + SUPPORT_GAP,
        };
        Vec2::new(x, hero_pos.y + SUPPORT_DROP)
    }

    /// Spawn a laser centered above an owner (hero or support ship)
    pub fn spawn_laser(
        &mut self,
        owner_pos: Vec2,
        owner_size: Vec2,
        pierce: u32,
        scale: f32,
    ) -> EntityId {
        let pos = weapons::muzzle_pos(owner_pos, owner_size, scale);
        self.entities.spawn(
            EntityKind::Laser {
                pierce_remaining: pierce,
                scale,
            },
            pos,
            Vec2::new(LASER_WIDTH * scale, LASER_HEIGHT * scale),
            self.catalog.laser,
        )
    }

    /// Cosmetic explosion at a destroyed enemy's position
    pub fn spawn_explosion(&mut self, pos: Vec2) {
        let expires_at_tick = self.time_ticks + ms_to_ticks(EXPLOSION_TTL_MS);
        self.entities.spawn(
            EntityKind::Explosion { expires_at_tick },
            pos,
            Vec2::new(EXPLOSION_SIZE, EXPLOSION_SIZE),
            self.catalog.explosion,
        );
    }

    /// Spawn a support ship beside the hero. Caller checks the
    /// one-per-side invariant; this is position and bookkeeping only.
    pub fn spawn_support(&mut self, side: Side) -> Option<EntityId> {
        let hero = self.hero()?;
        let (hero_pos, hero_size) = (hero.pos, hero.size);
        let size = hero_size * SUPPORT_SCALE;
        let pos = Self::support_anchor(hero_pos, hero_size, side, size);
        let sprite = self.catalog.support(side);
        Some(
            self.entities
                .spawn(EntityKind::SupportShip { side }, pos, size, sprite),
        )
    }

    /// Spawn a falling item just above the top of the field
    pub fn spawn_item(&mut self, effect: ItemEffect, x: f32) -> EntityId {
        let sprite = self.catalog.item(effect);
        self.entities.spawn(
            EntityKind::Item { effect },
            Vec2::new(x, -ITEM_SIZE),
            Vec2::new(ITEM_SIZE, ITEM_SIZE),
            sprite,
        )
    }
}
