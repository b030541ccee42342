//! Entity model and registry
//!
//! One tagged record covers every game object: all share position, size,
//! a `dead` tombstone and an opaque sprite handle, with variant-specific
//! state in `EntityKind`. All entities live in a single insertion-ordered
//! registry; removal is mark-dead-then-compact so the collection is never
//! mutated mid-pass.

use glam::Vec2;

use super::rect::Rect;

/// Opaque rendering handle. The sim stores one per entity but never
/// interprets it; the host's asset layer gives them meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteHandle(pub u32);

/// Every sprite the draw pass needs, resolved once at startup
#[derive(Debug, Clone, Copy, Default)]
pub struct SpriteCatalog {
    pub hero: SpriteHandle,
    pub enemy: SpriteHandle,
    pub laser: SpriteHandle,
    pub explosion: SpriteHandle,
    pub life: SpriteHandle,
    pub shield: SpriteHandle,
    pub support_left: SpriteHandle,
    pub support_right: SpriteHandle,
}

impl SpriteCatalog {
    /// Sprite for an item pickup (items reuse the sprite of what they grant)
    pub fn item(&self, effect: ItemEffect) -> SpriteHandle {
        match effect {
            ItemEffect::Shield => self.shield,
            ItemEffect::LeftSupport => self.support_left,
            ItemEffect::RightSupport => self.support_right,
        }
    }

    pub fn support(&self, side: Side) -> SpriteHandle {
        match side {
            Side::Left => self.support_left,
            Side::Right => self.support_right,
        }
    }
}

/// Stable entity identifier, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Which flank a support ship guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// What an item grants on pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    Shield,
    LeftSupport,
    RightSupport,
}

impl ItemEffect {
    pub fn support_side(self) -> Option<Side> {
        match self {
            ItemEffect::Shield => None,
            ItemEffect::LeftSupport => Some(Side::Left),
            ItemEffect::RightSupport => Some(Side::Right),
        }
    }
}

/// Hero-only state: lives, score, shield and weapon timing
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub lives: u32,
    pub score: u32,
    pub shield: bool,
    /// Tick at which the current charge began, if the fire key is held
    pub charging_since: Option<u64>,
    /// Tick of the last shot, for the normal-fire cooldown
    pub last_fire_tick: Option<u64>,
}

impl Hero {
    pub fn new(lives: u32) -> Self {
        Self {
            lives,
            score: 0,
            shield: false,
            charging_since: None,
            last_fire_tick: None,
        }
    }
}

/// Variant discriminant plus variant-specific payload
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Hero(Hero),
    Enemy,
    Laser { pierce_remaining: u32, scale: f32 },
    SupportShip { side: Side },
    Item { effect: ItemEffect },
    /// Purely cosmetic; removed once `expires_at_tick` passes
    Explosion { expires_at_tick: u64 },
}

/// A single game object
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Top-left corner in playfield coordinates
    pub pos: Vec2,
    pub size: Vec2,
    /// Tombstone: excluded from collisions, compacted at the tick boundary
    pub dead: bool,
    pub sprite: SpriteHandle,
}

impl Entity {
    /// Bounding box for collision tests
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn is_live(&self) -> bool {
        !self.dead
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, EntityKind::Enemy)
    }

    pub fn is_hero(&self) -> bool {
        matches!(self.kind, EntityKind::Hero(_))
    }
}

/// Insertion-ordered entity registry.
///
/// Iteration follows spawn order, which keeps collision resolution and
/// drawing deterministic. `compact` is the only removal path and runs once
/// per tick boundary, never during a detection pass.
#[derive(Debug, Clone, Default)]
pub struct Entities {
    entries: Vec<Entity>,
    next_id: u32,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an entity and return its id
    pub fn spawn(
        &mut self,
        kind: EntityKind,
        pos: Vec2,
        size: Vec2,
        sprite: SpriteHandle,
    ) -> EntityId {
        let id = self.next_entity_id();
        self.entries.push(Entity {
            id,
            kind,
            pos,
            size,
            dead: false,
            sprite,
        });
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Live (non-tombstoned) entity, if any
    pub fn get_live(&self, id: EntityId) -> Option<&Entity> {
        self.get(id).filter(|e| e.is_live())
    }

    /// Mark an entity dead; a no-op for unknown ids
    pub fn kill(&mut self, id: EntityId) {
        if let Some(e) = self.get_mut(id) {
            e.dead = true;
        }
    }

    /// All entities in insertion order, tombstones included
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entries.iter_mut()
    }

    /// Live entities in insertion order
    pub fn iter_live(&self) -> impl Iterator<Item = &Entity> {
        self.entries.iter().filter(|e| e.is_live())
    }

    /// Drop tombstoned entities. Runs once per tick, after event dispatch.
    pub fn compact(&mut self) {
        self.entries.retain(|e| !e.dead);
    }

    /// Remove everything (session teardown); ids keep counting up
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
