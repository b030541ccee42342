//! Platform abstraction layer
//!
//! The sim never talks to a window, a canvas or a keyboard directly; the
//! bootstrap implements these traits and owns their lifecycles. Asset
//! failures are not modeled here - an asset either resolves or the host
//! never starts the game.

use glam::Vec2;

use crate::sim::entity::{SpriteCatalog, SpriteHandle};
use crate::sim::tick::TickInput;

/// Resolves an asset path to an opaque drawable handle
pub trait Assets {
    fn load(&mut self, path: &str) -> SpriteHandle;
}

/// Load every sprite the draw pass needs. Paths mirror the shipped asset
/// pack.
pub fn load_catalog(assets: &mut impl Assets) -> SpriteCatalog {
    SpriteCatalog {
        hero: assets.load("assets/player.png"),
        enemy: assets.load("assets/enemyShip.png"),
        laser: assets.load("assets/laserRed.png"),
        explosion: assets.load("assets/laserRedShot.png"),
        life: assets.load("assets/life.png"),
        shield: assets.load("assets/shield.png"),
        support_left: assets.load("assets/playerLeft.png"),
        support_right: assets.load("assets/playerRight.png"),
    }
}

/// RGBA color, components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const RED: Self = Self::rgba(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::rgba(0.0, 1.0, 0.0, 1.0);
    /// Translucent cyan of the charge glow
    pub const CHARGE_GLOW: Self = Self::rgba(0.0, 1.0, 1.0, 0.4);
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Minimal draw operations the core needs from the host surface
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Clear the field to the repeating starfield background
    fn fill_background(&mut self);
    fn blit(&mut self, sprite: SpriteHandle, pos: Vec2, size: Vec2);
    /// Blit with uniform transparency (shield overlay)
    fn blit_alpha(&mut self, sprite: SpriteHandle, pos: Vec2, size: Vec2, alpha: f32);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);
    fn text(&mut self, text: &str, pos: Vec2, color: Color, align: TextAlign);
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Confirm,
}

/// Folds raw key-down/key-up events into the per-frame `TickInput`
/// snapshot: directional keys as held state, fire and confirm as edges.
/// Keyboard auto-repeat on the fire key is swallowed so a held key
/// charges instead of retriggering.
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    fire_held: bool,
    fire_pressed: bool,
    fire_released: bool,
    confirm: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: GameKey) {
        match key {
            GameKey::Up => self.up = true,
            GameKey::Down => self.down = true,
            GameKey::Left => self.left = true,
            GameKey::Right => self.right = true,
            GameKey::Fire => {
                // Auto-repeat delivers key-down again while held
                if !self.fire_held {
                    self.fire_held = true;
                    self.fire_pressed = true;
                }
            }
            GameKey::Confirm => {}
        }
    }

    pub fn key_up(&mut self, key: GameKey) {
        match key {
            GameKey::Up => self.up = false,
            GameKey::Down => self.down = false,
            GameKey::Left => self.left = false,
            GameKey::Right => self.right = false,
            GameKey::Fire => {
                if self.fire_held {
                    self.fire_held = false;
                    self.fire_released = true;
                }
            }
            // Confirm triggers on release, not press
            GameKey::Confirm => self.confirm = true,
        }
    }

    /// Snapshot for the next frame; the edge flags are consumed
    pub fn take_input(&mut self) -> TickInput {
        let input = TickInput {
            up: self.up,
            down: self.down,
            left: self.left,
            right: self.right,
            fire_pressed: self.fire_pressed,
            fire_released: self.fire_released,
            confirm: self.confirm,
        };
        self.fire_pressed = false;
        self.fire_released = false;
        self.confirm = false;
        input
    }
}
