//! Frame drawing
//!
//! A read-only pass over the game state: background, live entities in
//! insertion order, the HUD, then the phase overlays (charge glow while
//! the fire key is held, terminal banner once frozen). All drawing goes
//! through the `Surface` trait; nothing here owns the surface lifecycle.

use glam::Vec2;

use crate::consts::*;
use crate::platform::{Color, Surface, TextAlign};
use crate::sim::entity::EntityKind;
use crate::sim::state::{GamePhase, GameState, Outcome};
use crate::sim::weapons;
use crate::ticks_to_ms;

/// Charge glow geometry: base radii plus growth at full charge
const GLOW_BASE_RADII: Vec2 = Vec2::new(10.0, 15.0);
const GLOW_MAX_GROWTH: Vec2 = Vec2::new(30.0, 50.0);

/// Shield overlay outgrows the hero by this margin on every side
const SHIELD_PADDING: f32 = 10.0;
const SHIELD_ALPHA: f32 = 0.7;

/// Life markers are drawn at this square size, bottom-right
const LIFE_MARKER_SIZE: f32 = 30.0;
const LIFE_MARKER_SPACING: f32 = 45.0;

pub fn draw_frame(state: &GameState, surface: &mut impl Surface) {
    surface.fill_background();

    if state.phase == GamePhase::Frozen {
        draw_banner(state, surface);
        return;
    }

    draw_entities(state, surface);
    draw_hud(state, surface);
    draw_charge_glow(state, surface);
}

fn draw_entities(state: &GameState, surface: &mut impl Surface) {
    for entity in state.entities.iter_live() {
        surface.blit(entity.sprite, entity.pos, entity.size);

        if let EntityKind::Hero(hero) = &entity.kind {
            if hero.shield {
                let pad = Vec2::splat(SHIELD_PADDING);
                surface.blit_alpha(
                    state.catalog.shield,
                    entity.pos - pad,
                    entity.size + pad * 2.0,
                    SHIELD_ALPHA,
                );
            }
        }
    }
}

/// Pure read of hero state: points bottom-left, one marker per life
/// bottom-right. Nothing to show once the hero is gone.
fn draw_hud(state: &GameState, surface: &mut impl Surface) {
    let Some(data) = state.hero_data() else { return };

    surface.text(
        &format!("Points: {}", data.score),
        Vec2::new(10.0, surface.height() - 20.0),
        Color::RED,
        TextAlign::Left,
    );

    let base_x = surface.width() - 180.0;
    for i in 0..data.lives {
        surface.blit(
            state.catalog.life,
            Vec2::new(
                base_x + LIFE_MARKER_SPACING * (i + 1) as f32,
                surface.height() - 37.0,
            ),
            Vec2::splat(LIFE_MARKER_SIZE),
        );
    }
}

/// Growing ellipse above the hero while charging; purely cosmetic
fn draw_charge_glow(state: &GameState, surface: &mut impl Surface) {
    let Some(data) = state.hero_data() else { return };
    let Some(start) = data.charging_since else {
        return;
    };
    let Some(hero) = state.hero() else { return };

    let elapsed_ms = ticks_to_ms(state.time_ticks.saturating_sub(start));
    let ratio = weapons::charge_ratio(elapsed_ms);
    let center = Vec2::new(
        hero.pos.x + hero.size.x / 2.0,
        hero.pos.y - MUZZLE_OFFSET,
    );
    surface.fill_ellipse(
        center,
        GLOW_BASE_RADII + GLOW_MAX_GROWTH * ratio,
        Color::CHARGE_GLOW,
    );
}

fn draw_banner(state: &GameState, surface: &mut impl Surface) {
    // The field is blacked out behind the terminal message
    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(surface.width(), surface.height()),
        Color::BLACK,
    );
    let center = Vec2::new(surface.width() / 2.0, surface.height() / 2.0);
    match state.outcome {
        Some(Outcome::Win) => surface.text(
            "Victory!!! Press [Enter] to start a new game",
            center,
            Color::GREEN,
            TextAlign::Center,
        ),
        Some(Outcome::Loss) => surface.text(
            "You died !!! Press [Enter] to start a new game",
            center,
            Color::RED,
            TextAlign::Center,
        ),
        None => {}
    }
}
