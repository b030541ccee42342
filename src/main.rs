//! Star Salvo entry point
//!
//! The native build has no renderer wired up; it initializes logging and
//! drives a headless scripted session so the sim can be exercised from
//! the command line. A real frontend implements the `platform` traits
//! and feeds `Session` from its frame loop instead.

use star_salvo::Settings;
use star_salvo::consts::*;
use star_salvo::sim::entity::SpriteCatalog;
use star_salvo::sim::state::GamePhase;
use star_salvo::sim::tick::TickInput;
use star_salvo::runner::Session;

fn main() {
    env_logger::init();
    log::info!("Star Salvo (native) starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(seed_from_clock);

    let mut session = Session::new(seed, SpriteCatalog::default());

    // Autopilot: sweep across the field, tap fire on a steady rhythm
    let demo_input = |t: u64| -> TickInput {
        let sweep_left = (t / 120) % 2 == 0;
        TickInput {
            left: sweep_left,
            right: !sweep_left,
            fire_pressed: t % 20 == 0,
            fire_released: t % 20 == 10,
            ..Default::default()
        }
    };

    // Five minutes of sim time at most
    let max_ticks = 5 * 60 * TICK_HZ as u64;
    let mut t = 0;
    while t < max_ticks && session.state().phase != GamePhase::Frozen {
        session.set_input(demo_input(t));
        session.advance(SIM_DT);
        if settings.show_fps && t % TICK_HZ as u64 == 0 {
            log::debug!(
                "tick {t}: phase {:?}, {} entities",
                session.state().phase,
                session.state().entities.len()
            );
        }
        t += 1;
    }

    let state = session.state();
    println!(
        "headless session finished: {:?} after {} ticks ({} entities live)",
        state.outcome,
        state.time_ticks,
        state.entities.len()
    );
    log::info!("exiting");
}

fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0x5EED)
}
