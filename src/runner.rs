//! Fixed-tick session driver
//!
//! Host frames arrive at whatever rate the platform manages; the
//! accumulator drains them in fixed `SIM_DT` substeps so the sim only
//! ever sees its own timestep. One-shot inputs (fire edges, confirm) are
//! latched per frame and consumed by the first substep that runs.

use crate::consts::*;
use crate::platform::Surface;
use crate::render::draw_frame;
use crate::sim::entity::SpriteCatalog;
use crate::sim::state::GameState;
use crate::sim::tick::{TickInput, tick};

/// One game session plus its frame-to-tick bookkeeping
#[derive(Debug)]
pub struct Session {
    state: GameState,
    input: TickInput,
    accumulator: f32,
}

impl Session {
    pub fn new(seed: u64, catalog: SpriteCatalog) -> Self {
        Self {
            state: GameState::new(seed, catalog),
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Latch this frame's input: held state is replaced, pending edges
    /// are kept until a substep consumes them
    pub fn set_input(&mut self, fresh: TickInput) {
        self.input = TickInput {
            fire_pressed: self.input.fire_pressed || fresh.fire_pressed,
            fire_released: self.input.fire_released || fresh.fire_released,
            confirm: self.input.confirm || fresh.confirm,
            ..fresh
        };
    }

    /// Run as many fixed substeps as the elapsed frame time covers.
    /// Returns the number of ticks executed.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        // A stalled tab or debugger pause must not buy a tick avalanche
        self.accumulator += frame_dt.min(0.25);

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input);
            self.input.clear_edges();
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        steps
    }

    pub fn render(&self, surface: &mut impl Surface) {
        draw_frame(&self.state, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::EntityKind;

    fn new_session() -> Session {
        Session::new(7, SpriteCatalog::default())
    }

    fn live_lasers(session: &Session) -> usize {
        session
            .state()
            .entities
            .iter_live()
            .filter(|e| matches!(e.kind, EntityKind::Laser { .. }))
            .count()
    }

    #[test]
    fn test_partial_frames_accumulate() {
        let mut session = new_session();
        assert_eq!(session.advance(SIM_DT * 0.5), 0);
        assert_eq!(session.state().time_ticks, 0);
        assert_eq!(session.advance(SIM_DT * 0.5), 1);
        assert_eq!(session.state().time_ticks, 1);
    }

    #[test]
    fn test_long_frame_is_capped_at_max_substeps() {
        let mut session = new_session();
        let steps = session.advance(10.0);
        assert_eq!(steps, MAX_SUBSTEPS);
        assert_eq!(session.state().time_ticks, MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_one_shot_input_is_consumed_by_first_substep() {
        let mut session = new_session();
        session.set_input(TickInput {
            fire_pressed: true,
            ..Default::default()
        });
        // Several substeps in one frame; only one charge begins
        session.advance(SIM_DT * 4.0);
        let charging = session
            .state()
            .hero_data()
            .unwrap()
            .charging_since
            .expect("charging started");
        assert_eq!(charging, 1);

        session.set_input(TickInput {
            fire_released: true,
            ..Default::default()
        });
        session.advance(SIM_DT * 4.0);
        assert_eq!(live_lasers(&session), 1);
    }

    #[test]
    fn test_edges_latch_across_empty_frames() {
        let mut session = new_session();
        // Edge arrives mid-frame but the frame is too short to tick
        session.set_input(TickInput {
            fire_pressed: true,
            ..Default::default()
        });
        assert_eq!(session.advance(SIM_DT * 0.25), 0);
        // Held state refreshed without the edge; the press must survive
        session.set_input(TickInput::default());
        session.advance(SIM_DT);
        assert!(session.state().hero_data().unwrap().charging_since.is_some());
    }
}
