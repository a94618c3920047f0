//! Fixed timestep simulation tick
//!
//! One call advances the whole match by `dt` in a fixed phase order:
//! fire, ships, bullets, meteors, damage, particles, effects, outcome.

use serde::{Deserialize, Serialize};

use super::arena::Side;
use super::body::MoveKeys;
use super::combat::{apply_hits, resolve_bullets, resolve_meteor_crashes};
use super::projectile::fire;
use super::state::{GameEvent, GameState, MatchPhase};
use crate::consts::*;
use crate::wrap;

/// One ship's controls for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipInput {
    /// Held movement keys (level-triggered)
    #[serde(default)]
    pub keys: MoveKeys,
    /// Fire key went down since the last tick (edge-triggered)
    #[serde(default)]
    pub fire: bool,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Indexed by `Side::index()`
    pub ships: [ShipInput; 2],
}

impl TickInput {
    pub fn ship(&self, side: Side) -> &ShipInput {
        &self.ships[side.index()]
    }

    pub fn ship_mut(&mut self, side: Side) -> &mut ShipInput {
        &mut self.ships[side.index()]
    }

    /// Drop one-shot inputs once a tick has consumed them
    pub fn clear_one_shots(&mut self) {
        for ship in &mut self.ships {
            ship.fire = false;
        }
    }
}

/// Advance the match by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Frozen once decided
    if state.is_over() {
        return;
    }

    state.time_ticks += 1;

    for side in Side::BOTH {
        if input.ship(side).fire {
            fire(state, side);
        }
    }

    let arena = state.arena;
    for ship in &mut state.ships {
        ship.steer(&input.ship(ship.side).keys, dt, &arena);
    }

    for bullet in &mut state.bullets {
        bullet.advance(dt);
    }
    resolve_bullets(state);

    for meteor in &mut state.meteors {
        meteor.advance(dt, &arena);
    }
    resolve_meteor_crashes(state);

    apply_hits(state);

    state.particles.update(dt);

    state.hit_flash = (state.hit_flash - dt * HIT_FLASH_DECAY).max(0.0);
    state.shake.update(dt, &mut state.rng);
    state.bg_offset = wrap(state.bg_offset + dt * BG_SCROLL_SPEED, arena.width);

    for ship in &mut state.ships {
        ship.smooth_display(dt);
    }

    if let Some(outcome) = state.evaluate_outcome() {
        log::info!("Match over after {} ticks: {}", state.time_ticks, outcome.banner());
        state.phase = MatchPhase::Over(outcome);
        state.events.push(GameEvent::MatchOver(outcome));
    }
}
