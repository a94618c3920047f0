//! Bullets: spawning, ballistic motion and trail history

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Side};
use super::collision::Rect;
use super::particles::Burst;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// A bullet in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub rect: Rect,
    /// Signed horizontal speed; the sign is the firing direction
    pub vel_x: f32,
    pub owner: Side,
    /// Recent centers, oldest first
    pub trail: VecDeque<Vec2>,
    /// Seconds until the bullet fizzles
    pub life: f32,
}

impl Bullet {
    pub fn new(owner: Side, muzzle: Vec2) -> Self {
        Self {
            rect: Rect::from_pos(muzzle, Vec2::new(BULLET_WIDTH, BULLET_HEIGHT)),
            vel_x: BULLET_SPEED * owner.fire_direction(),
            owner,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
            life: BULLET_LIFE,
        }
    }

    /// Move horizontally, age, and record the trail
    pub fn advance(&mut self, dt: f32) {
        self.rect.pos.x += self.vel_x * dt;
        self.life -= dt;
        self.trail.push_back(self.rect.center());
        while self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }
    }

    /// Lifetime over or fully off the playfield
    pub fn is_spent(&self, arena: &Arena) -> bool {
        self.life <= 0.0 || arena.is_outside_horizontally(&self.rect)
    }
}

/// Fire a bullet from `side` if it is under the live-bullet cap.
///
/// Returns whether a bullet was spawned. At the cap this is a no-op.
pub fn fire(state: &mut GameState, side: Side) -> bool {
    if state.live_bullets(side) >= MAX_BULLETS {
        log::trace!("{} at bullet cap", side.name());
        return false;
    }

    let bullet = Bullet::new(side, state.ship(side).muzzle());
    let flash_at = bullet.rect.center();
    state.bullets.push(bullet);
    state
        .particles
        .emit(&mut state.rng, flash_at, &Burst::muzzle_flash(side));
    state.events.push(GameEvent::BulletFired { side });
    true
}
