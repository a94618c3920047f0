//! Wrapping meteors
//!
//! Meteors drift at constant speed, spin, and wrap through the arena edges.
//! They are never destroyed: a hit relocates them instead.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::collision::Rect;
use crate::consts::*;
use crate::wrap;

/// Relocation attempts before accepting a spot that touches a ship
const RELOCATE_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meteor {
    pub rect: Rect,
    pub vel: Vec2,
    /// Sprite rotation in degrees, [0, 360)
    pub angle: f32,
    /// Degrees per second
    pub rot_speed: f32,
}

impl Meteor {
    /// Initial spawn: clustered around the arena center, random heading
    pub fn spawn_near_center<R: Rng + ?Sized>(rng: &mut R, arena: &Arena) -> Self {
        let jitter = METEOR_SPAWN_JITTER;
        let x = arena.width / 2.0 + rng.random_range(-jitter..=jitter);
        let y = arena.height / 2.0 + rng.random_range(-jitter..=jitter);
        let mut meteor = Self {
            rect: Rect::new(x, y, METEOR_SIZE, METEOR_SIZE),
            vel: Vec2::ZERO,
            angle: 0.0,
            rot_speed: rng.random_range(-METEOR_MAX_ROT_SPEED..=METEOR_MAX_ROT_SPEED),
        };
        meteor.randomize_heading(rng);
        meteor
    }

    /// Drift, spin and wrap
    pub fn advance(&mut self, dt: f32, arena: &Arena) {
        self.rect.pos += self.vel * dt;
        self.angle = wrap(self.angle + self.rot_speed * dt, 360.0);
        self.wrap_edges(arena);
    }

    /// Once fully past an edge, reappear just beyond the opposite one.
    ///
    /// The wrap period per axis is arena extent plus meteor extent, and any
    /// overshoot is carried over so motion stays continuous.
    pub fn wrap_edges(&mut self, arena: &Arena) {
        let period = arena.size() + self.rect.size;
        if self.rect.left() > arena.width {
            self.rect.pos.x -= period.x;
        } else if self.rect.right() < 0.0 {
            self.rect.pos.x += period.x;
        }
        if self.rect.top() > arena.height {
            self.rect.pos.y -= period.y;
        } else if self.rect.bottom() < 0.0 {
            self.rect.pos.y += period.y;
        }
    }

    /// New random direction at the standard meteor speed
    pub fn randomize_heading<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let heading = rng.random_range(0.0..std::f32::consts::TAU);
        self.vel = Vec2::from_angle(heading) * METEOR_SPEED;
    }

    /// Move to a random in-bounds spot at least `margin` from the edges,
    /// preferring spots that overlap none of `avoid`.
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        arena: &Arena,
        margin: f32,
        avoid: &[Rect],
    ) {
        let max = (arena.size() - self.rect.size - Vec2::splat(margin)).max(Vec2::splat(margin));
        for attempt in 0..RELOCATE_ATTEMPTS {
            let pos = Vec2::new(
                rng.random_range(margin..=max.x),
                rng.random_range(margin..=max.y),
            );
            let candidate = Rect::from_pos(pos, self.rect.size);
            let clear = !avoid.iter().any(|r| r.overlaps(&candidate));
            if clear || attempt == RELOCATE_ATTEMPTS - 1 {
                if !clear {
                    log::debug!("meteor relocated onto a ship after {RELOCATE_ATTEMPTS} attempts");
                }
                self.rect.pos = pos;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn meteor_at(x: f32, y: f32, vel: Vec2) -> Meteor {
        Meteor {
            rect: Rect::new(x, y, METEOR_SIZE, METEOR_SIZE),
            vel,
            angle: 0.0,
            rot_speed: 0.0,
        }
    }

    #[test]
    fn test_spawn_near_center() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..50 {
            let m = Meteor::spawn_near_center(&mut rng, &arena);
            assert!((m.rect.pos.x - 450.0).abs() <= METEOR_SPAWN_JITTER);
            assert!((m.rect.pos.y - 250.0).abs() <= METEOR_SPAWN_JITTER);
            assert!((m.vel.length() - METEOR_SPEED).abs() < 1e-3);
            assert!(m.rot_speed.abs() <= METEOR_MAX_ROT_SPEED);
        }
    }

    #[test]
    fn test_wrap_right_edge_reenters_left() {
        let arena = Arena::default();
        let mut m = meteor_at(899.0, 100.0, Vec2::new(120.0, 0.0));
        m.advance(0.1, &arena); // left edge now 11 past the right side
        assert!((m.rect.right() - 11.0).abs() < 1e-3);
        assert_eq!(m.rect.pos.y, 100.0);
    }

    #[test]
    fn test_wrap_top_edge_reenters_bottom() {
        let arena = Arena::default();
        let mut m = meteor_at(100.0, -49.0, Vec2::new(0.0, -20.0));
        m.advance(0.1, &arena); // bottom edge now at -1
        assert!((m.rect.top() - 499.0).abs() < 1e-3);
    }

    #[test]
    fn test_rotation_wraps() {
        let arena = Arena::default();
        let mut m = meteor_at(100.0, 100.0, Vec2::ZERO);
        m.rot_speed = -90.0;
        m.advance(0.5, &arena);
        assert!((m.angle - 315.0).abs() < 1e-3);
        m.rot_speed = 90.0;
        m.advance(1.0, &arena);
        assert!((m.angle - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_relocate_avoids_ships_and_margin() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let ships = [
            Rect::new(120.0, 250.0, SHIP_WIDTH, SHIP_HEIGHT),
            Rect::new(760.0, 250.0, SHIP_WIDTH, SHIP_HEIGHT),
        ];
        let mut m = meteor_at(130.0, 260.0, Vec2::ZERO);
        for _ in 0..100 {
            m.relocate(&mut rng, &arena, METEOR_CRASH_MARGIN, &ships);
            assert!(!ships.iter().any(|s| s.overlaps(&m.rect)));
            assert!(m.rect.left() >= METEOR_CRASH_MARGIN);
            assert!(m.rect.right() <= arena.width - METEOR_CRASH_MARGIN);
            assert!(m.rect.bottom() <= arena.height - METEOR_CRASH_MARGIN);
        }
    }

    proptest! {
        #[test]
        fn prop_wrap_preserves_trajectory(
            x in 0.0f32..850.0,
            y in 0.0f32..450.0,
            heading in 0.0f32..std::f32::consts::TAU,
            steps in 1usize..2000,
        ) {
            let arena = Arena::default();
            let vel = Vec2::from_angle(heading) * METEOR_SPEED;
            let mut m = meteor_at(x, y, vel);
            let dt = SIM_DT;
            for _ in 0..steps {
                m.advance(dt, &arena);
            }
            // Unwrapped position folded into the same window
            let period = arena.size() + m.rect.size;
            let travelled = vel * dt * steps as f32;
            let expect_x = wrap(x + travelled.x + METEOR_SIZE, period.x) - METEOR_SIZE;
            let expect_y = wrap(y + travelled.y + METEOR_SIZE, period.y) - METEOR_SIZE;
            let dx = (m.rect.pos.x - expect_x).abs();
            let dy = (m.rect.pos.y - expect_y).abs();
            // Allow for f32 drift and the seam itself
            prop_assert!(dx < 0.5 || (dx - period.x).abs() < 0.5);
            prop_assert!(dy < 0.5 || (dy - period.y).abs() < 0.5);
        }
    }
}
