//! Collision resolution between bullets, meteors and ships
//!
//! Resolution order per bullet: meteors first, then the opposing ship, then
//! lifetime/bounds. The first match removes the bullet. Ship damage is posted
//! to `pending_hits` and applied by [`apply_hits`] later in the same tick.

use glam::Vec2;

use super::arena::Side;
use super::particles::Burst;
use super::state::{GameEvent, GameState, HitCause, ShipHit};
use crate::consts::*;

/// Resolve every live bullet against meteors, the opposing ship and bounds
pub fn resolve_bullets(state: &mut GameState) {
    let ship_rects = state.ship_rects();
    let GameState {
        arena,
        bullets,
        meteors,
        particles,
        rng,
        pending_hits,
        events,
        ..
    } = state;

    bullets.retain(|bullet| {
        if let Some(meteor) = meteors.iter_mut().find(|m| m.rect.overlaps(&bullet.rect)) {
            let at = bullet.rect.center();
            particles.emit(rng, at, &Burst::meteor_shatter());
            meteor.relocate(rng, arena, METEOR_SHATTER_MARGIN, &ship_rects);
            meteor.randomize_heading(rng);
            events.push(GameEvent::MeteorShattered { at });
            return false;
        }

        let target = bullet.owner.opponent();
        if ship_rects[target.index()].overlaps(&bullet.rect) {
            pending_hits.push(ShipHit {
                side: target,
                cause: HitCause::Bullet,
                at: bullet.rect.center(),
            });
            return false;
        }

        !bullet.is_spent(arena)
    });
}

/// Meteors that touch a ship damage it and jump elsewhere.
///
/// A meteor overlapping both ships damages both, then relocates once.
pub fn resolve_meteor_crashes(state: &mut GameState) {
    let ship_rects = state.ship_rects();
    let GameState {
        arena,
        meteors,
        particles,
        rng,
        pending_hits,
        ..
    } = state;

    for meteor in meteors.iter_mut() {
        let mut crashed = false;
        for side in Side::BOTH {
            if meteor.rect.overlaps(&ship_rects[side.index()]) {
                pending_hits.push(ShipHit {
                    side,
                    cause: HitCause::Meteor,
                    at: meteor.rect.center(),
                });
                crashed = true;
            }
        }
        if crashed {
            particles.emit(rng, meteor.rect.center(), &Burst::meteor_debris());
            meteor.relocate(rng, arena, METEOR_CRASH_MARGIN, &ship_rects);
        }
    }
}

/// Apply posted hits: one health point each, plus shake, flash and sparks
pub fn apply_hits(state: &mut GameState) {
    for hit in std::mem::take(&mut state.pending_hits) {
        let ship = state.ship_mut(hit.side);
        ship.take_hit();
        log::debug!(
            "{} hit by {:?}, health {}",
            hit.side.name(),
            hit.cause,
            ship.health
        );

        // Kick the camera toward the side the damage came from
        let kick = Vec2::X * hit.side.fire_direction();
        state
            .shake
            .trigger(&mut state.rng, SHAKE_MAGNITUDE, SHAKE_DURATION, Some(kick));
        state.hit_flash = HIT_FLASH_MAX;
        state
            .particles
            .emit(&mut state.rng, hit.at, &Burst::ship_hit(hit.side));
        state.events.push(GameEvent::ShipDamaged(hit));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Rect;
    use crate::sim::projectile::Bullet;

    /// Match with meteors parked far from the action
    fn quiet_state() -> GameState {
        let mut state = GameState::new(21);
        for (i, meteor) in state.meteors.iter_mut().enumerate() {
            meteor.rect.pos = glam::Vec2::new(300.0 + i as f32 * 100.0, 0.0);
            meteor.vel = glam::Vec2::ZERO;
        }
        state
    }

    fn bullet_inside(state: &GameState, owner: Side, target: Side) -> Bullet {
        let mut bullet = Bullet::new(owner, glam::Vec2::ZERO);
        bullet.rect.pos = state.ship(target).center();
        bullet
    }

    #[test]
    fn test_bullet_hits_opponent_once() {
        let mut state = quiet_state();
        let bullet = bullet_inside(&state, Side::Left, Side::Right);
        state.bullets.push(bullet);

        resolve_bullets(&mut state);
        assert!(state.bullets.is_empty());
        assert_eq!(state.pending_hits.len(), 1);
        assert_eq!(state.pending_hits[0].side, Side::Right);

        apply_hits(&mut state);
        assert_eq!(state.ship(Side::Right).health, MAX_HEALTH - 1);
        assert_eq!(state.ship(Side::Left).health, MAX_HEALTH);
        assert!(state.shake.is_active());
        assert_eq!(state.hit_flash, HIT_FLASH_MAX);
        assert!(!state.particles.is_empty());
        assert!(state.pending_hits.is_empty());
    }

    #[test]
    fn test_own_bullet_passes_through_own_ship() {
        let mut state = quiet_state();
        let bullet = bullet_inside(&state, Side::Left, Side::Left);
        state.bullets.push(bullet);
        resolve_bullets(&mut state);
        assert_eq!(state.bullets.len(), 1);
        assert!(state.pending_hits.is_empty());
    }

    #[test]
    fn test_meteor_takes_priority_over_ship() {
        let mut state = quiet_state();
        let bullet = bullet_inside(&state, Side::Left, Side::Right);
        // Park a meteor right on top of the bullet, which also overlaps the ship
        state.meteors[0].rect.pos = bullet.rect.pos - glam::Vec2::splat(10.0);
        state.bullets.push(bullet);

        resolve_bullets(&mut state);
        assert!(state.bullets.is_empty());
        assert!(state.pending_hits.is_empty());
        assert!(matches!(state.events[0], GameEvent::MeteorShattered { .. }));
        assert_eq!(state.meteors.len(), METEOR_COUNT);
        let ships = state.ship_rects();
        assert!(!ships.iter().any(|s| s.overlaps(&state.meteors[0].rect)));
        assert!((state.meteors[0].vel.length() - METEOR_SPEED).abs() < 1e-3);
    }

    #[test]
    fn test_spent_bullets_removed_silently() {
        let mut state = quiet_state();
        let mut old = Bullet::new(Side::Left, glam::Vec2::new(200.0, 400.0));
        old.life = 0.0;
        let gone = Bullet::new(Side::Right, glam::Vec2::new(-20.0, 400.0));
        let live = Bullet::new(Side::Left, glam::Vec2::new(200.0, 450.0));
        state.bullets.extend([old, gone, live]);
        resolve_bullets(&mut state);
        assert_eq!(state.bullets.len(), 1);
        assert!(state.events.is_empty());
        assert!(state.pending_hits.is_empty());
    }

    #[test]
    fn test_meteor_crash_damages_and_relocates() {
        let mut state = quiet_state();
        let ship_pos = state.ship(Side::Left).body.pos;
        state.meteors[1].rect = Rect::from_pos(ship_pos, glam::Vec2::splat(METEOR_SIZE));

        resolve_meteor_crashes(&mut state);
        assert_eq!(state.pending_hits.len(), 1);
        assert_eq!(state.pending_hits[0].cause, HitCause::Meteor);
        assert!(!state.ship(Side::Left).rect().overlaps(&state.meteors[1].rect));

        apply_hits(&mut state);
        assert_eq!(state.ship(Side::Left).health, MAX_HEALTH - 1);
        // Left ship damaged: kick points right
        assert_eq!(state.shake.dir, glam::Vec2::X);
    }

    #[test]
    fn test_simultaneous_hits_each_count() {
        let mut state = quiet_state();
        for _ in 0..3 {
            let bullet = bullet_inside(&state, Side::Right, Side::Left);
            state.bullets.push(bullet);
        }
        resolve_bullets(&mut state);
        apply_hits(&mut state);
        assert_eq!(state.ship(Side::Left).health, MAX_HEALTH - 3);
        let damaged = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::ShipDamaged(_)))
            .count();
        assert_eq!(damaged, 3);
    }

    #[test]
    fn test_health_never_negative() {
        let mut state = quiet_state();
        state.ship_mut(Side::Right).health = 1;
        for _ in 0..2 {
            let bullet = bullet_inside(&state, Side::Left, Side::Right);
            state.bullets.push(bullet);
        }
        resolve_bullets(&mut state);
        apply_hits(&mut state);
        assert_eq!(state.ship(Side::Right).health, 0);
    }
}
