//! Match state and core simulation types
//!
//! The match loop owns everything here. Bullets refer to their firing ship
//! by `Side`, never by reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Side};
use super::body::{Body, MoveKeys};
use super::collision::Rect;
use super::meteor::Meteor;
use super::particles::ParticleSystem;
use super::projectile::Bullet;
use super::shake::ScreenShake;
use crate::consts::*;
use crate::lerp;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Both ships alive, simulation running
    Playing,
    /// At least one ship destroyed
    Over(MatchOutcome),
}

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Winner(Side),
    /// Both ships hit zero in the same frame
    Draw,
}

impl MatchOutcome {
    pub fn banner(&self) -> String {
        match self {
            MatchOutcome::Winner(side) => format!("{} Wins!", side.name()),
            MatchOutcome::Draw => "Draw!".to_string(),
        }
    }
}

/// What damaged a ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitCause {
    Bullet,
    Meteor,
}

/// A single point of damage against one ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipHit {
    pub side: Side,
    pub cause: HitCause,
    /// Impact point, used for the particle burst
    pub at: Vec2,
}

/// Things that happened during a tick, drained by the frame driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BulletFired { side: Side },
    MeteorShattered { at: Vec2 },
    ShipDamaged(ShipHit),
    MatchOver(MatchOutcome),
}

/// A player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub side: Side,
    pub body: Body,
    pub health: u32,
    /// Eased copy of `health` for the health bar
    pub display_health: f32,
}

impl Ship {
    pub fn new(side: Side) -> Self {
        let (x, y) = match side {
            Side::Left => LEFT_START,
            Side::Right => RIGHT_START,
        };
        Self {
            side,
            body: Body::at(Vec2::new(x, y)),
            health: MAX_HEALTH,
            display_health: MAX_HEALTH as f32,
        }
    }

    pub const SIZE: Vec2 = Vec2::new(SHIP_WIDTH, SHIP_HEIGHT);

    pub fn rect(&self) -> Rect {
        self.body.rect(Self::SIZE)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Top-left corner of a freshly fired bullet: leading edge, vertically centered
    pub fn muzzle(&self) -> Vec2 {
        let y = self.body.pos.y + SHIP_HEIGHT / 2.0 - BULLET_HEIGHT / 2.0;
        match self.side {
            Side::Left => Vec2::new(self.body.pos.x + SHIP_WIDTH, y),
            Side::Right => Vec2::new(self.body.pos.x - BULLET_WIDTH, y),
        }
    }

    /// Accelerate from held keys and stay inside the side region
    pub fn steer(&mut self, keys: &MoveKeys, dt: f32, arena: &Arena) {
        self.body.integrate(keys.intent(), dt, SHIP_ACCEL, SHIP_DRAG);
        self.body.confine(&arena.region(self.side), Self::SIZE);
    }

    /// Remove one point of health, flooring at zero
    pub fn take_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// Ease the displayed health toward the real value
    pub fn smooth_display(&mut self, dt: f32) {
        self.display_health = lerp(
            self.display_health,
            self.health as f32,
            (dt * HEALTH_SMOOTHING).min(1.0),
        );
    }
}

/// Complete match state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub arena: Arena,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: MatchPhase,
    /// Indexed by `Side::index()`
    pub ships: [Ship; 2],
    pub bullets: Vec<Bullet>,
    pub meteors: Vec<Meteor>,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: ParticleSystem,
    pub shake: ScreenShake,
    /// Full-screen white flash intensity (0..=HIT_FLASH_MAX)
    pub hit_flash: f32,
    /// Background parallax scroll
    pub bg_offset: f32,
    pub rng: Pcg32,
    /// Hits posted by the resolver, applied later in the same tick
    #[serde(skip)]
    pub pending_hits: Vec<ShipHit>,
    /// Outbox for audio/logging collaborators
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new match with the given seed
    pub fn new(seed: u64) -> Self {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let meteors = (0..METEOR_COUNT)
            .map(|_| Meteor::spawn_near_center(&mut rng, &arena))
            .collect();

        Self {
            seed,
            arena,
            time_ticks: 0,
            phase: MatchPhase::Playing,
            ships: [Ship::new(Side::Left), Ship::new(Side::Right)],
            bullets: Vec::new(),
            meteors,
            particles: ParticleSystem::default(),
            shake: ScreenShake::default(),
            hit_flash: 0.0,
            bg_offset: 0.0,
            rng,
            pending_hits: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn ship(&self, side: Side) -> &Ship {
        &self.ships[side.index()]
    }

    pub fn ship_mut(&mut self, side: Side) -> &mut Ship {
        &mut self.ships[side.index()]
    }

    /// Hull rects of both ships, indexed by side
    pub fn ship_rects(&self) -> [Rect; 2] {
        [self.ships[0].rect(), self.ships[1].rect()]
    }

    /// Live bullets fired by `side` (this is the fire cooldown)
    pub fn live_bullets(&self, side: Side) -> usize {
        self.bullets.iter().filter(|b| b.owner == side).count()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, MatchPhase::Over(_))
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self.phase {
            MatchPhase::Over(outcome) => Some(outcome),
            MatchPhase::Playing => None,
        }
    }

    /// Decide the match result from current health, if it has ended
    pub fn evaluate_outcome(&self) -> Option<MatchOutcome> {
        let left_down = self.ship(Side::Left).is_destroyed();
        let right_down = self.ship(Side::Right).is_destroyed();
        match (left_down, right_down) {
            (true, true) => Some(MatchOutcome::Draw),
            (true, false) => Some(MatchOutcome::Winner(Side::Right)),
            (false, true) => Some(MatchOutcome::Winner(Side::Left)),
            (false, false) => None,
        }
    }

    /// Hand the accumulated events to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
