//! Cosmetic particle bursts
//!
//! Particles never affect gameplay. Emission stops at the global cap rather
//! than evicting older particles.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Side;
use crate::consts::*;

/// Palette entry for a particle, resolved to a color by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Yellow,
    Red,
    /// Meteor chips from a bullet strike
    Rock,
    /// Meteor debris from a ship crash
    Ember,
    /// Brighter ship-colored sparks on damage
    HitYellow,
    HitRed,
}

impl Tint {
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Tint::Yellow,
            Side::Right => Tint::Red,
        }
    }

    pub fn hit_for_side(side: Side) -> Self {
        match side {
            Side::Left => Tint::HitYellow,
            Side::Right => Tint::HitRed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub tint: Tint,
    /// Seconds remaining
    pub life: f32,
    pub size: f32,
    /// Shrinks over time when set
    pub fade: bool,
}

impl Particle {
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.life -= dt;
        if self.fade {
            self.size = (self.size - dt * PARTICLE_SHRINK_RATE).max(0.0);
        }
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0 || self.size <= 0.0
    }

    /// Opacity derived from remaining life, saturating at one second
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

/// Parameters for one burst: count plus sampling ranges (min, max)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    pub count: usize,
    pub tint: Tint,
    pub speed: (f32, f32),
    pub life: (f32, f32),
    pub size: (f32, f32),
}

impl Burst {
    /// Burst around nominal values: speed 20-100 %, life 60-120 %, size 60-130 %
    pub fn around(count: usize, tint: Tint, speed: f32, life: f32, size: f32) -> Self {
        Self {
            count,
            tint,
            speed: (speed * 0.2, speed),
            life: (life * 0.6, life * 1.2),
            size: (size * 0.6, size * 1.3),
        }
    }

    pub fn muzzle_flash(side: Side) -> Self {
        Self::around(6, Tint::for_side(side), 220.0, 0.18, 3.0)
    }

    pub fn meteor_shatter() -> Self {
        Self::around(18, Tint::Rock, 160.0, 0.7, 3.8)
    }

    pub fn meteor_debris() -> Self {
        Self::around(14, Tint::Ember, 120.0, 0.6, 4.5)
    }

    pub fn ship_hit(side: Side) -> Self {
        Self::around(22, Tint::hit_for_side(side), 210.0, 0.8, 5.0)
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}

/// Live particles plus the global cap
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    cap: usize,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::with_cap(MAX_PARTICLES)
    }
}

impl ParticleSystem {
    pub fn with_cap(cap: usize) -> Self {
        Self {
            particles: Vec::with_capacity(cap),
            cap,
        }
    }

    /// Spawn up to `burst.count` particles at `at`; returns how many fit
    pub fn emit<R: Rng + ?Sized>(&mut self, rng: &mut R, at: Vec2, burst: &Burst) -> usize {
        let room = self.cap.saturating_sub(self.particles.len());
        let count = burst.count.min(room);
        for _ in 0..count {
            let heading = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = sample(rng, burst.speed);
            self.particles.push(Particle {
                pos: at,
                vel: Vec2::from_angle(heading) * speed,
                tint: burst.tint,
                life: sample(rng, burst.life),
                size: sample(rng, burst.size),
                fade: true,
            });
        }
        count
    }

    /// Age every particle and drop the dead ones
    pub fn update(&mut self, dt: f32) {
        for particle in self.particles.iter_mut() {
            particle.advance(dt);
        }
        self.particles.retain(|p| !p.is_dead());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
