//! Space Fight - a two-player arcade space duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, bullets, meteors, effects)
//! - `renderer`: Draw-list generation and primitive tessellation
//! - `platform`: Input/clock/output collaborator traits
//! - `game`: Fixed-timestep frame driver
//! - `audio`, `assets`, `settings`: Presentation-side collaborators

pub mod assets;
pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod replay;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Largest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 500.0;
    pub const BORDER_WIDTH: f32 = 10.0;

    /// Ships
    pub const SHIP_WIDTH: f32 = 80.0;
    pub const SHIP_HEIGHT: f32 = 60.0;
    pub const SHIP_ACCEL: f32 = 2400.0; // px/s²
    pub const SHIP_DRAG: f32 = 12.0;
    pub const MAX_HEALTH: u32 = 10;
    pub const LEFT_START: (f32, f32) = (120.0, ARENA_HEIGHT / 2.0);
    pub const RIGHT_START: (f32, f32) = (760.0, ARENA_HEIGHT / 2.0);

    /// Bullets
    pub const BULLET_WIDTH: f32 = 10.0;
    pub const BULLET_HEIGHT: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 850.0; // px/s
    pub const BULLET_LIFE: f32 = 2.0; // seconds
    pub const MAX_BULLETS: usize = 4;
    pub const TRAIL_LENGTH: usize = 7;

    /// Meteors
    pub const METEOR_SIZE: f32 = 50.0;
    pub const METEOR_SPEED: f32 = 70.0; // px/s
    pub const METEOR_COUNT: usize = 3;
    pub const METEOR_MAX_ROT_SPEED: f32 = 90.0; // deg/s
    pub const METEOR_SPAWN_JITTER: f32 = 40.0;
    pub const METEOR_CRASH_MARGIN: f32 = 40.0;
    pub const METEOR_SHATTER_MARGIN: f32 = 50.0;

    /// Particles
    pub const MAX_PARTICLES: usize = 400;
    pub const PARTICLE_SHRINK_RATE: f32 = 10.0; // px/s

    /// Feel
    pub const SHAKE_MAGNITUDE: f32 = 10.0;
    pub const SHAKE_DURATION: f32 = 0.35;
    pub const HIT_FLASH_MAX: f32 = 0.9;
    pub const HIT_FLASH_DECAY: f32 = 2.5;
    pub const HEALTH_SMOOTHING: f32 = 6.0;
    pub const BG_SCROLL_SPEED: f32 = 20.0;

    /// How long the final frame stays up after a ship is destroyed (seconds)
    pub const END_DELAY: f32 = 1.8;
}

/// Linear interpolation with `t` clamped to [0, 1]
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Wrap a value into [0, period)
#[inline]
pub fn wrap(value: f32, period: f32) -> f32 {
    let w = value % period;
    let w = if w < 0.0 { w + period } else { w };
    // Tiny negatives round up to `period` in f32
    if w >= period { 0.0 } else { w }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_clamps() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), 0.0);
    }

    #[test]
    fn test_wrap_negative() {
        assert!((wrap(-10.0, 360.0) - 350.0).abs() < 1e-4);
        assert!((wrap(370.0, 360.0) - 10.0).abs() < 1e-4);
    }
}
