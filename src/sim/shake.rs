//! Screen shake
//!
//! Idle while `timer <= 0`. Triggering always overwrites the current shake.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Share of the offset that is pure jitter; the rest follows `dir`
const JITTER_WEIGHT: f32 = 0.6;
const BIAS_WEIGHT: f32 = 0.4;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenShake {
    pub timer: f32,
    pub duration: f32,
    pub magnitude: f32,
    /// Unit bias direction
    pub dir: Vec2,
    /// Camera offset for the current frame
    pub offset: Vec2,
}

impl ScreenShake {
    /// Start (or restart) a shake. Without a usable direction a random one is picked.
    pub fn trigger<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        magnitude: f32,
        duration: f32,
        direction: Option<Vec2>,
    ) {
        self.timer = duration;
        self.duration = duration;
        self.magnitude = magnitude;
        self.dir = direction
            .and_then(|d| d.try_normalize())
            .unwrap_or_else(|| Vec2::from_angle(rng.random_range(0.0..std::f32::consts::TAU)));
    }

    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }

    /// Count down and roll this frame's offset; returns the offset
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> Vec2 {
        if !self.is_active() {
            self.offset = Vec2::ZERO;
            return self.offset;
        }

        self.timer -= dt;
        let pct = if self.duration > 0.0 {
            (self.timer / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let amp = self.magnitude * pct;
        let jitter = Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0));
        self.offset = jitter * amp * JITTER_WEIGHT + self.dir * amp * BIAS_WEIGHT;
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_idle_has_zero_offset() {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut shake = ScreenShake::default();
        assert!(!shake.is_active());
        assert_eq!(shake.update(SIM_DT, &mut rng), Vec2::ZERO);
    }

    #[test]
    fn test_offset_decays_then_goes_idle() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut shake = ScreenShake::default();
        shake.trigger(&mut rng, SHAKE_MAGNITUDE, SHAKE_DURATION, Some(Vec2::new(3.0, 0.0)));
        assert_eq!(shake.dir, Vec2::X);

        let mut max_seen = 0.0f32;
        let mut frames = 0;
        while shake.is_active() {
            let offset = shake.update(SIM_DT, &mut rng);
            let bound = SHAKE_MAGNITUDE * (shake.timer / SHAKE_DURATION).max(0.0);
            // jitter <= sqrt(2) * 0.6 * amp, bias = 0.4 * amp
            assert!(offset.length() <= bound * (0.6 * 2f32.sqrt() + 0.4) + 1e-4);
            max_seen = max_seen.max(offset.length());
            frames += 1;
            assert!(frames < 100);
        }
        assert!(max_seen > 0.0);
        assert_eq!(shake.update(SIM_DT, &mut rng), Vec2::ZERO);
    }

    #[test]
    fn test_retrigger_overrides() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut shake = ScreenShake::default();
        shake.trigger(&mut rng, 10.0, 0.35, Some(Vec2::X));
        shake.update(0.2, &mut rng);
        shake.trigger(&mut rng, 4.0, 0.5, Some(-Vec2::X));
        assert_eq!(shake.timer, 0.5);
        assert_eq!(shake.magnitude, 4.0);
        assert_eq!(shake.dir, -Vec2::X);
    }

    #[test]
    fn test_zero_direction_picks_random() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut shake = ScreenShake::default();
        shake.trigger(&mut rng, 10.0, 0.35, Some(Vec2::ZERO));
        assert!((shake.dir.length() - 1.0).abs() < 1e-4);
    }
}
