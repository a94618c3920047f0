//! Kinematic body integration for ships
//!
//! Ships accelerate toward the input direction, bleed speed through drag and
//! are then pinned inside their side region. Pinning only touches position:
//! a ship pressed into a wall keeps its velocity until input changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// Directional keys held for one ship this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    /// Unit-length (or zero) intent vector, screen space with +y down.
    ///
    /// Opposing keys resolve in polling order: right beats left, down beats up.
    pub fn intent(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.left {
            dir.x = -1.0;
        }
        if self.right {
            dir.x = 1.0;
        }
        if self.up {
            dir.y = -1.0;
        }
        if self.down {
            dir.y = 1.0;
        }
        dir.normalize_or_zero()
    }
}

/// Position/velocity pair integrated with acceleration and drag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner of the hull
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    /// Advance one step: accelerate, damp, move
    pub fn integrate(&mut self, intent: Vec2, dt: f32, accel: f32, drag: f32) {
        self.vel += intent * accel * dt;
        // Clamped so a long frame can't flip the velocity sign
        self.vel -= self.vel * (drag * dt).min(1.0);
        self.pos += self.vel * dt;
    }

    /// Keep a hull of `size` inside `region` (position only)
    pub fn confine(&mut self, region: &Rect, size: Vec2) {
        self.pos = region.clamp_pos(self.pos, size);
    }

    pub fn rect(&self, size: Vec2) -> Rect {
        Rect::from_pos(self.pos, size)
    }
}
