//! Arena geometry: the playfield and its two side regions
//!
//! The playfield is split by a vertical border strip in the middle. Each ship
//! is confined to the region on its own side of that strip.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Which half of the arena a ship belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Yellow ship, fires to the right
    Left,
    /// Red ship, fires to the left
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Index into per-side arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction this side's bullets travel in (+1 right, -1 left)
    #[inline]
    pub fn fire_direction(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "Yellow",
            Side::Right => "Red",
        }
    }
}

/// The rectangular playfield with its central border
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub border: Rect,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT, BORDER_WIDTH)
    }
}

impl Arena {
    pub fn new(width: f32, height: f32, border_width: f32) -> Self {
        Self {
            width,
            height,
            border: Rect::new(width / 2.0 - border_width / 2.0, 0.0, border_width, height),
        }
    }

    /// Whole playfield
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Region a ship on `side` may occupy
    pub fn region(&self, side: Side) -> Rect {
        match side {
            Side::Left => Rect::new(0.0, 0.0, self.border.left(), self.height),
            Side::Right => Rect::new(
                self.border.right(),
                0.0,
                self.width - self.border.right(),
                self.height,
            ),
        }
    }

    /// True once a rect has fully left the playfield horizontally
    pub fn is_outside_horizontally(&self, rect: &Rect) -> bool {
        rect.right() < 0.0 || rect.left() > self.width
    }
}
