//! Axis-aligned rectangle colliders
//!
//! Every collider in the duel (ships, bullets, meteors) is an AABB in screen
//! space with +y pointing down. Touching edges do not count as overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test (shared edges are not a hit)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if the point lies inside (inclusive of the top-left edges)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// True if `other` lies entirely within this rect
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Clamp a top-left position so a box of `size` stays inside this rect.
    /// Boxes larger than the rect pin to the top-left corner.
    pub fn clamp_pos(&self, pos: Vec2, size: Vec2) -> Vec2 {
        let max = (self.pos + self.size - size).max(self.pos);
        pos.clamp(self.pos, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_thin_bullet_inside_ship() {
        let ship = Rect::new(100.0, 100.0, 80.0, 60.0);
        let bullet = Rect::new(150.0, 127.0, 10.0, 5.0);
        assert!(ship.overlaps(&bullet));
        assert!(ship.contains_rect(&bullet));
    }

    #[test]
    fn test_clamp_pos() {
        let region = Rect::new(0.0, 0.0, 445.0, 500.0);
        let size = Vec2::new(80.0, 60.0);
        let clamped = region.clamp_pos(Vec2::new(420.0, -30.0), size);
        assert_eq!(clamped, Vec2::new(365.0, 0.0));
        let inside = region.clamp_pos(Vec2::new(100.0, 100.0), size);
        assert_eq!(inside, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_center() {
        let r = Rect::new(10.0, 20.0, 50.0, 50.0);
        assert_eq!(r.center(), Vec2::new(35.0, 45.0));
    }
}
