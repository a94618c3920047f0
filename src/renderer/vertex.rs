//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::{Side, Tint};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const WHITE: [f32; 4] = rgb(255, 255, 255);
    pub const BACKGROUND: [f32; 4] = rgb(7, 10, 20);
    pub const BORDER: [f32; 4] = rgb(18, 20, 24);
    pub const UI_BG: [f32; 4] = rgb(20, 24, 30);
    pub const YELLOW: [f32; 4] = rgb(255, 210, 70);
    pub const RED: [f32; 4] = rgb(235, 80, 80);
    pub const METEOR: [f32; 4] = rgb(120, 120, 130);
    pub const ROCK: [f32; 4] = rgb(200, 200, 200);
    pub const EMBER: [f32; 4] = rgb(220, 120, 80);
    pub const HIT_YELLOW: [f32; 4] = rgb(255, 220, 70);
    pub const HIT_RED: [f32; 4] = rgb(240, 80, 80);
}

/// Same color at a new opacity
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], alpha.clamp(0.0, 1.0)]
}

pub fn side_color(side: Side) -> [f32; 4] {
    match side {
        Side::Left => colors::YELLOW,
        Side::Right => colors::RED,
    }
}

pub fn tint_color(tint: Tint) -> [f32; 4] {
    match tint {
        Tint::Yellow => colors::YELLOW,
        Tint::Red => colors::RED,
        Tint::Rock => colors::ROCK,
        Tint::Ember => colors::EMBER,
        Tint::HitYellow => colors::HIT_YELLOW,
        Tint::HitRed => colors::HIT_RED,
    }
}
