//! Per-frame draw list
//!
//! `build_frame` walks the match state in paint order and emits one command
//! per primitive or sprite. Missing sprites fall back to primitive shapes.

use glam::Vec2;

use super::vertex::{colors, side_color, tint_color, with_alpha};
use crate::assets::{AssetCatalog, names};
use crate::consts::MAX_HEALTH;
use crate::settings::Settings;
use crate::sim::{GameState, Rect, Side};

const HEALTH_BAR_SIZE: Vec2 = Vec2::new(220.0, 18.0);
const HEALTH_BAR_MARGIN: f32 = 10.0;
const HEALTH_BAR_RADIUS: f32 = 6.0;
const LABEL_SIZE: f32 = 18.0;
const BANNER_SIZE: f32 = 84.0;
const BULLET_RADIUS: f32 = 3.0;
const SHIP_RADIUS: f32 = 6.0;
const TRAIL_MAX_ALPHA: f32 = 200.0 / 255.0;
const GLOW_ALPHA: f32 = 70.0 / 255.0;
const FLASH_ALPHA: f32 = 150.0 / 255.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Whole-screen fill; `rect` is the screen
    Fill,
    Rect { corner_radius: f32 },
    RectOutline { width: f32, corner_radius: f32 },
    /// Ellipse inscribed in `rect`
    Ellipse,
    /// Circle inscribed in `rect` (square)
    Circle,
    Sprite { image: &'static str },
    /// `rect.pos` is the top-left, or the center when `centered`
    Text { text: String, size: f32, centered: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub shape: Shape,
    pub rect: Rect,
    /// Degrees, counter-clockwise on screen, about the rect center
    pub rotation: f32,
    /// RGBA; tints sprites
    pub color: [f32; 4],
}

impl DrawCommand {
    pub fn new(shape: Shape, rect: Rect, color: [f32; 4]) -> Self {
        Self {
            shape,
            rect,
            rotation: 0.0,
            color,
        }
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }
}

/// Everything drawn in one frame, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    fn push(&mut self, shape: Shape, rect: Rect, color: [f32; 4]) {
        self.commands.push(DrawCommand::new(shape, rect, color));
    }

    /// Text of every text command, in paint order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match &cmd.shape {
            Shape::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

fn square_around(center: Vec2, radius: f32) -> Rect {
    Rect::from_pos(center - Vec2::splat(radius), Vec2::splat(radius * 2.0))
}

fn ship_sprite(side: Side) -> (&'static str, f32) {
    match side {
        Side::Left => (names::SHIP_LEFT, 90.0),
        Side::Right => (names::SHIP_RIGHT, 270.0),
    }
}

/// Build the draw list for the current state
pub fn build_frame(state: &GameState, catalog: &dyn AssetCatalog, settings: &Settings) -> Frame {
    let mut frame = Frame::default();
    let arena = &state.arena;
    let screen = arena.bounds();
    let shake = if settings.effective_screen_shake() {
        state.shake.offset
    } else {
        Vec2::ZERO
    };

    // Background, two copies for the parallax wrap
    if catalog.has_image(names::BACKGROUND) {
        for x in [-state.bg_offset, arena.width - state.bg_offset] {
            frame.push(
                Shape::Sprite {
                    image: names::BACKGROUND,
                },
                Rect::from_pos(Vec2::new(x, 0.0) + shake, screen.size),
                colors::WHITE,
            );
        }
    } else {
        frame.push(Shape::Fill, screen, colors::BACKGROUND);
    }

    frame.push(Shape::Rect { corner_radius: 0.0 }, arena.border, colors::BORDER);

    let meteor_sprite = catalog.has_image(names::METEOR);
    for meteor in &state.meteors {
        let cmd = if meteor_sprite {
            DrawCommand::new(
                Shape::Sprite {
                    image: names::METEOR,
                },
                meteor.rect,
                colors::WHITE,
            )
            .rotated(meteor.angle)
        } else {
            DrawCommand::new(Shape::Ellipse, meteor.rect, colors::METEOR)
        };
        frame.commands.push(cmd);
    }

    for bullet in &state.bullets {
        let color = side_color(bullet.owner);
        if settings.trails {
            let steps = bullet.trail.len().saturating_sub(1).max(1) as f32;
            for (i, &point) in bullet.trail.iter().enumerate() {
                let i = i as f32;
                let alpha = TRAIL_MAX_ALPHA * i / steps;
                frame.push(
                    Shape::Circle,
                    square_around(point, 2.0 + 0.6 * i),
                    with_alpha(color, alpha),
                );
            }
        }

        let glow = Rect::from_pos(bullet.rect.pos - bullet.rect.size * 0.5, bullet.rect.size * 2.0);
        frame.push(Shape::Ellipse, glow, with_alpha(color, GLOW_ALPHA));
        frame.push(
            Shape::Rect {
                corner_radius: BULLET_RADIUS,
            },
            bullet.rect,
            color,
        );
    }

    for ship in &state.ships {
        let (image, angle) = ship_sprite(ship.side);
        let cmd = if catalog.has_image(image) {
            DrawCommand::new(Shape::Sprite { image }, ship.rect(), colors::WHITE).rotated(angle)
        } else {
            DrawCommand::new(
                Shape::Rect {
                    corner_radius: SHIP_RADIUS,
                },
                ship.rect(),
                side_color(ship.side),
            )
        };
        frame.commands.push(cmd);
    }

    if settings.particles {
        for p in state.particles.iter() {
            let color = with_alpha(tint_color(p.tint), p.alpha());
            frame.push(Shape::Circle, square_around(p.pos + shake, p.size.max(1.0)), color);
        }
    }

    for side in Side::BOTH {
        health_bar(&mut frame, state, side);
    }

    if settings.effective_hit_flash() && state.hit_flash > 0.0 {
        frame.push(
            Shape::Fill,
            screen,
            with_alpha(colors::WHITE, FLASH_ALPHA * state.hit_flash),
        );
    }

    if let Some(outcome) = state.outcome() {
        frame.push(
            Shape::Text {
                text: outcome.banner(),
                size: BANNER_SIZE,
                centered: true,
            },
            Rect::from_pos(screen.center() + shake, Vec2::ZERO),
            colors::WHITE,
        );
    }

    frame
}

fn health_bar(frame: &mut Frame, state: &GameState, side: Side) {
    let ship = state.ship(side);
    let x = match side {
        Side::Left => HEALTH_BAR_MARGIN,
        Side::Right => state.arena.width - HEALTH_BAR_SIZE.x - HEALTH_BAR_MARGIN,
    };
    let outer = Rect::from_pos(Vec2::new(x, HEALTH_BAR_MARGIN), HEALTH_BAR_SIZE);
    let rounded = Shape::Rect {
        corner_radius: HEALTH_BAR_RADIUS,
    };

    frame.push(rounded.clone(), outer, colors::UI_BG);

    let fraction = (ship.display_health / MAX_HEALTH as f32).clamp(0.0, 1.0);
    let inner = Rect::from_pos(
        outer.pos + Vec2::splat(2.0),
        Vec2::new((HEALTH_BAR_SIZE.x - 4.0) * fraction, HEALTH_BAR_SIZE.y - 4.0),
    );
    if inner.size.x > 0.0 {
        frame.push(rounded, inner, side_color(side));
    }

    frame.push(
        Shape::RectOutline {
            width: 2.0,
            corner_radius: HEALTH_BAR_RADIUS,
        },
        outer,
        colors::WHITE,
    );

    let label_x = match side {
        Side::Left => x + 2.0,
        Side::Right => x + 6.0,
    };
    frame.push(
        Shape::Text {
            text: format!("{}: {}", side.name(), ship.health),
            size: LABEL_SIZE,
            centered: false,
        },
        Rect::from_pos(Vec2::new(label_x, outer.bottom() + 8.0), Vec2::ZERO),
        colors::WHITE,
    );
}
