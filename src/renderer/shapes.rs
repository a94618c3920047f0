//! Shape generation for 2D primitives
//!
//! Triangle lists for the primitive draw commands. Sprites and text are left
//! to the backend and produce no vertices here.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::draw::{DrawCommand, Shape};
use super::vertex::Vertex;
use crate::sim::Rect;

const ELLIPSE_SEGMENTS: u32 = 24;
const CORNER_SEGMENTS: u32 = 6;

fn push_quad(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
    for p in [a, b, c, c, b, d] {
        out.push(Vertex::new(p.x, p.y, color));
    }
}

/// Axis-aligned quad as two triangles
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_rect(&mut vertices, r.pos, r.size, color);
    vertices
}

fn push_rect(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    let max = pos + size;
    push_quad(
        out,
        pos,
        Vec2::new(max.x, pos.y),
        Vec2::new(pos.x, max.y),
        max,
        color,
    );
}

/// Fan from `center` sweeping `start..end` radians
fn push_fan(
    out: &mut Vec<Vertex>,
    center: Vec2,
    radii: Vec2,
    start: f32,
    end: f32,
    segments: u32,
    color: [f32; 4],
) {
    let point = |theta: f32| center + Vec2::new(theta.cos(), theta.sin()) * radii;
    for i in 0..segments {
        let theta1 = start + (end - start) * i as f32 / segments as f32;
        let theta2 = start + (end - start) * (i + 1) as f32 / segments as f32;
        let (p1, p2) = (point(theta1), point(theta2));
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(p1.x, p1.y, color));
        out.push(Vertex::new(p2.x, p2.y, color));
    }
}

/// Filled rectangle with rounded corners; radius is capped at half the short side
pub fn rounded_rect(r: &Rect, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let radius = radius.min(r.size.x / 2.0).min(r.size.y / 2.0).max(0.0);
    if radius == 0.0 {
        return rect(r, color);
    }

    let mut vertices = Vec::new();
    let (pos, size) = (r.pos, r.size);
    // Middle band plus top and bottom strips between the corners
    push_rect(
        &mut vertices,
        Vec2::new(pos.x, pos.y + radius),
        Vec2::new(size.x, size.y - 2.0 * radius),
        color,
    );
    push_rect(
        &mut vertices,
        Vec2::new(pos.x + radius, pos.y),
        Vec2::new(size.x - 2.0 * radius, radius),
        color,
    );
    push_rect(
        &mut vertices,
        Vec2::new(pos.x + radius, pos.y + size.y - radius),
        Vec2::new(size.x - 2.0 * radius, radius),
        color,
    );

    let inset = Rect::from_pos(pos + Vec2::splat(radius), size - Vec2::splat(2.0 * radius));
    let corners = [
        (Vec2::new(inset.left(), inset.top()), PI),
        (Vec2::new(inset.right(), inset.top()), PI + FRAC_PI_2),
        (Vec2::new(inset.right(), inset.bottom()), 0.0),
        (Vec2::new(inset.left(), inset.bottom()), FRAC_PI_2),
    ];
    for (center, start) in corners {
        push_fan(
            &mut vertices,
            center,
            Vec2::splat(radius),
            start,
            start + FRAC_PI_2,
            CORNER_SEGMENTS,
            color,
        );
    }
    vertices
}

/// Border band of the given width drawn inside the rect (square corners)
pub fn rect_outline(r: &Rect, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let w = width.min(r.size.x / 2.0).min(r.size.y / 2.0);
    let mut vertices = Vec::with_capacity(24);
    let (pos, size) = (r.pos, r.size);
    push_rect(&mut vertices, pos, Vec2::new(size.x, w), color);
    push_rect(
        &mut vertices,
        Vec2::new(pos.x, pos.y + size.y - w),
        Vec2::new(size.x, w),
        color,
    );
    push_rect(
        &mut vertices,
        Vec2::new(pos.x, pos.y + w),
        Vec2::new(w, size.y - 2.0 * w),
        color,
    );
    push_rect(
        &mut vertices,
        Vec2::new(pos.x + size.x - w, pos.y + w),
        Vec2::new(w, size.y - 2.0 * w),
        color,
    );
    vertices
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    push_fan(&mut vertices, center, radii, 0.0, TAU, segments, color);
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, Vec2::splat(radius), color, segments)
}

/// Rotate vertices counter-clockwise on screen (y down) about `pivot`
fn rotate_about(vertices: &mut [Vertex], pivot: Vec2, degrees: f32) {
    // y points down, so screen counter-clockwise is a negative math angle
    let rot = Vec2::from_angle(-degrees.to_radians());
    for v in vertices {
        let p = Vec2::from(v.position) - pivot;
        let p = pivot + rot.rotate(p);
        v.position = p.to_array();
    }
}

/// Triangle list for one draw command
pub fn tessellate(cmd: &DrawCommand) -> Vec<Vertex> {
    let r = &cmd.rect;
    let mut vertices = match &cmd.shape {
        Shape::Fill => rect(r, cmd.color),
        Shape::Rect { corner_radius } => rounded_rect(r, *corner_radius, cmd.color),
        Shape::RectOutline { width, .. } => rect_outline(r, *width, cmd.color),
        Shape::Ellipse | Shape::Circle => {
            ellipse(r.center(), r.size / 2.0, cmd.color, ELLIPSE_SEGMENTS)
        }
        Shape::Sprite { .. } | Shape::Text { .. } => Vec::new(),
    };
    if cmd.rotation != 0.0 {
        rotate_about(&mut vertices, r.center(), cmd.rotation);
    }
    vertices
}
