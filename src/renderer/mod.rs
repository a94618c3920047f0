//! Presentation layer
//!
//! The core never touches pixels. Each frame it builds a `Frame` draw list and
//! hands it to a `FrameSink`; a window backend composites it, or the
//! tessellating sink turns the primitive commands into vertex data.

pub mod draw;
pub mod shapes;
pub mod vertex;

pub use draw::{DrawCommand, Frame, Shape, build_frame};
pub use vertex::Vertex;

/// Consumer of per-frame draw lists (window/compositor layer)
pub trait FrameSink {
    fn present(&mut self, frame: &Frame);
}

/// Sink that tessellates each frame into a triangle list and keeps the last one
#[derive(Debug, Default)]
pub struct TessellatingSink {
    vertices: Vec<Vertex>,
    last: Frame,
    frames: u64,
}

impl TessellatingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw vertex bytes, ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn last_frame(&self) -> &Frame {
        &self.last
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl FrameSink for TessellatingSink {
    fn present(&mut self, frame: &Frame) {
        self.vertices.clear();
        for cmd in &frame.commands {
            self.vertices.extend(shapes::tessellate(cmd));
        }
        self.last = frame.clone();
        self.frames += 1;
    }
}
