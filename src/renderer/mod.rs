//! Rendering module
//!
//! The game only issues draw commands through [`Renderer`]; a backend turns
//! them into pixels. [`VertexBatch`] is the CPU backend: it tessellates
//! shapes into GPU-ready vertices and queues text for a font rasterizer.

pub mod hud;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::sim::Rect;

pub use hud::draw_frame;
pub use vertex::{Vertex, colors};

/// Font faces the HUD uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    /// Score digits
    Large,
    /// Result labels
    Small,
}

impl FontSize {
    pub fn points(&self) -> f32 {
        match self {
            FontSize::Large => 76.0,
            FontSize::Small => 18.0,
        }
    }
}

/// Draw-command sink
pub trait Renderer {
    fn fill_rect(&mut self, rect: &Rect, color: [f32; 4]);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]);
    /// `pos` is the text baseline origin
    fn text(&mut self, text: &str, pos: Vec2, size: FontSize, color: [f32; 4]);
}

/// A text draw waiting for a font rasterizer
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub size: FontSize,
    pub color: [f32; 4],
}

/// Per-frame vertex and label buffers
#[derive(Debug, Default)]
pub struct VertexBatch {
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for the next frame, keeping allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.labels.clear();
    }

    /// Vertex data as raw bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Renderer for VertexBatch {
    fn fill_rect(&mut self, rect: &Rect, color: [f32; 4]) {
        self.vertices.extend_from_slice(&shapes::filled_rect(rect, color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        if let Some(quad) = shapes::line(from, to, width, color) {
            self.vertices.extend_from_slice(&quad);
        }
    }

    fn text(&mut self, text: &str, pos: Vec2, size: FontSize, color: [f32; 4]) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}
