//! Vertex types for textured 2D quads

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// 2D vertex with position and texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl TexturedVertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
        }
    }
}

/// Two triangles covering `min..max`, textured with `uv_min..uv_max`
///
/// Texture v grows downward, so the top edge of the quad samples `uv_min.y`.
pub fn quad(min: Vec2, max: Vec2, uv_min: Vec2, uv_max: Vec2) -> [TexturedVertex; 6] {
    [
        TexturedVertex::new(min.x, max.y, uv_min.x, uv_min.y),
        TexturedVertex::new(min.x, min.y, uv_min.x, uv_max.y),
        TexturedVertex::new(max.x, max.y, uv_max.x, uv_min.y),
        TexturedVertex::new(max.x, min.y, uv_max.x, uv_max.y),
        TexturedVertex::new(max.x, max.y, uv_max.x, uv_min.y),
        TexturedVertex::new(min.x, min.y, uv_min.x, uv_max.y),
    ]
}

/// Quad sampling a whole texture
pub fn sprite_quad(min: Vec2, max: Vec2) -> [TexturedVertex; 6] {
    quad(min, max, Vec2::ZERO, Vec2::ONE)
}
