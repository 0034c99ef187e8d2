//! Monospace text over a 16x16 ASCII glyph atlas
//!
//! Character code `c` lives in atlas cell `(c % 16, c / 16)`. Glyphs are
//! laid out left to right, `size + spacing` apart, centered on their cell.

use glam::Vec2;

use super::vertex::{TexturedVertex, quad};

/// Cells per atlas row and column
pub const ATLAS_CELLS: u32 = 16;

/// Glyph drawn for characters outside the atlas
const FALLBACK_GLYPH: u8 = b'?';

/// Top-left UV of the atlas cell for `glyph`
pub fn glyph_uv(glyph: u8) -> Vec2 {
    let cell = 1.0 / ATLAS_CELLS as f32;
    let index = u32::from(glyph);
    Vec2::new(
        (index % ATLAS_CELLS) as f32 * cell,
        (index / ATLAS_CELLS) as f32 * cell,
    )
}

/// Vertices for `text` in run-local coordinates (origin at glyph 0's center)
pub fn layout_text(text: &str, size: f32, spacing: f32) -> Vec<TexturedVertex> {
    let cell = Vec2::splat(1.0 / ATLAS_CELLS as f32);
    let half = size / 2.0;

    let mut vertices = Vec::with_capacity(text.chars().count() * 6);
    for (i, ch) in text.chars().enumerate() {
        let glyph = if ch.is_ascii() { ch as u8 } else { FALLBACK_GLYPH };
        let offset = (size + spacing) * i as f32;
        let uv = glyph_uv(glyph);
        vertices.extend(quad(
            Vec2::new(offset - half, -half),
            Vec2::new(offset + half, half),
            uv,
            uv + cell,
        ));
    }
    vertices
}
