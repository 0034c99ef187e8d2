//! Per-frame draw list
//!
//! Turns a `World` into textured quads and glyph runs in draw order. A
//! graphics backend uploads `vertices` per batch, binds the batch's
//! texture and translates by `origin`.

use glam::{Mat4, Vec2};

use super::text::layout_text;
use super::vertex::{TexturedVertex, sprite_quad};
use crate::consts::{VIEW_HALF_HEIGHT, VIEW_HALF_WIDTH};
use crate::sim::{Entity, Outcome, Sprite, World};

/// Texture a batch samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    Sprite(Sprite),
    Font,
}

#[derive(Debug, Clone)]
pub struct DrawBatch {
    pub texture: Texture,
    /// Model translation applied to every vertex
    pub origin: Vec2,
    pub vertices: Vec<TexturedVertex>,
}

impl DrawBatch {
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 6
    }
}

/// Outcome banner text, size, spacing and origin
struct Banner {
    text: &'static str,
    size: f32,
    spacing: f32,
    origin: Vec2,
}

fn banner(outcome: Outcome) -> Option<Banner> {
    match outcome {
        Outcome::Unset => None,
        Outcome::Won => Some(Banner {
            text: "Mission Successful!",
            size: 0.65,
            spacing: -0.25,
            origin: Vec2::new(-3.5, 2.0),
        }),
        Outcome::Lost => Some(Banner {
            text: "Mission Failed!",
            size: 0.7,
            spacing: -0.25,
            origin: Vec2::new(-3.0, 2.0),
        }),
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub batches: Vec<DrawBatch>,
}

impl DrawList {
    /// Obstacles, then the outcome banner, then the lander on top
    pub fn build(world: &World) -> Self {
        let mut list = Self::default();

        for entity in world.platforms.iter().chain(&world.hazards) {
            list.push_entity(entity);
        }

        if let Some(banner) = banner(world.outcome) {
            list.batches.push(DrawBatch {
                texture: Texture::Font,
                origin: banner.origin,
                vertices: layout_text(banner.text, banner.size, banner.spacing),
            });
        }

        list.push_entity(&world.player);
        list
    }

    fn push_entity(&mut self, entity: &Entity) {
        let aabb = entity.aabb();
        self.batches.push(DrawBatch {
            texture: Texture::Sprite(entity.sprite),
            origin: entity.position,
            vertices: sprite_quad(aabb.min() - aabb.center, aabb.max() - aabb.center).to_vec(),
        });
    }

    pub fn quad_count(&self) -> usize {
        self.batches.iter().map(DrawBatch::quad_count).sum()
    }
}

/// Orthographic projection of the play field
pub fn projection() -> Mat4 {
    Mat4::orthographic_rh_gl(
        -VIEW_HALF_WIDTH,
        VIEW_HALF_WIDTH,
        -VIEW_HALF_HEIGHT,
        VIEW_HALF_HEIGHT,
        -1.0,
        1.0,
    )
}
