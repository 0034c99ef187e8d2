//! Backend-agnostic rendering
//!
//! Builds textured-quad draw lists from the simulation. No GPU code lives
//! here; a graphics backend consumes `DrawList`s.

pub mod frame;
pub mod text;
pub mod vertex;

pub use frame::{DrawBatch, DrawList, Texture, projection};
pub use vertex::TexturedVertex;
