//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Input sampled once per frame, reused by every sub-step
//! - Stable obstacle order (level order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;
pub mod timestep;

pub use collision::{Aabb, Axis, CollisionResult, Contacts, aabb_axis_collision};
pub use entity::{Entity, Kind, Sprite};
pub use state::{Outcome, World};
pub use tick::{TickInput, apply_input, classify, tick};
pub use timestep::{FixedTimestep, FrameReport};
