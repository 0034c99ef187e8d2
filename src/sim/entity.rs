//! Rectangular bodies with linear motion

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Axis, Contacts, aabb_axis_collision};

/// What an entity means to the game (independent of how it is drawn)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Player,
    /// Safe landing target
    Platform,
    /// Rock or water, touching it loses the game
    Hazard,
}

impl Kind {
    /// Bit used by `Contacts` to record touched kinds
    #[inline]
    pub(crate) const fn bit(self) -> u8 {
        match self {
            Kind::Player => 1 << 0,
            Kind::Platform => 1 << 1,
            Kind::Hazard => 1 << 2,
        }
    }
}

/// Texture an entity is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sprite {
    Ship,
    Rock,
    Water,
    Platform,
}

impl Sprite {
    /// Gameplay kind implied by this sprite
    pub fn kind(self) -> Kind {
        match self {
            Sprite::Ship => Kind::Player,
            Sprite::Platform => Kind::Platform,
            Sprite::Rock | Sprite::Water => Kind::Hazard,
        }
    }
}

/// An axis-aligned rectangular body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: Kind,
    pub sprite: Sprite,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Multiplier applied to velocity when moving
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    /// Frozen entities neither move nor register collisions
    pub frozen: bool,
}

impl Entity {
    pub fn new(sprite: Sprite, position: Vec2, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self {
            kind: sprite.kind(),
            sprite,
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            speed: 1.0,
            width,
            height,
            frozen: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.width, self.height)
    }

    /// Advance velocity and position by `dt` without collision checks
    pub fn integrate(&mut self, dt: f32) {
        if self.frozen {
            return;
        }
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * self.speed * dt;
    }

    /// Advance by `dt`, resolving against every obstacle set per axis
    ///
    /// X moves and is resolved first, then Y. Each obstacle set is tested
    /// in its own pass so a hit in any set lands in `contacts`.
    pub fn update(&mut self, dt: f32, obstacles: &[&[Entity]], contacts: &mut Contacts) {
        if self.frozen {
            return;
        }
        self.velocity += self.acceleration * dt;

        for axis in Axis::ALL {
            *axis.of_mut(&mut self.position) += axis.of(self.velocity) * self.speed * dt;
            for set in obstacles {
                self.resolve_axis(axis, set, contacts);
            }
        }
    }

    /// Push this entity out of every overlapping entity along `axis`
    ///
    /// Zeroes the velocity on `axis` for each hit and records the other
    /// entity's kind. The last hit on an axis wins the `contacts` slot.
    /// Returns whether anything was hit.
    pub fn resolve_axis(&mut self, axis: Axis, others: &[Entity], contacts: &mut Contacts) -> bool {
        if self.frozen {
            return false;
        }

        let mut any = false;
        for other in others {
            let mover = self.aabb();
            let obstacle = other.aabb();
            let result = aabb_axis_collision(&mover, &obstacle, axis, self.velocity);
            if !result.hit {
                continue;
            }

            *axis.of_mut(&mut self.position) = result.resolved_center(&obstacle, &mover);
            *axis.of_mut(&mut self.velocity) = 0.0;
            contacts.record(axis, other.kind);
            any = true;
        }
        any
    }

    /// Stop in place permanently
    pub fn freeze(&mut self) {
        self.frozen = true;
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
    }
}
