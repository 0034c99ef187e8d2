//! Axis-separated AABB collision detection
//!
//! Boxes are tested on both axes for overlap, but the response is computed
//! along a single axis at a time: the mover is pushed out along the axis it
//! just moved on, leaving the other axis untouched.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Kind;

/// Depth below which boxes count as touching rather than overlapping
pub const CONTACT_EPSILON: f32 = 1e-5;

/// A spatial axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Component of `v` along this axis
    #[inline]
    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    /// Mutable component of `v` along this axis
    #[inline]
    pub fn of_mut(self, v: &mut Vec2) -> &mut f32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
        }
    }
}

/// Axis-aligned bounding box (center + half extents)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            half: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Overlap depth along `axis` (<= 0 means separated on that axis)
    #[inline]
    pub fn depth(&self, other: &Aabb, axis: Axis) -> f32 {
        let dist = (axis.of(self.center) - axis.of(other.center)).abs();
        axis.of(self.half) + axis.of(other.half) - dist
    }

    /// Overlap on both axes. Touching edges do not count.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.depth(other, Axis::X) > CONTACT_EPSILON && self.depth(other, Axis::Y) > CONTACT_EPSILON
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }
}

/// Result of testing a mover against one obstacle along one axis
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the boxes overlap
    pub hit: bool,
    /// Axis the response applies to
    pub axis: Axis,
    /// Penetration depth along `axis`
    pub penetration: f32,
    /// Push direction along `axis` (+1 or -1)
    pub direction: f32,
}

impl CollisionResult {
    pub fn miss(axis: Axis) -> Self {
        Self {
            hit: false,
            axis,
            penetration: 0.0,
            direction: 0.0,
        }
    }

    /// Mover center along `axis` that leaves the boxes exactly touching
    pub fn resolved_center(&self, obstacle: &Aabb, mover: &Aabb) -> f32 {
        let reach = self.axis.of(obstacle.half) + self.axis.of(mover.half);
        self.axis.of(obstacle.center) + self.direction * reach
    }
}

/// Test `mover` against `obstacle` and compute the push-out along `axis`
///
/// The push points away from the obstacle's center. When the centers
/// coincide on `axis` the mover is pushed against its own motion.
pub fn aabb_axis_collision(
    mover: &Aabb,
    obstacle: &Aabb,
    axis: Axis,
    velocity: Vec2,
) -> CollisionResult {
    if !mover.overlaps(obstacle) {
        return CollisionResult::miss(axis);
    }

    let offset = axis.of(mover.center) - axis.of(obstacle.center);
    let direction = if offset != 0.0 {
        offset.signum()
    } else if axis.of(velocity) != 0.0 {
        -axis.of(velocity).signum()
    } else {
        1.0
    };

    CollisionResult {
        hit: true,
        axis,
        penetration: mover.depth(obstacle, axis),
        direction,
    }
}

/// Kinds touched during one fixed sub-step
///
/// Keeps the last kind seen per axis and a record of every kind touched,
/// so outcome priority does not depend on the order obstacle sets were
/// tested in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Last kind recorded on the X axis
    pub x: Option<Kind>,
    /// Last kind recorded on the Y axis
    pub y: Option<Kind>,
    touched_x: u8,
    touched_y: u8,
}

impl Contacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, axis: Axis, kind: Kind) {
        match axis {
            Axis::X => {
                self.x = Some(kind);
                self.touched_x |= kind.bit();
            }
            Axis::Y => {
                self.y = Some(kind);
                self.touched_y |= kind.bit();
            }
        }
    }

    /// Last kind recorded on `axis`
    pub fn last(&self, axis: Axis) -> Option<Kind> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn touched_on(&self, axis: Axis, kind: Kind) -> bool {
        let mask = match axis {
            Axis::X => self.touched_x,
            Axis::Y => self.touched_y,
        };
        mask & kind.bit() != 0
    }

    /// Whether `kind` was touched on either axis
    pub fn touched(&self, kind: Kind) -> bool {
        (self.touched_x | self.touched_y) & kind.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.touched_x == 0 && self.touched_y == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit(x: f32, y: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), 1.0, 1.0)
    }

    #[test]
    fn test_overlap_requires_both_axes() {
        let a = unit(0.0, 0.0);
        assert!(a.overlaps(&unit(0.5, 0.5)));
        assert!(!a.overlaps(&unit(0.5, 2.0)));
        assert!(!a.overlaps(&unit(2.0, 0.5)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = unit(0.0, 0.0);
        assert!(!a.overlaps(&unit(1.0, 0.0)));
        assert!(!a.overlaps(&unit(0.0, -1.0)));
    }

    #[test]
    fn test_push_away_from_obstacle_center() {
        let obstacle = unit(0.0, 0.0);

        let above = unit(0.0, 0.8);
        let result = aabb_axis_collision(&above, &obstacle, Axis::Y, Vec2::new(0.0, -1.0));
        assert!(result.hit);
        assert_eq!(result.direction, 1.0);
        assert!((result.penetration - 0.2).abs() < 1e-6);
        assert!((result.resolved_center(&obstacle, &above) - 1.0).abs() < 1e-6);

        let left = unit(-0.7, 0.0);
        let result = aabb_axis_collision(&left, &obstacle, Axis::X, Vec2::ZERO);
        assert_eq!(result.direction, -1.0);
        assert!((result.penetration - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_coincident_centers_push_against_motion() {
        let obstacle = unit(0.0, 0.0);
        let mover = unit(0.0, 0.0);
        let result = aabb_axis_collision(&mover, &obstacle, Axis::Y, Vec2::new(0.0, -2.0));
        assert!(result.hit);
        assert_eq!(result.direction, 1.0);
    }

    #[test]
    fn test_miss() {
        let result = aabb_axis_collision(&unit(3.0, 0.0), &unit(0.0, 0.0), Axis::X, Vec2::ZERO);
        assert!(!result.hit);
        assert_eq!(result.penetration, 0.0);
    }

    #[test]
    fn test_contacts_keep_last_and_all() {
        let mut contacts = Contacts::new();
        assert!(contacts.is_empty());

        contacts.record(Axis::Y, Kind::Hazard);
        contacts.record(Axis::Y, Kind::Platform);

        assert_eq!(contacts.last(Axis::Y), Some(Kind::Platform));
        assert_eq!(contacts.last(Axis::X), None);
        assert!(contacts.touched(Kind::Hazard));
        assert!(contacts.touched_on(Axis::Y, Kind::Hazard));
        assert!(!contacts.touched_on(Axis::X, Kind::Hazard));

        contacts.clear();
        assert!(contacts.is_empty());
        assert_eq!(contacts.y, None);
    }

    proptest! {
        #[test]
        fn prop_resolved_center_leaves_no_penetration(
            mx in -3.0f32..3.0,
            my in -3.0f32..3.0,
            w in 0.1f32..2.0,
            h in 0.1f32..2.0,
            vx in -2.0f32..2.0,
            vy in -2.0f32..2.0,
        ) {
            let obstacle = unit(0.0, 0.0);
            for axis in Axis::ALL {
                let mut mover = Aabb::new(Vec2::new(mx, my), w, h);
                let result = aabb_axis_collision(&mover, &obstacle, axis, Vec2::new(vx, vy));
                if result.hit {
                    let before = axis.of(Vec2::new(mx, my) - obstacle.center);
                    *axis.of_mut(&mut mover.center) = result.resolved_center(&obstacle, &mover);
                    prop_assert!(mover.depth(&obstacle, axis) <= CONTACT_EPSILON);
                    // The other axis is untouched
                    let other = if axis == Axis::X { Axis::Y } else { Axis::X };
                    prop_assert_eq!(other.of(mover.center), other.of(Vec2::new(mx, my)));
                    if before != 0.0 {
                        prop_assert_eq!(result.direction, before.signum());
                    }
                }
            }
        }
    }
}
