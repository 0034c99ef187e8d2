//! Fixed timestep simulation tick
//!
//! One call to `tick` is one physics sub-step. Input is applied once per
//! frame with `apply_input` and reused by every sub-step of that frame.

use glam::Vec2;

use super::collision::Contacts;
use super::entity::Kind;
use super::state::{Outcome, World};

/// Input commands for a frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Lateral thrust in [-1, 1] (negative = left)
    pub thrust: f32,
}

impl TickInput {
    pub fn left() -> Self {
        Self { thrust: -1.0 }
    }

    pub fn right() -> Self {
        Self { thrust: 1.0 }
    }
}

/// Refresh the lander's acceleration from this frame's input
pub fn apply_input(world: &mut World, input: &TickInput) {
    if world.player.frozen {
        return;
    }
    let thrust = input.thrust.clamp(-1.0, 1.0);
    world.player.acceleration = Vec2::new(
        thrust * world.physics.lateral_thrust,
        world.physics.gravity,
    );
}

/// Decide the outcome of a sub-step from the kinds it touched
///
/// Hazards take priority over platforms regardless of test order.
pub fn classify(contacts: &Contacts) -> Outcome {
    if contacts.touched(Kind::Hazard) {
        Outcome::Lost
    } else if contacts.touched(Kind::Platform) {
        Outcome::Won
    } else {
        Outcome::Unset
    }
}

/// Advance the world by one fixed sub-step
///
/// Returns the outcome if this step ended the run.
pub fn tick(world: &mut World, dt: f32) -> Option<Outcome> {
    if world.outcome.is_terminal() || world.player.frozen {
        return None;
    }

    world.time_ticks += 1;

    let mut contacts = Contacts::new();
    world
        .player
        .update(
            dt,
            &[world.platforms.as_slice(), world.hazards.as_slice()],
            &mut contacts,
        );

    if !contacts.is_empty() {
        log::trace!(
            "tick {}: contacts x={:?} y={:?}",
            world.time_ticks,
            contacts.x,
            contacts.y
        );
    }

    let outcome = classify(&contacts);
    if !outcome.is_terminal() {
        return None;
    }

    world.finish(outcome);
    log::info!(
        "Lander {} after {} ticks at ({:.3}, {:.3})",
        outcome.as_str(),
        world.time_ticks,
        world.player.position.x,
        world.player.position.y
    );
    Some(outcome)
}
