//! World state
//!
//! Everything a run needs to advance deterministically lives here: the
//! lander, the static obstacle sets and the terminal outcome.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Kind, Sprite};
use crate::level::Level;
use crate::settings::Physics;

/// Result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Still flying
    #[default]
    Unset,
    /// Touched a platform
    Won,
    /// Touched a rock or the water
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Unset)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Unset => "unset",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// The only entity that moves
    pub player: Entity,
    /// Landing targets (fixed after construction)
    pub platforms: Vec<Entity>,
    /// Rocks and water (fixed after construction)
    pub hazards: Vec<Entity>,
    pub outcome: Outcome,
    pub physics: Physics,
    /// Fixed sub-steps simulated so far
    pub time_ticks: u64,
}

impl World {
    /// Build a world from level data
    pub fn from_level(level: &Level, physics: &Physics) -> Self {
        let mut player = Entity::new(
            Sprite::Ship,
            level.player_start,
            physics.player_size,
            physics.player_size,
        );
        player.speed = physics.player_speed;
        player.acceleration = Vec2::new(0.0, physics.gravity);

        let mut platforms = Vec::new();
        let mut hazards = Vec::new();
        for tile in &level.tiles {
            let entity = Entity::new(tile.sprite, tile.position, tile.width, tile.height);
            match entity.kind {
                Kind::Platform => platforms.push(entity),
                Kind::Hazard => hazards.push(entity),
                Kind::Player => {}
            }
        }

        Self {
            player,
            platforms,
            hazards,
            outcome: Outcome::Unset,
            physics: physics.clone(),
            time_ticks: 0,
        }
    }

    /// Default level with default physics
    pub fn with_default_level() -> Self {
        Self::from_level(&Level::default(), &Physics::default())
    }

    /// Record a terminal outcome and stop the lander for good
    pub fn finish(&mut self, outcome: Outcome) {
        debug_assert!(outcome.is_terminal());
        self.outcome = outcome;
        self.player.freeze();
    }

    /// Number of static obstacles
    pub fn obstacle_count(&self) -> usize {
        self.platforms.len() + self.hazards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_world_layout() {
        let world = World::with_default_level();
        assert_eq!(world.platforms.len(), 3);
        assert_eq!(world.hazards.len(), 35);
        assert_eq!(world.outcome, Outcome::Unset);
        assert_eq!(world.player.position, Vec2::new(0.0, 3.25));
        assert_eq!(world.player.acceleration, Vec2::new(0.0, -0.02));
        assert_eq!(world.player.speed, 1.5);
        assert!(world.platforms.iter().all(|p| p.kind == Kind::Platform));
        assert!(world.hazards.iter().all(|h| h.kind == Kind::Hazard));
        assert_eq!(
            world.hazards.iter().filter(|h| h.sprite == Sprite::Water).count(),
            8
        );
    }

    #[test]
    fn test_finish_freezes_player() {
        let mut world = World::with_default_level();
        world.player.velocity = Vec2::new(0.3, -0.4);
        world.finish(Outcome::Lost);
        assert!(world.player.frozen);
        assert_eq!(world.player.velocity, Vec2::ZERO);
        assert!(world.outcome.is_terminal());
        assert_eq!(world.outcome.as_str(), "lost");
    }
}
