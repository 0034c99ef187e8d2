//! Static level layout
//!
//! A level is an ordered list of tiles plus the lander's start position.
//! Tile order is the order obstacles are tested in.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_START, TILE_SIZE};
use crate::error::{LanderError, Result};
use crate::sim::{Kind, Sprite};

fn default_tile_size() -> f32 {
    TILE_SIZE
}

/// One static obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub sprite: Sprite,
    pub position: Vec2,
    #[serde(default = "default_tile_size")]
    pub width: f32,
    #[serde(default = "default_tile_size")]
    pub height: f32,
}

impl Tile {
    pub fn new(sprite: Sprite, position: Vec2) -> Self {
        Self {
            sprite,
            position,
            width: TILE_SIZE,
            height: TILE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub player_start: Vec2,
    pub tiles: Vec<Tile>,
}

impl Default for Level {
    /// Walls of rock on both sides, water along the bottom, three
    /// platforms right of center and three loose rocks mid-screen.
    fn default() -> Self {
        let mut tiles = Vec::with_capacity(38);

        for i in 0..12 {
            tiles.push(Tile::new(Sprite::Rock, Vec2::new(-4.5, 3.25 - i as f32)));
        }
        for i in 0..12 {
            tiles.push(Tile::new(Sprite::Rock, Vec2::new(4.5, 3.25 - i as f32)));
        }
        for i in 0..3 {
            tiles.push(Tile::new(Sprite::Platform, Vec2::new(0.5 + i as f32, -3.0)));
        }
        for i in 0..8 {
            tiles.push(Tile::new(Sprite::Water, Vec2::new(-3.5 + i as f32, -3.25)));
        }
        for x in [0.0, -3.5, 3.5] {
            tiles.push(Tile::new(Sprite::Rock, Vec2::new(x, 0.0)));
        }

        Self {
            player_start: Vec2::new(PLAYER_START.0, PLAYER_START.1),
            tiles,
        }
    }
}

impl Level {
    pub fn from_json(json: &str) -> Result<Self> {
        let level: Level = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a level file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| LanderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::from_json(&json)?;
        log::info!(
            "Loaded level {} ({} tiles)",
            path.display(),
            level.tiles.len()
        );
        Ok(level)
    }

    pub fn validate(&self) -> Result<()> {
        for (i, tile) in self.tiles.iter().enumerate() {
            if !(tile.width > 0.0 && tile.height > 0.0) {
                return Err(LanderError::InvalidLevel(format!(
                    "tile {i} has non-positive size {}x{}",
                    tile.width, tile.height
                )));
            }
            if tile.sprite.kind() == Kind::Player {
                return Err(LanderError::InvalidLevel(format!(
                    "tile {i} uses the ship sprite"
                )));
            }
        }
        if !self.tiles.iter().any(|t| t.sprite.kind() == Kind::Platform) {
            return Err(LanderError::InvalidLevel(
                "level has no landing platform".to_string(),
            ));
        }
        Ok(())
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.tiles.iter().filter(|t| t.sprite.kind() == kind).count()
    }
}
