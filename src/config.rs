//! Game tuning, loadable from a TOML file.
//!
//! Every field has a default, so a config file only needs the values it
//! changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::{CANVAS_WIDTH, MAX_LIVES};
use crate::error::{GameError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Hearts at the start of every game.
    pub lives: usize,
    /// Enemies seeded when the world is created.
    pub initial_enemies: usize,
    /// Period of the timer-driven spawn.
    pub spawn_interval_ms: u64,
    /// Lower bound (inclusive) of enemy speed, px/s.
    pub speed_min: f64,
    /// Upper bound (exclusive) of enemy speed, px/s.
    pub speed_max: f64,
    /// Enemies whose x passes this line are dropped.
    pub despawn_x: f64,
    /// Target frame duration (≈30 FPS at 33).
    pub frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            lives: 3,
            initial_enemies: 4,
            spawn_interval_ms: 1500,
            speed_min: 30.0,
            speed_max: 130.0,
            despawn_x: CANVAS_WIDTH,
            frame_ms: 33,
        }
    }
}

impl GameConfig {
    /// Read, parse and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: GameConfig = toml::from_str(&contents).map_err(|e| GameError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.lives == 0 {
            return Err(GameError::InvalidConfig("lives must be at least 1".into()));
        }
        if self.lives > MAX_LIVES {
            return Err(GameError::InvalidConfig(format!(
                "lives must be at most {} so every heart is on screen",
                MAX_LIVES
            )));
        }
        if self.spawn_interval_ms == 0 {
            return Err(GameError::InvalidConfig("spawn_interval_ms must be positive".into()));
        }
        if self.frame_ms == 0 {
            return Err(GameError::InvalidConfig("frame_ms must be positive".into()));
        }
        if !self.speed_min.is_finite() || !self.speed_max.is_finite() || !self.despawn_x.is_finite() {
            return Err(GameError::InvalidConfig("speeds and despawn_x must be finite".into()));
        }
        // Enemies only leave through the right edge.
        if self.speed_min <= 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "speed_min ({}) must be positive",
                self.speed_min
            )));
        }
        if self.speed_min >= self.speed_max {
            return Err(GameError::InvalidConfig(format!(
                "speed_min ({}) must be below speed_max ({})",
                self.speed_min, self.speed_max
            )));
        }
        Ok(())
    }
}
