//! # Generator Configuration
//!
//! All layout constants the level generator reads. The defaults reproduce the
//! stock "Level 1 Extended" map; a JSON file may override any subset of the
//! fields, the rest fall back to their defaults.
//!
//! ```
//! use level_gen::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_json_str(r#"{ "step_min": 300 }"#).unwrap();
//! assert_eq!(config.step_min, 300);
//! assert_eq!(config.step_max, 800);
//! ```

use crate::error::{ConfigError, LevelError};
use crate::map::ObjectKind;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Layout constants for one generated level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    // Canvas.
    pub canvas_width_tiles: u32,
    pub canvas_height_tiles: u32,
    pub tile_size_px: u32,

    // Obstacle track.
    pub obstacle_start_x: i32,
    pub obstacle_end_x: i32,
    pub step_min: i32,
    pub step_max: i32,

    // Map metadata.
    pub gravity: f64,
    pub level_name: String,
    pub scroll_speed: f64,

    // Fixed design objects.
    pub ground_y: i32,
    pub ground_width: i32,
    pub player_start_x: i32,
    pub player_start_y: i32,
    pub end_flag_x: i32,
    pub end_flag_height: i32,

    // Header and tileset.
    pub map_version: String,
    pub tiled_version: String,
    pub tileset_name: String,
    pub tileset_image: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            canvas_width_tiles: 500,
            canvas_height_tiles: 20,
            tile_size_px: 32,
            obstacle_start_x: 800,
            obstacle_end_x: 15000,
            step_min: 400,
            step_max: 800,
            gravity: -1600.0,
            level_name: "Level 1 Extended".to_string(),
            scroll_speed: 350.0,
            ground_y: 448,
            ground_width: 16000,
            player_start_x: 96,
            player_start_y: 416,
            end_flag_x: 15500,
            end_flag_height: 1000,
            map_version: "1.10".to_string(),
            tiled_version: "1.10.2".to_string(),
            tileset_name: "tiles".to_string(),
            tileset_image: "../libgdx.png".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Parses a (possibly partial) JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self, LevelError> {
        debug!("Reading generator config from {}", path.display());
        let json = fs::read_to_string(path).map_err(|source| LevelError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks every constraint the placement pass relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width_tiles == 0 || self.canvas_height_tiles == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.canvas_width_tiles,
                height: self.canvas_height_tiles,
            });
        }
        if self.tile_size_px == 0 {
            return Err(ConfigError::EmptyTileSize);
        }
        if self.obstacle_start_x >= self.obstacle_end_x {
            return Err(ConfigError::EmptySpan {
                start: self.obstacle_start_x,
                end: self.obstacle_end_x,
            });
        }
        if self.step_min <= 0 {
            return Err(ConfigError::NonPositiveStep(self.step_min));
        }
        if self.step_min > self.step_max {
            return Err(ConfigError::InvertedStepRange {
                min: self.step_min,
                max: self.step_max,
            });
        }
        // The last obstacle starts below obstacle_end_x but may overhang it.
        let required_min = self.obstacle_end_x.saturating_add(ObjectKind::MAX_OBSTACLE_WIDTH);
        if self.end_flag_x <= required_min {
            return Err(ConfigError::EndFlagInsideSpan {
                end_flag_x: self.end_flag_x,
                required_min,
            });
        }
        if self.end_flag_x <= self.player_start_x {
            return Err(ConfigError::EndFlagBehindPlayer {
                end_flag_x: self.end_flag_x,
                player_x: self.player_start_x,
            });
        }

        let tile = i32::try_from(self.tile_size_px)
            .map_err(|_| ConfigError::TileSizeTooLarge(self.tile_size_px))?;

        // Ground covers the whole canvas and runs under the end flag. Since
        // ground_width is an i32, this also keeps every right edge in range.
        let canvas_px = self.canvas_width_tiles as i64 * tile as i64;
        let required = canvas_px.max(self.end_flag_x as i64 + tile as i64);
        if (self.ground_width as i64) < required {
            return Err(ConfigError::GroundTooShort {
                ground_width: self.ground_width,
                required,
            });
        }

        let tallest = ObjectKind::MAX_OBSTACLE_HEIGHT;
        if self.ground_y.checked_sub(tallest).is_none() || self.ground_y.checked_add(tile).is_none() {
            return Err(ConfigError::CoordinateOutOfRange {
                field: "ground_y",
                value: self.ground_y,
            });
        }
        if self.player_start_y.checked_add(tile).is_none() {
            return Err(ConfigError::CoordinateOutOfRange {
                field: "player_start_y",
                value: self.player_start_y,
            });
        }
        Ok(())
    }

    /// Tile size as a pixel coordinate. Only meaningful once `validate` passed.
    pub fn tile_px(&self) -> i32 {
        i32::try_from(self.tile_size_px).unwrap_or(i32::MAX)
    }

    /// Upper bound on the number of obstacles one pass can place.
    pub fn max_obstacles(&self) -> usize {
        let span = (self.obstacle_end_x as i64 - self.obstacle_start_x as i64).max(0);
        let step = (self.step_min as i64).max(1);
        ((span + step - 1) / step) as usize
    }
}
