// src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A generator configuration that cannot produce a valid level.
///
/// Every variant is detected before any generation work starts.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("obstacle span is empty: start x {start} must be less than end x {end}")]
    EmptySpan { start: i32, end: i32 },

    #[error("step_min must be positive, got {0}")]
    NonPositiveStep(i32),

    #[error("step range is inverted: step_min {min} > step_max {max}")]
    InvertedStepRange { min: i32, max: i32 },

    #[error("canvas dimensions must be positive, got {width}x{height} tiles")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("tile size must be positive")]
    EmptyTileSize,

    #[error("tile size {0}px does not fit a pixel coordinate")]
    TileSizeTooLarge(u32),

    #[error("ground width {ground_width} must be at least {required} to reach the canvas edge and the end flag")]
    GroundTooShort { ground_width: i32, required: i64 },

    #[error("{field} = {value} puts an object outside the pixel coordinate range")]
    CoordinateOutOfRange { field: &'static str, value: i32 },

    #[error("end flag x {end_flag_x} must be greater than {required_min} to clear every obstacle")]
    EndFlagInsideSpan { end_flag_x: i32, required_min: i32 },

    #[error("end flag x {end_flag_x} must be right of the player start x {player_x}")]
    EndFlagBehindPlayer { end_flag_x: i32, player_x: i32 },
}

/// Errors surfaced by the public level generation API.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("could not write level to {}: {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse config file: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts_into_level_error() {
        let err: LevelError = ConfigError::NonPositiveStep(0).into();
        assert!(matches!(err, LevelError::Configuration(ConfigError::NonPositiveStep(0))));
        assert_eq!(
            err.to_string(),
            "configuration error: step_min must be positive, got 0"
        );
    }

    #[test]
    fn test_resource_error_names_path() {
        let err = LevelError::Resource {
            path: PathBuf::from("missing/level1.tmx"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        assert!(err.to_string().contains("missing/level1.tmx"));
    }
}
