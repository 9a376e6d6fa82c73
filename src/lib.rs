// src/lib.rs

pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod map;

pub use config::GeneratorConfig;
pub use document::LevelDocument;
pub use error::{ConfigError, LevelError};
pub use generator::{generate, generate_to_path, LevelGenerator, RandomSource, RngSource};
