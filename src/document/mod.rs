// src/document/mod.rs
mod document;
mod file;
mod tmx;

pub use self::document::{LevelDocument, ObjectLayer, TileLayer, Tileset, NEXT_OBJECT_ID_FLOOR};
pub use self::file::write_level_text;
pub use self::tmx::escape_attr;
