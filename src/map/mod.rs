// src/map/mod.rs
pub mod object;
pub mod property;
pub mod tile_grid;

pub use object::{Footprint, ObjectKind, PlacedObject};
pub use property::{MapProperty, PropertyValue};
pub use tile_grid::{TileGrid, EMPTY_TILE};
