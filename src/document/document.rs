// src/document/document.rs

use crate::config::GeneratorConfig;
use crate::map::{MapProperty, ObjectKind, PlacedObject, TileGrid};

/// Tiled never hands out ids below this in the stock map, so the header keeps
/// it as a floor.
pub const NEXT_OBJECT_ID_FLOOR: u32 = 100;

/// The single embedded tileset of a level.
#[derive(Debug, Clone, PartialEq)]
pub struct Tileset {
    pub first_gid: u32,
    pub name: String,
    pub tile_width: u32,
    pub tile_height: u32,
    pub tile_count: u32,
    pub columns: u32,
    pub image_source: String,
    pub image_width: u32,
    pub image_height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub id: u32,
    pub name: String,
    pub grid: TileGrid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLayer {
    pub id: u32,
    pub name: String,
    pub objects: Vec<PlacedObject>,
}

/// A complete level: header, one tileset, one tile layer, one object layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelDocument {
    pub map_version: String,
    pub tiled_version: String,
    pub width: u32,
    pub height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    properties: Vec<MapProperty>,
    tileset: Tileset,
    tile_layer: TileLayer,
    object_layer: ObjectLayer,
}

impl LevelDocument {
    /// Assembles a document around an already ordered object list.
    pub fn from_config(config: &GeneratorConfig, objects: Vec<PlacedObject>) -> Self {
        let tile = config.tile_size_px;
        LevelDocument {
            map_version: config.map_version.clone(),
            tiled_version: config.tiled_version.clone(),
            width: config.canvas_width_tiles,
            height: config.canvas_height_tiles,
            tile_width: tile,
            tile_height: tile,
            properties: vec![
                MapProperty::float("gravity", config.gravity),
                MapProperty::string("levelName", &config.level_name),
                MapProperty::float("scrollSpeed", config.scroll_speed),
            ],
            tileset: Tileset {
                first_gid: 1,
                name: config.tileset_name.clone(),
                tile_width: tile,
                tile_height: tile,
                tile_count: 1,
                columns: 1,
                image_source: config.tileset_image.clone(),
                image_width: tile,
                image_height: tile,
            },
            tile_layer: TileLayer {
                id: 1,
                name: "Tile Layer 1".to_string(),
                grid: TileGrid::empty(config.canvas_width_tiles, config.canvas_height_tiles),
            },
            object_layer: ObjectLayer {
                id: 2,
                name: "Objects".to_string(),
                objects,
            },
        }
    }

    pub fn properties(&self) -> &[MapProperty] {
        &self.properties
    }

    pub fn tileset(&self) -> &Tileset {
        &self.tileset
    }

    pub fn tile_layer(&self) -> &TileLayer {
        &self.tile_layer
    }

    pub fn tile_grid(&self) -> &TileGrid {
        &self.tile_layer.grid
    }

    pub fn object_layer(&self) -> &ObjectLayer {
        &self.object_layer
    }

    /// Objects in emission order.
    pub fn objects(&self) -> &[PlacedObject] {
        &self.object_layer.objects
    }

    /// Only the procedurally placed spikes and blocks.
    pub fn obstacles(&self) -> impl Iterator<Item = &PlacedObject> {
        self.objects().iter().filter(|obj| obj.kind.is_obstacle())
    }

    pub fn end_flag(&self) -> Option<&PlacedObject> {
        self.objects().iter().find(|obj| obj.kind == ObjectKind::EndFlag)
    }

    /// Value of the header's `nextobjectid`: never an id already in use.
    pub fn next_object_id(&self) -> u32 {
        let after_last = self.objects().iter().map(|obj| obj.id + 1).max().unwrap_or(1);
        after_last.max(NEXT_OBJECT_ID_FLOOR)
    }

    /// Highest layer id plus one.
    pub fn next_layer_id(&self) -> u32 {
        self.tile_layer.id.max(self.object_layer.id) + 1
    }
}
