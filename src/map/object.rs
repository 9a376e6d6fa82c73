// src/map/object.rs

/// Axis-aligned bounding box in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Footprint {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge (exclusive), clamped to the coordinate range.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive). Tiled's y axis points down.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }
}

/// What an object in the object layer means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    PlayerStart,
    Ground,
    Spike,
    TallBlock,
    WideBlock,
    EndFlag,
}

impl ObjectKind {
    /// Rolls below this are spikes.
    pub const SPIKE_THRESHOLD: f64 = 0.4;
    /// Rolls in `[SPIKE_THRESHOLD, TALL_BLOCK_THRESHOLD)` are tall blocks, the rest wide blocks.
    pub const TALL_BLOCK_THRESHOLD: f64 = 0.7;
    /// Widest footprint any generated obstacle can have.
    pub const MAX_OBSTACLE_WIDTH: i32 = 64;
    /// Tallest footprint any generated obstacle can have.
    pub const MAX_OBSTACLE_HEIGHT: i32 = 96;

    /// Maps a uniform roll in `[0, 1)` to an obstacle kind.
    ///
    /// Bins are half open, so a roll of exactly 0.4 is a tall block and exactly
    /// 0.7 is a wide block.
    pub fn from_roll(r: f64) -> ObjectKind {
        if r < Self::SPIKE_THRESHOLD {
            ObjectKind::Spike
        } else if r < Self::TALL_BLOCK_THRESHOLD {
            ObjectKind::TallBlock
        } else {
            ObjectKind::WideBlock
        }
    }

    /// The `name` attribute written to the map.
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::PlayerStart => "PlayerStart",
            ObjectKind::Ground => "Ground",
            ObjectKind::Spike => "Spike",
            ObjectKind::TallBlock | ObjectKind::WideBlock => "Block",
            ObjectKind::EndFlag => "EndFlag",
        }
    }

    /// The `type` attribute game logic dispatches on.
    pub fn tmx_type(&self) -> &'static str {
        match self {
            ObjectKind::PlayerStart => "PlayerStart",
            ObjectKind::Ground | ObjectKind::TallBlock | ObjectKind::WideBlock => "Solid",
            ObjectKind::Spike => "Spike",
            ObjectKind::EndFlag => "EndFlag",
        }
    }

    /// Fixed (width, height) of a generated obstacle, `None` for design objects
    /// whose size comes from the configuration.
    pub fn obstacle_size(&self) -> Option<(i32, i32)> {
        match self {
            ObjectKind::Spike => Some((32, 32)),
            ObjectKind::TallBlock => Some((32, 64)),
            ObjectKind::WideBlock => Some((64, 96)),
            _ => None,
        }
    }

    pub fn is_obstacle(&self) -> bool {
        self.obstacle_size().is_some()
    }
}

/// One entry of the object layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedObject {
    pub id: u32,
    pub kind: ObjectKind,
    pub footprint: Footprint,
}

impl PlacedObject {
    pub fn new(id: u32, kind: ObjectKind, footprint: Footprint) -> Self {
        Self { id, kind, footprint }
    }

    /// Places an obstacle at `x`, standing on the ground line.
    ///
    /// Returns `None` when `kind` is not a generated obstacle or its top
    /// edge would leave the coordinate range.
    pub fn obstacle(id: u32, kind: ObjectKind, x: i32, ground_y: i32) -> Option<Self> {
        let (width, height) = kind.obstacle_size()?;
        let y = ground_y.checked_sub(height)?;
        Some(Self::new(id, kind, Footprint::new(x, y, width, height)))
    }
}
