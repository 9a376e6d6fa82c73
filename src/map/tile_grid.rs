// src/map/tile_grid.rs

/// Global tile id 0 means "no tile" in Tiled.
pub const EMPTY_TILE: u32 = 0;

/// A row-major grid of global tile ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<u32>,
}

impl TileGrid {
    /// A `width` x `height` grid with every cell set to [`EMPTY_TILE`].
    pub fn empty(width: u32, height: u32) -> Self {
        Self::filled(width, height, EMPTY_TILE)
    }

    pub fn filled(width: u32, height: u32, gid: u32) -> Self {
        TileGrid {
            width,
            height,
            tiles: vec![gid; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.tiles.chunks(self.width.max(1) as usize)
    }

    /// Tiled's CSV layer encoding: every row but the last ends in `,\n`.
    pub fn to_csv(&self) -> String {
        let mut csv = String::with_capacity(self.tiles.len() * 2);
        let last_row = (self.height as usize).saturating_sub(1);
        for (i, row) in self.rows().enumerate() {
            let line: Vec<String> = row.iter().map(|gid| gid.to_string()).collect();
            csv.push_str(&line.join(","));
            if i < last_row {
                csv.push_str(",\n");
            }
        }
        csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_shape() {
        let grid = TileGrid::empty(4, 3);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 4));
        assert!(grid.rows().flatten().all(|&gid| gid == EMPTY_TILE));
    }

    #[test]
    fn test_csv_layout() {
        let grid = TileGrid::empty(3, 2);
        assert_eq!(grid.to_csv(), "0,0,0,\n0,0,0");
    }

    #[test]
    fn test_csv_single_row_has_no_trailing_separator() {
        let grid = TileGrid::filled(2, 1, 1);
        assert_eq!(grid.to_csv(), "1,1");
    }
}
