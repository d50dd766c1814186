//! Tile map data model
//!
//! Tiles are collidable and always sit on the grid; off-tiles are
//! decorative and may sit anywhere. Placement and removal work on a
//! fixed tile-size footprint, so callers only ever deal in positions.

use macroquad::math::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// World-space tile edge length in pixels.
pub const TILE_SIZE: i32 = 32;

/// Integer pixel position of a map entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapPos {
    pub x: i32,
    pub y: i32,
}

impl MapPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Snap a world-space point to its grid cell origin.
///
/// Floor division, so cells stay stable across negative coordinates
/// (the editor camera can pan into negative world space).
pub fn snap_to_grid(p: Vec2) -> MapPos {
    MapPos::new(
        (p.x.floor() as i32).div_euclid(TILE_SIZE) * TILE_SIZE,
        (p.y.floor() as i32).div_euclid(TILE_SIZE) * TILE_SIZE,
    )
}

/// A collidable map cell referencing a tile-sheet region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Grid-aligned position (always a multiple of [`TILE_SIZE`])
    pub pos: MapPos,
    /// Tile-sheet column index
    pub col: i32,
    /// Tile-sheet row index
    pub row: i32,
}

impl Tile {
    /// Bounding box, recomputed from the position every time so it
    /// can never drift out of sync with it. Never serialized.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x as f32,
            self.pos.y as f32,
            TILE_SIZE as f32,
            TILE_SIZE as f32,
        )
    }
}

/// A decorative, non-collidable map element.
///
/// Not required to be grid aligned and has no bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffTile {
    pub pos: MapPos,
    /// Tile-sheet column index
    pub col: i32,
    /// Tile-sheet row index
    pub row: i32,
}

/// Placed tiles plus decorative off-tiles.
///
/// Both collections keep insertion order; that order is what the
/// collision resolver iterates, so corner-case clamping is
/// deterministic. At most one tile occupies a grid cell (placement
/// removes first); off-tiles may overlap freely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileMap {
    tiles: Vec<Tile>,
    offtiles: Vec<OffTile>,
}

impl TileMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a map from already-validated collections (load path).
    pub fn from_parts(tiles: Vec<Tile>, offtiles: Vec<OffTile>) -> Self {
        Self { tiles, offtiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn offtiles(&self) -> &[OffTile] {
        &self.offtiles
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.offtiles.is_empty()
    }

    /// Place a tile (or, with `place_offtile`, an off-tile) at `pos`.
    ///
    /// Whatever the footprint already covers in the target collection
    /// is removed first, which keeps the one-tile-per-cell invariant.
    /// Tile positions must be pre-snapped by the caller; off-tile
    /// positions may be arbitrary.
    pub fn place_tile(&mut self, pos: MapPos, col: i32, row: i32, place_offtile: bool) {
        self.remove_tile(pos, place_offtile);
        if place_offtile {
            self.offtiles.push(OffTile { pos, col, row });
        } else {
            self.tiles.push(Tile { pos, col, row });
        }
    }

    /// Remove every entry in the target collection whose footprint
    /// contains `pos`. No-op when nothing is there.
    ///
    /// Off-tiles use the same fixed-size footprint even when placed
    /// off-grid, so one removal can take out several of them.
    pub fn remove_tile(&mut self, pos: MapPos, from_offtiles: bool) {
        if from_offtiles {
            self.offtiles.retain(|t| !footprint_contains(t.pos, pos));
        } else {
            self.tiles.retain(|t| !footprint_contains(t.pos, pos));
        }
    }
}

/// Half-open tile-size-square containment check anchored at `origin`.
fn footprint_contains(origin: MapPos, p: MapPos) -> bool {
    p.x >= origin.x && p.x < origin.x + TILE_SIZE && p.y >= origin.y && p.y < origin.y + TILE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_placement_keeps_one_tile() {
        let mut map = TileMap::new();
        for col in 0..5 {
            map.place_tile(MapPos::new(64, 32), col, 1, false);
        }
        assert_eq!(map.tiles().len(), 1);
        // Last placement wins
        assert_eq!(map.tiles()[0].col, 4);
    }

    #[test]
    fn test_placement_in_distinct_cells() {
        let mut map = TileMap::new();
        map.place_tile(MapPos::new(0, 0), 0, 0, false);
        map.place_tile(MapPos::new(32, 0), 0, 0, false);
        assert_eq!(map.tiles().len(), 2);
    }

    #[test]
    fn test_remove_empty_cell_is_noop() {
        let mut map = TileMap::new();
        map.place_tile(MapPos::new(0, 0), 0, 0, false);
        map.remove_tile(MapPos::new(96, 96), false);
        assert_eq!(map.tiles().len(), 1);
    }

    #[test]
    fn test_remove_takes_out_every_overlapping_offtile() {
        let mut map = TileMap::new();
        map.place_tile(MapPos::new(40, 0), 1, 0, true);
        map.place_tile(MapPos::new(16, 16), 2, 0, true);
        assert_eq!(map.offtiles().len(), 2);
        // (41,17) is inside both footprints
        map.remove_tile(MapPos::new(41, 17), true);
        assert!(map.offtiles().is_empty());
    }

    #[test]
    fn test_offtile_placement_replaces_covered_offtiles() {
        let mut map = TileMap::new();
        map.place_tile(MapPos::new(0, 0), 0, 0, true);
        // (16,16) lies inside the (0,0) footprint, so this replaces it
        map.place_tile(MapPos::new(16, 16), 2, 0, true);
        assert_eq!(map.offtiles().len(), 1);
        assert_eq!(map.offtiles()[0].pos, MapPos::new(16, 16));
        // Disjoint footprints stack fine
        map.place_tile(MapPos::new(96, 0), 1, 0, true);
        assert_eq!(map.offtiles().len(), 2);
    }

    #[test]
    fn test_footprint_is_half_open() {
        let mut map = TileMap::new();
        map.place_tile(MapPos::new(0, 0), 0, 0, false);
        // The right/bottom edge belongs to the next cell
        map.remove_tile(MapPos::new(32, 0), false);
        map.remove_tile(MapPos::new(0, 32), false);
        assert_eq!(map.tiles().len(), 1);
        map.remove_tile(MapPos::new(31, 31), false);
        assert!(map.tiles().is_empty());
    }

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(Vec2::new(0.0, 0.0)), MapPos::new(0, 0));
        assert_eq!(snap_to_grid(Vec2::new(31.9, 33.0)), MapPos::new(0, 32));
        assert_eq!(snap_to_grid(Vec2::new(64.0, 95.0)), MapPos::new(64, 64));
        // Floor semantics for negative world space
        assert_eq!(snap_to_grid(Vec2::new(-5.0, -33.0)), MapPos::new(-32, -64));
    }

    #[test]
    fn test_bounds_follow_position() {
        let tile = Tile { pos: MapPos::new(-64, 96), col: 3, row: 7 };
        let b = tile.bounds();
        assert_eq!((b.x, b.y, b.w, b.h), (-64.0, 96.0, 32.0, 32.0));
    }
}
