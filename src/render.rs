//! Shared drawing helpers for the game and the editor

use macroquad::prelude::*;

use crate::assets::{Assets, SHEET_TILE};
use crate::map::{TileMap, TILE_SIZE};

/// Clear color shared by both surfaces.
pub const BACKGROUND: Color = Color::new(0.157, 0.157, 0.157, 1.0);

/// Source rectangle of one sheet cell.
pub fn sheet_source(col: i32, row: i32) -> Rect {
    Rect::new(
        col as f32 * SHEET_TILE,
        row as f32 * SHEET_TILE,
        SHEET_TILE,
        SHEET_TILE,
    )
}

/// Draw one sheet cell at a world position, scaled to the world tile
/// size and offset by the camera.
pub fn draw_sheet_tile(
    assets: &Assets,
    col: i32,
    row: i32,
    world: Vec2,
    camera: Vec2,
    tint: Color,
) {
    draw_texture_ex(
        &assets.tileset,
        world.x - camera.x,
        world.y - camera.y,
        tint,
        DrawTextureParams {
            dest_size: Some(vec2(TILE_SIZE as f32, TILE_SIZE as f32)),
            source: Some(sheet_source(col, row)),
            ..Default::default()
        },
    );
}

/// Draw every off-tile, then every tile. Off-tiles sit behind tiles,
/// matching the map's draw order everywhere it is rendered.
pub fn draw_map(map: &TileMap, camera: Vec2, assets: &Assets) {
    for off in map.offtiles() {
        draw_sheet_tile(assets, off.col, off.row, off.pos.as_vec2(), camera, WHITE);
    }
    for tile in map.tiles() {
        draw_sheet_tile(assets, tile.col, tile.row, tile.pos.as_vec2(), camera, WHITE);
    }
}
