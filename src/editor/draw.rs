//! Editor rendering

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::map::TILE_SIZE;
use crate::render::{self, BACKGROUND};
use crate::ui::{self, draw_text_input};

use super::state::{EditorState, PromptKind};

/// Tint for the cursor preview and the sheet overlay.
const GHOST: Color = Color::new(1.0, 1.0, 1.0, 0.59);

pub fn draw_editor(state: &EditorState, assets: &Assets) {
    clear_background(BACKGROUND);
    let camera = state.render_camera();

    render::draw_map(&state.map, camera, assets);

    if state.show_bounds {
        for tile in state.map.tiles() {
            let b = tile.bounds();
            draw_rectangle_lines(b.x - camera.x, b.y - camera.y, b.w, b.h, 2.0, WHITE);
        }
    }

    // Ghost preview of the selected sheet cell at the cursor
    render::draw_sheet_tile(
        assets,
        state.sheet_col,
        state.sheet_row,
        state.cursor.as_vec2(),
        camera,
        GHOST,
    );

    if state.show_sheet {
        draw_sheet_overlay(assets);
    }

    if state.show_grid {
        draw_grid(camera);
    }

    if state.show_hud {
        draw_hud(state, assets);
    }

    if let Some(prompt) = &state.prompt {
        let center = vec2(screen_width() / 2.0, screen_height() / 2.0);
        let title = match prompt.kind {
            PromptKind::Save => "save as",
            PromptKind::Load => "load map",
        };
        ui::draw_label(
            title,
            vec2(center.x - ui::measure_label(title, assets.font.as_ref()).width / 2.0, center.y - 50.0),
            assets.font.as_ref(),
            WHITE,
        );
        draw_text_input(&prompt.input, center, assets.font.as_ref());
    }
}

/// The whole tile sheet, centered and scaled to world tile size.
fn draw_sheet_overlay(assets: &Assets) {
    let scale = TILE_SIZE as f32 / crate::assets::SHEET_TILE;
    let w = assets.tileset.width() * scale;
    let h = assets.tileset.height() * scale;
    draw_texture_ex(
        &assets.tileset,
        screen_width() / 2.0 - w / 2.0,
        screen_height() / 2.0 - h / 2.0,
        GHOST,
        DrawTextureParams {
            dest_size: Some(vec2(w, h)),
            ..Default::default()
        },
    );
}

/// World-aligned grid lines across the visible area.
fn draw_grid(camera: Vec2) {
    let step = TILE_SIZE as f32;

    let mut x = -camera.x.rem_euclid(step);
    while x < screen_width() {
        draw_line(x, 0.0, x, screen_height(), 1.0, BLACK);
        x += step;
    }

    let mut y = -camera.y.rem_euclid(step);
    while y < screen_height() {
        draw_line(0.0, y, screen_width(), y, 1.0, BLACK);
        y += step;
    }
}

fn draw_hud(state: &EditorState, assets: &Assets) {
    let font = assets.font.as_ref();

    ui::draw_label(
        &format!("{} | {}", state.sheet_col, state.sheet_row),
        vec2(10.0, 36.0),
        font,
        WHITE,
    );
    ui::draw_label(
        &format!("TILES: {} FPS: {}", state.map.tiles().len(), get_fps()),
        vec2(10.0, 68.0),
        font,
        WHITE,
    );
    ui::draw_label(
        &format!("offtiles: {}", state.place_offtiles),
        vec2(10.0, screen_height() - 74.0),
        font,
        WHITE,
    );
    if let Some(status) = state.status() {
        ui::draw_label(status, vec2(10.0, screen_height() - 28.0), font, WHITE);
    }
}
