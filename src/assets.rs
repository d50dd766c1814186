//! Asset loading
//!
//! The tile sheet is authored at 16 px cells and drawn at 2x with
//! nearest filtering, keeping the chunky-pixel look. The HUD font is
//! optional: the built-in font takes over when the file is missing.

use macroquad::prelude::*;

/// Source-pixel edge length of one sheet cell.
pub const SHEET_TILE: f32 = 16.0;

pub const TILESET_PATH: &str = "assets/tiles.png";
pub const FONT_PATH: &str = "assets/FFFFORWA.TTF";

pub struct Assets {
    pub tileset: Texture2D,
    pub font: Option<Font>,
}

impl Assets {
    /// Load the tile sheet and HUD font.
    pub async fn load() -> Result<Assets, macroquad::Error> {
        let tileset = load_texture(TILESET_PATH).await?;
        tileset.set_filter(FilterMode::Nearest);

        let font = match load_ttf_font(FONT_PATH).await {
            Ok(font) => Some(font),
            Err(e) => {
                eprintln!("Failed to load {}: {}, using built-in font", FONT_PATH, e);
                None
            }
        };

        Ok(Assets { tileset, font })
    }

    /// Sheet grid width in cells.
    pub fn sheet_cols(&self) -> i32 {
        (self.tileset.width() / SHEET_TILE) as i32
    }

    /// Sheet grid height in cells.
    pub fn sheet_rows(&self) -> i32 {
        (self.tileset.height() / SHEET_TILE) as i32
    }
}
