//! Minimal immediate-mode UI helpers

mod text_input;

pub use text_input::*;

use macroquad::prelude::*;

/// HUD text size in pixels.
pub const FONT_SIZE: u16 = 32;

/// Draw a line of HUD text with the optional custom font.
pub fn draw_label(text: &str, pos: Vec2, font: Option<&Font>, color: Color) {
    draw_text_ex(
        text,
        pos.x,
        pos.y,
        TextParams {
            font,
            font_size: FONT_SIZE,
            color,
            ..Default::default()
        },
    );
}

/// Measure a label at the HUD text size.
pub fn measure_label(text: &str, font: Option<&Font>) -> TextDimensions {
    measure_text(text, font, FONT_SIZE, 1.0)
}
