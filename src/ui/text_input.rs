//! Single-line text entry for the filename prompt

use macroquad::prelude::*;

use super::{draw_label, measure_label, FONT_SIZE};

/// State for a single-line text field.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    pub text: String,
    blink_timer: f32,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append typed characters and honor Backspace.
    pub fn handle_input(&mut self) {
        self.blink_timer += get_frame_time();

        if is_key_pressed(KeyCode::Backspace) {
            self.text.pop();
            self.blink_timer = 0.0;
        }

        while let Some(ch) = get_char_pressed() {
            // Printable characters only; Enter and Escape belong to the caller
            if ch >= ' ' && ch != '\u{7f}' {
                self.text.push(ch);
                self.blink_timer = 0.0;
            }
        }
    }
}

/// Draw the field centered on `center`, boxed, with a blinking cursor.
pub fn draw_text_input(state: &TextInputState, center: Vec2, font: Option<&Font>) {
    let size = FONT_SIZE as f32;
    let dims = measure_label(&state.text, font);
    let x = center.x - dims.width / 2.0;
    let baseline = center.y + size * 0.35;

    draw_rectangle_lines(
        x - 10.0,
        center.y - size * 0.65,
        dims.width + 20.0,
        size + 10.0,
        2.0,
        WHITE,
    );
    draw_label(&state.text, vec2(x, baseline), font, WHITE);

    if (state.blink_timer % 1.0) < 0.5 {
        let cursor_x = x + dims.width + 2.0;
        draw_line(
            cursor_x,
            center.y - size * 0.5,
            cursor_x,
            center.y + size * 0.4,
            1.5,
            WHITE,
        );
    }
}
