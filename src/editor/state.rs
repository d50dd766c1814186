//! Editor state and input handling

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::input::{self, Action};
use crate::map::{self, snap_to_grid, MapPos, TileMap, TILE_SIZE};
use crate::ui::TextInputState;

/// Camera easing divisor: the camera covers a fifth of the remaining
/// distance to its target each tick.
const CAMERA_EASE: f32 = 5.0;

/// How long routine status messages stay on screen, in seconds.
const STATUS_SECS: f64 = 3.0;
/// Errors linger a little longer.
const ERROR_SECS: f64 = 5.0;

/// Which file operation the prompt will perform on confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Save,
    Load,
}

/// Modal filename prompt. While open it swallows all editor input
/// except Escape.
#[derive(Debug)]
pub struct FilePrompt {
    pub kind: PromptKind,
    pub input: TextInputState,
}

/// The single editor context object passed through the main loop.
pub struct EditorState {
    pub map: TileMap,

    /// Eased camera position actually used for rendering
    pub camera: Vec2,
    /// Where the camera is headed; pans move this in whole-tile steps
    pub camera_target: Vec2,

    /// Grid cell under the pointer, in world space
    pub cursor: MapPos,

    /// Tile-sheet cursor
    pub sheet_col: i32,
    pub sheet_row: i32,

    pub place_offtiles: bool,
    pub show_sheet: bool,
    pub show_bounds: bool,
    pub show_grid: bool,
    pub show_hud: bool,

    pub prompt: Option<FilePrompt>,
    status_message: Option<(String, f64)>, // (message, expiry time)
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            map: TileMap::new(),
            camera: Vec2::ZERO,
            camera_target: Vec2::ZERO,
            cursor: MapPos::new(0, 0),
            sheet_col: 0,
            sheet_row: 0,
            place_offtiles: false,
            show_sheet: false,
            show_bounds: false,
            show_grid: true,
            show_hud: true,
            prompt: None,
            status_message: None,
        }
    }

    /// Set a status message that will be displayed for a duration
    pub fn set_status(&mut self, message: &str, duration_secs: f64) {
        let expiry = get_time() + duration_secs;
        self.status_message = Some((message.to_string(), expiry));
    }

    /// Get the current status message if it has not expired
    pub fn status(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, expiry)) if get_time() < *expiry => Some(msg),
            _ => None,
        }
    }

    /// Camera offset used for rendering and cursor math, truncated to
    /// whole pixels so tiles never shimmer mid-ease.
    pub fn render_camera(&self) -> Vec2 {
        self.camera.floor()
    }

    /// Advance the editor one tick: ease the camera, then route input
    /// to either the modal prompt or the editing surface.
    pub fn update(&mut self, assets: &Assets) {
        self.camera += (self.camera_target - self.camera) / CAMERA_EASE;

        let (mx, my) = mouse_position();
        let world = vec2(mx, my) + self.render_camera();
        self.cursor = snap_to_grid(world);

        if self.prompt.is_some() {
            self.update_prompt();
            return;
        }

        self.handle_toggles(assets);
        self.handle_pan();
        self.handle_pointer();
    }

    fn handle_toggles(&mut self, assets: &Assets) {
        if input::action_pressed(Action::RowUp) {
            self.sheet_row = (self.sheet_row + 1).rem_euclid(assets.sheet_rows());
        }
        if input::action_pressed(Action::RowDown) {
            self.sheet_row = (self.sheet_row - 1).rem_euclid(assets.sheet_rows());
        }

        let (_, wheel_y) = mouse_wheel();
        if wheel_y > 0.0 {
            self.sheet_col = (self.sheet_col + 1).rem_euclid(assets.sheet_cols());
        }
        if wheel_y < 0.0 {
            self.sheet_col = (self.sheet_col - 1).rem_euclid(assets.sheet_cols());
        }

        if input::action_pressed(Action::ToggleOfftiles) {
            self.place_offtiles = !self.place_offtiles;
        }
        if input::action_pressed(Action::ToggleSheet) {
            self.show_sheet = !self.show_sheet;
        }
        if input::action_pressed(Action::ToggleBounds) {
            self.show_bounds = !self.show_bounds;
        }
        if input::action_pressed(Action::ToggleGrid) {
            self.show_grid = !self.show_grid;
        }
        if input::action_pressed(Action::ToggleHud) {
            self.show_hud = !self.show_hud;
        }

        if input::action_pressed(Action::PromptSave) {
            self.open_prompt(PromptKind::Save);
        }
        if input::action_pressed(Action::PromptLoad) {
            self.open_prompt(PromptKind::Load);
        }
    }

    fn handle_pan(&mut self) {
        let step = TILE_SIZE as f32;
        if input::action_pressed(Action::PanUp) {
            self.camera_target.y -= step;
        }
        if input::action_pressed(Action::PanDown) {
            self.camera_target.y += step;
        }
        if input::action_pressed(Action::PanLeft) {
            self.camera_target.x -= step;
        }
        if input::action_pressed(Action::PanRight) {
            self.camera_target.x += step;
        }
    }

    fn handle_pointer(&mut self) {
        // Pan keys double as movement keys, so placement pauses while
        // any of them is held
        let panning = input::action_down(Action::PanUp)
            || input::action_down(Action::PanDown)
            || input::action_down(Action::PanLeft)
            || input::action_down(Action::PanRight);

        if is_mouse_button_down(MouseButton::Left) && !panning {
            self.map
                .place_tile(self.cursor, self.sheet_col, self.sheet_row, self.place_offtiles);
            self.set_status("edited", STATUS_SECS);
        }
        if is_mouse_button_down(MouseButton::Right) {
            let before = self.active_len();
            self.map.remove_tile(self.cursor, self.place_offtiles);
            if self.active_len() != before {
                self.set_status("edited", STATUS_SECS);
            }
        }
    }

    fn active_len(&self) -> usize {
        if self.place_offtiles {
            self.map.offtiles().len()
        } else {
            self.map.tiles().len()
        }
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        // Drop the keystroke that opened the prompt
        while get_char_pressed().is_some() {}
        self.prompt = Some(FilePrompt {
            kind,
            input: TextInputState::new(),
        });
    }

    fn update_prompt(&mut self) {
        if let Some(prompt) = &mut self.prompt {
            prompt.input.handle_input();
        }
        if input::action_pressed(Action::Confirm) {
            self.confirm_prompt();
        }
    }

    fn confirm_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let filename = prompt.input.text.trim().to_string();
        if filename.is_empty() {
            self.set_status("no filename given", STATUS_SECS);
            return;
        }

        match prompt.kind {
            PromptKind::Save => match map::save_map(&self.map, &filename) {
                Ok(()) => self.set_status("saved", STATUS_SECS),
                Err(e) => {
                    eprintln!("Save failed: {}", e);
                    self.set_status(&format!("Save failed: {}", e), ERROR_SECS);
                }
            },
            PromptKind::Load => match map::load_map(&filename) {
                Ok(map) => {
                    self.map = map;
                    self.set_status("loaded", STATUS_SECS);
                }
                Err(e) => {
                    eprintln!("Load failed: {}", e);
                    self.set_status(&format!("Load failed: {}", e), ERROR_SECS);
                }
            },
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
