//! Keyboard input mapping
//!
//! Action-based polling over macroquad's keyboard state, so the game
//! and editor loops never mention raw key codes.

use macroquad::prelude::*;

/// Everything the game and the editor react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Game movement
    MoveLeft,       // A
    MoveRight,      // D
    Jump,           // Space

    // Editor camera (one tile per press)
    PanUp,          // W
    PanDown,        // S
    PanLeft,        // A
    PanRight,       // D

    // Editor sheet cursor and overlays
    RowUp,          // E
    RowDown,        // Q
    ToggleOfftiles, // C
    ToggleSheet,    // T
    ToggleBounds,   // R
    ToggleGrid,     // G
    ToggleHud,      // Tab

    // File prompt
    PromptSave,     // O
    PromptLoad,     // P
    Confirm,        // Enter

    // System
    Quit,           // Escape
}

fn key(action: Action) -> KeyCode {
    match action {
        Action::MoveLeft | Action::PanLeft => KeyCode::A,
        Action::MoveRight | Action::PanRight => KeyCode::D,
        Action::Jump => KeyCode::Space,
        Action::PanUp => KeyCode::W,
        Action::PanDown => KeyCode::S,
        Action::RowUp => KeyCode::E,
        Action::RowDown => KeyCode::Q,
        Action::ToggleOfftiles => KeyCode::C,
        Action::ToggleSheet => KeyCode::T,
        Action::ToggleBounds => KeyCode::R,
        Action::ToggleGrid => KeyCode::G,
        Action::ToggleHud => KeyCode::Tab,
        Action::PromptSave => KeyCode::O,
        Action::PromptLoad => KeyCode::P,
        Action::Confirm => KeyCode::Enter,
        Action::Quit => KeyCode::Escape,
    }
}

/// Is the action's key currently held?
pub fn action_down(action: Action) -> bool {
    is_key_down(key(action))
}

/// Was the action's key pressed this frame?
pub fn action_pressed(action: Action) -> bool {
    is_key_pressed(key(action))
}
