//! Level editor entry point

use macroquad::prelude::*;

use tilebound::assets::Assets;
use tilebound::editor::{draw_editor, EditorState};
use tilebound::input::{self, Action};
use tilebound::timing;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("tilebound editor v{}", tilebound::VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let assets = match Assets::load().await {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("Failed to load assets: {}", e);
            return;
        }
    };

    let mut state = EditorState::new();

    loop {
        let frame_start = get_time();

        if input::action_pressed(Action::Quit) {
            break;
        }

        state.update(&assets);
        draw_editor(&state, &assets);

        timing::wait_for_tick(frame_start);
        next_frame().await;
    }
}
