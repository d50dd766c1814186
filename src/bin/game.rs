//! Platformer entry point

use macroquad::prelude::*;

use tilebound::assets::Assets;
use tilebound::game::GameSession;
use tilebound::input::{self, Action};
use tilebound::timing;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("tilebound v{}", tilebound::VERSION),
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

    let mut session = GameSession::new();

    loop {
        let frame_start = get_time();

        if input::action_pressed(Action::Quit) {
            break;
        }

        session.update();
        session.draw(&assets);

        timing::wait_for_tick(frame_start);
        next_frame().await;
    }
}
