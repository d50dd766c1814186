//! Game session
//!
//! The session owns the loaded map and the player and is the one
//! context object the main loop passes around. The game always boots
//! into the fixed `MAPONE` map; a missing file yields an empty map.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::input::{self, Action};
use crate::map::{self, TileMap};
use crate::render;
use crate::ui;

use super::player::{MoveDir, Player, PlayerInput};

/// Map file the game opens at startup.
pub const STARTUP_MAP: &str = "MAPONE";

/// Where the player appears when a session starts.
const SPAWN_POS: Vec2 = Vec2::new(600.0, 100.0);

pub struct GameSession {
    pub map: TileMap,
    pub player: Player,
}

impl GameSession {
    /// Start a session on the startup map.
    ///
    /// A corrupt map file is reported and the game starts empty
    /// rather than crashing.
    pub fn new() -> Self {
        let map = match map::load_map(STARTUP_MAP) {
            Ok(map) => map,
            Err(e) => {
                eprintln!("Failed to load {}: {}", STARTUP_MAP, e);
                TileMap::new()
            }
        };
        Self {
            map,
            player: Player::new(SPAWN_POS),
        }
    }

    /// Sample input and advance the simulation one tick.
    pub fn update(&mut self) {
        let dir = if input::action_down(Action::MoveLeft) {
            MoveDir::Left
        } else if input::action_down(Action::MoveRight) {
            MoveDir::Right
        } else {
            MoveDir::None
        };
        let intent = PlayerInput {
            dir,
            jump: input::action_down(Action::Jump),
        };
        self.player.update(intent, self.map.tiles());
    }

    /// Draw the map and the player. The game view is not scrolled.
    pub fn draw(&self, assets: &Assets) {
        clear_background(render::BACKGROUND);
        render::draw_map(&self.map, Vec2::ZERO, assets);

        let r = self.player.rect();
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, WHITE);

        ui::draw_label(
            &format!("FPS: {}", get_fps()),
            vec2(10.0, 36.0),
            assets.font.as_ref(),
            WHITE,
        );
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
