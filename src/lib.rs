//! tilebound: a tiny 2D tile platformer and its level editor
//!
//! Two binaries share this crate: `tilebound` runs the platformer and
//! `tilebound-editor` builds the maps it plays. The shared core is
//! the tile map ([`map`]), its on-disk format ([`map::save_map`] /
//! [`map::load_map`]), and the axis-separated collision physics
//! ([`game`]). Everything else is macroquad glue.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod assets;
pub mod editor;
pub mod game;
pub mod input;
pub mod map;
pub mod render;
pub mod timing;
pub mod ui;
