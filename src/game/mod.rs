//! Platformer simulation
//!
//! Player physics plus axis-separated collision against the tile
//! grid, and the session object that owns both at runtime.

mod collision;
mod player;
mod session;

pub use collision::move_and_collide;
pub use player::*;
pub use session::*;
