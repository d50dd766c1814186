//! Tile map storage and persistence
//!
//! A map is two flat collections: collidable grid-aligned tiles and
//! decorative off-tiles. Both reference cells of a shared tile sheet.

mod persist;
mod tilemap;

pub use persist::*;
pub use tilemap::*;
