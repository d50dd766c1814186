//! Level editor
//!
//! Pointer-driven tile placement on a pannable grid, with a modal
//! filename prompt for saving and loading maps.

mod draw;
mod state;

pub use draw::*;
pub use state::*;
