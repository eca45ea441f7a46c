//! Canvas2D rendering of simulation frames (wasm32 only)
//!
//! The simulations hand over plain data; these functions turn it into
//! `CanvasRenderingContext2d` calls. No game logic lives here.

pub mod field;
pub mod game;

pub use field::draw_field;
pub use game::draw_game;
