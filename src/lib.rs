//! Grid Chase core crate.
//!
//! A small browser game: the player steers a token across an N×M board to
//! sweep up one target sprite per row, and the move count is tallied when
//! the last sprite is collected. The pure rules live in [`game`] and the
//! markup projection in [`render`]; both run under native `cargo test`.
//! `start_game()` wires everything into the host page.

use wasm_bindgen::prelude::*;

pub mod game;
pub mod render;
mod ui;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Entry point called by the hosting page with the configured board
/// dimensions. Zero dimensions are rejected before any DOM is touched;
/// calling again replaces a running game with a fresh one.
#[wasm_bindgen]
pub fn start_game(width: u32, height: u32) -> Result<(), JsValue> {
    ui::mount(width, height)
}
