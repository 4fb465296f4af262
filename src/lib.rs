//! Taiko Lanes core crate.
//!
//! Four-lane falling-block rhythm game. Blocks from a fixed chart fall at a
//! constant speed; tapping a lane while a block sits in the button row scores a
//! hit, tapping an empty window is a miss, and a block that falls past untouched
//! is a through.
//!
//! The game logic (`chart`, `block`, `judge`, `session`) is plain Rust with no
//! browser dependency and is driven through the `RenderSink` / `AudioSink`
//! traits. The `web` module binds those to a 2d canvas, `<audio>` elements and
//! DOM buttons, and is what `start_game()` launches.

use wasm_bindgen::prelude::*;

pub mod block;
pub mod chart;
pub mod config;
pub mod error;
pub mod judge;
pub mod lane;
pub mod session;
pub mod sinks;
pub mod timers;

mod logging;
mod web;

pub use block::{Block, BlockState};
pub use chart::ChartEvent;
pub use config::{AudioAssets, GameConfig, Geometry, Timing};
pub use error::GameError;
pub use judge::{HitWindow, Judgment};
pub use lane::{LANE_COUNT, Lane};
pub use session::{Session, SessionPhase};
pub use sinks::{AudioCue, AudioSink, RenderSink, Score};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

/// Set up the page with the default tuning and show the idle screen; the
/// `#start` button begins a session.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::launch(GameConfig::default())?;
    Ok(())
}

/// Like `start_game`, with a (possibly partial) JSON `GameConfig`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    web::launch(config)?;
    Ok(())
}

fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
