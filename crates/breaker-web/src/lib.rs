//! wasm-bindgen exports for running a level in the browser.
//!
//! All state lives in a `thread_local!` [`WebRunner`]; the exported functions are
//! thin wrappers that forward to it. Calls made before `game_init` succeed are
//! ignored.

pub mod runner;

use std::cell::RefCell;

use breaker_engine::{InputEvent, SimConfig};
use wasm_bindgen::prelude::*;

pub use runner::WebRunner;

thread_local! {
    static RUNNER: RefCell<Option<WebRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut WebRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Load a level. `config_json` may be empty to use the defaults.
#[wasm_bindgen]
pub fn game_init(level_text: &str, config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = if config_json.trim().is_empty() {
        SimConfig::default()
    } else {
        SimConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    let runner = WebRunner::load(level_text, config).map_err(|e| {
        log::error!("level failed to load: {e}");
        JsValue::from_str(&e.to_string())
    })?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("breaker: initialized");
    Ok(())
}

/// Advance by `dt` seconds. Returns true when the clip rectangle is non-empty.
#[wasm_bindgen]
pub fn game_tick(dt: f32) -> bool {
    with_runner(|r| r.tick(dt)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

// ---- Data accessors ----

/// Pointer to four f32s: x, y, w, h of the last frame's redraw rectangle.
#[wasm_bindgen]
pub fn get_clip_ptr() -> *const f32 {
    with_runner(|r| r.clip_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_draw_width() -> f32 {
    with_runner(|r| r.draw_width()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_draw_height() -> f32 {
    with_runner(|r| r.draw_height()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_player_pos() -> Vec<f32> {
    with_runner(|r| r.player_pos().to_vec()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_camera_pos() -> Vec<f32> {
    with_runner(|r| r.camera_pos().to_vec()).unwrap_or_default()
}
