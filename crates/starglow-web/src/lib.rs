//! Browser bindings for the galaxy backdrop.
//!
//! A single exported entry point, [`backdrop_start`], wires the core
//! simulation to a canvas element and the document: canvas painting,
//! pointer and hover listeners, the cursor glow/trail DOM layer, and a
//! requestAnimationFrame loop driving it all.

use std::cell::RefCell;

use starglow::{BackdropConfig, InputEvent};
use wasm_bindgen::prelude::*;

pub mod canvas;
pub mod cursor;
pub mod events;
pub mod hover;
pub mod runner;
pub mod scheduler;

pub use runner::BackdropRunner;

thread_local! {
    static RUNNER: RefCell<Option<BackdropRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut BackdropRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Backdrop not started. Call backdrop_start() first.");
        f(runner)
    })
}

fn push_input(event: InputEvent) {
    with_runner(|r| r.push_input(event));
}

/// Start the backdrop on the canvas with the given element id.
///
/// `config_json` overrides the default [`BackdropConfig`]; pass an empty
/// string to run with defaults.
#[wasm_bindgen]
pub fn backdrop_start(canvas_id: &str, config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = if config_json.trim().is_empty() {
        BackdropConfig::default()
    } else {
        BackdropConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("bad backdrop config: {e}")))?
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let runner = BackdropRunner::new(canvas_id, config)?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    hover::apply_initial_classes(&document)?;
    hover::install(&document, push_input)?;
    events::install_pointer_listeners(&document, push_input)?;
    events::install_resize_listener(&window, || {
        with_runner(|r| {
            if let Err(e) = r.refit() {
                log::error!("backdrop resize failed: {:?}", e);
            }
        });
    })?;

    scheduler::start_frame_loop(|now_ms| {
        with_runner(|r| {
            if let Err(e) = r.frame(now_ms) {
                log::error!("backdrop frame failed: {:?}", e);
            }
        });
    })?;

    log::info!("starglow: backdrop running");
    Ok(())
}
