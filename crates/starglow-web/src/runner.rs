//! Glue between the deterministic core and the page: owns the backdrop,
//! its input queue, the canvas surface, and the cursor DOM layer.

use starglow::{Backdrop, BackdropConfig, InputEvent, InputQueue};
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::canvas::CanvasSurface;
use crate::cursor::CursorLayer;

pub struct BackdropRunner {
    backdrop: Backdrop,
    input: InputQueue,
    surface: CanvasSurface,
    cursor: CursorLayer,
}

impl BackdropRunner {
    pub fn new(canvas_id: &str, config: BackdropConfig) -> Result<Self, JsValue> {
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let surface = CanvasSurface::from_element_id(&document, canvas_id)?;
        let (width, height) = surface.fit_to_viewport(&window);

        let cursor = CursorLayer::new(&document, &config)?;
        let backdrop = Backdrop::new(config, width, height, js_sys::Date::now() as u64);

        Ok(Self {
            backdrop,
            input: InputQueue::new(),
            surface,
            cursor,
        })
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Advance the simulation one frame and mirror the pointer state
    /// into the DOM.
    pub fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        self.backdrop
            .tick(&mut self.surface, &mut self.input, now_ms);
        let pointer = self.backdrop.pointer();
        self.cursor.sync(pointer.glow(), pointer.trail())
    }

    /// Refit the canvas to the viewport after a window resize.
    pub fn refit(&mut self) -> Result<(), JsValue> {
        let window = window()?;
        let (width, height) = self.surface.fit_to_viewport(&window);
        self.backdrop.resize(width, height);
        Ok(())
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}
